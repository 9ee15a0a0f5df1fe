//! Collection keys. Every collection is one entry in the medium.

pub const USERS: &str = "mv_users";
pub const ORDERS: &str = "mv_orders";
pub const SESSION: &str = "mv_session";
pub const FORUM_TOPICS: &str = "mv_forum_topics";
pub const PRODUCTS: &str = "mv_products";
pub const SLIDES: &str = "mv_slides";
pub const CATEGORIES: &str = "mv_categories";
pub const ROUTES: &str = "mv_routes";
pub const STORIES: &str = "mv_stories";
pub const MUSIC: &str = "mv_music";
pub const MODELS: &str = "mv_3d_models";
pub const LOGS: &str = "mv_system_logs";
pub const VISITOR_STATS: &str = "mv_visitor_stats";
pub const ANALYTICS: &str = "mv_analytics_events";
/// Session recordings; the heaviest entries.
pub const RECORDINGS: &str = "mv_session_recordings";
/// Offers sent to admin, often with embedded images.
pub const NEGOTIATIONS: &str = "mv_negotiations";
