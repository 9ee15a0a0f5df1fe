mod record;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Record)]
// ============================================================================

/// Derive macro that implements `shopvault::Record` for a struct.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "mv_routes", endpoint = "routes", prefix = "route")]
/// struct Route {
///     #[record(id)]
///     pub id: String,
///     pub title: String,
/// }
/// ```
///
/// Struct attributes (all optional):
/// - `collection`: storage key of the collection (default: snake_case name + "s")
/// - `endpoint`: remote path segment (default: collection without the `mv_` prefix)
/// - `prefix`: prefix for generated string ids (default: endpoint without trailing "s")
/// - `validate`: name of a `fn(&self) -> Result<(), String>` method run on every decoded record
///
/// The identifier is the field marked `#[record(id)]`, or the field named `id`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
