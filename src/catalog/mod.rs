//! Built-in record types and the default datasets they are seeded with.

mod category;
mod order;
mod product;
mod route;
mod slide;
mod system_log;

pub use category::Category;
pub use order::{Order, OrderItem, OrderStatus};
pub use product::{Product, ProductCategory};
pub use route::{Coordinate, Difficulty, Route};
pub use slide::{Slide, SlideKind};
pub use system_log::{LogLevel, SystemLog};

use crate::record::Record;
use crate::repository::{Backend, Repositories, RepositoryError};

/// A record type with a compile-time default dataset.
pub trait Seeded: Record {
    fn defaults() -> Vec<Self>;
}

impl Repositories {
    /// Build the repository for `R` seeded with its built-in dataset.
    pub fn seeded<R: Seeded>(&self) -> Result<Backend<R>, RepositoryError> {
        self.backend(R::defaults())
    }
}
