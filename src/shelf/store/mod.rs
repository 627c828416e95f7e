//! # Record Store
//!
//! The catalog is made of three independent collections (users, categories,
//! products) that are read once at startup and never change afterwards. The
//! [`RecordSource`] trait hides where they come from.
//!
//! ## Implementations
//!
//! - [`json::JsonDirSource`]: a directory holding one JSON array per
//!   collection
//! - [`memory::InMemorySource`]: records held in memory, used by tests and by
//!   the embedded sample catalog
//!
//! ## Storage Format
//!
//! For `JsonDirSource`:
//! ```text
//! data/
//! ├── users.json         # [{"id": 1, "name": "Roma", "sex": "m"}, ...]
//! ├── categories.json    # [{"id": 1, "title": "Grocery", "icon": "🍞", "ownerId": 2}, ...]
//! └── products.json      # [{"id": 1, "name": "Milk", "categoryId": 2}, ...]
//! ```
//!
//! Ids are expected to be unique inside each collection. Sources do not check
//! this; the enrichment join keeps the first record for a repeated id.

use crate::error::Result;
use crate::model::Catalog;

pub mod json;
pub mod memory;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// Supplies the base collections of a catalog.
pub trait RecordSource {
    /// Load all three collections. Called once per session.
    fn load(&self) -> Result<Catalog>;

    /// Short human-readable description of where records come from
    fn describe(&self) -> String;
}
