//! Clean code attribute catalog.
//!
//! `identity` defines the two closed enums and the total attribute→category
//! mapping. `repository` exposes the query surface callers use, and `model`
//! renders the table for JSON output.

pub mod identity;
pub mod model;
pub mod repository;

pub use identity::{CleanCodeAttribute, CleanCodeAttributeCategory};
pub use model::{AttributeEntry, CATALOG_SCHEMA_VERSION, CatalogSnapshot};
pub use repository::{AttributeCatalog, CATALOG};
