//! Clean code attribute taxonomy.
//!
//! The crate exposes a closed set of clean code attributes, the closed set of
//! attribute categories, and the total mapping between them. All of it is
//! compile-time data: queries are pure, never fail for typed input, and are
//! safe to call from any thread. The only fallible surface is parsing a name
//! into an attribute or category, which reports `TaxonomyError`.
//!
//! The `attribute-catalog` binary is a thin front end over this library.

pub mod catalog;
pub mod error;
pub mod render;

pub use catalog::{
    AttributeCatalog, AttributeEntry, CATALOG, CATALOG_SCHEMA_VERSION, CatalogSnapshot,
    CleanCodeAttribute, CleanCodeAttributeCategory,
};
pub use error::TaxonomyError;
pub use render::{OutputFormat, render_entries, render_entry, render_snapshot, split_names};

/// Every attribute in declaration order.
pub fn list_attributes() -> &'static [CleanCodeAttribute] {
    CATALOG.list_attributes()
}

/// The category `attribute` belongs to.
pub fn category_of(attribute: CleanCodeAttribute) -> CleanCodeAttributeCategory {
    CATALOG.category_of(attribute)
}
