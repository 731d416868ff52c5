//! Serializable rendering of the attribute table.
//!
//! The shape mirrors `schema/clean_code_catalog.schema.json`. Snapshots are
//! built from the static table on demand; nothing reads them back into the
//! catalog.

use crate::catalog::identity::{CleanCodeAttribute, CleanCodeAttributeCategory};
use serde::{Deserialize, Serialize};

pub const CATALOG_SCHEMA_VERSION: &str = "clean_code_catalog_v1";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Full attribute table plus the category set it draws from.
pub struct CatalogSnapshot {
    pub schema_version: String,
    pub categories: Vec<CleanCodeAttributeCategory>,
    pub attributes: Vec<AttributeEntry>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One row of the table: an attribute and the category it belongs to.
pub struct AttributeEntry {
    pub attribute: CleanCodeAttribute,
    pub category: CleanCodeAttributeCategory,
}

impl From<CleanCodeAttribute> for AttributeEntry {
    fn from(attribute: CleanCodeAttribute) -> Self {
        Self {
            attribute,
            category: attribute.category(),
        }
    }
}

impl CatalogSnapshot {
    pub fn capture() -> Self {
        Self {
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            categories: CleanCodeAttributeCategory::ALL.to_vec(),
            attributes: CleanCodeAttribute::ALL
                .into_iter()
                .map(AttributeEntry::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_serde_matches_schema_names() {
        let entry = AttributeEntry::from(CleanCodeAttribute::Efficient);
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(
            json,
            json!({"attribute": "EFFICIENT", "category": "INTENTIONAL"})
        );

        let back: AttributeEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn snapshot_covers_whole_table() {
        let snapshot = CatalogSnapshot::capture();
        assert_eq!(snapshot.schema_version, CATALOG_SCHEMA_VERSION);
        assert_eq!(snapshot.categories.len(), 4);
        assert_eq!(snapshot.attributes.len(), CleanCodeAttribute::ALL.len());
        assert!(
            snapshot
                .attributes
                .iter()
                .all(|entry| entry.category == entry.attribute.category())
        );
    }

    #[test]
    fn entry_with_unknown_attribute_is_rejected() {
        let result = serde_json::from_value::<AttributeEntry>(
            json!({"attribute": "PORTABLE", "category": "ADAPTABLE"}),
        );
        assert!(result.is_err());
    }
}
