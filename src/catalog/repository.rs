//! Query facade over the static attribute table.
//!
//! `AttributeCatalog` owns no data; every answer comes from the `const`
//! tables on the identity enums, so the catalog is free to copy and share
//! across threads.

use crate::catalog::identity::{CleanCodeAttribute, CleanCodeAttributeCategory};
use crate::catalog::model::CatalogSnapshot;
use crate::error::Result;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default)]
/// Read-only view of the attribute set and its category mapping.
pub struct AttributeCatalog;

/// Process-wide catalog instance.
pub static CATALOG: AttributeCatalog = AttributeCatalog;

impl AttributeCatalog {
    /// Every attribute, each exactly once, in declaration order.
    pub fn list_attributes(&self) -> &'static [CleanCodeAttribute] {
        CleanCodeAttribute::values()
    }

    /// Every category in declaration order.
    pub fn list_categories(&self) -> &'static [CleanCodeAttributeCategory] {
        CleanCodeAttributeCategory::values()
    }

    pub fn category_of(&self, attribute: CleanCodeAttribute) -> CleanCodeAttributeCategory {
        attribute.category()
    }

    /// Attributes belonging to `category`, in declaration order.
    pub fn attributes_in(&self, category: CleanCodeAttributeCategory) -> Vec<CleanCodeAttribute> {
        self.list_attributes()
            .iter()
            .copied()
            .filter(|attribute| attribute.category() == category)
            .collect()
    }

    /// Inverse view of the mapping. Each attribute appears under exactly one key.
    pub fn grouped(&self) -> BTreeMap<CleanCodeAttributeCategory, Vec<CleanCodeAttribute>> {
        let mut groups: BTreeMap<_, Vec<_>> = BTreeMap::new();
        for &attribute in self.list_attributes() {
            groups.entry(attribute.category()).or_default().push(attribute);
        }
        groups
    }

    /// Resolve a canonical attribute name together with its category.
    ///
    /// Names are matched exactly; callers holding user input normalize case
    /// before calling.
    pub fn lookup(&self, name: &str) -> Result<(CleanCodeAttribute, CleanCodeAttributeCategory)> {
        let attribute: CleanCodeAttribute = name.parse()?;
        Ok((attribute, attribute.category()))
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot::capture()
    }
}
