use crate::error::TaxonomyError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Grouping that every clean code attribute belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CleanCodeAttributeCategory {
    Adaptable,
    Consistent,
    Intentional,
    Responsible,
}

/// One member of the closed clean code attribute set.
///
/// The set is fixed at build time. `category` matches every variant without a
/// wildcard arm, so a new attribute cannot compile until it is assigned to a
/// category.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CleanCodeAttribute {
    Conventional,
    Formatted,
    Identifiable,

    Clear,
    Complete,
    Efficient,
    Logical,

    Distinct,
    Focused,
    Modular,
    Tested,

    Lawful,
    Respectful,
    Trustworthy,
}

impl CleanCodeAttributeCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Adaptable,
        Self::Consistent,
        Self::Intentional,
        Self::Responsible,
    ];

    pub fn values() -> &'static [Self] {
        &Self::ALL
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adaptable => "ADAPTABLE",
            Self::Consistent => "CONSISTENT",
            Self::Intentional => "INTENTIONAL",
            Self::Responsible => "RESPONSIBLE",
        }
    }
}

impl CleanCodeAttribute {
    /// All attributes in declaration order, each exactly once.
    pub const ALL: [Self; 14] = [
        Self::Conventional,
        Self::Formatted,
        Self::Identifiable,
        Self::Clear,
        Self::Complete,
        Self::Efficient,
        Self::Logical,
        Self::Distinct,
        Self::Focused,
        Self::Modular,
        Self::Tested,
        Self::Lawful,
        Self::Respectful,
        Self::Trustworthy,
    ];

    pub fn values() -> &'static [Self] {
        &Self::ALL
    }

    /// The category this attribute belongs to.
    pub const fn category(self) -> CleanCodeAttributeCategory {
        use CleanCodeAttributeCategory::{Adaptable, Consistent, Intentional, Responsible};
        match self {
            Self::Conventional | Self::Formatted | Self::Identifiable => Consistent,
            Self::Clear | Self::Complete | Self::Efficient | Self::Logical => Intentional,
            Self::Distinct | Self::Focused | Self::Modular | Self::Tested => Adaptable,
            Self::Lawful | Self::Respectful | Self::Trustworthy => Responsible,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conventional => "CONVENTIONAL",
            Self::Formatted => "FORMATTED",
            Self::Identifiable => "IDENTIFIABLE",
            Self::Clear => "CLEAR",
            Self::Complete => "COMPLETE",
            Self::Efficient => "EFFICIENT",
            Self::Logical => "LOGICAL",
            Self::Distinct => "DISTINCT",
            Self::Focused => "FOCUSED",
            Self::Modular => "MODULAR",
            Self::Tested => "TESTED",
            Self::Lawful => "LAWFUL",
            Self::Respectful => "RESPECTFUL",
            Self::Trustworthy => "TRUSTWORTHY",
        }
    }
}

impl FromStr for CleanCodeAttribute {
    type Err = TaxonomyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == value)
            .ok_or_else(|| TaxonomyError::InvalidAttribute(value.to_string()))
    }
}

impl FromStr for CleanCodeAttributeCategory {
    type Err = TaxonomyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| TaxonomyError::InvalidCategory(value.to_string()))
    }
}

impl fmt::Display for CleanCodeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CleanCodeAttributeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CleanCodeAttribute {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CleanCodeAttribute {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for CleanCodeAttributeCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CleanCodeAttributeCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
