//! Error type for the only fallible surface of the taxonomy: turning text into
//! attribute or category identities.
//!
//! Typed lookups never fail. These variants only appear when a name coming
//! from serde input or a command line does not belong to the closed set.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TaxonomyError {
    #[error("invalid clean code attribute '{0}'")]
    InvalidAttribute(String),
    #[error("invalid clean code attribute category '{0}'")]
    InvalidCategory(String),
}

pub type Result<T> = std::result::Result<T, TaxonomyError>;
