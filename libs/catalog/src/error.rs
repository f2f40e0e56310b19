//! Error types for catalog lookups.

use thiserror::Error;

/// Errors that can occur when resolving a model from the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The selector string is empty.
    #[error("model selector cannot be empty")]
    Empty,

    /// No model carries the given product name.
    #[error("unknown model '{0}'")]
    UnknownProduct(String),

    /// The numeric index is past the end of the model table.
    #[error("model index {index} is out of range (catalog has {len} models)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CatalogError {
    /// Returns true if the selector did not name any known model.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::UnknownProduct(_) | CatalogError::IndexOutOfRange { .. }
        )
    }
}
