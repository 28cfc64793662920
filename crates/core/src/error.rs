//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The rule engine itself is total; errors only surface at the edges where a
/// caller hands over a collection that cannot be advanced as a whole.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item slot was empty where an item is required.
    #[error("missing item at position {index}")]
    MissingItem { index: usize },
}

impl DomainError {
    pub fn missing_item(index: usize) -> Self {
        Self::MissingItem { index }
    }
}
