use thiserror::Error;

/// Errors surfaced by the activity store boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Invalid activity '{id}': {reason}")]
    InvalidActivity { id: String, reason: String },

    #[error("Unknown activity category code: {0}")]
    UnknownCategory(u8),
}
