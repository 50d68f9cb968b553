use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No reminder with the given id exists in the store.
    #[error("reminder not found: {id}")]
    NotFound { id: String },

    /// The reminder failed boundary validation and was not accepted.
    #[error("invalid reminder: {0}")]
    Invalid(#[from] pawhaven_care::CareError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
