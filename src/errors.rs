use crate::services::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The blob store write failed after the in-memory list was updated.
    /// The mutation is kept; callers should warn the user that the change
    /// may not survive a restart.
    #[error("persistence error: {0}")]
    Persistence(anyhow::Error),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}
