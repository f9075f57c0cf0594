use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The category type was not one of the allowed values.
    #[error("Category type must be 'income' or 'expense', got '{0}'")]
    InvalidType(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
