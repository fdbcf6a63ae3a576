use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("soda with name {0} already registered in the system")]
    AlreadyRegistered(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("soda with id {id}: increment of {quantity} exceeds the max stock capacity")]
    StockExceeded { id: i64, quantity: i32 },
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// Code shared by every invalid-input failure, including those raised
    /// before a request reaches the service.
    pub const VALIDATION_CODE: u16 = 1001;

    pub fn name_not_found(name: &str) -> Self { Self::NotFound(format!("soda with name {name}")) }

    pub fn id_not_found(id: i64) -> Self { Self::NotFound(format!("soda with id {id}")) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => Self::VALIDATION_CODE,
            ServiceError::AlreadyRegistered(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::StockExceeded { .. } => 1004,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Duplicate(name) => ServiceError::AlreadyRegistered(name),
            ModelError::NotFound(msg) => ServiceError::NotFound(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
