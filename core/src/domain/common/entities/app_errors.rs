use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Merchant not found")]
    MerchantNotFound,

    #[error("Menu not found")]
    MenuNotFound,

    #[error("Menu view not found")]
    MenuViewNotFound,

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}
