use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

pub type PlanResult<T> = Result<T, PlanError>;
