use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReflowError>;

#[derive(Debug, Error)]
pub enum ReflowError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid width: {0:?} is not a valid integer width")]
    InvalidWidth(String),
}
