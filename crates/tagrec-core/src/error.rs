use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid catalog data: {0}")]
    Validation(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
