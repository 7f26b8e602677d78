use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Repository call failed in a way that may succeed on retry.
    #[error("Temporary failure: {0}")]
    Transient(String),

    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::Transient(msg) => {
                tracing::warn!("Transient repository failure: {}", msg);
                "The service is temporarily unavailable, please retry".to_string()
            }
            AppError::Fixture(e) => {
                tracing::error!("Fixture error: {:?}", e);
                "Reference data could not be loaded".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Transient(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
