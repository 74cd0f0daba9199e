use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unrecognized question type: {0}")]
    UnrecognizedType(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("State violation: {0}")]
    StateViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::UnrecognizedType(_) => "UNRECOGNIZED_TYPE",
            AppError::NetworkError(_) => "NETWORK_ERROR",
            AppError::StateViolation(_) => "STATE_VIOLATION",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
        }
    }

    /// Whether the caller may retry the failed operation as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::NetworkError(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if status.as_u16() == 401 => {
                AppError::Unauthorized("Bearer credential was rejected".to_string())
            }
            Some(status) if status.as_u16() == 404 => {
                AppError::NotFound("Requested resource does not exist".to_string())
            }
            _ => AppError::NetworkError(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
