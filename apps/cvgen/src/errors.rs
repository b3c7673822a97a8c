use thiserror::Error;

/// User-visible message for any failed generate action.
pub const GENERATION_FAILED_MESSAGE: &str =
    "✗ Error generating PDF. Please check your inputs and try again.";

/// Application-level error type.
/// `status_message()` is the single conversion point to what the user sees.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid data format")]
    InvalidFormat,

    #[error("Invalid JSON file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch template: {status} {reason}")]
    Fetch { status: u16, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid theme color: {0:?}")]
    InvalidColor(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Rendering failures collapse to one generic message; input and fetch
    /// failures keep their specific text.
    pub fn status_message(&self) -> String {
        match self {
            AppError::InvalidFormat => format!("✗ Error loading data: {self}"),
            AppError::Json(e) => {
                tracing::warn!("JSON parse error: {e}");
                "✗ Error loading data: Invalid JSON file".to_string()
            }
            AppError::Fetch { .. } => format!("✗ Error loading template: {self}"),
            AppError::Http(e) => {
                tracing::error!("HTTP error: {e}");
                format!("✗ Error loading template: {e}")
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                format!("✗ {self}")
            }
            AppError::InvalidColor(color) => {
                tracing::error!("Generation failed on theme color {color:?}");
                GENERATION_FAILED_MESSAGE.to_string()
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                GENERATION_FAILED_MESSAGE.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                GENERATION_FAILED_MESSAGE.to_string()
            }
        }
    }
}
