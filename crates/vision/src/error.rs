use thiserror::Error;

pub type Result<T> = std::result::Result<T, VisionError>;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Vision API is not configured: {0}")]
    Configuration(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Vision API quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Vision API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse judgement JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid judgement response: {0}")]
    InvalidResponse(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),
}
