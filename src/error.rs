use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Widget error: {0}")]
    WidgetError(String),
    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
