use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Unknown frequency '{0}': expected weekly, bi-weekly, monthly, annually, or one-time")]
    UnknownFrequency(String),

    #[error("Invalid date for {field}: '{value}'. Expected YYYY-MM-DD")]
    InvalidDate { field: String, value: String },

    #[error("Validation failed for '{item}': {details}")]
    ValidationError { item: String, details: String },

    #[error("Invalid forecast horizon {0}: must be at least 1 day")]
    InvalidHorizon(i64),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
