use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinancialInsightError {
    /// The external text-generation call itself failed (API error, bad
    /// response shape, missing credentials). Kept distinct from an analysis
    /// that parsed to empty sections, which is a valid result.
    #[error("Analysis generation failed: {0}")]
    GenerationFailed(String),

    #[error("HUGGINGFACE_API_KEY is not set")]
    MissingApiKey,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "huggingface")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FinancialInsightError>;
