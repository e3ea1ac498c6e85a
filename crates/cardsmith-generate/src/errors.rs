use thiserror::Error;

/// Errors emitted while validating generation requests or writing output.
///
/// The generators themselves are total; only request validation and file
/// output can fail.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
