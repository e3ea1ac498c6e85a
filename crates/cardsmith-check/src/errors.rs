use thiserror::Error;

/// Errors raised while configuring a check run.
///
/// Running the simulator never fails; malformed or checksum-invalid lines
/// become outcome records instead.
#[derive(Debug, Error, PartialEq)]
pub enum CheckError {
    #[error("invalid outcome bands: {0}")]
    InvalidBands(String),
}
