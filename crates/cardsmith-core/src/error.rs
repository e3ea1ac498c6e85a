use thiserror::Error;

/// Core error type shared across cardsmith crates.
///
/// The record functions in this crate are total; these errors only surface
/// when a boundary layer parses user-supplied labels into the closed enums.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A label does not name a known variant.
    #[error("unknown {kind}: {value}")]
    UnknownLabel { kind: &'static str, value: String },
}

/// Convenience alias for results returned by cardsmith crates.
pub type Result<T> = std::result::Result<T, Error>;
