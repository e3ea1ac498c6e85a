//! Core contracts and helpers for cardsmith.
//!
//! This crate defines the card, outcome and identity records, the closed
//! label enums, and the total functions shared by the generator, the
//! checker and the CLI: checksum validation, network classification and the
//! pipe-delimited line codec.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod network;
pub mod random;
pub mod types;

pub use checksum::{check_digit, is_valid_checksum};
pub use codec::{export_lines, format_record, import_lines, parse_record};
pub use error::{Error, Result};
pub use network::classify;
pub use random::{RandomSource, entropy_rng, pick, seeded_rng};
pub use types::{
    CardRecord, Country, Gender, IdentityRecord, Network, OutcomeRecord, OutcomeStatus,
};

/// Separator used by the line format `NUMBER|MM|YYYY|CVV`.
pub const FIELD_SEPARATOR: char = '|';
