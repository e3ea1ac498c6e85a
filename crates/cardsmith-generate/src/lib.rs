//! Synthetic record generation for cardsmith.
//!
//! Expands masked card patterns into checksum-valid numbers, assembles card
//! batches from expiry and security-code selectors, and builds
//! locale-shaped identity records. Every generator draws from a caller
//! supplied [`cardsmith_core::RandomSource`], so seeded runs reproduce.

pub mod batch;
pub mod errors;
pub mod identity;
pub mod output;
pub mod pattern;

pub use batch::{
    CardBatchRequest, DEFAULT_PATTERN, MAX_QUANTITY, MonthSelector, SecurityCodeSelector,
    YearSelector, generate_batch,
};
pub use errors::GenerationError;
pub use identity::generate_identity;
pub use pattern::{DEFAULT_LENGTH, expand_pattern};
