//! Simulated checking for cardsmith.
//!
//! Runs pipe-delimited card lines through a structural pre-filter and a
//! randomized outcome draw. Nothing here contacts a payment network: the
//! statuses are labels drawn from configured probability bands.

pub mod bands;
pub mod errors;
pub mod report;
pub mod simulator;

pub use bands::OutcomeBands;
pub use errors::CheckError;
pub use report::{CheckReport, CheckSummary, render_summary};
pub use simulator::{
    CancellationFlag, LineState, OutcomeSimulator, Progress, SimulationRun, SimulatorConfig,
    prefilter,
};
