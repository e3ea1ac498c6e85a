use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use cardsmith_core::{
    CardRecord, OutcomeRecord, OutcomeStatus, RandomSource, is_valid_checksum, parse_record,
};

use crate::bands::OutcomeBands;

pub const MALFORMED_MESSAGE: &str = "Invalid Format (Use PIPE)";
pub const CHECKSUM_FAILED_MESSAGE: &str = "Luhn Check Failed";
pub const APPROVED_MESSAGE: &str = "Approved - CVV Matched";
pub const INCOMPLETE_MESSAGE: &str = "Insufficient Funds";
pub const DECLINED_MESSAGE: &str = "Declined";

pub const DEFAULT_DELAY: Duration = Duration::from_millis(400);
pub const DEFAULT_ISSUER_PREFIX: &str = "Global Bank";
pub const DEFAULT_REGION_LABEL: &str = "USA";
/// Leading characters of the card number used in the issuer label.
const ISSUER_PREFIX_DIGITS: usize = 4;

/// Tunables for a simulator instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    pub bands: OutcomeBands,
    /// Artificial latency applied before each randomized draw.
    pub delay: Duration,
    pub issuer_prefix: String,
    pub region_label: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            bands: OutcomeBands::default(),
            delay: DEFAULT_DELAY,
            issuer_prefix: DEFAULT_ISSUER_PREFIX.to_string(),
            region_label: DEFAULT_REGION_LABEL.to_string(),
        }
    }
}

/// Fraction of the input processed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }
}

/// Shared flag a caller sets to stop a run between lines.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Message attached to a drawn outcome.
pub fn outcome_message(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::Approved => APPROVED_MESSAGE,
        OutcomeStatus::Incomplete => INCOMPLETE_MESSAGE,
        OutcomeStatus::Declined => DECLINED_MESSAGE,
        OutcomeStatus::Malformed => MALFORMED_MESSAGE,
    }
}

/// Which branch a line takes before any randomness is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineState {
    /// Fewer than four pipe-delimited fields.
    Malformed,
    /// Parsed, but the number fails the checksum.
    ChecksumFail(CardRecord),
    /// Parsed and checksum-valid; the outcome is drawn at random.
    Simulated(CardRecord),
}

/// Structural pre-filter for one line.
pub fn prefilter(line: &str) -> LineState {
    match parse_record(line) {
        None => LineState::Malformed,
        Some(card) if is_valid_checksum(&card.number) => LineState::Simulated(card),
        Some(card) => LineState::ChecksumFail(card),
    }
}

/// Outcomes produced by one run, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRun {
    pub outcomes: Vec<OutcomeRecord>,
    /// Number of input lines, processed or not.
    pub total: usize,
    pub cancelled: bool,
}

/// Sequential outcome simulator.
#[derive(Debug, Clone, Default)]
pub struct OutcomeSimulator {
    config: SimulatorConfig,
}

impl OutcomeSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Processes `lines` one at a time, reporting progress after each
    /// outcome. Once `cancel` is set no further lines are started; outcomes
    /// already produced are kept.
    pub async fn run<L, R, F>(
        &self,
        lines: &[L],
        rng: &mut R,
        cancel: &CancellationFlag,
        mut on_progress: F,
    ) -> SimulationRun
    where
        L: AsRef<str>,
        R: RandomSource + ?Sized,
        F: FnMut(Progress),
    {
        let start = Instant::now();
        let total = lines.len();
        let mut outcomes = Vec::with_capacity(total);
        let mut cancelled = false;

        info!(lines = total, delay_ms = self.config.delay.as_millis() as u64, "check started");

        for line in lines {
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }
            let outcome = self.check_line(line.as_ref(), rng).await;
            outcomes.push(outcome);
            on_progress(Progress {
                completed: outcomes.len(),
                total,
            });
        }

        if cancelled {
            info!(processed = outcomes.len(), lines = total, "check cancelled");
        } else {
            info!(
                processed = outcomes.len(),
                duration_ms = start.elapsed().as_millis() as u64,
                "check completed"
            );
        }

        SimulationRun {
            outcomes,
            total,
            cancelled,
        }
    }

    /// Produces the outcome for a single line. Only checksum-valid lines
    /// wait for the configured delay and consume a random draw.
    pub async fn check_line<R>(&self, line: &str, rng: &mut R) -> OutcomeRecord
    where
        R: RandomSource + ?Sized,
    {
        match prefilter(line) {
            LineState::Malformed => {
                debug!(status = %OutcomeStatus::Malformed, "line rejected");
                OutcomeRecord {
                    card: CardRecord::unparsed(line),
                    status: OutcomeStatus::Malformed,
                    message: MALFORMED_MESSAGE.to_string(),
                    issuer_label: None,
                    region_label: None,
                }
            }
            LineState::ChecksumFail(card) => {
                debug!(network = %card.network, status = %OutcomeStatus::Declined, "checksum failed");
                OutcomeRecord {
                    card,
                    status: OutcomeStatus::Declined,
                    message: CHECKSUM_FAILED_MESSAGE.to_string(),
                    issuer_label: None,
                    region_label: None,
                }
            }
            LineState::Simulated(card) => {
                if !self.config.delay.is_zero() {
                    tokio::time::sleep(self.config.delay).await;
                }
                let status = self.config.bands.status_for(rng.next_uniform());
                let message = outcome_message(status);
                let issuer_label = self.issuer_label(&card.number);
                debug!(network = %card.network, status = %status, "outcome drawn");
                OutcomeRecord {
                    card,
                    status,
                    message: message.to_string(),
                    issuer_label: Some(issuer_label),
                    region_label: Some(self.config.region_label.clone()),
                }
            }
        }
    }

    fn issuer_label(&self, number: &str) -> String {
        let prefix: String = number.chars().take(ISSUER_PREFIX_DIGITS).collect();
        format!("{} {prefix}", self.config.issuer_prefix)
    }
}
