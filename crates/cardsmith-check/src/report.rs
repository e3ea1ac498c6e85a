use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use cardsmith_core::{OutcomeRecord, OutcomeStatus};

use crate::bands::OutcomeBands;
use crate::simulator::SimulationRun;

/// Per-status counts for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub total: usize,
    pub processed: usize,
    pub cancelled: bool,
    pub by_status: BTreeMap<OutcomeStatus, u64>,
}

impl CheckSummary {
    pub fn from_run(run: &SimulationRun) -> Self {
        let mut by_status: BTreeMap<OutcomeStatus, u64> =
            OutcomeStatus::ALL.iter().map(|status| (*status, 0)).collect();
        for outcome in &run.outcomes {
            *by_status.entry(outcome.status).or_insert(0) += 1;
        }
        Self {
            total: run.total,
            processed: run.outcomes.len(),
            cancelled: run.cancelled,
            by_status,
        }
    }

    pub fn count(&self, status: OutcomeStatus) -> u64 {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Artifact describing one check run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub run_id: String,
    pub started_at: String,
    pub seed: u64,
    /// SHA-256 of the raw input text, hex encoded.
    pub input_sha256: String,
    pub bands: OutcomeBands,
    pub summary: CheckSummary,
    pub outcomes: Vec<OutcomeRecord>,
}

impl CheckReport {
    pub fn new(
        run: SimulationRun,
        input: &str,
        seed: u64,
        bands: OutcomeBands,
        started_at: DateTime<Utc>,
    ) -> Self {
        let summary = CheckSummary::from_run(&run);
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: started_at.to_rfc3339(),
            seed,
            input_sha256: hex::encode(Sha256::digest(input.as_bytes())),
            bands,
            summary,
            outcomes: run.outcomes,
        }
    }
}

/// Render a deterministic markdown summary of a check report.
pub fn render_summary(report: &CheckReport) -> String {
    let mut lines = Vec::new();

    lines.push("# Check summary".to_string());
    lines.push(String::new());
    lines.push(format!("- run_id: {}", report.run_id));
    lines.push(format!("- seed: {}", report.seed));
    lines.push(format!("- input_sha256: {}", report.input_sha256));
    lines.push(format!(
        "- processed: {}/{}{}",
        report.summary.processed,
        report.summary.total,
        if report.summary.cancelled {
            " (cancelled)"
        } else {
            ""
        }
    ));
    lines.push(String::new());

    lines.push("| status | count |".to_string());
    lines.push("| --- | --- |".to_string());
    for status in OutcomeStatus::ALL {
        lines.push(format!("| {} | {} |", status, report.summary.count(status)));
    }
    lines.push(String::new());

    lines.push(format!(
        "Bands: approved {:.2}, incomplete {:.2}, declined {:.2}",
        report.bands.approved_share(),
        report.bands.incomplete_share(),
        report.bands.declined_share()
    ));

    lines.join("\n")
}
