use serde::{Deserialize, Serialize};

use cardsmith_core::OutcomeStatus;

use crate::errors::CheckError;

pub const DEFAULT_APPROVED_ABOVE: f64 = 0.88;
pub const DEFAULT_INCOMPLETE_ABOVE: f64 = 0.75;

/// Probability bands over a uniform draw `u` in `[0, 1)`.
///
/// `u > approved_above` is approved, `u > incomplete_above` is incomplete,
/// everything else is declined. Approved is never wider than incomplete,
/// which is never wider than declined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBands", into = "RawBands")]
pub struct OutcomeBands {
    approved_above: f64,
    incomplete_above: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawBands {
    approved_above: f64,
    incomplete_above: f64,
}

impl OutcomeBands {
    pub fn new(approved_above: f64, incomplete_above: f64) -> Result<Self, CheckError> {
        let in_unit = |value: f64| value > 0.0 && value < 1.0;
        if !in_unit(approved_above) || !in_unit(incomplete_above) {
            return Err(CheckError::InvalidBands(format!(
                "edges must lie strictly between 0 and 1 (approved_above={approved_above}, incomplete_above={incomplete_above})"
            )));
        }
        if incomplete_above >= approved_above {
            return Err(CheckError::InvalidBands(format!(
                "incomplete_above ({incomplete_above}) must be below approved_above ({approved_above})"
            )));
        }

        let bands = Self {
            approved_above,
            incomplete_above,
        };
        let approved = bands.approved_share();
        let incomplete = bands.incomplete_share();
        let declined = bands.declined_share();
        if approved > incomplete || incomplete > declined || approved >= declined {
            return Err(CheckError::InvalidBands(format!(
                "band widths must satisfy approved <= incomplete <= declined with approved rarest \
                 (approved={approved:.3}, incomplete={incomplete:.3}, declined={declined:.3})"
            )));
        }
        Ok(bands)
    }

    pub fn approved_above(&self) -> f64 {
        self.approved_above
    }

    pub fn incomplete_above(&self) -> f64 {
        self.incomplete_above
    }

    pub fn approved_share(&self) -> f64 {
        1.0 - self.approved_above
    }

    pub fn incomplete_share(&self) -> f64 {
        self.approved_above - self.incomplete_above
    }

    pub fn declined_share(&self) -> f64 {
        self.incomplete_above
    }

    /// Maps one uniform draw to its band.
    pub fn status_for(&self, draw: f64) -> OutcomeStatus {
        if draw > self.approved_above {
            OutcomeStatus::Approved
        } else if draw > self.incomplete_above {
            OutcomeStatus::Incomplete
        } else {
            OutcomeStatus::Declined
        }
    }
}

impl Default for OutcomeBands {
    fn default() -> Self {
        Self {
            approved_above: DEFAULT_APPROVED_ABOVE,
            incomplete_above: DEFAULT_INCOMPLETE_ABOVE,
        }
    }
}

impl TryFrom<RawBands> for OutcomeBands {
    type Error = CheckError;

    fn try_from(raw: RawBands) -> Result<Self, Self::Error> {
        OutcomeBands::new(raw.approved_above, raw.incomplete_above)
    }
}

impl From<OutcomeBands> for RawBands {
    fn from(bands: OutcomeBands) -> Self {
        Self {
            approved_above: bands.approved_above,
            incomplete_above: bands.incomplete_above,
        }
    }
}
