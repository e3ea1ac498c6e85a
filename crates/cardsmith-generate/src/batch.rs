use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use cardsmith_core::{CardRecord, RandomSource};

use crate::errors::GenerationError;
use crate::pattern::{DEFAULT_LENGTH, expand_pattern};

/// Pattern used when the caller does not supply one.
pub const DEFAULT_PATTERN: &str = "450875xxxxxxxxxx";
/// Upper bound on cards per batch.
pub const MAX_QUANTITY: u32 = 500;
/// Random expiry years are drawn from `reference_year..=reference_year + 5`.
pub const EXPIRY_YEAR_SPAN: u32 = 5;

const RANDOM_TOKEN: &str = "random";

/// Expiry month choice for a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MonthSelector {
    #[default]
    Random,
    Fixed(String),
}

/// Expiry year choice for a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum YearSelector {
    #[default]
    Random,
    Fixed(String),
}

/// Security code choice for a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SecurityCodeSelector {
    #[default]
    Random,
    Fixed(String),
}

impl FromStr for MonthSelector {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(RANDOM_TOKEN) {
            return Ok(Self::Random);
        }
        let month: u32 = value.parse().map_err(|_| {
            GenerationError::InvalidRequest(format!("expiry month '{value}' is not a number"))
        })?;
        Ok(Self::Fixed(format!("{month:02}")))
    }
}

impl FromStr for YearSelector {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(RANDOM_TOKEN) {
            return Ok(Self::Random);
        }
        Ok(Self::Fixed(value.to_string()))
    }
}

impl FromStr for SecurityCodeSelector {
    type Err = GenerationError;

    /// An empty string or `random` derives codes randomly.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(RANDOM_TOKEN) {
            return Ok(Self::Random);
        }
        Ok(Self::Fixed(value.to_string()))
    }
}

/// Parameters for a batch of generated cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardBatchRequest {
    pub pattern: String,
    pub length: usize,
    pub month: MonthSelector,
    pub year: YearSelector,
    pub security_code: SecurityCodeSelector,
    pub quantity: u32,
}

impl Default for CardBatchRequest {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            length: DEFAULT_LENGTH,
            month: MonthSelector::Random,
            year: YearSelector::Random,
            security_code: SecurityCodeSelector::Random,
            quantity: 10,
        }
    }
}

impl CardBatchRequest {
    /// Boundary checks for user-supplied requests.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.quantity == 0 || self.quantity > MAX_QUANTITY {
            return Err(GenerationError::InvalidRequest(format!(
                "quantity must be between 1 and {MAX_QUANTITY}, got {}",
                self.quantity
            )));
        }
        if self.length < 2 {
            return Err(GenerationError::InvalidRequest(
                "card length must be at least 2".to_string(),
            ));
        }
        if let MonthSelector::Fixed(month) = &self.month {
            let valid = month.len() == 2
                && month
                    .parse::<u32>()
                    .is_ok_and(|value| (1..=12).contains(&value));
            if !valid {
                return Err(GenerationError::InvalidRequest(format!(
                    "expiry month must be 01..12, got '{month}'"
                )));
            }
        }
        if let YearSelector::Fixed(year) = &self.year {
            if !is_digits(year, 4..=4) {
                return Err(GenerationError::InvalidRequest(format!(
                    "expiry year must have 4 digits, got '{year}'"
                )));
            }
        }
        if let SecurityCodeSelector::Fixed(code) = &self.security_code {
            if !is_digits(code, 3..=4) {
                return Err(GenerationError::InvalidRequest(format!(
                    "security code must have 3 or 4 digits, got '{code}'"
                )));
            }
        }
        Ok(())
    }
}

/// Generates `request.quantity` cards in order.
///
/// `reference_year` anchors random expiry years (normally the current
/// year). The request is used as given; call
/// [`CardBatchRequest::validate`] first for user input.
pub fn generate_batch(
    request: &CardBatchRequest,
    reference_year: u32,
    rng: &mut (impl RandomSource + ?Sized),
) -> Vec<CardRecord> {
    let cards: Vec<CardRecord> = (0..request.quantity)
        .map(|_| {
            let number = expand_pattern(&request.pattern, request.length, rng);
            let month = match &request.month {
                MonthSelector::Random => format!("{:02}", rng.between(1, 12)),
                MonthSelector::Fixed(month) => month.clone(),
            };
            let year = match &request.year {
                YearSelector::Random => {
                    let offset = rng.between(0, EXPIRY_YEAR_SPAN);
                    reference_year.saturating_add(offset).to_string()
                }
                YearSelector::Fixed(year) => year.clone(),
            };
            let code = match &request.security_code {
                SecurityCodeSelector::Random => rng.between(100, 999).to_string(),
                SecurityCodeSelector::Fixed(code) => code.clone(),
            };
            CardRecord::new(number, month, year, code)
        })
        .collect();

    debug!(
        pattern = %request.pattern,
        quantity = request.quantity,
        generated = cards.len(),
        "card batch generated"
    );
    cards
}

fn is_digits(value: &str, lengths: std::ops::RangeInclusive<usize>) -> bool {
    lengths.contains(&value.len()) && value.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_parse_random_tokens() {
        assert_eq!("Random".parse::<MonthSelector>().ok(), Some(MonthSelector::Random));
        assert_eq!(
            "3".parse::<MonthSelector>().ok(),
            Some(MonthSelector::Fixed("03".to_string()))
        );
        assert!("march".parse::<MonthSelector>().is_err());
        assert_eq!(
            "".parse::<SecurityCodeSelector>().ok(),
            Some(SecurityCodeSelector::Random)
        );
        assert_eq!(
            "2031".parse::<YearSelector>().ok(),
            Some(YearSelector::Fixed("2031".to_string()))
        );
    }
}
