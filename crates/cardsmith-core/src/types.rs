use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::network::classify;

/// Issuer network matched from a card number's prefix and length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Network {
    Electron,
    Maestro,
    Dankort,
    #[serde(rename = "INTERPAYMENT")]
    InterPayment,
    #[serde(rename = "UNIONPAY")]
    UnionPay,
    Visa,
    Mastercard,
    Amex,
    Diners,
    Discover,
    Jcb,
    Unknown,
}

impl Network {
    pub const ALL: [Network; 12] = [
        Network::Electron,
        Network::Maestro,
        Network::Dankort,
        Network::InterPayment,
        Network::UnionPay,
        Network::Visa,
        Network::Mastercard,
        Network::Amex,
        Network::Diners,
        Network::Discover,
        Network::Jcb,
        Network::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Network::Electron => "ELECTRON",
            Network::Maestro => "MAESTRO",
            Network::Dankort => "DANKORT",
            Network::InterPayment => "INTERPAYMENT",
            Network::UnionPay => "UNIONPAY",
            Network::Visa => "VISA",
            Network::Mastercard => "MASTERCARD",
            Network::Amex => "AMEX",
            Network::Diners => "DINERS",
            Network::Discover => "DISCOVER",
            Network::Jcb => "JCB",
            Network::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.trim().to_ascii_uppercase();
        Network::ALL
            .into_iter()
            .find(|network| network.label() == upper)
            .ok_or_else(|| Error::UnknownLabel {
                kind: "network",
                value: value.to_string(),
            })
    }
}

/// Final status assigned to a checked line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeStatus {
    Approved,
    Declined,
    Incomplete,
    Malformed,
}

impl OutcomeStatus {
    pub const ALL: [OutcomeStatus; 4] = [
        OutcomeStatus::Approved,
        OutcomeStatus::Declined,
        OutcomeStatus::Incomplete,
        OutcomeStatus::Malformed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OutcomeStatus::Approved => "APPROVED",
            OutcomeStatus::Declined => "DECLINED",
            OutcomeStatus::Incomplete => "INCOMPLETE",
            OutcomeStatus::Malformed => "MALFORMED",
        }
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Country tokens accepted by the identity generator.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Country {
    #[default]
    US,
    UK,
    ID,
    DE,
    BR,
    FR,
    JP,
    AU,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::US,
        Country::UK,
        Country::ID,
        Country::DE,
        Country::BR,
        Country::FR,
        Country::JP,
        Country::AU,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Country::US => "US",
            Country::UK => "UK",
            Country::ID => "ID",
            Country::DE => "DE",
            Country::BR => "BR",
            Country::FR => "FR",
            Country::JP => "JP",
            Country::AU => "AU",
        }
    }

    /// Resolves a country token, falling back to the default for anything
    /// outside the configured set. Matching is exact: `jp` resolves to `US`.
    pub fn normalize(code: &str) -> Country {
        code.parse().unwrap_or_default()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|country| country.code() == value)
            .ok_or_else(|| Error::UnknownLabel {
                kind: "country",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A card line: number, expiry and security code plus the derived network.
///
/// Generated records always carry a checksum-valid number; parsed records
/// may not, which callers detect with [`crate::is_valid_checksum`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRecord {
    pub number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub security_code: String,
    pub network: Network,
}

impl CardRecord {
    /// Builds a record and classifies its number.
    pub fn new(
        number: impl Into<String>,
        expiry_month: impl Into<String>,
        expiry_year: impl Into<String>,
        security_code: impl Into<String>,
    ) -> Self {
        let number = number.into();
        let network = classify(&number);
        Self {
            number,
            expiry_month: expiry_month.into(),
            expiry_year: expiry_year.into(),
            security_code: security_code.into(),
            network,
        }
    }

    /// Placeholder record for a line that could not be parsed; the raw line
    /// is echoed in `number` and no classification is performed.
    pub fn unparsed(raw_line: impl Into<String>) -> Self {
        Self {
            number: raw_line.into(),
            expiry_month: String::new(),
            expiry_year: String::new(),
            security_code: String::new(),
            network: Network::Unknown,
        }
    }
}

/// Result of checking one input line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeRecord {
    #[serde(flatten)]
    pub card: CardRecord,
    pub status: OutcomeStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_label: Option<String>,
}

/// Synthetic personal record shaped after one country's conventions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityRecord {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub street_line: String,
    pub city: String,
    pub region_label: String,
    pub postal_code: String,
    pub country: Country,
    pub phone: String,
    pub email: String,
    /// ISO 8601 calendar date (`YYYY-MM-DD`).
    pub birth_date: String,
    pub national_id: String,
}
