use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cardsmith_check::{OutcomeBands, SimulatorConfig};
use cardsmith_check::simulator::{DEFAULT_ISSUER_PREFIX, DEFAULT_REGION_LABEL};
use cardsmith_core::Country;
use cardsmith_generate::{DEFAULT_LENGTH, DEFAULT_PATTERN};

use super::atomic::write_bytes_atomic;
use super::WorkspaceResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub pattern: String,
    pub length: usize,
    pub quantity: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            length: DEFAULT_LENGTH,
            quantity: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerSettings {
    pub bands: OutcomeBands,
    pub delay_ms: u64,
    pub issuer_prefix: String,
    pub region_label: String,
}

impl Default for CheckerSettings {
    fn default() -> Self {
        Self {
            bands: OutcomeBands::default(),
            delay_ms: 400,
            issuer_prefix: DEFAULT_ISSUER_PREFIX.to_string(),
            region_label: DEFAULT_REGION_LABEL.to_string(),
        }
    }
}

impl CheckerSettings {
    pub fn simulator_config(&self, delay_override: Option<u64>) -> SimulatorConfig {
        SimulatorConfig {
            bands: self.bands,
            delay: Duration::from_millis(delay_override.unwrap_or(self.delay_ms)),
            issuer_prefix: self.issuer_prefix.clone(),
            region_label: self.region_label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentitySettings {
    pub country: Country,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            country: Country::US,
        }
    }
}

/// Contents of `cardsmith.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generator: GeneratorSettings,
    pub checker: CheckerSettings,
    pub identity: IdentitySettings,
}

/// Loads settings from `path`, falling back to defaults when it is absent.
pub fn load_settings(path: &Path) -> WorkspaceResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> WorkspaceResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_keep_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [checker]
            delay_ms = 0

            [checker.bands]
            approved_above = 0.8
            incomplete_above = 0.6
            "#,
        )
        .expect("parse settings");
        assert_eq!(settings.checker.delay_ms, 0);
        assert_eq!(settings.checker.bands.approved_above(), 0.8);
        assert_eq!(settings.checker.region_label, "USA");
        assert_eq!(settings.generator, GeneratorSettings::default());
        assert_eq!(settings.identity.country, Country::US);
    }

    #[test]
    fn invalid_bands_are_rejected() {
        let result: Result<Settings, _> = toml::from_str(
            r#"
            [checker.bands]
            approved_above = 0.3
            incomplete_above = 0.6
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let encoded = toml::to_string_pretty(&Settings::default()).expect("encode");
        let decoded: Settings = toml::from_str(&encoded).expect("decode");
        assert_eq!(decoded, Settings::default());
    }
}
