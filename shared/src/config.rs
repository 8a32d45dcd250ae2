//! Wallet configuration model.
//!
//! Every field carries a serde default so a partial (or empty) YAML file is
//! still a valid configuration. Reading and writing the file is the
//! frontend's job; this module only describes and validates the settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::amount_entry::AmountEntry;
use crate::balance_adjuster::{BalanceAdjuster, DEFAULT_INITIAL_NOTE_INDEX};
use crate::denominations::{DenominationError, Denominations, DEFAULT_DENOMINATIONS};
use crate::gesture::{SwipeClassifier, DEFAULT_SWIPE_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid denominations: {0}")]
    Denominations(#[from] DenominationError),
    #[error("setting `{name}` must be a finite, non-negative number (got {value})")]
    InvalidNumber { name: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Address handed to both screens and passed through on navigation
    pub public_address: String,
    pub currency_symbol: String,
    pub denominations: Vec<u64>,
    pub initial_note_index: usize,
    /// Vertical drag distance a swipe must exceed, in points
    pub swipe_threshold: f32,
    /// How far the note card moves during the swipe animation, in points
    pub animation_offset: f32,
    /// Duration of each half of the swipe animation
    pub animation_duration_ms: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            public_address: "0x0000000000000000000000000000000000000000".to_string(),
            currency_symbol: "₹".to_string(),
            denominations: DEFAULT_DENOMINATIONS.to_vec(),
            initial_note_index: DEFAULT_INITIAL_NOTE_INDEX,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            animation_offset: 50.0,
            animation_duration_ms: 100,
        }
    }
}

impl WalletConfig {
    /// Check every setting; returns the validated note list
    pub fn validate(&self) -> Result<Denominations, ConfigError> {
        let denominations = Denominations::new(self.denominations.clone())?;
        denominations.check_index(self.initial_note_index)?;
        check_number("swipe_threshold", self.swipe_threshold)?;
        check_number("animation_offset", self.animation_offset)?;
        Ok(denominations)
    }

    pub fn balance_adjuster(&self) -> Result<BalanceAdjuster, ConfigError> {
        let denominations = self.validate()?;
        Ok(BalanceAdjuster::new(
            denominations,
            self.public_address.clone(),
            self.currency_symbol.clone(),
            self.initial_note_index,
        )?)
    }

    pub fn amount_entry(&self) -> AmountEntry {
        AmountEntry::new(self.public_address.clone())
    }

    pub fn swipe_classifier(&self) -> SwipeClassifier {
        SwipeClassifier::new(self.swipe_threshold)
    }
}

fn check_number(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidNumber { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WalletConfig::default();
        let notes = config.validate().unwrap();
        assert_eq!(notes.as_slice(), &DEFAULT_DENOMINATIONS);

        let adjuster = config.balance_adjuster().unwrap();
        assert_eq!(adjuster.selected_note(&adjuster.initial_state()), 5);
        assert_eq!(adjuster.currency_symbol(), "₹");
        assert_eq!(config.swipe_classifier().threshold(), 20.0);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "public_address: \"0xfeed\"\ninitial_note_index: 0\n";
        let config: WalletConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.public_address, "0xfeed");
        assert_eq!(config.initial_note_index, 0);
        assert_eq!(config.denominations, DEFAULT_DENOMINATIONS.to_vec());
        assert_eq!(config.animation_duration_ms, 100);
        assert_eq!(config.amount_entry().public_address(), "0xfeed");
    }

    #[test]
    fn test_invalid_initial_index() {
        let config = WalletConfig {
            initial_note_index: 12,
            ..WalletConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Denominations(DenominationError::IndexOutOfRange { index: 12, len: 9 }))
        );
    }

    #[test]
    fn test_invalid_denominations() {
        let config = WalletConfig {
            denominations: vec![10, 5],
            initial_note_index: 0,
            ..WalletConfig::default()
        };
        assert!(matches!(
            config.balance_adjuster(),
            Err(ConfigError::Denominations(DenominationError::NotAscending { index: 1 }))
        ));
    }

    #[test]
    fn test_invalid_numbers() {
        let config = WalletConfig {
            swipe_threshold: -1.0,
            ..WalletConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNumber { name: "swipe_threshold", .. })
        ));

        let config = WalletConfig {
            animation_offset: f32::INFINITY,
            ..WalletConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNumber { name: "animation_offset", .. })
        ));
    }
}
