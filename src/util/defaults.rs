use serde::{Deserialize, Serialize};

use crate::domain::DutyType;

use super::assets::{self, AssetError};

const DEFAULTS_ASSET: &str = "/assets/defaults.json";

/// Start values for a fresh form, shipped as `assets/defaults.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    /// VAT rate in percent.
    pub vat_rate: f64,
    /// Marketplace referral fee in percent of the net price.
    pub referral_fee_rate: f64,
    pub duty_type: DutyType,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            vat_rate: 19.0,
            referral_fee_rate: 15.0,
            duty_type: DutyType::Percent,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefaultsError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("invalid defaults file: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_defaults(json: &str) -> Result<CalculatorDefaults, DefaultsError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_defaults() -> Result<CalculatorDefaults, DefaultsError> {
    let text = assets::load_text(DEFAULTS_ASSET)?;
    parse_defaults(&text)
}

/// Embedded defaults, or the built-in ones if the asset is missing or broken.
pub fn defaults_or_builtin() -> CalculatorDefaults {
    match load_defaults() {
        Ok(defaults) => {
            tracing::debug!(?defaults, "loaded calculator defaults");
            defaults
        }
        Err(err) => {
            tracing::warn!(error = %err, "falling back to built-in calculator defaults");
            CalculatorDefaults::default()
        }
    }
}
