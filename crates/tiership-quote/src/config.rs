//! # Settings Loading
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIERSHIP_*`)
//! 2. Settings file (`--settings settings.json`)
//! 3. Defaults (`ShippingSettings::default()`)
//!
//! ## Environment Variables
//! - `TIERSHIP_ENABLED`: `yes`/`no` (also `true`/`false`, `1`/`0`; empty is `no`)
//! - `TIERSHIP_TITLE`: label shown to customers
//! - `TIERSHIP_AVAILABILITY`: `all` or `specific`
//! - `TIERSHIP_COUNTRIES`: comma-separated ISO codes, e.g. `US,CA`
//! - `TIERSHIP_PER_ITEM_COST`: overage cost per item, e.g. `1.12`

use std::path::Path;

use tiership_core::settings::parse_checkbox;
use tiership_core::validation::normalize_country_code;
use tiership_core::{AvailabilityMode, ShippingSettings};
use tracing::{debug, info};

use crate::error::{QuoteError, QuoteResult};

pub const ENV_ENABLED: &str = "TIERSHIP_ENABLED";
pub const ENV_TITLE: &str = "TIERSHIP_TITLE";
pub const ENV_AVAILABILITY: &str = "TIERSHIP_AVAILABILITY";
pub const ENV_COUNTRIES: &str = "TIERSHIP_COUNTRIES";
pub const ENV_PER_ITEM_COST: &str = "TIERSHIP_PER_ITEM_COST";

/// Environment override errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Loads settings from `path` (or defaults) and applies `TIERSHIP_*`
/// overrides looked up through `var`.
pub fn load_settings<F>(path: Option<&Path>, var: F) -> QuoteResult<ShippingSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = match path {
        Some(path) => read_settings_file(path)?,
        None => {
            debug!("No settings file given, using defaults");
            ShippingSettings::default()
        }
    };

    Ok(apply_env_overrides(settings, var)?)
}

/// Reads a JSON settings file. Missing fields keep their defaults.
pub fn read_settings_file(path: &Path) -> QuoteResult<ShippingSettings> {
    let text = std::fs::read_to_string(path).map_err(|source| QuoteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let settings = serde_json::from_str(&text).map_err(|source| QuoteError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "Loaded shipping settings");
    Ok(settings)
}

/// Applies `TIERSHIP_*` overrides looked up through `var`.
pub fn apply_env_overrides<F>(
    mut settings: ShippingSettings,
    var: F,
) -> Result<ShippingSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = var(ENV_ENABLED) {
        settings.enabled = parse_checkbox(ENV_ENABLED, &value)
            .map_err(|_| ConfigError::InvalidValue(ENV_ENABLED.to_string()))?;
    }

    if let Some(value) = var(ENV_TITLE) {
        settings.title = value;
    }

    if let Some(value) = var(ENV_AVAILABILITY) {
        settings.availability = AvailabilityMode::from_option(&value)
            .ok_or_else(|| ConfigError::InvalidValue(ENV_AVAILABILITY.to_string()))?;
    }

    if let Some(value) = var(ENV_COUNTRIES) {
        settings.countries = value.split(',').filter_map(normalize_country_code).collect();
    }

    if let Some(value) = var(ENV_PER_ITEM_COST) {
        settings.per_item_cost = value;
    }

    Ok(settings)
}
