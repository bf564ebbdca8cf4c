//! # Shipping Settings
//!
//! The operator-editable settings record and its conversion into validated
//! pricing and eligibility configs.
//!
//! ## Settings Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Settings form / options table / settings.json                          │
//! │        │  (raw text: "5.95", "2", "yes", "US, CA")                      │
//! │        ▼                                                                │
//! │  ShippingSettings  ──validate()──► ConfigurationError (shown to admin)  │
//! │        │                                                                │
//! │        ├── pricing_config()     ──► PricingConfig                       │
//! │        └── eligibility_config() ──► EligibilityConfig                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tier quantities and amounts are kept as the text the operator typed, so
//! a bad value can be shown back in the form with an error next to it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::eligibility::EligibilityConfig;
use crate::error::{ConfigResult, ValidationError};
use crate::pricing::PricingConfig;
use crate::types::{AvailabilityMode, Tier};
use crate::validation::{
    normalize_country_code, parse_amount, parse_quantity, validate_title, ValidationResult,
};

// =============================================================================
// Option Keys
// =============================================================================

/// Option keys as persisted by the storefront settings API.
pub mod keys {
    pub const ENABLED: &str = "enabled";
    pub const TITLE: &str = "usertitle";
    pub const AVAILABILITY: &str = "availability";
    pub const COUNTRIES: &str = "countries";
    pub const PER_ITEM_COST: &str = "cfd_additional_cost";

    /// `cfd_tier{n}_qty`, 1-based.
    pub fn tier_quantity(n: usize) -> String {
        format!("cfd_tier{n}_qty")
    }

    /// `cfd_tier{n}_amt`, 1-based.
    pub fn tier_amount(n: usize) -> String {
        format!("cfd_tier{n}_amt")
    }
}

/// Number of tiers on the settings form (small, medium, large, largest box).
pub const FORM_TIER_COUNT: usize = 4;

/// Label used when the operator hasn't set one.
pub const DEFAULT_TITLE: &str = "USPS Flat Rates";

// =============================================================================
// Settings Types
// =============================================================================

/// One tier row as typed into the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierSetting {
    /// Maximum item count for this box.
    pub quantity: String,
    /// Flat-rate cost of this box.
    pub amount: String,
}

impl TierSetting {
    pub fn new(quantity: impl Into<String>, amount: impl Into<String>) -> Self {
        TierSetting {
            quantity: quantity.into(),
            amount: amount.into(),
        }
    }
}

/// Persisted settings of the multi-tiered shipping method.
///
/// ## Defaults
/// USPS Priority Mail flat-rate boxes:
/// - small (≤2 items) $5.95, medium (≤4) $12.65
/// - large (≤10) $15.90, largest (≤15) $17.90
/// - $1.12 per item beyond 15
/// - disabled, offered for all countries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingSettings {
    pub enabled: bool,

    /// Label shown to customers.
    pub title: String,

    pub availability: AvailabilityMode,

    /// Allow-list used when `availability` is `specific`.
    pub countries: Vec<String>,

    /// Overage cost per item beyond the largest tier.
    pub per_item_cost: String,

    /// Tier rows in ascending quantity order.
    pub tiers: Vec<TierSetting>,
}

impl Default for ShippingSettings {
    fn default() -> Self {
        ShippingSettings {
            enabled: false,
            title: DEFAULT_TITLE.to_string(),
            availability: AvailabilityMode::All,
            countries: Vec::new(),
            per_item_cost: "1.12".to_string(),
            tiers: vec![
                TierSetting::new("2", "5.95"),
                TierSetting::new("4", "12.65"),
                TierSetting::new("10", "15.90"),
                TierSetting::new("15", "17.90"),
            ],
        }
    }
}

impl ShippingSettings {
    /// Reads settings from the storefront's raw option map.
    ///
    /// Missing keys keep their defaults. `countries` is a comma-separated
    /// list. Only the option values themselves are checked here; tier text
    /// is checked by [`ShippingSettings::validate`].
    pub fn from_options(options: &HashMap<String, String>) -> ValidationResult<Self> {
        let mut settings = ShippingSettings::default();

        if let Some(value) = options.get(keys::ENABLED) {
            settings.enabled = parse_checkbox(keys::ENABLED, value)?;
        }

        if let Some(value) = options.get(keys::TITLE) {
            settings.title = value.trim().to_string();
        }

        if let Some(value) = options.get(keys::AVAILABILITY) {
            settings.availability =
                AvailabilityMode::from_option(value).ok_or_else(|| ValidationError::NotAllowed {
                    field: keys::AVAILABILITY.to_string(),
                    allowed: AvailabilityMode::OPTIONS.iter().map(|s| s.to_string()).collect(),
                })?;
        }

        if let Some(value) = options.get(keys::COUNTRIES) {
            settings.countries = value.split(',').filter_map(normalize_country_code).collect();
        }

        if let Some(value) = options.get(keys::PER_ITEM_COST) {
            settings.per_item_cost = value.clone();
        }

        for (index, tier) in settings.tiers.iter_mut().enumerate() {
            let n = index + 1;
            if let Some(value) = options.get(&keys::tier_quantity(n)) {
                tier.quantity = value.clone();
            }
            if let Some(value) = options.get(&keys::tier_amount(n)) {
                tier.amount = value.clone();
            }
        }

        Ok(settings)
    }

    /// Parses the tier rows and overage cost into a validated schedule.
    pub fn pricing_config(&self) -> ConfigResult<PricingConfig> {
        let mut tiers = Vec::with_capacity(self.tiers.len());
        for (index, row) in self.tiers.iter().enumerate() {
            let n = index + 1;
            let max_quantity = parse_quantity(&keys::tier_quantity(n), &row.quantity)?;
            let cost = parse_amount(&keys::tier_amount(n), &row.amount)?;
            tiers.push(Tier::new(max_quantity, cost));
        }

        let overage = parse_amount(keys::PER_ITEM_COST, &self.per_item_cost)?;

        PricingConfig::new(tiers, overage)
    }

    /// Builds the eligibility config with normalised country codes.
    pub fn eligibility_config(&self) -> EligibilityConfig {
        EligibilityConfig {
            mode: self.availability,
            allowed_countries: self
                .countries
                .iter()
                .filter_map(|c| normalize_country_code(c))
                .collect(),
        }
    }

    /// Full check for settings-save time.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_title(&self.title)?;
        self.pricing_config()?;
        Ok(())
    }
}

/// Reads a checkbox option, stored as `"yes"` / `"no"`.
///
/// `true`/`false` and `1`/`0` are accepted too; an empty value is unchecked.
pub fn parse_checkbox(field: &str, value: &str) -> ValidationResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" | "" => Ok(false),
        _ => Err(ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: vec!["yes".to_string(), "no".to_string()],
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::money::Money;
    use crate::pricing::price;
    use crate::types::Destination;

    fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_price_the_flat_rate_boxes() {
        let config = ShippingSettings::default().pricing_config().unwrap();

        assert_eq!(price(&config, 1).cents(), 595);
        assert_eq!(price(&config, 4).cents(), 1265);
        assert_eq!(price(&config, 10).cents(), 1590);
        assert_eq!(price(&config, 16).cents(), 1902);
        assert_eq!(price(&config, 20).cents(), 2350);
    }

    #[test]
    fn test_defaults_are_valid_but_disabled() {
        let settings = ShippingSettings::default();
        assert!(settings.validate().is_ok());
        assert!(!settings.enabled);
        assert_eq!(settings.title, DEFAULT_TITLE);
        assert_eq!(settings.tiers.len(), FORM_TIER_COUNT);
    }

    #[test]
    fn test_from_options_overrides() {
        let settings = ShippingSettings::from_options(&options(&[
            ("enabled", "yes"),
            ("usertitle", " Boxes "),
            ("availability", "specific"),
            ("countries", "us, ca,,mx "),
            ("cfd_additional_cost", "2.00"),
            ("cfd_tier4_qty", "20"),
            ("cfd_tier4_amt", "21.50"),
        ]))
        .unwrap();

        assert!(settings.enabled);
        assert_eq!(settings.title, "Boxes");
        assert_eq!(settings.availability, AvailabilityMode::Specific);
        assert_eq!(settings.countries, vec!["US", "CA", "MX"]);

        let config = settings.pricing_config().unwrap();
        assert_eq!(config.largest_tier(), &Tier::new(20, Money::from_cents(2150)));
        assert_eq!(config.overage_rate_per_unit(), Money::from_cents(200));
        assert_eq!(config.tiers()[0], Tier::new(2, Money::from_cents(595)));
    }

    #[test]
    fn test_from_options_rejects_unknown_values() {
        assert!(matches!(
            ShippingSettings::from_options(&options(&[("availability", "some")])),
            Err(ValidationError::NotAllowed { .. })
        ));
        assert!(matches!(
            ShippingSettings::from_options(&options(&[("enabled", "maybe")])),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_parse_checkbox() {
        assert_eq!(parse_checkbox("enabled", "yes"), Ok(true));
        assert_eq!(parse_checkbox("enabled", " TRUE "), Ok(true));
        assert_eq!(parse_checkbox("enabled", "no"), Ok(false));
        assert_eq!(parse_checkbox("enabled", ""), Ok(false));
        assert!(parse_checkbox("enabled", "on").is_err());
    }

    #[test]
    fn test_from_empty_options_is_default() {
        let settings = ShippingSettings::from_options(&HashMap::new()).unwrap();
        assert_eq!(settings, ShippingSettings::default());
    }

    #[test]
    fn test_pricing_config_reports_bad_field() {
        let mut settings = ShippingSettings::default();
        settings.tiers[1].amount = "12,65".to_string();

        match settings.pricing_config() {
            Err(ConfigurationError::Setting(ValidationError::InvalidFormat { field, .. })) => {
                assert_eq!(field, "cfd_tier2_amt");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_pricing_config_rejects_out_of_order_rows() {
        let mut settings = ShippingSettings::default();
        settings.tiers[2].quantity = "3".to_string();

        assert_eq!(
            settings.pricing_config(),
            Err(ConfigurationError::NotAscending {
                tier: 3,
                previous: 4,
                current: 3
            })
        );
    }

    #[test]
    fn test_pricing_config_rejects_negative_per_item_cost() {
        let mut settings = ShippingSettings::default();
        settings.per_item_cost = "-1.12".to_string();

        assert!(matches!(
            settings.validate(),
            Err(ConfigurationError::NegativeOverageRate { .. })
        ));
    }

    #[test]
    fn test_validate_requires_title() {
        let mut settings = ShippingSettings::default();
        settings.title = String::new();

        assert!(matches!(
            settings.validate(),
            Err(ConfigurationError::Setting(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_eligibility_config_normalises_countries() {
        let settings = ShippingSettings {
            availability: AvailabilityMode::Specific,
            countries: vec!["us".to_string(), " ".to_string()],
            ..ShippingSettings::default()
        };

        let config = settings.eligibility_config();
        assert_eq!(config.allowed_countries.len(), 1);
        assert!(config.allows(&Destination::new("US")));
        assert!(!config.allows(&Destination::new("CA")));
    }

    #[test]
    fn test_json_partial_settings_use_defaults() {
        let settings: ShippingSettings =
            serde_json::from_str(r#"{"enabled":true,"availability":"specific","countries":["US"]}"#)
                .unwrap();

        assert!(settings.enabled);
        assert_eq!(settings.per_item_cost, "1.12");
        assert_eq!(settings.tiers.len(), FORM_TIER_COUNT);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(ShippingSettings::default()).unwrap();
        assert_eq!(json["perItemCost"], "1.12");
        assert_eq!(json["availability"], "all");
    }
}
