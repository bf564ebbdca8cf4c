//! # Rate Quotes
//!
//! Glues eligibility and pricing into the quote a storefront lists at
//! checkout.
//!
//! ## Quote Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ShippingSettings ──from_settings()──► ShippingMethod (validated once)  │
//! │                                                                         │
//! │  quote(destination, quantity)                                          │
//! │     │                                                                   │
//! │     ├── disabled?            ──► None                                  │
//! │     ├── destination not allowed ──► None (option simply not listed)   │
//! │     └── price(quantity)      ──► Some(RateQuote { id, label, cost })   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::eligibility::{is_allowed, EligibilityConfig};
use crate::error::ConfigResult;
use crate::pricing::{price, PricingConfig};
use crate::settings::ShippingSettings;
use crate::types::{Destination, RateQuote};
use crate::validation::validate_title;

/// Shipping method id reported in every quote.
pub const METHOD_ID: &str = "multi_tiered_shipping";

/// A ready-to-quote shipping method built from validated settings.
///
/// Immutable; share it across requests freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingMethod {
    enabled: bool,
    label: String,
    pricing: PricingConfig,
    eligibility: EligibilityConfig,
}

impl ShippingMethod {
    /// Validates `settings` and derives the pricing and eligibility configs.
    pub fn from_settings(settings: &ShippingSettings) -> ConfigResult<Self> {
        validate_title(&settings.title)?;

        Ok(ShippingMethod {
            enabled: settings.enabled,
            label: settings.title.trim().to_string(),
            pricing: settings.pricing_config()?,
            eligibility: settings.eligibility_config(),
        })
    }

    /// Builds a method directly from configs, bypassing settings text.
    pub fn new(
        label: impl Into<String>,
        pricing: PricingConfig,
        eligibility: EligibilityConfig,
    ) -> Self {
        ShippingMethod {
            enabled: true,
            label: label.into(),
            pricing,
            eligibility,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    pub fn eligibility(&self) -> &EligibilityConfig {
        &self.eligibility
    }

    /// Quotes a rate for `total_quantity` items going to `destination`.
    ///
    /// Returns `None` when the method is disabled or not offered for the
    /// destination; the storefront then leaves it out of the list.
    pub fn quote(&self, destination: &Destination, total_quantity: u32) -> Option<RateQuote> {
        if !self.enabled {
            debug!("Shipping method disabled, no quote");
            return None;
        }

        if !is_allowed(&self.eligibility, destination) {
            debug!(
                country = destination.country_code().unwrap_or("<unknown>"),
                "Destination not eligible, no quote"
            );
            return None;
        }

        let cost = price(&self.pricing, total_quantity);
        debug!(quantity = total_quantity, cost = %cost, "Quoted shipping rate");

        Some(RateQuote {
            id: METHOD_ID.to_string(),
            label: self.label.clone(),
            cost,
        })
    }

    /// Quotes a rate for a cart given its per-line quantities.
    pub fn quote_lines(
        &self,
        destination: &Destination,
        line_quantities: &[u32],
    ) -> Option<RateQuote> {
        self.quote(destination, total_quantity(line_quantities))
    }
}

/// Sums per-line cart quantities, saturating at `u32::MAX`.
///
/// ## Example
/// ```rust
/// use tiership_core::quote::total_quantity;
///
/// assert_eq!(total_quantity(&[3, 1, 2]), 6);
/// assert_eq!(total_quantity(&[]), 0);
/// ```
pub fn total_quantity(line_quantities: &[u32]) -> u32 {
    line_quantities
        .iter()
        .fold(0u32, |total, qty| total.saturating_add(*qty))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::money::Money;
    use crate::types::{AvailabilityMode, Tier};

    fn enabled_settings() -> ShippingSettings {
        ShippingSettings {
            enabled: true,
            ..ShippingSettings::default()
        }
    }

    #[test]
    fn test_quote_uses_settings_label_and_method_id() {
        let method = ShippingMethod::from_settings(&enabled_settings()).unwrap();
        let quote = method.quote(&Destination::new("US"), 16).unwrap();

        assert_eq!(quote.id, METHOD_ID);
        assert_eq!(quote.label, "USPS Flat Rates");
        assert_eq!(quote.cost, Money::from_cents(1902));
    }

    #[test]
    fn test_disabled_method_never_quotes() {
        let method = ShippingMethod::from_settings(&ShippingSettings::default()).unwrap();
        assert!(!method.is_enabled());
        assert_eq!(method.quote(&Destination::new("US"), 1), None);
    }

    #[test]
    fn test_ineligible_destination_gets_no_quote() {
        let settings = ShippingSettings {
            availability: AvailabilityMode::Specific,
            countries: vec!["US".to_string()],
            ..enabled_settings()
        };
        let method = ShippingMethod::from_settings(&settings).unwrap();

        assert_eq!(method.quote(&Destination::new("CA"), 3), None);
        assert_eq!(method.quote(&Destination::unknown(), 3), None);
        assert_eq!(
            method.quote(&Destination::new("US"), 3).map(|q| q.cost),
            Some(Money::from_cents(1265))
        );
    }

    #[test]
    fn test_quote_lines_sums_quantities() {
        let method = ShippingMethod::from_settings(&enabled_settings()).unwrap();
        let quote = method
            .quote_lines(&Destination::unknown(), &[10, 5, 5])
            .unwrap();
        assert_eq!(quote.cost, Money::from_cents(2350));
    }

    #[test]
    fn test_from_settings_rejects_invalid_schedule() {
        let mut settings = enabled_settings();
        settings.tiers.clear();
        assert_eq!(
            ShippingMethod::from_settings(&settings),
            Err(ConfigurationError::NoTiers)
        );
    }

    #[test]
    fn test_new_is_enabled() {
        let pricing =
            PricingConfig::new(vec![Tier::new(1, Money::from_cents(300))], Money::zero()).unwrap();
        let method = ShippingMethod::new("Flat", pricing, EligibilityConfig::all());
        let quote = method.quote(&Destination::unknown(), 4).unwrap();
        assert_eq!(quote.label, "Flat");
        assert_eq!(quote.cost, Money::from_cents(300));
    }

    #[test]
    fn test_total_quantity_saturates() {
        assert_eq!(total_quantity(&[u32::MAX, 1]), u32::MAX);
    }

    #[test]
    fn test_method_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShippingMethod>();
    }
}
