//! # Validation Module
//!
//! Checks run when shipping settings are loaded or saved.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Field parsing                                                │
//! │  ├── parse_quantity / parse_amount / validate_title                    │
//! │  └── ValidationError naming the settings key                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Schedule rules (THIS MODULE)                                 │
//! │  ├── validate_tiers: non-empty, positive, strictly ascending, ≥ $0     │
//! │  └── validate_overage_rate: ≥ $0                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  PricingConfig built → pricing never re-checks                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiership_core::money::Money;
//! use tiership_core::types::Tier;
//! use tiership_core::validation::validate_tiers;
//!
//! let tiers = [
//!     Tier::new(2, Money::from_cents(595)),
//!     Tier::new(4, Money::from_cents(1265)),
//! ];
//! assert!(validate_tiers(&tiers).is_ok());
//! assert!(validate_tiers(&[]).is_err());
//! ```

use crate::error::{ConfigResult, ConfigurationError, ValidationError};
use crate::money::Money;
use crate::types::Tier;

/// Result type for field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest label accepted for the checkout list.
pub const MAX_TITLE_LEN: usize = 100;

// =============================================================================
// Schedule Validators
// =============================================================================

/// Validates a tier schedule.
///
/// ## Rules
/// - At least one tier
/// - Every `max_quantity` is positive
/// - `max_quantity` strictly ascending by position
/// - No negative cost (a $0 tier is allowed: free shipping for small orders)
///
/// Errors name the 1-based tier position.
pub fn validate_tiers(tiers: &[Tier]) -> ConfigResult<()> {
    if tiers.is_empty() {
        return Err(ConfigurationError::NoTiers);
    }

    let mut previous: Option<u32> = None;
    for (index, tier) in tiers.iter().enumerate() {
        let position = index + 1;

        if tier.max_quantity == 0 {
            return Err(ConfigurationError::NonPositiveQuantity { tier: position });
        }

        if let Some(previous) = previous {
            if tier.max_quantity <= previous {
                return Err(ConfigurationError::NotAscending {
                    tier: position,
                    previous,
                    current: tier.max_quantity,
                });
            }
        }

        if tier.cost.is_negative() {
            return Err(ConfigurationError::NegativeCost {
                tier: position,
                cost: tier.cost,
            });
        }

        previous = Some(tier.max_quantity);
    }

    Ok(())
}

/// Validates the per-item overage rate (must not be negative).
pub fn validate_overage_rate(rate: Money) -> ConfigResult<()> {
    if rate.is_negative() {
        return Err(ConfigurationError::NegativeOverageRate { rate });
    }

    Ok(())
}

// =============================================================================
// Field Parsers
// =============================================================================

/// Parses a tier quantity typed into the settings form.
///
/// ## Rules
/// - Must not be empty
/// - Whole number of items, greater than zero
pub fn parse_quantity(field: &str, text: &str) -> ValidationResult<u32> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if text.starts_with('-') {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    let quantity: u32 = text.parse().map_err(|_| {
        if text.chars().all(|c| c.is_ascii_digit()) {
            ValidationError::OutOfRange {
                field: field.to_string(),
                min: 1,
                max: u32::MAX as i64,
            }
        } else {
            ValidationError::InvalidFormat {
                field: field.to_string(),
                reason: "expected a whole number of items".to_string(),
            }
        }
    })?;

    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(quantity)
}

/// Parses an amount typed into the settings form.
///
/// Sign is not checked here; schedule validation reports negatives.
///
/// ## Example
/// ```rust
/// use tiership_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("cfd_tier1_amt", "5.95").unwrap().cents(), 595);
/// assert!(parse_amount("cfd_tier1_amt", "5,95").is_err());
/// ```
pub fn parse_amount(field: &str, text: &str) -> ValidationResult<Money> {
    if text.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse::<Money>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: e.to_string(),
        })
}

/// Validates the label shown to customers.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_TITLE_LEN` characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "usertitle".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "usertitle".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Normalises a country code for the allow-list: trimmed and uppercased.
///
/// Returns `None` for blank entries.
pub fn normalize_country_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_ascii_uppercase())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(qty: u32, cents: i64) -> Tier {
        Tier::new(qty, Money::from_cents(cents))
    }

    #[test]
    fn test_validate_tiers_accepts_default_schedule() {
        let tiers = [tier(2, 595), tier(4, 1265), tier(10, 1590), tier(15, 1790)];
        assert!(validate_tiers(&tiers).is_ok());
    }

    #[test]
    fn test_validate_tiers_rejects_empty() {
        assert_eq!(validate_tiers(&[]), Err(ConfigurationError::NoTiers));
    }

    #[test]
    fn test_validate_tiers_rejects_zero_quantity() {
        let tiers = [tier(0, 595), tier(4, 1265)];
        assert_eq!(
            validate_tiers(&tiers),
            Err(ConfigurationError::NonPositiveQuantity { tier: 1 })
        );
    }

    #[test]
    fn test_validate_tiers_rejects_descending_and_equal() {
        let descending = [tier(2, 595), tier(10, 1590), tier(4, 1265)];
        assert_eq!(
            validate_tiers(&descending),
            Err(ConfigurationError::NotAscending {
                tier: 3,
                previous: 10,
                current: 4
            })
        );

        let equal = [tier(2, 595), tier(2, 1265)];
        assert!(matches!(
            validate_tiers(&equal),
            Err(ConfigurationError::NotAscending { tier: 2, .. })
        ));
    }

    #[test]
    fn test_validate_tiers_cost_sign() {
        assert!(validate_tiers(&[tier(2, 0), tier(4, 1265)]).is_ok());
        assert_eq!(
            validate_tiers(&[tier(2, 595), tier(4, -1)]),
            Err(ConfigurationError::NegativeCost {
                tier: 2,
                cost: Money::from_cents(-1)
            })
        );
    }

    #[test]
    fn test_validate_overage_rate() {
        assert!(validate_overage_rate(Money::zero()).is_ok());
        assert!(validate_overage_rate(Money::from_cents(112)).is_ok());
        assert!(validate_overage_rate(Money::from_cents(-112)).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("cfd_tier1_qty", "2"), Ok(2));
        assert_eq!(parse_quantity("cfd_tier1_qty", " 15 "), Ok(15));

        assert!(matches!(
            parse_quantity("cfd_tier1_qty", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_quantity("cfd_tier1_qty", "0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_quantity("cfd_tier1_qty", "-3"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_quantity("cfd_tier1_qty", "2.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("cfd_tier1_qty", "99999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("x", "17.90"), Ok(Money::from_cents(1790)));
        assert_eq!(parse_amount("x", "-1"), Ok(Money::from_cents(-100)));
        assert!(matches!(
            parse_amount("x", " "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_amount("x", "1.125"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("USPS Flat Rates").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn test_normalize_country_code() {
        assert_eq!(normalize_country_code(" us "), Some("US".to_string()));
        assert_eq!(normalize_country_code(""), None);
    }
}
