//! # Tier Pricing
//!
//! Maps a cart's total item quantity to a shipping cost.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tiers: ≤2 → $5.95   ≤4 → $12.65   ≤10 → $15.90   ≤15 → $17.90         │
//! │  Overage: $1.12 per item                                               │
//! │                                                                         │
//! │  qty = 4   ──► first tier with max ≥ 4 is "≤4"      ──► $12.65         │
//! │                                                                         │
//! │  qty = 20  ──► no tier fits                                             │
//! │            ──► largest tier + (20 - 15) × $1.12     ──► $23.50         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The schedule is validated once in [`PricingConfig::new`]; [`price`] trusts
//! it and never fails.
//!
//! ## Example
//! ```rust
//! use tiership_core::money::Money;
//! use tiership_core::pricing::{price, PricingConfig};
//! use tiership_core::types::Tier;
//!
//! let config = PricingConfig::new(
//!     vec![
//!         Tier::new(2, Money::from_cents(595)),
//!         Tier::new(15, Money::from_cents(1790)),
//!     ],
//!     Money::from_cents(112),
//! )
//! .unwrap();
//!
//! assert_eq!(price(&config, 1).cents(), 595);
//! assert_eq!(price(&config, 16).cents(), 1902);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigResult, ConfigurationError};
use crate::money::Money;
use crate::types::Tier;
use crate::validation::{validate_overage_rate, validate_tiers};

// =============================================================================
// Pricing Config
// =============================================================================

/// A validated tier schedule plus the per-item overage rate.
///
/// ## Invariants
/// - `tiers` is non-empty
/// - `max_quantity` values are positive and strictly ascending
/// - no cost and no overage rate is negative
///
/// Fields are private so the invariants hold for every value of this type,
/// including ones deserialized from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PricingConfigData", rename_all = "camelCase")]
pub struct PricingConfig {
    tiers: Vec<Tier>,
    overage_rate_per_unit: Money,
}

/// Unchecked wire form of [`PricingConfig`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PricingConfigData {
    tiers: Vec<Tier>,
    overage_rate_per_unit: Money,
}

impl TryFrom<PricingConfigData> for PricingConfig {
    type Error = ConfigurationError;

    fn try_from(data: PricingConfigData) -> Result<Self, Self::Error> {
        PricingConfig::new(data.tiers, data.overage_rate_per_unit)
    }
}

impl PricingConfig {
    /// Builds a schedule, rejecting anything that would mis-price.
    ///
    /// A larger tier that is cheaper than a smaller one is accepted but
    /// logged, since it makes the cost drop as the cart grows.
    pub fn new(tiers: Vec<Tier>, overage_rate_per_unit: Money) -> ConfigResult<Self> {
        let checked = validate_tiers(&tiers)
            .and_then(|_| validate_overage_rate(overage_rate_per_unit));
        if let Err(err) = checked {
            warn!(error = %err, "Rejected shipping tier schedule");
            return Err(err);
        }

        for pair in tiers.windows(2) {
            if pair[1].cost < pair[0].cost {
                warn!(
                    smaller_max = pair[0].max_quantity,
                    smaller_cost = %pair[0].cost,
                    larger_max = pair[1].max_quantity,
                    larger_cost = %pair[1].cost,
                    "Larger shipping tier is cheaper than a smaller one"
                );
            }
        }

        Ok(PricingConfig {
            tiers,
            overage_rate_per_unit,
        })
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn overage_rate_per_unit(&self) -> Money {
        self.overage_rate_per_unit
    }

    /// The tier with the greatest `max_quantity`, i.e. the last one.
    pub fn largest_tier(&self) -> &Tier {
        // non-empty by construction
        &self.tiers[self.tiers.len() - 1]
    }

    /// Finds the first tier that covers `quantity`.
    ///
    /// `None` means the cart is larger than every tier and must be prorated.
    /// A matching tier with a $0 cost is still `Some`.
    pub fn find_tier(&self, quantity: u32) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.covers(quantity))
    }

    /// Shorthand for [`price`].
    pub fn price(&self, total_quantity: u32) -> Money {
        price(self, total_quantity)
    }
}

// =============================================================================
// Tier Pricer
// =============================================================================

/// Computes the shipping cost for `total_quantity` items.
///
/// ## Rules
/// 1. First tier whose `max_quantity >= total_quantity` wins
/// 2. Otherwise: largest tier's cost + excess items × overage rate
///
/// An empty cart (`0`) is charged the first tier's flat cost; hosts that
/// want free shipping for empty carts should not ask for a price.
pub fn price(config: &PricingConfig, total_quantity: u32) -> Money {
    if let Some(tier) = config.find_tier(total_quantity) {
        return tier.cost;
    }

    let largest = config.largest_tier();
    let excess = total_quantity - largest.max_quantity;
    let cost = largest.cost + config.overage_rate_per_unit.multiply_quantity(excess);

    debug!(
        quantity = total_quantity,
        largest_max = largest.max_quantity,
        excess,
        cost = %cost,
        "Prorated shipping beyond largest tier"
    );

    cost
}

// =============================================================================
// Unit Tests
// =============================================================================
