//! # Domain Types
//!
//! Value types shared by pricing, eligibility and quoting.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │      Tier       │   │ AvailabilityMode │   │   Destination   │      │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────  │      │
//! │  │  max_quantity   │   │  All             │   │  country?       │      │
//! │  │  cost (Money)   │   │  Specific        │   │                 │      │
//! │  └─────────────────┘   └──────────────────┘   └─────────────────┘      │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │    RateQuote    │  What the storefront lists at checkout            │
//! │  │  id, label,cost │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tier
// =============================================================================

/// A pricing bracket: orders of up to `max_quantity` items cost `cost`.
///
/// Flat-rate boxes hold a predictable number of garments, so each tier is
/// one box size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    /// Largest total quantity this tier covers.
    pub max_quantity: u32,

    /// Flat cost for the whole order.
    pub cost: Money,
}

impl Tier {
    #[inline]
    pub const fn new(max_quantity: u32, cost: Money) -> Self {
        Tier { max_quantity, cost }
    }

    /// Checks whether an order of `quantity` items fits in this tier.
    #[inline]
    pub const fn covers(&self, quantity: u32) -> bool {
        quantity <= self.max_quantity
    }
}

// =============================================================================
// Availability
// =============================================================================

/// Which destinations the shipping method is offered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityMode {
    /// Every country the store ships to.
    #[default]
    All,
    /// Only the countries in the allow-list.
    Specific,
}

impl AvailabilityMode {
    /// Option values as stored by the settings form.
    pub const OPTIONS: [&'static str; 2] = ["all", "specific"];

    /// Parses the stored option value (`"all"` / `"specific"`).
    pub fn from_option(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(AvailabilityMode::All),
            "specific" => Some(AvailabilityMode::Specific),
            _ => None,
        }
    }

    pub const fn as_option(&self) -> &'static str {
        match self {
            AvailabilityMode::All => "all",
            AvailabilityMode::Specific => "specific",
        }
    }
}

// =============================================================================
// Destination
// =============================================================================

/// Where the package is going, as far as checkout knows.
///
/// The country is absent until the customer has entered an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub country: Option<String>,
}

impl Destination {
    pub fn new(country: impl Into<String>) -> Self {
        Destination {
            country: Some(country.into()),
        }
    }

    /// A destination with no country yet.
    pub fn unknown() -> Self {
        Destination { country: None }
    }

    /// The country code, treating an empty string as unknown.
    pub fn country_code(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.is_empty())
    }
}

// =============================================================================
// Rate Quote
// =============================================================================

/// A shipping rate offered to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateQuote {
    /// Shipping method id.
    pub id: String,

    /// Label shown in the shipping options list.
    pub label: String,

    pub cost: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
