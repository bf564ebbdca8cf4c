//! # tiership-core: Tiered Flat-Rate Shipping
//!
//! Pure pricing logic for a quantity-tiered shipping method: a handful of
//! flat-rate boxes, each holding up to N items, plus a per-item overage for
//! orders too large for the biggest box.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront / tiership-quote                      │
//! │    settings form ──► ShippingSettings       cart ──► quantity, country │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │               ★ tiership-core (THIS CRATE) ★                            │
//! │                                                                         │
//! │   ┌───────────┐  ┌─────────────┐  ┌───────────┐  ┌───────────┐         │
//! │   │ settings  │─►│ eligibility │─►│  pricing  │─►│   quote   │         │
//! │   │ validate  │  │ is_allowed  │  │   price   │  │ RateQuote │         │
//! │   └───────────┘  └─────────────┘  └───────────┘  └───────────┘         │
//! │                                                                         │
//! │   NO I/O • NO GLOBALS • PURE FUNCTIONS                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Tier, AvailabilityMode, Destination, RateQuote
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Configuration and validation errors
//! - [`validation`] - Schedule rules and settings field parsers
//! - [`pricing`] - Tier lookup and overage proration
//! - [`eligibility`] - Destination country checks
//! - [`settings`] - Persisted settings and their defaults
//! - [`quote`] - Settings → ready-to-quote shipping method
//!
//! ## Example Usage
//!
//! ```rust
//! use tiership_core::{Destination, ShippingMethod, ShippingSettings};
//!
//! let settings = ShippingSettings {
//!     enabled: true,
//!     ..ShippingSettings::default()
//! };
//! let method = ShippingMethod::from_settings(&settings).unwrap();
//!
//! let quote = method.quote(&Destination::new("US"), 20).unwrap();
//! assert_eq!(quote.cost.to_string(), "$23.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod eligibility;
pub mod error;
pub mod money;
pub mod pricing;
pub mod quote;
pub mod settings;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use eligibility::{is_allowed, EligibilityConfig};
pub use error::{ConfigResult, ConfigurationError, ValidationError};
pub use money::Money;
pub use pricing::{price, PricingConfig};
pub use quote::{total_quantity, ShippingMethod, METHOD_ID};
pub use settings::{ShippingSettings, TierSetting};
pub use types::*;
