//! # Error Types
//!
//! Domain-specific error types for tiership-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tiership-core errors (this file)                                      │
//! │  ├── ConfigurationError - Tier schedule / settings rejected            │
//! │  └── ValidationError    - A single field failed to parse or check      │
//! │                                                                         │
//! │  tiership-quote errors (separate crate)                                │
//! │  └── QuoteError         - File, JSON and argument failures             │
//! │                                                                         │
//! │  Flow: ValidationError → ConfigurationError → QuoteError → stderr      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing and eligibility never fail. Every error in this module is raised
//! while a configuration is being built, i.e. when settings are loaded or
//! saved, never while a cart is being priced.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Configuration Error
// =============================================================================

/// A pricing or eligibility configuration was rejected.
///
/// ## When This Occurs
/// - Settings are saved by an operator (surface the message next to the form)
/// - Settings are loaded at startup (refuse to offer the method)
///
/// Tier positions in messages are 1-based, matching the settings labels.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The tier list is empty.
    #[error("At least one shipping tier is required")]
    NoTiers,

    /// A tier's maximum quantity is zero.
    #[error("Tier {tier}: maximum quantity must be positive")]
    NonPositiveQuantity { tier: usize },

    /// Maximum quantities are not strictly ascending.
    ///
    /// ## Example
    /// ```text
    /// Tier 1: qty 2
    /// Tier 2: qty 10
    /// Tier 3: qty 4   ← NotAscending { tier: 3, previous: 10, current: 4 }
    /// ```
    #[error("Tier {tier}: maximum quantity {current} must be greater than {previous}")]
    NotAscending {
        tier: usize,
        previous: u32,
        current: u32,
    },

    /// A tier's flat cost is negative.
    #[error("Tier {tier}: cost {cost} must not be negative")]
    NegativeCost { tier: usize, cost: Money },

    /// The per-item overage rate is negative.
    #[error("Per item cost {rate} must not be negative")]
    NegativeOverageRate { rate: Money },

    /// A settings field could not be parsed or failed a field check.
    #[error("Invalid setting: {0}")]
    Setting(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input errors.
///
/// Settings arrive as operator-typed text, so most of these come from
/// parsing quantities, amounts and option values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. "12,65" for an amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConfigurationError.
pub type ConfigResult<T> = Result<T, ConfigurationError>;

// =============================================================================
// Unit Tests
// =============================================================================
