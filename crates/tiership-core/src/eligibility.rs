//! # Eligibility
//!
//! Decides whether the shipping method is offered for a destination.
//!
//! ```text
//! mode = All       ──► offered everywhere (even with no country yet)
//! mode = Specific  ──► country unknown?      ──► not offered
//!                  ──► country in allow-list ──► offered
//! ```
//!
//! Membership is an exact string match. Settings loading stores codes
//! uppercased, so hosts should pass ISO codes such as `"US"`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{AvailabilityMode, Destination};

/// Availability mode plus the country allow-list.
///
/// `allowed_countries` only matters in [`AvailabilityMode::Specific`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityConfig {
    pub mode: AvailabilityMode,
    #[serde(default)]
    pub allowed_countries: BTreeSet<String>,
}

impl EligibilityConfig {
    /// Offered everywhere.
    pub fn all() -> Self {
        EligibilityConfig::default()
    }

    /// Offered only for the given countries.
    pub fn specific<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EligibilityConfig {
            mode: AvailabilityMode::Specific,
            allowed_countries: countries.into_iter().map(Into::into).collect(),
        }
    }

    /// Shorthand for [`is_allowed`].
    pub fn allows(&self, destination: &Destination) -> bool {
        is_allowed(self, destination)
    }
}

/// Checks whether the method may be offered for `destination`.
///
/// ## Example
/// ```rust
/// use tiership_core::eligibility::{is_allowed, EligibilityConfig};
/// use tiership_core::types::Destination;
///
/// let us_only = EligibilityConfig::specific(["US"]);
/// assert!(is_allowed(&us_only, &Destination::new("US")));
/// assert!(!is_allowed(&us_only, &Destination::new("CA")));
/// assert!(!is_allowed(&us_only, &Destination::unknown()));
/// ```
pub fn is_allowed(config: &EligibilityConfig, destination: &Destination) -> bool {
    match config.mode {
        AvailabilityMode::All => true,
        AvailabilityMode::Specific => match destination.country_code() {
            Some(country) => config.allowed_countries.contains(country),
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_allows_everything() {
        let config = EligibilityConfig::all();
        assert!(is_allowed(&config, &Destination::new("US")));
        assert!(is_allowed(&config, &Destination::new("ZZ")));
        assert!(is_allowed(&config, &Destination::new("")));
        assert!(is_allowed(&config, &Destination::unknown()));
    }

    #[test]
    fn test_all_ignores_allow_list() {
        let config = EligibilityConfig {
            mode: AvailabilityMode::All,
            allowed_countries: BTreeSet::from(["US".to_string()]),
        };
        assert!(is_allowed(&config, &Destination::new("CA")));
    }

    #[test]
    fn test_specific_requires_known_country() {
        let config = EligibilityConfig::specific(["US"]);
        assert!(!is_allowed(&config, &Destination::unknown()));
        assert!(!is_allowed(&config, &Destination::new("")));
    }

    #[test]
    fn test_specific_membership() {
        let config = EligibilityConfig::specific(["US", "CA"]);
        assert!(is_allowed(&config, &Destination::new("US")));
        assert!(is_allowed(&config, &Destination::new("CA")));
        assert!(!is_allowed(&config, &Destination::new("MX")));
    }

    #[test]
    fn test_specific_is_exact_match() {
        let config = EligibilityConfig::specific(["US"]);
        assert!(!is_allowed(&config, &Destination::new("us")));
        assert!(!is_allowed(&config, &Destination::new("USA")));
        assert!(!is_allowed(&config, &Destination::new(" US")));
    }

    #[test]
    fn test_specific_with_empty_list_allows_nothing() {
        let config = EligibilityConfig::specific(Vec::<String>::new());
        assert!(!config.allows(&Destination::new("US")));
    }

    #[test]
    fn test_us_only_rejects_canada() {
        let config = EligibilityConfig::specific(["US"]);
        assert!(!config.allows(&Destination::new("CA")));
    }
}
