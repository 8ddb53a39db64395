//! The country rule table.
//!
//! `PHONE_RULES` is the single source of truth for dialing codes, accepted
//! national-number lengths, placeholder examples, and display grouping. The
//! validator and formatter only ever consult rule fields, so supporting a new
//! country means adding one entry to `COUNTRY_RULES` and one `CountryKey`
//! variant; no validation logic changes.

use crate::error::PhoneError;
use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A supported phone-numbering region.
///
/// The wire form is the two-letter uppercase key used by the admin console
/// (`"IN"`, `"SG"`, `"MY"`); parsing is case-insensitive and trims whitespace.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryKey {
    /// India (+91)
    In,
    /// Singapore (+65)
    Sg,
    /// Malaysia (+60)
    My,
}

impl CountryKey {
    /// Every supported country, in rule-table order.
    pub const ALL: [CountryKey; 3] = [CountryKey::In, CountryKey::Sg, CountryKey::My];

    /// The two-letter uppercase key.
    pub const fn as_str(self) -> &'static str {
        match self {
            CountryKey::In => "IN",
            CountryKey::Sg => "SG",
            CountryKey::My => "MY",
        }
    }

    /// The rule record for this country.
    pub fn rule(self) -> &'static CountryRule {
        // Seeded for every variant in COUNTRY_RULES; verified by tests.
        PHONE_RULES
            .get(&self)
            .copied()
            .expect("every CountryKey has a rule entry")
    }
}

impl fmt::Display for CountryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryKey {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(CountryKey::In),
            "SG" => Ok(CountryKey::Sg),
            "MY" => Ok(CountryKey::My),
            _ => Err(PhoneError::UnknownCountry {
                key: s.trim().to_string(),
                supported: supported_countries(),
            }),
        }
    }
}

/// Immutable per-country configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRule {
    /// Country key this rule belongs to.
    pub key: CountryKey,

    /// International dialing prefix, digits only, no leading plus.
    pub country_code: &'static str,

    /// Display label.
    pub country_name: &'static str,

    /// Accepted digit counts for the national number (after the dialing code).
    pub national_lengths: &'static [usize],

    /// Sample input shown as a form placeholder.
    pub example: &'static str,

    /// Digit grouping applied by the formatter. Empty means the national
    /// number renders as a single run.
    pub display_groups: &'static [usize],
}

impl CountryRule {
    /// Whether `len` is an accepted national-number length.
    pub fn accepts_length(&self, len: usize) -> bool {
        self.national_lengths.contains(&len)
    }

    /// Human-readable form of the accepted lengths, e.g. `"8"` or `"10 or 11"`.
    pub fn lengths_label(&self) -> String {
        self.national_lengths
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

static COUNTRY_RULES: [CountryRule; 3] = [
    CountryRule {
        key: CountryKey::In,
        country_code: "91",
        country_name: "India",
        national_lengths: &[10],
        example: "+91 98765 43210",
        display_groups: &[5, 5],
    },
    CountryRule {
        key: CountryKey::Sg,
        country_code: "65",
        country_name: "Singapore",
        national_lengths: &[8],
        example: "+65 91234567",
        display_groups: &[],
    },
    CountryRule {
        key: CountryKey::My,
        country_code: "60",
        country_name: "Malaysia",
        national_lengths: &[10, 11],
        example: "+60 1234567890",
        display_groups: &[],
    },
];

/// Process-wide constant rule table, keyed by country.
pub static PHONE_RULES: Lazy<BTreeMap<CountryKey, &'static CountryRule>> =
    Lazy::new(|| COUNTRY_RULES.iter().map(|rule| (rule.key, rule)).collect());

/// Comma-separated list of supported country keys, for error messages.
pub fn supported_countries() -> String {
    CountryKey::ALL
        .iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
