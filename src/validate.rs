//! The validator — sole authority on whether a phone number is acceptable.
//!
//! Checks run in a fixed order because later steps assume earlier ones hold:
//! country lookup, digit stripping, prefix repair, prefix check, length check,
//! then a defensive charset re-check. Every rejection is a [`PhoneError`]
//! value; no input can make these functions panic.

use crate::error::{PhoneError, PhoneResult};
use crate::normalize::{digits_only, normalize_digits};
use crate::phone::NormalizedPhone;
use crate::rules::CountryKey;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Validate raw phone text against the rules for `country`.
///
/// Accepts any input format: spaces, dashes, a leading plus, a domestic
/// trunk zero. On success the returned [`NormalizedPhone`] carries the
/// canonical digits (dialing code + national number, no separators).
///
/// # Errors
///
/// Returns a [`PhoneError`] describing the first rule that failed; see the
/// crate-level docs for the full taxonomy.
///
/// # Example
///
/// ```
/// use worklah_phone::validate_phone;
///
/// let phone = validate_phone("91 7275061192", "IN").unwrap();
/// assert_eq!(phone.as_str(), "917275061192");
///
/// assert!(validate_phone("6591234", "SG").is_err());
/// ```
pub fn validate_phone(phone: &str, country: &str) -> PhoneResult<NormalizedPhone> {
    let result = country
        .parse::<CountryKey>()
        .and_then(|key| validate_for_country(phone, key));

    if let Err(err) = &result {
        trace!(country, "phone validation rejected input: {err}");
    }

    result
}

/// Validate against an already-resolved country key.
pub fn validate_for_country(phone: &str, key: CountryKey) -> PhoneResult<NormalizedPhone> {
    let rule = key.rule();

    let digits = digits_only(phone);
    if digits.is_empty() {
        return Err(PhoneError::EmptyInput);
    }

    let normalized = normalize_digits(&digits, rule);

    if !normalized.starts_with(rule.country_code) {
        return Err(PhoneError::MissingCountryCode {
            country_name: rule.country_name.to_string(),
            country_code: rule.country_code.to_string(),
            example: rule.example.to_string(),
        });
    }

    let national = &normalized[rule.country_code.len()..];

    if !rule.accepts_length(national.len()) {
        return Err(PhoneError::WrongLength {
            country_name: rule.country_name.to_string(),
            country_code: rule.country_code.to_string(),
            expected: rule.lengths_label(),
            actual: national.len(),
        });
    }

    // Unreachable after digits_only; guards future normalization changes.
    if !national.chars().all(|c| c.is_ascii_digit()) {
        return Err(PhoneError::NonDigitCharacters);
    }

    Ok(NormalizedPhone::from_parts(normalized, key))
}

/// The `{valid, normalized?, message?}` shape the REST layer and the admin
/// console exchange.
///
/// Form code branches on `valid`, blocks submission while it is false, and
/// surfaces `message` as an inline field error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationOutcome {
    /// Whether the input passed every check.
    pub valid: bool,

    /// Canonical digits, present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,

    /// Human-readable failure reason, present only on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationOutcome {
    /// Run [`validate_phone`] and fold the result into the wire shape.
    pub fn check(phone: &str, country: &str) -> Self {
        validate_phone(phone, country).into()
    }
}

impl From<PhoneResult<NormalizedPhone>> for ValidationOutcome {
    fn from(result: PhoneResult<NormalizedPhone>) -> Self {
        match result {
            Ok(phone) => ValidationOutcome {
                valid: true,
                normalized: Some(phone.into_inner()),
                message: None,
            },
            Err(err) => ValidationOutcome {
                valid: false,
                normalized: None,
                message: Some(err.to_string()),
            },
        }
    }
}
