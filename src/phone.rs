//! NormalizedPhone value object.

use crate::error::PhoneResult;
use crate::format;
use crate::rules::{CountryKey, PHONE_RULES};
use crate::validate::validate_phone;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number that passed validation.
///
/// Holds the canonical form: dialing code followed by the national number,
/// digits only, no separators, no leading plus. Construction goes through the
/// validator, so an invalid number is unrepresentable as this type.
///
/// # Example
///
/// ```
/// use worklah_phone::NormalizedPhone;
///
/// let phone = NormalizedPhone::new("91234567", "SG").unwrap();
/// assert_eq!(phone.as_str(), "6591234567");
/// assert_eq!(phone.national_number(), "91234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPhone {
    digits: String,
    country: CountryKey,
}

impl NormalizedPhone {
    /// Validate raw user input for `country` and wrap the canonical digits.
    ///
    /// # Errors
    ///
    /// Returns the same [`crate::PhoneError`] values as [`validate_phone`].
    pub fn new(raw: &str, country: &str) -> PhoneResult<Self> {
        validate_phone(raw, country)
    }

    /// Construct from digits the validator has already checked.
    pub(crate) fn from_parts(digits: String, country: CountryKey) -> Self {
        Self { digits, country }
    }

    /// Recover a phone from its canonical form by matching the dialing code
    /// and national-number length against the rule table.
    ///
    /// Returns `None` when `canonical` is not the canonical form of any
    /// supported country. Dialing codes in the table are prefix-distinct, so
    /// at most one country can match.
    pub fn from_canonical(canonical: &str) -> Option<Self> {
        if canonical.is_empty() || !canonical.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        for (key, rule) in PHONE_RULES.iter() {
            if let Some(national) = canonical.strip_prefix(rule.country_code) {
                if rule.accepts_length(national.len()) {
                    return Some(Self::from_parts(canonical.to_string(), *key));
                }
            }
        }

        None
    }

    /// The canonical digit string.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.digits
    }

    /// The country this number validated against.
    pub fn country(&self) -> CountryKey {
        self.country
    }

    /// The dialing code portion.
    pub fn country_code(&self) -> &str {
        self.country.rule().country_code
    }

    /// The national-number portion (after the dialing code).
    pub fn national_number(&self) -> &str {
        &self.digits[self.country_code().len()..]
    }

    /// Cosmetic rendering, e.g. `+91 72750 61192`.
    pub fn display_format(&self) -> String {
        format::format_canonical(&self.digits, self.country)
    }
}

// Serde support - serialize as the bare canonical string
impl Serialize for NormalizedPhone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.digits.serialize(serializer)
    }
}

// Serde support - deserialize from string, re-validating against the table
impl<'de> Deserialize<'de> for NormalizedPhone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NormalizedPhone::from_canonical(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("not a canonical phone number: {:?}", s))
        })
    }
}

// Display support
impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}
