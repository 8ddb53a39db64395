//! Error types for phone validation.
//!
//! Every failure is a value handed back to the caller; nothing in this crate
//! panics on caller input. Form code surfaces `Display` output directly to the
//! end user, so the messages are written for humans, not logs.

use thiserror::Error;

/// Ways a phone number can fail validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The supplied country key is not in the rule table.
    #[error("Unsupported country \"{key}\". Supported countries: {supported}")]
    UnknownCountry { key: String, supported: String },

    /// The input contains no digits at all.
    #[error("Phone number is required")]
    EmptyInput,

    /// The normalized digits do not begin with the expected dialing code.
    #[error("{country_name} numbers must start with country code {country_code} (e.g. {example})")]
    MissingCountryCode {
        country_name: String,
        country_code: String,
        example: String,
    },

    /// The national number has the wrong number of digits.
    #[error("{country_name} numbers need {expected} digits after the +{country_code} prefix, got {actual}")]
    WrongLength {
        country_name: String,
        country_code: String,
        expected: String,
        actual: usize,
    },

    /// Non-digit content survived normalization.
    #[error("Phone number may contain digits only")]
    NonDigitCharacters,
}

/// Convenience type alias for Results with PhoneError
pub type PhoneResult<T> = Result<T, PhoneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhoneError::EmptyInput;
        assert_eq!(err.to_string(), "Phone number is required");

        let err = PhoneError::UnknownCountry {
            key: "XX".to_string(),
            supported: "IN, SG, MY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported country \"XX\". Supported countries: IN, SG, MY"
        );

        let err = PhoneError::NonDigitCharacters;
        assert_eq!(err.to_string(), "Phone number may contain digits only");
    }

    #[test]
    fn test_wrong_length_message() {
        let err = PhoneError::WrongLength {
            country_name: "Malaysia".to_string(),
            country_code: "60".to_string(),
            expected: "10 or 11".to_string(),
            actual: 7,
        };
        assert!(err.to_string().contains("10 or 11"));
        assert!(err.to_string().contains("got 7"));
    }
}
