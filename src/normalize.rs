//! Lenient input normalization.
//!
//! Normalization is deliberately forgiving so that live-typing form fields can
//! call it on every keystroke; strictness lives in the validator alone. Do not
//! add length or charset checks here.

use crate::rules::{CountryKey, CountryRule};

/// Strip every non-digit character from `input`.
///
/// Total function: any string in, a (possibly empty) digit string out.
///
/// # Example
///
/// ```
/// use worklah_phone::digits_only;
///
/// assert_eq!(digits_only("+65 9123-4567"), "6591234567");
/// assert_eq!(digits_only("no digits here"), "");
/// ```
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Repair the country-code prefix of a digits-only string.
///
/// - Input already starting with the country's dialing code passes through
///   unchanged.
/// - Input without a leading zero gets the dialing code prepended.
/// - Leading zeros (domestic trunk prefix) are all stripped before the
///   dialing code is prepended.
///
/// An unrecognized `country` returns `digits` unchanged; callers that need the
/// unknown-country case reported go through [`crate::validate_phone`], which
/// checks the key first.
///
/// # Example
///
/// ```
/// use worklah_phone::normalize_for_country;
///
/// assert_eq!(normalize_for_country("6591234567", "SG"), "6591234567");
/// assert_eq!(normalize_for_country("91234567", "SG"), "6591234567");
/// assert_eq!(normalize_for_country("091234567", "SG"), "6591234567");
/// ```
pub fn normalize_for_country(digits: &str, country: &str) -> String {
    match country.parse::<CountryKey>() {
        Ok(key) => normalize_digits(digits, key.rule()),
        Err(_) => digits.to_string(),
    }
}

/// Prefix repair against a resolved rule. Never checks length.
pub(crate) fn normalize_digits(digits: &str, rule: &CountryRule) -> String {
    if digits.starts_with(rule.country_code) {
        return digits.to_string();
    }

    if !digits.starts_with('0') {
        return format!("{}{}", rule.country_code, digits);
    }

    // Trunk-prefix convention: drop every leading zero, then add the code.
    let national = digits.trim_start_matches('0');
    format!("{}{}", rule.country_code, national)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_strips_formatting() {
        assert_eq!(digits_only("+91 72750-61192"), "917275061192");
        assert_eq!(digits_only("(65) 9123 4567"), "6591234567");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn test_digits_only_ignores_non_ascii() {
        // Unicode digits and emoji are not phone digits.
        assert_eq!(digits_only("٣٤٥ 123"), "123");
        assert_eq!(digits_only("📞 8123"), "8123");
    }

    #[test]
    fn test_digits_only_idempotent() {
        for input in ["+65 9123-4567", "", "00123", "☎ call me", "91234567"] {
            let once = digits_only(input);
            assert_eq!(digits_only(&once), once);
        }
    }

    #[test]
    fn test_normalize_passes_through_prefixed_input() {
        assert_eq!(normalize_for_country("917275061192", "IN"), "917275061192");
        assert_eq!(normalize_for_country("601234567890", "MY"), "601234567890");
    }

    #[test]
    fn test_normalize_prepends_code() {
        assert_eq!(normalize_for_country("7275061192", "IN"), "917275061192");
        assert_eq!(normalize_for_country("91234567", "SG"), "6591234567");
    }

    #[test]
    fn test_normalize_strips_trunk_prefix() {
        assert_eq!(normalize_for_country("091234567", "SG"), "6591234567");
        assert_eq!(normalize_for_country("0091234567", "SG"), "6591234567");
    }

    #[test]
    fn test_normalize_idempotent_on_normalized_input() {
        for (digits, country) in [("917275061192", "IN"), ("6591234567", "SG")] {
            let once = normalize_for_country(digits, country);
            assert_eq!(once, digits);
            assert_eq!(normalize_for_country(&once, country), once);
        }
    }

    #[test]
    fn test_normalize_unknown_country_is_passthrough() {
        assert_eq!(normalize_for_country("91234567", "XX"), "91234567");
        assert_eq!(normalize_for_country("091234567", ""), "091234567");
    }

    #[test]
    fn test_normalize_does_not_check_length() {
        // Too short for Singapore, but normalization stays lenient.
        assert_eq!(normalize_for_country("123", "SG"), "65123");
    }
}
