//! Cosmetic display formatting.
//!
//! Formatting never participates in validation decisions: anything that does
//! not match a rule's expected shape falls back to a generic `+<digits>`
//! rendering instead of erroring.

use crate::normalize::digits_only;
use crate::rules::{CountryKey, CountryRule};

/// Placeholder shown when the country key is unrecognized.
const GENERIC_PLACEHOLDER: &str = "Enter phone number";

/// Render a canonical digit string for display.
///
/// Grouping follows the country rule (India `+91 XXXXX XXXXX`, Singapore
/// `+65 XXXXXXXX`, Malaysia `+60 <national>`). Input that does not match the
/// country's expected shape, or an unrecognized country, renders as
/// `+<digits>`. Empty input (either argument) renders as the empty string.
///
/// # Example
///
/// ```
/// use worklah_phone::format_display;
///
/// assert_eq!(format_display("917275061192", "IN"), "+91 72750 61192");
/// assert_eq!(format_display("6591234567", "SG"), "+65 91234567");
/// assert_eq!(format_display("12345", "SG"), "+12345");
/// ```
pub fn format_display(normalized: &str, country: &str) -> String {
    if normalized.is_empty() || country.is_empty() {
        return String::new();
    }

    // Tolerate near-canonical input such as a stray leading plus.
    let digits = digits_only(normalized);
    if digits.is_empty() {
        return String::new();
    }

    match country.parse::<CountryKey>() {
        Ok(key) => format_for_rule(&digits, key.rule()),
        Err(_) => format!("+{digits}"),
    }
}

/// Render digits known to be canonical for `key`.
pub(crate) fn format_canonical(digits: &str, key: CountryKey) -> String {
    format_for_rule(digits, key.rule())
}

fn format_for_rule(digits: &str, rule: &CountryRule) -> String {
    let Some(national) = digits.strip_prefix(rule.country_code) else {
        return format!("+{digits}");
    };

    if !rule.accepts_length(national.len()) {
        return format!("+{digits}");
    }

    let mut out = format!("+{}", rule.country_code);

    if rule.display_groups.is_empty() {
        out.push(' ');
        out.push_str(national);
        return out;
    }

    let mut rest = national;
    for &width in rule.display_groups {
        if rest.is_empty() {
            break;
        }
        let (group, tail) = rest.split_at(width.min(rest.len()));
        out.push(' ');
        out.push_str(group);
        rest = tail;
    }
    if !rest.is_empty() {
        out.push(' ');
        out.push_str(rest);
    }

    out
}

/// Placeholder text for a phone input field.
///
/// Returns the country rule's example, or a generic prompt for an
/// unrecognized country key.
pub fn get_placeholder(country: &str) -> String {
    match country.parse::<CountryKey>() {
        Ok(key) => key.rule().example.to_string(),
        Err(_) => GENERIC_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_india_grouping() {
        assert_eq!(format_display("917275061192", "IN"), "+91 72750 61192");
    }

    #[test]
    fn test_singapore_single_run() {
        assert_eq!(format_display("6591234567", "SG"), "+65 91234567");
    }

    #[test]
    fn test_malaysia_ungrouped() {
        assert_eq!(format_display("601234567890", "MY"), "+60 1234567890");
        assert_eq!(format_display("6012345678901", "MY"), "+60 12345678901");
    }

    #[test]
    fn test_wrong_shape_falls_back_to_generic() {
        // Too short for Singapore.
        assert_eq!(format_display("659123", "SG"), "+659123");
        // Wrong dialing code for India.
        assert_eq!(format_display("6591234567", "IN"), "+6591234567");
    }

    #[test]
    fn test_unknown_country_falls_back_to_generic() {
        assert_eq!(format_display("6591234567", "XX"), "+6591234567");
    }

    #[test]
    fn test_empty_arguments_render_empty() {
        assert_eq!(format_display("", "SG"), "");
        assert_eq!(format_display("6591234567", ""), "");
        assert_eq!(format_display("+-()", "SG"), "");
    }

    #[test]
    fn test_tolerates_stray_plus() {
        assert_eq!(format_display("+6591234567", "SG"), "+65 91234567");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(get_placeholder("IN"), "+91 98765 43210");
        assert_eq!(get_placeholder("SG"), "+65 91234567");
        assert_eq!(get_placeholder("MY"), "+60 1234567890");
        assert_eq!(get_placeholder("XX"), "Enter phone number");
        assert_eq!(get_placeholder(""), "Enter phone number");
    }
}
