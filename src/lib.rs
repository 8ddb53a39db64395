//! WorkLah phone rules - validation and normalization for marketplace phone numbers.
//!
//! This library is the single source of truth for phone-number handling across
//! the WorkLah admin console and backend: both sides link the same rules so a
//! number accepted in a form is accepted by the API, and vice versa.
//!
//! # Architecture
//!
//! - **rules**: the country rule table (dialing codes, lengths, examples)
//! - **normalize**: lenient repair of free-form input into canonical digits
//! - **validate**: the strict, authoritative acceptance check
//! - **phone**: the `NormalizedPhone` value object carried by valid results
//! - **format**: cosmetic display rendering and input placeholders
//! - **error**: the failure taxonomy, returned as values and never thrown
//!
//! Normalization is deliberately forgiving (live-typing fields call it on
//! every keystroke) while validation is strict; keep that split when extending
//! the crate. Every operation is a pure function over the immutable rule
//! table, so concurrent callers need no coordination.
//!
//! # Example
//!
//! ```
//! use worklah_phone::{format_display, validate_phone};
//!
//! let phone = validate_phone("012345678", "SG").unwrap();
//! assert_eq!(phone.as_str(), "6512345678");
//! assert_eq!(format_display(phone.as_str(), "SG"), "+65 12345678");
//! ```

pub mod error;
pub mod format;
pub mod normalize;
pub mod phone;
pub mod rules;
pub mod validate;

pub use error::{PhoneError, PhoneResult};
pub use format::{format_display, get_placeholder};
pub use normalize::{digits_only, normalize_for_country};
pub use phone::NormalizedPhone;
pub use rules::{supported_countries, CountryKey, CountryRule, PHONE_RULES};
pub use validate::{validate_for_country, validate_phone, ValidationOutcome};
