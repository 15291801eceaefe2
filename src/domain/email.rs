//! Email address format check.

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part of dot-atoms plus a dotted domain of alphanumeric labels.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Whether `email` is a well-formed address.
///
/// - Exactly one '@' with a non-empty local part
/// - Domain has at least two labels separated by '.'
/// - Labels do not start or end with '-'
///
/// ```
/// use contact_rest_api::domain::email::is_valid_email;
///
/// assert!(is_valid_email("ana@x.com"));
/// assert!(!is_valid_email("ana@x"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
