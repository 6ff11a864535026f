//! Format checks for Indian identity numbers (Aadhar and PAN)

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// 12 digits, never starting with 0 or 1, either grouped 4-4-4 or unbroken.
// Both patterns tolerate one trailing newline and nothing else after the match.
static AADHAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[2-9][0-9]{3}\s[0-9]{4}\s[0-9]{4}\n?$|^[2-9][0-9]{11}\n?$")
        .expect("aadhar pattern is valid")
});

static PAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]\n?$").expect("pan pattern is valid")
});

/// Result of a shape-only identity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdValidation {
    pub valid_format: bool,
}

impl From<bool> for IdValidation {
    fn from(valid_format: bool) -> Self {
        Self { valid_format }
    }
}

/// Returns true when `number` looks like an Aadhar number.
///
/// Only the shape is checked. There is no checksum or registry lookup.
pub fn validate_aadhar(number: &str) -> bool {
    AADHAR_PATTERN.is_match(number)
}

/// Returns true when `pan` looks like a PAN, ignoring case.
pub fn validate_pan(pan: &str) -> bool {
    PAN_PATTERN.is_match(&pan.to_uppercase())
}
