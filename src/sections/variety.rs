//! Character variety sections - uppercase, lowercase, digits and symbols.
//!
//! Only ASCII letters count, while any Unicode decimal digit (`\d`)
//! satisfies the digit criterion. Only the eight symbols in
//! [`SPECIAL_CHARS`] satisfy the special-character criterion.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

/// Symbols accepted by the special-character criterion.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

// Unicode-aware: matches every character of general category Nd
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("Failed to compile digit pattern"));

fn require(password: &SecretString, criterion: Criterion, pred: impl Fn(char) -> bool) -> SectionResult {
    if password.expose_secret().chars().any(pred) {
        None
    } else {
        Some(criterion.feedback())
    }
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    require(password, Criterion::Uppercase, |c| c.is_ascii_uppercase())
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    require(password, Criterion::Lowercase, |c| c.is_ascii_lowercase())
}

pub fn digit_section(password: &SecretString) -> SectionResult {
    if DIGIT.is_match(password.expose_secret()) {
        None
    } else {
        Some(Criterion::Digits.feedback())
    }
}

pub fn special_section(password: &SecretString) -> SectionResult {
    require(password, Criterion::Special, |c| SPECIAL_CHARS.contains(c))
}
