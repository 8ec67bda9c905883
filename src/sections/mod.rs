//! Password evaluation sections
//!
//! Each section checks one criterion of password strength.

mod blacklist;
mod length;
mod variety;

pub use blacklist::{COMMON_PASSWORD_FEEDBACK, blacklist_section};
pub use length::{MIN_LENGTH, length_section};
pub use variety::{
    SPECIAL_CHARS, digit_section, lowercase_section, special_section, uppercase_section,
};

/// Result type for section evaluation functions.
/// - `Some(feedback)` - Section failed, with the suggestion to show
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;
