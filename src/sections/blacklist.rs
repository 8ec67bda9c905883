//! Blacklist section - checks if password is in common password list.

use crate::blacklist::Blacklist;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const COMMON_PASSWORD_FEEDBACK: &str = "This is a commonly used password and easily guessable";

/// Checks if the password is in the blacklist of common passwords.
///
/// # Returns
/// - `Some(feedback)` if password is blacklisted
/// - `None` if password is not in blacklist
pub fn blacklist_section(password: &SecretString, blacklist: &Blacklist) -> SectionResult {
    if blacklist.contains(password.expose_secret()) {
        return Some(COMMON_PASSWORD_FEEDBACK);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_blacklist_section_common_password() {
        let pwd = SecretString::new("Password".to_string().into());
        let result = blacklist_section(&pwd, &Blacklist::builtin());
        assert_eq!(result, Some(COMMON_PASSWORD_FEEDBACK));
    }

    #[test]
    fn test_blacklist_section_strong_password() {
        let pwd = SecretString::new("CorrectHorseBatteryStaple!123".to_string().into());
        let result = blacklist_section(&pwd, &Blacklist::builtin());
        assert_eq!(result, None);
    }

    #[test]
    fn test_blacklist_section_uses_extended_list() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "sunshine").expect("Failed to write");
        let blacklist = Blacklist::from_path(temp_file.path()).expect("should load");

        let pwd = SecretString::new("SunShine".to_string().into());
        assert!(blacklist_section(&pwd, &blacklist).is_some());
        assert!(blacklist_section(&pwd, &Blacklist::builtin()).is_none());
    }
}
