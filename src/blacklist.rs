//! Blacklist management module
//!
//! Holds the common-password denylist used by the evaluator. The built-in
//! list is always present; a file can extend it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional file of extra blacklisted passwords.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

/// Passwords that are always rejected, regardless of configuration.
pub const COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "123456",
    "qwerty",
    "admin",
    "welcome",
    "password123",
    "abc123",
    "letmein",
    "monkey",
    "1234567890",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of passwords that collapse the score to 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    extra: HashSet<String>,
}

impl Blacklist {
    /// The built-in list of ten common passwords.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Built-in list extended with one entry per non-empty line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let extra: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", extra.len(), path);

        Ok(Self { extra })
    }

    /// Reads the extension file from `PWD_BLACKLIST_PATH`.
    ///
    /// Falls back to [`Blacklist::builtin`] when the variable is unset.
    pub fn from_env() -> Result<Self, BlacklistError> {
        match blacklist_path_from_env() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Returns `true` if the password, lowercased, is blacklisted.
    pub fn contains(&self, password: &str) -> bool {
        let folded = password.to_lowercase();
        COMMON_PASSWORDS.contains(&folded.as_str()) || self.extra.contains(&folded)
    }

    /// Number of distinct entries, built-in ones included.
    pub fn len(&self) -> usize {
        COMMON_PASSWORDS.len()
            + self
                .extra
                .iter()
                .filter(|e| !COMMON_PASSWORDS.contains(&e.as_str()))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Returns the blacklist extension path from the environment, if set.
///
/// An empty value counts as unset.
pub fn blacklist_path_from_env() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
