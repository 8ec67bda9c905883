//! Password strength meter and universal unit converter
//!
//! This library provides the logic behind two small tools: a password
//! strength checker with a matching generator, and a unit converter
//! covering general and industry-specific measurement categories.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Optional file of extra common passwords, read by
//!   [`Blacklist::from_env`]. The ten built-in entries are always active.
//!
//! # Example
//!
//! ```rust
//! use meterkit::{evaluate_password_strength, generate_password, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Str0ng!Pass".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! assert_eq!(evaluation.score.value(), 5);
//! assert_eq!(evaluation.strength(), PasswordStrength::Strong);
//!
//! let generated = generate_password(4);
//! assert_eq!(evaluate_password_strength(&generated).score.value(), 5);
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod generator;
mod sections;
mod session;
mod types;

pub mod convert;

// Public API
pub use blacklist::{BLACKLIST_PATH_ENV, Blacklist, BlacklistError, COMMON_PASSWORDS};
pub use evaluator::{evaluate_password_strength, evaluate_password_strength_with};
pub use generator::{DEFAULT_LENGTH, RandomSource, generate_password, generate_password_with};
pub use sections::{MIN_LENGTH, SPECIAL_CHARS};
pub use session::GeneratorSession;
pub use types::{Criterion, PasswordEvaluation, PasswordScore, PasswordStrength};
