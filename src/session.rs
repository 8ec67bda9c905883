//! Generator session state for a UI shell.
//!
//! Holds the single "last generated password" slot and its visibility
//! toggle. Nothing else in the crate reads or writes it.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_password_strength;
use crate::generator::{RandomSource, generate_password, generate_password_with};
use crate::types::PasswordEvaluation;

const MASK: char = '•';

#[derive(Debug)]
pub struct GeneratorSession {
    password: Option<SecretString>,
    visible: bool,
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorSession {
    /// Empty session with the password shown once generated.
    pub fn new() -> Self {
        Self {
            password: None,
            visible: true,
        }
    }

    /// Replaces the current password with a freshly generated one.
    pub fn regenerate(&mut self, length: usize) -> &SecretString {
        self.password.insert(generate_password(length))
    }

    pub fn regenerate_with<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> &SecretString {
        self.password.insert(generate_password_with(rng, length))
    }

    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Text to render: the password itself, or one mask glyph per character when hidden.
    pub fn display(&self) -> Option<String> {
        let pwd = self.password.as_ref()?.expose_secret();
        if self.visible {
            Some(pwd.to_string())
        } else {
            Some(std::iter::repeat_n(MASK, pwd.chars().count()).collect())
        }
    }

    /// Strength of the current password, if any.
    pub fn evaluation(&self) -> Option<PasswordEvaluation> {
        self.password.as_ref().map(evaluate_password_strength)
    }
}
