//! Password strength evaluator - main evaluation logic.

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::Blacklist;
use crate::sections::{
    SectionResult, blacklist_section, digit_section, length_section, lowercase_section,
    special_section, uppercase_section,
};
use crate::types::{Criterion, PasswordEvaluation, PasswordScore, PasswordStrength};

/// Evaluates password strength against the built-in blacklist.
///
/// See [`evaluate_password_strength_with`].
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    evaluate_password_strength_with(password, &Blacklist::builtin())
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// Each of the five criteria adds one point when met, or one feedback line
/// when not. A blacklisted password then has its score overwritten with 1,
/// however many criteria it met.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `blacklist` - Common passwords that collapse the score
pub fn evaluate_password_strength_with(
    password: &SecretString,
    blacklist: &Blacklist,
) -> PasswordEvaluation {
    if password.expose_secret().is_empty() {
        return PasswordEvaluation::not_evaluated();
    }

    let mut feedback = Vec::new();
    let mut criteria = BTreeMap::new();
    let mut score = 0u8;

    // Orchestrator: execute sections in sequence
    let sections: [(Criterion, fn(&SecretString) -> SectionResult); 5] = [
        (Criterion::Length, length_section),
        (Criterion::Uppercase, uppercase_section),
        (Criterion::Lowercase, lowercase_section),
        (Criterion::Digits, digit_section),
        (Criterion::Special, special_section),
    ];

    for (criterion, section_fn) in sections {
        match section_fn(password) {
            Some(reason) => {
                feedback.push(reason.to_string());
                criteria.insert(criterion, false);
            }
            None => {
                score += 1;
                criteria.insert(criterion, true);
            }
        }
    }

    if let Some(reason) = blacklist_section(password, blacklist) {
        score = 1;
        feedback.push(reason.to_string());
    }

    let score = PasswordScore::new(score);
    PasswordEvaluation {
        score,
        strength: PasswordStrength::from_score(score),
        feedback,
        criteria,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::COMMON_PASSWORD_FEEDBACK;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn evaluate(pwd: &str) -> PasswordEvaluation {
        evaluate_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");

        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.strength(), PasswordStrength::NotEvaluated);
        assert_eq!(evaluation.strength().to_string(), "None");
        assert_eq!(evaluation.feedback, vec!["Enter a password".to_string()]);
        assert!(evaluation.criteria.is_empty());
    }

    #[test]
    fn test_evaluate_blacklisted_password() {
        let evaluation = evaluate("password");

        assert_eq!(evaluation.score.value(), 1);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert!(evaluation.feedback.iter().any(|r| r == COMMON_PASSWORD_FEEDBACK));
        // Length and lowercase are still reported as met
        assert!(evaluation.is_met(Criterion::Length));
        assert!(evaluation.is_met(Criterion::Lowercase));
    }

    #[test]
    fn test_blacklist_overrides_score_instead_of_adding() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Tr0ub4dor&3").expect("Failed to write");
        let blacklist = Blacklist::from_path(temp_file.path()).expect("should load");
        let pwd = SecretString::new("Tr0ub4dor&3".to_string().into());

        let unlisted = evaluate_password_strength(&pwd);
        assert_eq!(unlisted.score.value(), 5);

        let listed = evaluate_password_strength_with(&pwd, &blacklist);
        assert_eq!(listed.score.value(), 1);
        assert_eq!(listed.strength(), PasswordStrength::Weak);
        assert_eq!(listed.feedback, vec![COMMON_PASSWORD_FEEDBACK.to_string()]);
        assert!(Criterion::ALL.iter().all(|&c| listed.is_met(c)));
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = evaluate("Str0ng!Pass");

        assert_eq!(evaluation.score.value(), 5);
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert!(evaluation.feedback.is_empty());
        assert_eq!(evaluation.criteria.len(), 5);
        assert!(evaluation.criteria.values().all(|&met| met));
    }

    #[test]
    fn test_evaluate_weak_short_password() {
        let evaluation = evaluate("abc");

        assert_eq!(evaluation.score.value(), 1);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(
            evaluation.feedback,
            vec![
                "Password should be at least 8 characters long",
                "Add uppercase letters",
                "Add at least one number",
                "Add special characters (!@#$%^&*)",
            ]
        );
        assert!(evaluation.is_met(Criterion::Lowercase));
        assert!(!evaluation.is_met(Criterion::Digits));
    }

    #[test]
    fn test_evaluate_counts_non_ascii_digit() {
        let evaluation = evaluate("Abcdefg!\u{661}");

        assert_eq!(evaluation.score.value(), 5);
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert!(evaluation.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_moderate_password() {
        let evaluation = evaluate("MyPassword1");

        assert_eq!(evaluation.score.value(), 4);
        assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
        assert_eq!(evaluation.feedback, vec!["Add special characters (!@#$%^&*)"]);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        for pwd in ["", "a", "password", "MyPass123!", "letmein", "VeryStrongPassword123!@#"] {
            assert_eq!(evaluate(pwd), evaluate(pwd), "for {pwd:?}");
        }
    }
}
