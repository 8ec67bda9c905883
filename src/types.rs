//! Password evaluation value types.

use std::collections::BTreeMap;
use std::fmt;

/// One independently evaluated password property worth a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl Criterion {
    /// All criteria in evaluation order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digits,
        Criterion::Special,
    ];

    /// Stable key used in criteria maps.
    pub fn key(self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Digits => "digits",
            Criterion::Special => "special",
        }
    }

    /// Checklist label shown next to the met/unmet marker.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Length => "Length (8+ characters)",
            Criterion::Uppercase => "Uppercase letters",
            Criterion::Lowercase => "Lowercase letters",
            Criterion::Digits => "Numbers",
            Criterion::Special => "Special characters",
        }
    }

    /// Suggestion appended to the feedback when the criterion is not met.
    pub fn feedback(self) -> &'static str {
        match self {
            Criterion::Length => "Password should be at least 8 characters long",
            Criterion::Uppercase => "Add uppercase letters",
            Criterion::Lowercase => "Add lowercase letters",
            Criterion::Digits => "Add at least one number",
            Criterion::Special => "Add special characters (!@#$%^&*)",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Number of criteria met, between 0 and [`PasswordScore::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 5;

    /// Creates a score, saturating at [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Score as a percentage of the maximum, for progress bars.
    pub fn percentage(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX) * 100.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Three-tier strength label, plus the label for an empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    NotEvaluated,
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// Maps a score onto its tier: up to 2 is weak, 3 and 4 moderate, 5 strong.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Moderate,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PasswordStrength::NotEvaluated => "None",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single password evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub strength: PasswordStrength,
    pub feedback: Vec<String>,
    /// Per-criterion outcome. Empty when nothing was evaluated.
    pub criteria: BTreeMap<Criterion, bool>,
}

impl PasswordEvaluation {
    /// Evaluation returned for an empty password.
    pub(crate) fn not_evaluated() -> Self {
        Self {
            score: PasswordScore::default(),
            strength: PasswordStrength::NotEvaluated,
            feedback: vec!["Enter a password".to_string()],
            criteria: BTreeMap::new(),
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Whether `criterion` was met. Criteria that were never evaluated count as unmet.
    pub fn is_met(&self, criterion: Criterion) -> bool {
        self.criteria.get(&criterion).copied().unwrap_or(false)
    }

    /// Label and outcome for every criterion, in display order.
    pub fn criteria_checklist(&self) -> Vec<(&'static str, bool)> {
        Criterion::ALL
            .iter()
            .map(|&c| (c.label(), self.is_met(c)))
            .collect()
    }
}
