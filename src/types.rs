//! Value types produced by evaluation and validation.

use std::fmt;

use secrecy::SecretString;

use crate::config::PolicyConfig;

/// Strength classification of the current password.
///
/// Recomputed from scratch on every change; there is no ordering between
/// successive classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strength {
    /// The password is empty.
    #[default]
    NotEvaluated,
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::NotEvaluated => "",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, Strength::Strong)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::NotEvaluated => Ok(()),
            other => write!(f, "Password strength: {}", other.label()),
        }
    }
}

/// A single composition threshold, listed in reporting priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Requirement {
    Uppercase,
    Lowercase,
    Digit,
    Special,
    MinLength,
}

impl Requirement {
    /// Hint shown under the password input while this requirement is unmet.
    pub fn message(&self, config: &PolicyConfig) -> String {
        match self {
            Requirement::Uppercase => format!(
                "Password must contain at least {} uppercase letter",
                config.min_uppercase
            ),
            Requirement::Lowercase => format!(
                "Password must contain at least {} lowercase letter",
                config.min_lowercase
            ),
            Requirement::Digit => format!(
                "Password must contain at least {} numeric digit",
                config.min_digits
            ),
            Requirement::Special => format!(
                "Password must contain at least {} special character(@,#..)",
                config.min_special
            ),
            Requirement::MinLength => format!(
                "Password length must be greater than {} characters",
                config.min_length
            ),
        }
    }
}

/// Result of evaluating one password against a policy.
///
/// `strength` and `unmet` come from two independent rule sets and may
/// disagree for some inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    pub strength: Strength,
    /// First threshold not met, in `Requirement` priority order.
    pub unmet: Option<Requirement>,
}

pub const MISSING_PASSWORD_MESSAGE: &str = "Password is required.";
pub const MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// Outcome of an explicit `validate()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    pub missing_password: bool,
    pub mismatch: bool,
    pub below_strength: bool,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        !(self.missing_password || self.mismatch || self.below_strength)
    }

    /// Messages for the flags that have dedicated error text.
    ///
    /// `below_strength` has none; the requirement hint covers it.
    pub fn messages(&self) -> Vec<&'static str> {
        let mut messages = Vec::new();
        if self.missing_password {
            messages.push(MISSING_PASSWORD_MESSAGE);
        }
        if self.mismatch {
            messages.push(MISMATCH_MESSAGE);
        }
        messages
    }
}

/// The entered credentials, exactly as stored by the field.
#[derive(Debug)]
pub struct FieldValues {
    pub password: SecretString,
    pub confirm_password: SecretString,
}
