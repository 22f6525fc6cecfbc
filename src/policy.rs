//! Compiled password policy.

use regex::Regex;
use secrecy::SecretString;
use thiserror::Error;

use crate::config::PolicyConfig;
use crate::evaluator::evaluate_password;
use crate::sections::homogeneous_run_pattern;
use crate::types::Assessment;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Failed to compile policy pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A [`PolicyConfig`] with its patterns compiled once.
///
/// Immutable after construction; clone it to share between fields.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    config: PolicyConfig,
    homogeneous_run: Regex,
}

impl PasswordPolicy {
    /// Compiles the patterns for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Pattern`] if `min_length` is so large that the
    /// homogeneous-run pattern exceeds the regex size limit.
    pub fn new(config: PolicyConfig) -> Result<Self, PolicyError> {
        let homogeneous_run = homogeneous_run_pattern(&config).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy initialization FAILED for {:?}: {}", config, _e);
        })?;

        Ok(Self {
            config,
            homogeneous_run,
        })
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Whether `pwd` consists of a single character class for at least
    /// `min_length` chars.
    pub fn is_homogeneous_run(&self, pwd: &str) -> bool {
        self.homogeneous_run.is_match(pwd)
    }

    pub fn evaluate(&self, password: &SecretString) -> Assessment {
        evaluate_password(password, self)
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::default()).expect("default policy pattern compiles")
    }
}
