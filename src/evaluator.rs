//! Password evaluator - strength classification and hint selection.

use secrecy::{ExposeSecret, SecretString};

use crate::config::PolicyConfig;
use crate::policy::PasswordPolicy;
use crate::sections::{
    digit_section, is_below_length, length_section, lowercase_section, special_section,
    uppercase_section, CharCounts, Section,
};
use crate::types::{Assessment, Strength};

/// Evaluates a password against a policy.
///
/// Classification and the unmet requirement are computed by separate rules:
/// the strength falls back to `Medium` for long passwords that are not
/// `Strong`, while the hint reports the first threshold not met.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `policy` - Compiled thresholds to evaluate against
///
/// # Returns
/// An `Assessment`; the default (`NotEvaluated`, no hint) for an empty password.
pub fn evaluate_password(password: &SecretString, policy: &PasswordPolicy) -> Assessment {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Assessment::default();
    }

    let config = policy.config();
    let counts = CharCounts::scan(pwd);

    let strength = if meets_every_threshold(&counts, config) {
        Strength::Strong
    } else if policy.is_homogeneous_run(pwd) {
        Strength::Medium
    } else if is_below_length(&counts, config) {
        Strength::Weak
    } else {
        Strength::Medium
    };

    // Orchestrator: first failing section wins
    let sections: [(&str, Section); 5] = [
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("special", special_section),
        ("length", length_section),
    ];

    let unmet = sections.iter().find_map(|(_section_name, section_fn)| {
        let result = section_fn(&counts, config);
        #[cfg(feature = "tracing")]
        {
            if result.is_some() {
                tracing::trace!("Password section not met: {}", _section_name);
            }
        }
        result
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(length = counts.length, ?strength, ?unmet, "password evaluated");

    Assessment { strength, unmet }
}

fn meets_every_threshold(counts: &CharCounts, config: &PolicyConfig) -> bool {
    counts.uppercase >= config.min_uppercase
        && counts.lowercase >= config.min_lowercase
        && counts.digits >= config.min_digits
        && counts.specials >= config.min_special
        && counts.length >= config.min_length
}
