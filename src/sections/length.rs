//! Length section - checks password minimum length.

use super::{CharCounts, SectionResult};
use crate::config::PolicyConfig;
use crate::types::Requirement;

/// Checks if the password meets the configured minimum length.
///
/// # Returns
/// - `Some(Requirement::MinLength)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(counts: &CharCounts, config: &PolicyConfig) -> SectionResult {
    if counts.length < config.min_length {
        return Some(Requirement::MinLength);
    }
    None
}

/// True for a non-empty password shorter than `min_length`.
pub fn is_below_length(counts: &CharCounts, config: &PolicyConfig) -> bool {
    (1..config.min_length).contains(&counts.length)
}
