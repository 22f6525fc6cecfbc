//! Character variety sections - count uppercase, lowercase, digits and special chars.

use super::SectionResult;
use crate::config::PolicyConfig;
use crate::types::Requirement;

/// Specials that count toward the special-character threshold.
///
/// Narrower than [`super::WIDE_SPECIALS`]; the two sets are deliberately distinct
/// because the classification depends on each of them.
pub const NARROW_SPECIALS: &str = "!@#*$%^&+=";

/// Per-class character counts of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharCounts {
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    /// Members of [`NARROW_SPECIALS`].
    pub specials: usize,
    /// Total length in UTF-16 code units, so a char outside the BMP counts twice.
    pub length: usize,
}

impl CharCounts {
    pub fn scan(pwd: &str) -> Self {
        pwd.chars().fold(Self::default(), |mut counts, c| {
            counts.length += c.len_utf16();
            if c.is_ascii_uppercase() {
                counts.uppercase += 1;
            } else if c.is_ascii_lowercase() {
                counts.lowercase += 1;
            } else if c.is_ascii_digit() {
                counts.digits += 1;
            } else if NARROW_SPECIALS.contains(c) {
                counts.specials += 1;
            }
            counts
        })
    }
}

/// Checks the uppercase letter count.
///
/// # Returns
/// - `Some(Requirement::Uppercase)` if fewer than `min_uppercase`
/// - `None` otherwise
pub fn uppercase_section(counts: &CharCounts, config: &PolicyConfig) -> SectionResult {
    (counts.uppercase < config.min_uppercase).then_some(Requirement::Uppercase)
}

/// Checks the lowercase letter count.
///
/// # Returns
/// - `Some(Requirement::Lowercase)` if fewer than `min_lowercase`
/// - `None` otherwise
pub fn lowercase_section(counts: &CharCounts, config: &PolicyConfig) -> SectionResult {
    (counts.lowercase < config.min_lowercase).then_some(Requirement::Lowercase)
}

/// Checks the decimal digit count.
///
/// # Returns
/// - `Some(Requirement::Digit)` if fewer than `min_digits`
/// - `None` otherwise
pub fn digit_section(counts: &CharCounts, config: &PolicyConfig) -> SectionResult {
    (counts.digits < config.min_digits).then_some(Requirement::Digit)
}

/// Checks the count of [`NARROW_SPECIALS`] members.
///
/// # Returns
/// - `Some(Requirement::Special)` if fewer than `min_special`
/// - `None` otherwise
pub fn special_section(counts: &CharCounts, config: &PolicyConfig) -> SectionResult {
    (counts.specials < config.min_special).then_some(Requirement::Special)
}
