//! Pattern section - detects passwords made of a single character class.

use regex::Regex;

use crate::config::PolicyConfig;

/// Specials accepted by the homogeneous-run check.
///
/// Wider than [`super::NARROW_SPECIALS`], which is what the special-character
/// threshold counts.
pub const WIDE_SPECIALS: &str = r#"!@#$%^&*()_+-=[]{};:'"\|,.<>/?"#;

/// Builds the pattern matching a password that is entirely lowercase,
/// uppercase, digits or wide specials, with at least `min_length` chars.
pub fn homogeneous_run_pattern(config: &PolicyConfig) -> Result<Regex, regex::Error> {
    let specials: String = WIDE_SPECIALS
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    let n = config.min_length;
    Regex::new(&format!(
        "^(?:[a-z]{{{n},}}|[A-Z]{{{n},}}|[0-9]{{{n},}}|[{specials}]{{{n},}})$"
    ))
}
