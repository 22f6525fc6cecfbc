//! Password evaluation sections
//!
//! Each section checks one composition threshold or shape of the password.

mod length;
mod pattern;
mod variety;

pub use length::{is_below_length, length_section};
pub use pattern::{homogeneous_run_pattern, WIDE_SPECIALS};
pub use variety::{
    digit_section, lowercase_section, special_section, uppercase_section, CharCounts,
    NARROW_SPECIALS,
};

use crate::config::PolicyConfig;
use crate::types::Requirement;

/// Result type for threshold sections.
/// - `Some(requirement)` - Threshold not met
/// - `None` - Threshold met
pub type SectionResult = Option<Requirement>;

/// Signature shared by every threshold section.
pub type Section = fn(&CharCounts, &PolicyConfig) -> SectionResult;
