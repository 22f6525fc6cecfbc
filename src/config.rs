//! Policy thresholds supplied by the embedding host.

/// Minimum character-class counts and length a password needs to be `Strong`.
///
/// All fields are plain counts; `0` disables the corresponding threshold.
/// The `Default` impl is the fixed policy used when a host does not configure
/// the field: one of each class and eight characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PolicyConfig {
    pub min_uppercase: usize,
    pub min_lowercase: usize,
    #[cfg_attr(feature = "serde", serde(rename = "minNumbers"))]
    pub min_digits: usize,
    #[cfg_attr(feature = "serde", serde(rename = "minSpecialChars"))]
    pub min_special: usize,
    pub min_length: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_uppercase: 1,
            min_lowercase: 1,
            min_digits: 1,
            min_special: 1,
            min_length: 8,
        }
    }
}

impl PolicyConfig {
    pub fn with_min_uppercase(mut self, count: usize) -> Self {
        self.min_uppercase = count;
        self
    }

    pub fn with_min_lowercase(mut self, count: usize) -> Self {
        self.min_lowercase = count;
        self
    }

    pub fn with_min_digits(mut self, count: usize) -> Self {
        self.min_digits = count;
        self
    }

    pub fn with_min_special(mut self, count: usize) -> Self {
        self.min_special = count;
        self
    }

    pub fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }
}
