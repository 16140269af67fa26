use serde::Deserialize;

/// What the decoder does when a dictionary repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeys {
    /// Keep the value from the last occurrence, at the position of the first.
    #[default]
    LastWins,
    /// Fail with `DecodeError::DuplicateKey`.
    Reject,
}

/// Configuration for the bencode decoder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Deepest allowed list/dictionary nesting. A top-level list is depth 1.
    pub max_depth: usize,
    pub duplicate_keys: DuplicateKeys,
    /// Reject integers with leading zeros and `-0`.
    pub strict_integers: bool,
    /// Reject byte string length prefixes with leading zeros, such as `03:`.
    pub strict_lengths: bool,
    /// Reject dictionaries whose keys are not strictly increasing.
    pub require_sorted_keys: bool,
}

impl DecoderConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    /// Only accept canonical bencode.
    pub fn strict() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            duplicate_keys: DuplicateKeys::Reject,
            strict_integers: true,
            strict_lengths: true,
            require_sorted_keys: true,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            duplicate_keys: DuplicateKeys::LastWins,
            strict_integers: false,
            strict_lengths: false,
            require_sorted_keys: false,
        }
    }
}
