use thiserror::Error;

/// Reasons a buffer could not be decoded.
///
/// Every variant carries the byte offset at which the problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid leading byte {byte:#04x} at offset {offset}")]
    InvalidLeadingByte { byte: u8, offset: usize },

    #[error("malformed integer at offset {offset}: {reason}")]
    MalformedInteger { offset: usize, reason: &'static str },

    #[error("malformed byte string length at offset {offset}: {reason}")]
    MalformedLength { offset: usize, reason: &'static str },

    #[error("input truncated at offset {offset}: needed {needed} more byte(s), {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("trailing data: value ended at offset {offset} of {len} bytes")]
    TrailingData { offset: usize, len: usize },

    #[error("dictionary key at offset {offset} must be a byte string, found {found}")]
    InvalidDictionaryKey { offset: usize, found: &'static str },

    #[error("nesting deeper than {max_depth} at offset {offset}")]
    NestingTooDeep { offset: usize, max_depth: usize },

    #[error("duplicate dictionary key at offset {offset}")]
    DuplicateKey { offset: usize },

    #[error("dictionary keys out of order at offset {offset}")]
    UnsortedKeys { offset: usize },
}

impl DecodeError {
    /// Byte offset into the input where decoding stopped.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::InvalidLeadingByte { offset, .. }
            | DecodeError::MalformedInteger { offset, .. }
            | DecodeError::MalformedLength { offset, .. }
            | DecodeError::TruncatedInput { offset, .. }
            | DecodeError::TrailingData { offset, .. }
            | DecodeError::InvalidDictionaryKey { offset, .. }
            | DecodeError::NestingTooDeep { offset, .. }
            | DecodeError::DuplicateKey { offset }
            | DecodeError::UnsortedKeys { offset } => *offset,
        }
    }
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum BencodeError {
    #[error("Bencode decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Bencode encode error: {0}")]
    Encode(#[from] EncodeError),
}

pub type Result<T> = std::result::Result<T, BencodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_reported() {
        let err = DecodeError::TrailingData { offset: 7, len: 16 };
        assert_eq!(err.offset(), 7);

        let err = DecodeError::DuplicateKey { offset: 3 };
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: BencodeError = DecodeError::NestingTooDeep {
            offset: 10,
            max_depth: 4,
        }
        .into();
        assert!(matches!(
            err,
            BencodeError::Decode(DecodeError::NestingTooDeep { max_depth: 4, .. })
        ));
        assert_eq!(
            err.to_string(),
            "Bencode decode error: nesting deeper than 4 at offset 10"
        );
    }
}
