use crate::error::DecodeError;

/// Forward-only reader over a byte buffer. Every read is bounds checked.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub(crate) fn next_byte(&mut self) -> Result<u8, DecodeError> {
        let byte = *self.data.get(self.pos).ok_or(DecodeError::TruncatedInput {
            offset: self.pos,
            needed: 1,
            remaining: 0,
        })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Take exactly `len` bytes. Fails without moving if fewer remain.
    pub(crate) fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(DecodeError::TruncatedInput {
                offset: self.pos,
                needed: len,
                remaining,
            });
        }

        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance() {
        let mut cursor = Cursor::new(b"abcd");
        assert_eq!(cursor.next_byte(), Ok(b'a'));
        assert_eq!(cursor.take(2), Ok(&b"bc"[..]));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), 1);
        assert!(!cursor.is_empty());
        assert_eq!(cursor.take(1), Ok(&b"d"[..]));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_take_past_end() {
        let mut cursor = Cursor::new(b"abc");
        assert_eq!(
            cursor.take(200),
            Err(DecodeError::TruncatedInput {
                offset: 0,
                needed: 200,
                remaining: 3
            })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_take_huge_length() {
        let mut cursor = Cursor::new(b"x");
        assert!(cursor.take(usize::MAX).is_err());
    }

    #[test]
    fn test_next_byte_at_end() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(
            cursor.next_byte(),
            Err(DecodeError::TruncatedInput {
                offset: 0,
                needed: 1,
                remaining: 0
            })
        );
    }
}
