use super::cursor::Cursor;
use super::{BencodeValue, ByteString, Dictionary};
use crate::config::{DecoderConfig, DuplicateKeys};
use crate::error::DecodeError;
use tracing::{debug, trace};

/// Decode bencoded data into a BencodeValue
///
/// The buffer must hold exactly one value; anything left over is an error.
pub fn decode(data: &[u8]) -> Result<BencodeValue, DecodeError> {
    decode_with(data, &DecoderConfig::default())
}

/// Decode bencoded data with an explicit decoder configuration
pub fn decode_with(data: &[u8], config: &DecoderConfig) -> Result<BencodeValue, DecodeError> {
    let result = Decoder::new(data, config).decode_document();

    match &result {
        Ok(value) => trace!("Decoded {} from {} bytes", value.type_name(), data.len()),
        Err(DecodeError::TrailingData { offset, len }) => {
            debug!("Leftover data after decode. Read {} of {} bytes", offset, len)
        }
        Err(err) => debug!(
            "Bencode decode failed at offset {} of {}: {}",
            err.offset(),
            data.len(),
            err
        ),
    }

    result
}

/// Result of parsing one item: either a value, or the `e` that closes the
/// enclosing list or dictionary.
enum Item {
    Value(BencodeValue),
    End,
}

struct Decoder<'a> {
    cursor: Cursor<'a>,
    config: &'a DecoderConfig,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8], config: &'a DecoderConfig) -> Self {
        Self {
            cursor: Cursor::new(data),
            config,
        }
    }

    fn decode_document(&mut self) -> Result<BencodeValue, DecodeError> {
        let value = self.decode_value(0)?;

        if !self.cursor.is_empty() {
            let read = self.cursor.position();
            let len = read + self.cursor.remaining();
            return Err(DecodeError::TrailingData { offset: read, len });
        }

        Ok(value)
    }

    /// Parse a value where the grammar does not allow an end marker.
    fn decode_value(&mut self, depth: usize) -> Result<BencodeValue, DecodeError> {
        let offset = self.cursor.position();
        match self.decode_item(depth)? {
            Item::Value(value) => Ok(value),
            Item::End => Err(DecodeError::InvalidLeadingByte { byte: b'e', offset }),
        }
    }

    /// `depth` is the nesting depth of the container being read from.
    fn decode_item(&mut self, depth: usize) -> Result<Item, DecodeError> {
        let offset = self.cursor.position();

        let value = match self.cursor.next_byte()? {
            b'e' => return Ok(Item::End),
            b'i' => BencodeValue::Integer(self.decode_integer(offset)?),
            b'l' => BencodeValue::List(self.decode_list(offset, depth + 1)?),
            b'd' => BencodeValue::Dict(self.decode_dict(offset, depth + 1)?),
            digit @ b'0'..=b'9' => BencodeValue::String(self.decode_string(offset, digit)?),
            byte => return Err(DecodeError::InvalidLeadingByte { byte, offset }),
        };

        Ok(Item::Value(value))
    }

    fn decode_integer(&mut self, offset: usize) -> Result<i64, DecodeError> {
        let malformed = |offset, reason| DecodeError::MalformedInteger { offset, reason };

        let sign_pos = self.cursor.position();
        let mut negative = false;
        let mut digits = 0usize;
        let mut leading_zero = false;
        let mut acc: i64 = 0;

        loop {
            let pos = self.cursor.position();
            match self.cursor.next_byte()? {
                b'e' => break,
                b'-' if pos == sign_pos => negative = true,
                b'-' => return Err(malformed(pos, "unexpected '-'")),
                digit @ b'0'..=b'9' => {
                    let digit = i64::from(digit - b'0');
                    if digits == 0 {
                        leading_zero = digit == 0;
                    }
                    digits += 1;

                    // Fold towards the sign so i64::MIN is reachable.
                    acc = acc
                        .checked_mul(10)
                        .and_then(|acc| {
                            if negative {
                                acc.checked_sub(digit)
                            } else {
                                acc.checked_add(digit)
                            }
                        })
                        .ok_or_else(|| malformed(offset, "integer does not fit in 64 bits"))?;
                }
                _ => return Err(malformed(pos, "expected digit or 'e'")),
            }
        }

        if digits == 0 {
            return Err(malformed(offset, "no digits"));
        }

        if self.config.strict_integers && leading_zero {
            if digits > 1 {
                return Err(malformed(offset, "leading zero"));
            }
            if negative {
                return Err(malformed(offset, "negative zero"));
            }
        }

        Ok(acc)
    }

    /// `first` is the already consumed first digit of the length prefix.
    fn decode_string(&mut self, offset: usize, first: u8) -> Result<ByteString, DecodeError> {
        let mut len = usize::from(first - b'0');

        loop {
            let pos = self.cursor.position();
            match self.cursor.next_byte()? {
                b':' => break,
                b'0'..=b'9' if first == b'0' && self.config.strict_lengths => {
                    return Err(DecodeError::MalformedLength {
                        offset,
                        reason: "leading zero",
                    })
                }
                digit @ b'0'..=b'9' => {
                    len = len
                        .checked_mul(10)
                        .and_then(|len| len.checked_add(usize::from(digit - b'0')))
                        .ok_or(DecodeError::MalformedLength {
                            offset,
                            reason: "length does not fit in usize",
                        })?;
                }
                _ => {
                    return Err(DecodeError::MalformedLength {
                        offset: pos,
                        reason: "expected digit or ':'",
                    })
                }
            }
        }

        let bytes = self.cursor.take(len)?;
        Ok(ByteString::from_slice(bytes))
    }

    fn check_depth(&self, offset: usize, depth: usize) -> Result<(), DecodeError> {
        if depth > self.config.max_depth {
            return Err(DecodeError::NestingTooDeep {
                offset,
                max_depth: self.config.max_depth,
            });
        }
        Ok(())
    }

    fn decode_list(&mut self, offset: usize, depth: usize) -> Result<Vec<BencodeValue>, DecodeError> {
        self.check_depth(offset, depth)?;

        let mut list = Vec::new();
        while let Item::Value(value) = self.decode_item(depth)? {
            list.push(value);
        }

        Ok(list)
    }

    /// Read a dictionary key, or `None` at the closing `e`.
    fn decode_key(&mut self) -> Result<Option<ByteString>, DecodeError> {
        let offset = self.cursor.position();

        let found = match self.cursor.next_byte()? {
            b'e' => return Ok(None),
            digit @ b'0'..=b'9' => return self.decode_string(offset, digit).map(Some),
            b'i' => "integer",
            b'l' => "list",
            b'd' => "dictionary",
            byte => return Err(DecodeError::InvalidLeadingByte { byte, offset }),
        };

        Err(DecodeError::InvalidDictionaryKey { offset, found })
    }

    fn decode_dict(&mut self, offset: usize, depth: usize) -> Result<Dictionary, DecodeError> {
        self.check_depth(offset, depth)?;

        let mut dict = Dictionary::new();
        loop {
            let key_offset = self.cursor.position();
            let Some(key) = self.decode_key()? else {
                break;
            };

            if dict.contains_key(key.as_bytes()) {
                match self.config.duplicate_keys {
                    DuplicateKeys::Reject => {
                        return Err(DecodeError::DuplicateKey { offset: key_offset })
                    }
                    DuplicateKeys::LastWins => {
                        debug!("Duplicate dictionary key at offset {}, keeping last value", key_offset)
                    }
                }
            }

            if self.config.require_sorted_keys {
                if let Some(prev) = dict.last_key() {
                    if key.as_bytes() <= prev.as_bytes() {
                        return Err(DecodeError::UnsortedKeys { offset: key_offset });
                    }
                }
            }

            let value = self.decode_value(depth)?;
            dict.insert(key, value);
        }

        Ok(dict)
    }
}
