use super::BencodeValue;
use crate::error::EncodeError;
use std::io::Write;
use tracing::trace;

/// Encode a BencodeValue into its canonical byte representation
///
/// Dictionary keys are written in byte-wise order regardless of how the
/// dictionary was built; list order is kept as is.
pub fn encode(value: &BencodeValue) -> Vec<u8> {
    let mut result = Vec::with_capacity(encoded_len(value));
    encode_into(value, &mut result);
    trace!("Encoded {} into {} bytes", value.type_name(), result.len());
    result
}

/// Encode a BencodeValue into a writer
///
/// The canonical form is built in memory first and handed to the writer
/// with a single `write_all`.
pub fn encode_to<W: Write>(value: &BencodeValue, writer: &mut W) -> Result<(), EncodeError> {
    writer.write_all(&encode(value))?;
    Ok(())
}

fn encode_into(value: &BencodeValue, output: &mut Vec<u8>) {
    match value {
        BencodeValue::Integer(i) => {
            output.push(b'i');
            output.extend_from_slice(i.to_string().as_bytes());
            output.push(b'e');
        }
        BencodeValue::String(s) => encode_bytes(s.as_bytes(), output),
        BencodeValue::List(list) => {
            output.push(b'l');
            for item in list {
                encode_into(item, output);
            }
            output.push(b'e');
        }
        BencodeValue::Dict(dict) => {
            output.push(b'd');
            for (key, value) in dict.sorted_iter() {
                encode_bytes(key.as_bytes(), output);
                encode_into(value, output);
            }
            output.push(b'e');
        }
    }
}

fn encode_bytes(bytes: &[u8], output: &mut Vec<u8>) {
    output.extend_from_slice(bytes.len().to_string().as_bytes());
    output.push(b':');
    output.extend_from_slice(bytes);
}

/// Exact size of the encoded form
fn encoded_len(value: &BencodeValue) -> usize {
    match value {
        BencodeValue::Integer(i) => 2 + usize::from(*i < 0) + decimal_digits(i.unsigned_abs()),
        BencodeValue::String(s) => bytes_len(s.len()),
        BencodeValue::List(list) => 2 + list.iter().map(encoded_len).sum::<usize>(),
        BencodeValue::Dict(dict) => {
            2 + dict
                .iter()
                .map(|(key, value)| bytes_len(key.len()) + encoded_len(value))
                .sum::<usize>()
        }
    }
}

fn bytes_len(len: usize) -> usize {
    decimal_digits(len as u64) + 1 + len
}

fn decimal_digits(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bencode::Dictionary;

    #[test]
    fn test_integer_encoding() {
        assert_eq!(encode(&BencodeValue::Integer(0)), b"i0e");
        assert_eq!(encode(&BencodeValue::Integer(-42)), b"i-42e");
        assert_eq!(
            encode(&BencodeValue::Integer(i64::MIN)),
            b"i-9223372036854775808e"
        );
    }

    #[test]
    fn test_binary_string_encoding() {
        let value = BencodeValue::from(vec![0xffu8, 0x00, b':']);
        assert_eq!(encode(&value), b"3:\xff\x00:");
    }

    #[test]
    fn test_dict_keys_sorted_bytewise() {
        let dict: Dictionary = [("b", 2i64), ("a", 1), ("Z", 0), ("ab", 3)]
            .into_iter()
            .collect();
        assert_eq!(
            encode(&BencodeValue::Dict(dict)),
            b"d1:Zi0e1:ai1e2:abi3e1:bi2ee"
        );
    }

    #[test]
    fn test_nested_dict_sorted() {
        let inner: Dictionary = [("y", 1i64), ("x", 2)].into_iter().collect();
        let mut outer = Dictionary::new();
        outer.insert("list", vec![BencodeValue::Dict(inner), BencodeValue::from(7i64)]);
        assert_eq!(
            encode(&BencodeValue::Dict(outer)),
            b"d4:listld1:xi2e1:yi1eei7eee"
        );
    }

    #[test]
    fn test_encoded_len_is_exact() {
        let dict: Dictionary = [
            ("name", BencodeValue::from("ubuntu.iso")),
            ("length", BencodeValue::from(1_234_567_890i64)),
            ("pieces", BencodeValue::from(vec![0u8; 40])),
        ]
        .into_iter()
        .collect();
        let values = [
            BencodeValue::Integer(0),
            BencodeValue::Integer(-1),
            BencodeValue::Integer(i64::MAX),
            BencodeValue::Integer(i64::MIN),
            BencodeValue::from(""),
            BencodeValue::from(vec![1u8; 100]),
            BencodeValue::List(vec![]),
            BencodeValue::Dict(dict),
        ];
        for value in &values {
            assert_eq!(encoded_len(value), encode(value).len(), "{:?}", value);
        }
    }

    #[test]
    fn test_encode_to_writer() {
        let value = BencodeValue::List(vec![BencodeValue::from("spam"), BencodeValue::Integer(42)]);
        let mut out = Vec::new();
        encode_to(&value, &mut out).unwrap();
        assert_eq!(out, b"l4:spami42ee");
    }

    #[test]
    fn test_encode_to_writes_once() {
        #[derive(Default)]
        struct Recorder {
            writes: Vec<Vec<u8>>,
        }

        impl Write for Recorder {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.writes.push(buf.to_vec());
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let dict: Dictionary = [("b", 2i64), ("a", 1)].into_iter().collect();
        let mut recorder = Recorder::default();
        encode_to(&BencodeValue::Dict(dict), &mut recorder).unwrap();
        assert_eq!(recorder.writes, vec![b"d1:ai1e1:bi2ee".to_vec()]);
    }

    #[test]
    fn test_encode_to_failing_writer() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = encode_to(&BencodeValue::Integer(1), &mut Broken).unwrap_err();
        assert!(matches!(err, EncodeError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }
}
