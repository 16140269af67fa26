use super::Dictionary;
use bytes::Bytes;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A bencode byte string.
///
/// Byte strings that are valid UTF-8 are kept as `Text`; the `String` holds
/// exactly the original bytes, so nothing is lost on re-encoding. Equality,
/// ordering and hashing only look at the raw bytes, so `Text("a")` and
/// `Raw(b"a")` are the same key.
#[derive(Debug, Clone)]
pub enum ByteString {
    Text(String),
    Raw(Bytes),
}

impl ByteString {
    /// Classify a byte slice, keeping it as `Text` when it is valid UTF-8.
    pub fn from_slice(bytes: &[u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => ByteString::Text(text.to_owned()),
            Err(_) => ByteString::Raw(Bytes::copy_from_slice(bytes)),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ByteString::Text(s) => s.as_bytes(),
            ByteString::Raw(b) => b,
        }
    }

    /// Text view of the bytes, if they are valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ByteString::Text(s) => Some(s),
            ByteString::Raw(b) => std::str::from_utf8(b).ok(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ByteString::Text(_))
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_bytes(self) -> Bytes {
        match self {
            ByteString::Text(s) => Bytes::from(s),
            ByteString::Raw(b) => b,
        }
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        ByteString::Text(s.to_owned())
    }
}

impl From<String> for ByteString {
    fn from(s: String) -> Self {
        ByteString::Text(s)
    }
}

impl From<&[u8]> for ByteString {
    fn from(b: &[u8]) -> Self {
        ByteString::Raw(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(b: Vec<u8>) -> Self {
        ByteString::Raw(Bytes::from(b))
    }
}

impl From<Bytes> for ByteString {
    fn from(b: Bytes) -> Self {
        ByteString::Raw(b)
    }
}

/// Represents a bencoded value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BencodeValue {
    /// Integer: i<number>e
    Integer(i64),
    /// Byte string: <length>:<contents>
    String(ByteString),
    /// List: l<values>e
    List(Vec<BencodeValue>),
    /// Dictionary: d<key-value pairs>e (keys are sorted when encoded)
    Dict(Dictionary),
}

impl BencodeValue {
    /// Name of the variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            BencodeValue::Integer(_) => "integer",
            BencodeValue::String(_) => "byte string",
            BencodeValue::List(_) => "list",
            BencodeValue::Dict(_) => "dictionary",
        }
    }

    /// Try to get this value as an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            BencodeValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_byte_string(&self) -> Option<&ByteString> {
        match self {
            BencodeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a byte string
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.as_byte_string().map(ByteString::as_bytes)
    }

    /// Try to get this value as a UTF-8 string
    pub fn as_str(&self) -> Option<&str> {
        self.as_byte_string()?.as_str()
    }

    /// True for byte strings the decoder classified as text
    pub fn is_text(&self) -> bool {
        self.as_byte_string().is_some_and(ByteString::is_text)
    }

    /// Try to get this value as a list
    pub fn as_list(&self) -> Option<&[BencodeValue]> {
        match self {
            BencodeValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Try to get this value as a dictionary
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            BencodeValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn into_dict(self) -> Option<Dictionary> {
        match self {
            BencodeValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Get a value from a dictionary by key
    pub fn dict_get(&self, key: &[u8]) -> Option<&BencodeValue> {
        self.as_dict()?.get(key)
    }

    /// Get a string value from a dictionary by key
    pub fn dict_get_str(&self, key: &[u8]) -> Option<&str> {
        self.dict_get(key)?.as_str()
    }

    /// Get an integer value from a dictionary by key
    pub fn dict_get_int(&self, key: &[u8]) -> Option<i64> {
        self.dict_get(key)?.as_integer()
    }
}

impl From<i64> for BencodeValue {
    fn from(i: i64) -> Self {
        BencodeValue::Integer(i)
    }
}

impl From<&str> for BencodeValue {
    fn from(s: &str) -> Self {
        BencodeValue::String(s.into())
    }
}

impl From<String> for BencodeValue {
    fn from(s: String) -> Self {
        BencodeValue::String(s.into())
    }
}

impl From<&[u8]> for BencodeValue {
    fn from(b: &[u8]) -> Self {
        BencodeValue::String(b.into())
    }
}

impl From<Vec<u8>> for BencodeValue {
    fn from(b: Vec<u8>) -> Self {
        BencodeValue::String(b.into())
    }
}

impl From<Bytes> for BencodeValue {
    fn from(b: Bytes) -> Self {
        BencodeValue::String(b.into())
    }
}

impl From<ByteString> for BencodeValue {
    fn from(s: ByteString) -> Self {
        BencodeValue::String(s)
    }
}

impl From<Vec<BencodeValue>> for BencodeValue {
    fn from(l: Vec<BencodeValue>) -> Self {
        BencodeValue::List(l)
    }
}

impl From<Dictionary> for BencodeValue {
    fn from(d: Dictionary) -> Self {
        BencodeValue::Dict(d)
    }
}
