//! Bencode decoding and canonical encoding.
//!
//! Bencode is the serialization format of BitTorrent metainfo files and
//! peer-wire extension messages. It has four types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` |
//! | Byte string | `<length>:<bytes>` | `4:spam` |
//! | List | `l<values>e` | `l4:spami42ee` |
//! | Dictionary | `d<key><value>...e` | `d3:cow3:mooe` |
//!
//! [`decode`] requires the buffer to hold exactly one value, checks every
//! length against the remaining input and caps nesting depth. [`encode`]
//! always produces canonical output: dictionary keys in byte-wise order.
//!
//! ```
//! use bencode_rs::{decode, encode, BencodeValue};
//!
//! let value = decode(b"d1:bi2e1:ai1ee").unwrap();
//! assert_eq!(value.dict_get_int(b"a"), Some(1));
//! assert_eq!(encode(&value), b"d1:ai1e1:bi2ee");
//!
//! let list = BencodeValue::List(vec!["abc".into(), 42i64.into()]);
//! assert_eq!(encode(&list), b"l3:abci42ee");
//! ```
//!
//! Byte strings that are valid UTF-8 decode as [`ByteString::Text`], the rest
//! as [`ByteString::Raw`]. Both re-encode to their original bytes.
//!
//! Stricter or looser decoding is set through [`DecoderConfig`]:
//!
//! ```
//! use bencode_rs::{decode_with, DecodeError, DecoderConfig};
//!
//! let err = decode_with(b"d1:ai1e1:ai2ee", &DecoderConfig::strict()).unwrap_err();
//! assert!(matches!(err, DecodeError::DuplicateKey { .. }));
//! ```

pub mod bencode;
pub mod config;
pub mod error;

pub use bencode::{
    canonicalize, canonicalize_to, decode, decode_with, encode, encode_to, BencodeValue,
    ByteString, Dictionary,
};
pub use config::{DecoderConfig, DuplicateKeys};
pub use error::{BencodeError, DecodeError, EncodeError, Result};
