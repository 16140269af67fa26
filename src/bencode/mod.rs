mod cursor;
mod decoder;
mod dict;
mod encoder;
mod value;

pub use decoder::{decode, decode_with};
pub use dict::Dictionary;
pub use encoder::{encode, encode_to};
pub use value::{BencodeValue, ByteString};

use crate::config::DecoderConfig;
use crate::error::Result;
use std::io::Write;

/// Decode `data` and re-encode it in canonical form
pub fn canonicalize(data: &[u8], config: &DecoderConfig) -> Result<Vec<u8>> {
    Ok(encode(&decode_with(data, config)?))
}

/// Decode `data` and write its canonical form into `writer`
pub fn canonicalize_to<W: Write>(data: &[u8], config: &DecoderConfig, writer: &mut W) -> Result<()> {
    let value = decode_with(data, config)?;
    encode_to(&value, writer)?;
    Ok(())
}
