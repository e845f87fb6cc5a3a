//! FlateDecode (zlib/deflate) implementation.
//!
//! The most common PDF compression filter. Uses the flate2 crate; input with
//! a corrupt zlib header is retried as raw deflate before giving up.

use crate::decoders::StreamDecoder;
use crate::error::{Error, Result};
use flate2::read::{DeflateDecoder, ZlibDecoder};
use std::io::Read;

/// FlateDecode filter implementation.
pub struct FlateDecoder;

impl StreamDecoder for FlateDecoder {
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        let mut decoder = ZlibDecoder::new(input);

        let zlib_err = match decoder.read_to_end(&mut output) {
            Ok(_) => return Ok(output),
            Err(e) => e,
        };

        // Some generators emit raw deflate data without the zlib wrapper.
        log::debug!("Zlib decode failed ({}), retrying as raw deflate", zlib_err);
        output.clear();
        let mut deflate_decoder = DeflateDecoder::new(input);
        match deflate_decoder.read_to_end(&mut output) {
            Ok(_) => Ok(output),
            Err(deflate_err) => Err(Error::Decode(format!(
                "FlateDecode failed: zlib: {}, raw deflate: {}",
                zlib_err, deflate_err
            ))),
        }
    }

    fn name(&self) -> &str {
        "FlateDecode"
    }
}
