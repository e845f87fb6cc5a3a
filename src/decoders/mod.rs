//! Stream decoder implementations for PDF filters.
//!
//! Field values stored as streams must be decoded before their bytes can be
//! used. This module provides the filters that show up in form value streams:
//! - FlateDecode (zlib/deflate) - most common
//! - ASCIIHexDecode - hexadecimal encoding
//! - RunLengthDecode - run-length encoding
//!
//! Decoders can be chained together in a filter pipeline. A filter name with
//! no decoder is an error, never a silent pass-through.

use crate::error::{Error, Result};

mod ascii_hex;
mod flate;
mod runlength;

pub use ascii_hex::AsciiHexDecoder;
pub use flate::FlateDecoder;
pub use runlength::RunLengthDecoder;

/// Upper bound on decoded output size (decompression bomb protection).
///
/// Form field values are small; anything close to this limit is hostile or
/// corrupt input, not a form.
const MAX_DECODED_SIZE: usize = 16 * 1024 * 1024;

/// Trait for PDF stream decoders.
///
/// Each decoder implements a specific PDF filter algorithm.
pub trait StreamDecoder {
    /// Decode the input data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the data cannot be decoded.
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Get the name of this decoder (e.g., "FlateDecode").
    fn name(&self) -> &str;
}

/// Decode stream data using a filter pipeline.
///
/// PDF streams can have multiple filters applied in sequence; this applies
/// each named filter in order.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFilter`] for an unknown filter name,
/// [`Error::Decode`] if any stage fails or the decoded output exceeds the
/// size limit.
pub fn decode_stream(data: &[u8], filters: &[String]) -> Result<Vec<u8>> {
    let mut current = data.to_vec();

    for filter in filters {
        let decoder: &dyn StreamDecoder = match filter.as_str() {
            "FlateDecode" | "Fl" => &FlateDecoder,
            "ASCIIHexDecode" | "AHx" => &AsciiHexDecoder,
            "RunLengthDecode" | "RL" => &RunLengthDecoder,
            other => return Err(Error::UnsupportedFilter(other.to_string())),
        };

        log::debug!("Applying filter {} to {} bytes", decoder.name(), current.len());
        current = decoder.decode(&current)?;

        if current.len() > MAX_DECODED_SIZE {
            return Err(Error::Decode(format!(
                "{}: decoded output exceeds {} byte limit",
                decoder.name(),
                MAX_DECODED_SIZE
            )));
        }
    }

    Ok(current)
}
