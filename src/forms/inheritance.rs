//! Inheritable field attribute resolution.
//!
//! Most field attributes (/FT, /Ff, /V, /DA, ...) may live on the field
//! itself, on any ancestor reachable through /Parent, or on the document's
//! AcroForm dictionary as a form-wide default. Lookup order is: the field,
//! then each ancestor in turn (first match wins, no merging), then the
//! AcroForm dictionary once the chain is exhausted.

use crate::document::PdfDocument;
use crate::error::Result;
use crate::object::Object;

/// Maximum number of /Parent links followed during attribute resolution.
///
/// Well-formed field trees are a handful of levels deep. The bound keeps
/// resolution terminating on documents with a corrupt, cyclic /Parent chain;
/// hitting it behaves like reaching the top of the chain.
pub const MAX_PARENT_DEPTH: usize = 64;

/// Resolve the effective value of an inheritable field attribute.
///
/// Walks `field` and its /Parent chain looking for `key`, returning the
/// first value found (resolved through indirection). Falls back to the
/// AcroForm defaults dictionary only when no node in the chain defines the
/// key. Returns `None` when nothing does.
///
/// Pure read; never fails. A dangling /Parent reference ends the walk the
/// same way a missing /Parent entry does.
pub fn resolve_inheritable<'a>(
    doc: &'a PdfDocument,
    field: &'a Object,
    key: &str,
) -> Option<&'a Object> {
    let mut node = doc.resolve(field);
    let mut depth = 0;

    while let Some(current) = node {
        if let Some(value) = current.dict_get(key) {
            return doc.resolve(value);
        }

        if depth >= MAX_PARENT_DEPTH {
            log::warn!(
                "/Parent chain deeper than {} while resolving /{}, assuming a cycle",
                MAX_PARENT_DEPTH,
                key
            );
            break;
        }
        depth += 1;

        node = current.dict_get("Parent").and_then(|p| doc.resolve(p));
    }

    doc.acro_form()
        .and_then(|form| form.dict_get(key))
        .and_then(|value| doc.resolve(value))
}

/// Byte content of a value that may be a string or a stream.
///
/// Strings yield their bytes directly; streams are decoded through their
/// filter pipeline first. Any other object yields `Ok(None)`.
///
/// # Errors
///
/// Propagates stream decode failures; no partial data is returned.
pub fn string_or_stream_bytes(value: &Object) -> Result<Option<Vec<u8>>> {
    if value.is_string() {
        Ok(value.as_string().map(|bytes| bytes.to_vec()))
    } else if value.is_stream() {
        value.decode_stream_data().map(Some)
    } else {
        Ok(None)
    }
}

/// Raw bytes of the field's effective value (inheritable /V).
///
/// # Errors
///
/// Propagates a stream decode failure when the value is stream-backed.
pub fn field_value_bytes(doc: &PdfDocument, field: &Object) -> Result<Option<Vec<u8>>> {
    match resolve_inheritable(doc, field, "V") {
        Some(value) => string_or_stream_bytes(value),
        None => Ok(None),
    }
}

/// The field's effective value as text (inheritable /V).
///
/// Bytes with a UTF-16BE BOM are decoded as UTF-16BE; everything else is
/// treated as PDFDocEncoding, which agrees with Latin-1 over the range form
/// values use in practice.
///
/// # Errors
///
/// Propagates a stream decode failure when the value is stream-backed.
pub fn field_value_text(doc: &PdfDocument, field: &Object) -> Result<Option<String>> {
    Ok(field_value_bytes(doc, field)?.map(|bytes| decode_text_string(&bytes)))
}

/// The field's effective flags (inheritable /Ff), absent treated as 0.
pub fn field_flags(doc: &PdfDocument, field: &Object) -> u32 {
    resolve_inheritable(doc, field, "Ff")
        .and_then(Object::as_integer)
        .unwrap_or(0) as u32
}

/// Decode a PDF text string: UTF-16BE with BOM, else PDFDocEncoding.
pub(crate) fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
