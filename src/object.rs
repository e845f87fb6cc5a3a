//! PDF object types.
//!
//! The object model mirrors the eight basic PDF object types plus indirect
//! references. Form fields, the AcroForm defaults dictionary, and the
//! document catalog are all `Object::Dictionary` values; field values may
//! additionally be `Object::Stream` carriers.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// A dictionary body: name → value.
pub type Dict = HashMap<String, Object>;

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Null object
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Real (floating-point) value
    Real(f64),
    /// String (byte array)
    String(Vec<u8>),
    /// Name (starting with /)
    Name(String),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (key-value pairs)
    Dictionary(Dict),
    /// Stream (dictionary + data)
    Stream {
        /// Stream dictionary
        dict: Dict,
        /// Raw (possibly filtered) stream data
        data: bytes::Bytes,
    },
    /// Indirect object reference
    Reference(ObjectRef),
}

/// Reference to an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

impl Object {
    /// Get the type name of this object (without data).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "Null",
            Object::Boolean(_) => "Boolean",
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::String(_) => "String",
            Object::Name(_) => "Name",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
            Object::Stream { .. } => "Stream",
            Object::Reference(_) => "Reference",
        }
    }

    /// Try to cast to integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to cast to name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to string (bytes).
    pub fn as_string(&self) -> Option<&[u8]> {
        match self {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to array.
    pub fn as_array(&self) -> Option<&[Object]> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to cast to reference.
    pub fn as_reference(&self) -> Option<ObjectRef> {
        match self {
            Object::Reference(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to cast to dictionary. Works for both Dictionary and Stream objects.
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream { dict, .. } => Some(dict),
            _ => None,
        }
    }

    /// Mutable dictionary access. Works for both Dictionary and Stream objects.
    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream { dict, .. } => Some(dict),
            _ => None,
        }
    }

    /// Check if object is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    /// Check if object is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Object::String(_))
    }

    /// Check if object is a stream.
    pub fn is_stream(&self) -> bool {
        matches!(self, Object::Stream { .. })
    }

    /// Check whether this object is the name `name`.
    ///
    /// Non-name objects compare unequal to every name.
    pub fn name_is(&self, name: &str) -> bool {
        matches!(self, Object::Name(n) if n == name)
    }

    /// Look up `key` in this object's dictionary.
    ///
    /// Returns `None` for non-dictionary objects and for absent keys. The
    /// returned value is whatever the dictionary stores, indirect references
    /// included; callers that need the referenced object go through
    /// [`PdfDocument::resolve`](crate::document::PdfDocument::resolve).
    pub fn dict_get(&self, key: &str) -> Option<&Object> {
        self.as_dict().and_then(|d| d.get(key))
    }

    /// Insert or replace `key` in this object's dictionary.
    ///
    /// A no-op on non-dictionary objects.
    pub fn dict_put(&mut self, key: impl Into<String>, value: Object) {
        if let Some(d) = self.as_dict_mut() {
            d.insert(key.into(), value);
        }
    }

    /// Integer value of `key` in this object's dictionary, absent treated as 0.
    ///
    /// Looks only at the object itself, never at ancestors.
    pub fn dict_get_int(&self, key: &str) -> i64 {
        self.dict_get(key).and_then(Object::as_integer).unwrap_or(0)
    }

    /// Decode this stream's data through its filter pipeline.
    ///
    /// The `Filter` entry may be a single name or an array of names applied
    /// in order. Streams without filters yield their raw data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidObjectType`] if this is not a stream, and
    /// propagates [`Error::Decode`] / [`Error::UnsupportedFilter`] from the
    /// filter pipeline.
    pub fn decode_stream_data(&self) -> Result<Vec<u8>> {
        match self {
            Object::Stream { dict, data } => {
                let filters = dict
                    .get("Filter")
                    .map(extract_filter_names)
                    .unwrap_or_default();

                if filters.is_empty() {
                    Ok(data.to_vec())
                } else {
                    crate::decoders::decode_stream(data, &filters)
                }
            },
            _ => Err(Error::InvalidObjectType {
                expected: "Stream".to_string(),
                found: self.type_name().to_string(),
            }),
        }
    }
}

/// Extract filter names from a Filter object.
///
/// The Filter entry can be a single Name (e.g. /FlateDecode) or an Array of
/// Names applied in order.
fn extract_filter_names(filter_obj: &Object) -> Vec<String> {
    match filter_obj {
        Object::Name(name) => vec![name.clone()],
        Object::Array(arr) => arr
            .iter()
            .filter_map(|obj| obj.as_name().map(|s| s.to_string()))
            .collect(),
        _ => vec![],
    }
}
