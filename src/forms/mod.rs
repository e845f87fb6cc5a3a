//! Interactive form (AcroForm) field support.
//!
//! See ISO 32000-1:2008, Section 12.7 - Interactive Forms.
//!
//! The module is built around two operations over an externally-owned
//! document object graph:
//!
//! - **Attribute resolution** ([`resolve_inheritable`]): field attributes may
//!   be defined locally, inherited through the /Parent chain, or defaulted by
//!   the document's AcroForm dictionary; lookup returns the first match.
//! - **Widget classification** ([`field_type`] / [`set_field_type`]): the
//!   mapping between the compact (/FT, /Ff) encoding and the [`WidgetType`]
//!   enumeration, in both directions.
//!
//! Everything here is a plain function taking `&PdfDocument` (reads) or a
//! `&mut Object` (the single write path); the module owns no state.

pub mod field_flags;
pub mod fields;
pub mod inheritance;
pub mod widget;

pub use field_flags::{ButtonFieldFlags, ChoiceFieldFlags, FieldFlags, TextFieldFlags};
pub use fields::{form_fields, FormField};
pub use inheritance::{
    field_flags, field_value_bytes, field_value_text, resolve_inheritable,
    string_or_stream_bytes, MAX_PARENT_DEPTH,
};
pub use widget::{field_type, set_field_type, WidgetType};

use crate::document::PdfDocument;
use crate::object::Object;

/// Whether the field's effective flags mark it read-only.
pub fn is_read_only(doc: &PdfDocument, field: &Object) -> bool {
    field_flags(doc, field) & FieldFlags::READ_ONLY.bits() != 0
}

/// Whether the field's effective flags mark it required.
pub fn is_required(doc: &PdfDocument, field: &Object) -> bool {
    field_flags(doc, field) & FieldFlags::REQUIRED.bits() != 0
}

/// Whether a text field allows multiple lines.
///
/// Tests the MULTILINE bit; only meaningful for /Tx fields.
pub fn is_multiline(doc: &PdfDocument, field: &Object) -> bool {
    field_flags(doc, field) & TextFieldFlags::MULTILINE.bits() != 0
}

/// Whether a text field is a password (obscured) field.
pub fn is_password(doc: &PdfDocument, field: &Object) -> bool {
    field_flags(doc, field) & TextFieldFlags::PASSWORD.bits() != 0
}

/// Whether a list box allows multiple selections.
///
/// Tests the MULTI_SELECT bit; only meaningful for /Ch fields.
pub fn is_multi_select(doc: &PdfDocument, field: &Object) -> bool {
    field_flags(doc, field) & ChoiceFieldFlags::MULTI_SELECT.bits() != 0
}
