//! Form field enumeration.
//!
//! Walks the document's `AcroForm /Fields` tree, descending through /Kids,
//! and produces a flat summary of every terminal field with its effective
//! (inheritance-resolved) type, value, and flags.

use crate::document::PdfDocument;
use crate::error::Result;
use crate::forms::inheritance::{decode_text_string, field_flags, field_value_text, MAX_PARENT_DEPTH};
use crate::forms::widget::{field_type, WidgetType};
use crate::object::{Object, ObjectRef};

/// Summary of one terminal form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// Partial field name from /T
    pub name: String,
    /// Full qualified name (ancestor names joined with '.')
    pub full_name: String,
    /// Effective widget type
    pub widget_type: WidgetType,
    /// Effective value, decoded to text
    pub value: Option<String>,
    /// Effective field flags
    pub flags: u32,
    /// Object reference, when the field is an indirect object
    pub object_ref: Option<ObjectRef>,
}

/// Enumerate all terminal form fields in the document.
///
/// Documents without an AcroForm, or with an empty /Fields array, yield an
/// empty list. Nodes that classify as [`WidgetType::NotWidget`] are skipped,
/// as are entries that are not dictionaries.
///
/// # Errors
///
/// Propagates a stream decode failure from a stream-backed field value.
pub fn form_fields(doc: &PdfDocument) -> Result<Vec<FormField>> {
    let entries = doc
        .acro_form()
        .and_then(|form| form.dict_get("Fields"))
        .and_then(|fields| doc.resolve(fields))
        .and_then(Object::as_array);

    let mut out = Vec::new();
    if let Some(entries) = entries {
        for entry in entries {
            collect_fields(doc, entry, "", 0, &mut out)?;
        }
    }
    Ok(out)
}

/// Collect `entry` and its /Kids subtree into `out`.
///
/// Non-terminal nodes (those with /Kids) contribute their name to the path
/// and recurse; terminal nodes are classified and summarized.
fn collect_fields(
    doc: &PdfDocument,
    entry: &Object,
    parent_name: &str,
    depth: usize,
    out: &mut Vec<FormField>,
) -> Result<()> {
    if depth > MAX_PARENT_DEPTH {
        log::warn!("/Kids tree deeper than {}, assuming a cycle", MAX_PARENT_DEPTH);
        return Ok(());
    }

    let object_ref = entry.as_reference();
    let node = match doc.resolve(entry) {
        Some(node) if node.as_dict().is_some() => node,
        _ => return Ok(()),
    };

    let partial_name = node
        .dict_get("T")
        .and_then(|t| doc.resolve(t))
        .and_then(Object::as_string)
        .map(decode_text_string)
        .unwrap_or_default();

    let full_name = match (parent_name.is_empty(), partial_name.is_empty()) {
        (true, _) => partial_name.clone(),
        (false, true) => parent_name.to_string(),
        (false, false) => format!("{}.{}", parent_name, partial_name),
    };

    if let Some(kids) = node.dict_get("Kids").and_then(|k| doc.resolve(k)) {
        if let Some(kids) = kids.as_array() {
            for kid in kids {
                collect_fields(doc, kid, &full_name, depth + 1, out)?;
            }
            return Ok(());
        }
    }

    let widget_type = field_type(doc, node);
    if widget_type == WidgetType::NotWidget {
        return Ok(());
    }

    out.push(FormField {
        name: partial_name,
        full_name,
        widget_type,
        value: field_value_text(doc, node)?,
        flags: field_flags(doc, node),
        object_ref,
    });
    Ok(())
}
