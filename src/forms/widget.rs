//! Widget type classification and rewriting.
//!
//! A field's UI behavior is determined by its inheritable /FT name plus the
//! discriminator bits of /Ff: `Btn` splits into push button, radio button, or
//! checkbox; `Ch` into combo box or list box. [`field_type`] derives the
//! [`WidgetType`] and [`set_field_type`] performs the inverse, writing /FT
//! and editing exactly the discriminator bits the target cares about.

use crate::document::PdfDocument;
use crate::forms::field_flags::{ButtonFieldFlags, ChoiceFieldFlags};
use crate::forms::inheritance::{field_flags, resolve_inheritable};
use crate::object::Object;

/// Semantic widget type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetType {
    /// Not an interactive form field (unknown or absent /FT)
    NotWidget,
    /// Push button (/Btn with PUSHBUTTON set)
    PushButton,
    /// Checkbox (/Btn with neither PUSHBUTTON nor RADIO set)
    Checkbox,
    /// Radio button (/Btn with RADIO set)
    RadioButton,
    /// Text field (/Tx)
    Text,
    /// List box (/Ch without COMBO)
    ListBox,
    /// Combo box (/Ch with COMBO set)
    ComboBox,
    /// Digital signature field (/Sig)
    Signature,
}

impl WidgetType {
    /// The /FT name written when rewriting a field to this type.
    ///
    /// `None` for [`WidgetType::NotWidget`], which never writes.
    pub fn pdf_type_name(self) -> Option<&'static str> {
        match self {
            WidgetType::PushButton | WidgetType::Checkbox | WidgetType::RadioButton => Some("Btn"),
            WidgetType::Text => Some("Tx"),
            WidgetType::ListBox | WidgetType::ComboBox => Some("Ch"),
            WidgetType::Signature => Some("Sig"),
            WidgetType::NotWidget => None,
        }
    }

    /// The /Ff edits for rewriting a field to this type: (setbits, clearbits).
    ///
    /// Bits outside the returned masks are never touched. Both masks empty
    /// means /Ff is left entirely alone.
    fn flag_edits(self) -> (u32, u32) {
        match self {
            WidgetType::PushButton => (ButtonFieldFlags::PUSHBUTTON.bits(), 0),
            WidgetType::Checkbox => (
                ButtonFieldFlags::RADIO.bits(),
                ButtonFieldFlags::PUSHBUTTON.bits(),
            ),
            WidgetType::RadioButton => (
                0,
                (ButtonFieldFlags::PUSHBUTTON | ButtonFieldFlags::RADIO).bits(),
            ),
            WidgetType::ListBox => (0, ChoiceFieldFlags::COMBO.bits()),
            WidgetType::ComboBox => (ChoiceFieldFlags::COMBO.bits(), 0),
            WidgetType::Text | WidgetType::Signature | WidgetType::NotWidget => (0, 0),
        }
    }
}

impl std::fmt::Display for WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WidgetType::NotWidget => "not a widget",
            WidgetType::PushButton => "push button",
            WidgetType::Checkbox => "checkbox",
            WidgetType::RadioButton => "radio button",
            WidgetType::Text => "text",
            WidgetType::ListBox => "list box",
            WidgetType::ComboBox => "combo box",
            WidgetType::Signature => "signature",
        };
        f.write_str(name)
    }
}

/// Classify a field's widget type from its effective /FT and /Ff.
///
/// Total over every input: unrecognized and absent type names classify as
/// [`WidgetType::NotWidget`]. Pure read.
pub fn field_type(doc: &PdfDocument, field: &Object) -> WidgetType {
    let type_name = resolve_inheritable(doc, field, "FT");
    let flags = field_flags(doc, field);

    match type_name.and_then(Object::as_name) {
        Some("Btn") => {
            if flags & ButtonFieldFlags::PUSHBUTTON.bits() != 0 {
                WidgetType::PushButton
            } else if flags & ButtonFieldFlags::RADIO.bits() != 0 {
                WidgetType::RadioButton
            } else {
                WidgetType::Checkbox
            }
        },
        Some("Tx") => WidgetType::Text,
        Some("Ch") => {
            if flags & ChoiceFieldFlags::COMBO.bits() != 0 {
                WidgetType::ComboBox
            } else {
                WidgetType::ListBox
            }
        },
        Some("Sig") => WidgetType::Signature,
        _ => WidgetType::NotWidget,
    }
}

/// Rewrite a field to the given widget type.
///
/// Writes /FT, then applies the target's flag edits to the field's local /Ff
/// (absent treated as 0), leaving every unrelated bit untouched. Targets
/// with no flag edits do not write /Ff at all, so a field that never had
/// flags does not acquire a spurious zero entry. [`WidgetType::NotWidget`]
/// writes nothing.
///
/// `field` is expected to be a dictionary; other objects are left unchanged.
pub fn set_field_type(field: &mut Object, target: WidgetType) {
    if let Some(type_name) = target.pdf_type_name() {
        field.dict_put("FT", Object::Name(type_name.to_string()));
    }

    let (setbits, clearbits) = target.flag_edits();
    if setbits != 0 || clearbits != 0 {
        let bits = field.dict_get_int("Ff") as u32;
        let bits = (bits & !clearbits) | setbits;
        field.dict_put("Ff", Object::Integer(bits as i64));
    }
}
