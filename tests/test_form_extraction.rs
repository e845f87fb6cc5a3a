//! Integration tests for form field enumeration.
//!
//! Builds complete documents (trailer → catalog → AcroForm → field tree) and
//! checks the flattened field list against the hierarchy.

use form_oxide::forms::{self, FieldFlags};
use form_oxide::object::{Dict, Object};
use form_oxide::{PdfDocument, WidgetType};

fn dict(entries: Vec<(&str, Object)>) -> Object {
    let mut d = Dict::new();
    for (k, v) in entries {
        d.insert(k.to_string(), v);
    }
    Object::Dictionary(d)
}

/// A document resembling a small registration form.
fn registration_form() -> PdfDocument {
    let mut doc = PdfDocument::new();

    let name_ref = doc.insert_object(dict(vec![
        ("T", Object::String(b"name".to_vec())),
        ("FT", Object::Name("Tx".to_string())),
        ("V", Object::String(b"Ada Lovelace".to_vec())),
    ]));

    let newsletter_ref = doc.insert_object(dict(vec![
        ("T", Object::String(b"newsletter".to_vec())),
        ("FT", Object::Name("Btn".to_string())),
    ]));

    // address.street / address.city inherit /FT and /Ff from their parent
    let street_ref = doc.insert_object(dict(vec![("T", Object::String(b"street".to_vec()))]));
    let city_ref = doc.insert_object(dict(vec![("T", Object::String(b"city".to_vec()))]));
    let address_ref = doc.insert_object(dict(vec![
        ("T", Object::String(b"address".to_vec())),
        ("FT", Object::Name("Tx".to_string())),
        ("Ff", Object::Integer(FieldFlags::REQUIRED.bits() as i64)),
        (
            "Kids",
            Object::Array(vec![Object::Reference(street_ref), Object::Reference(city_ref)]),
        ),
    ]));
    for kid in [street_ref, city_ref] {
        doc.object_mut(kid)
            .unwrap()
            .dict_put("Parent", Object::Reference(address_ref));
    }

    let form = dict(vec![(
        "Fields",
        Object::Array(vec![
            Object::Reference(name_ref),
            Object::Reference(newsletter_ref),
            Object::Reference(address_ref),
        ]),
    )]);
    let form_ref = doc.insert_object(form);
    let catalog_ref = doc.insert_object(dict(vec![("AcroForm", Object::Reference(form_ref))]));
    doc.set_root(catalog_ref);
    doc
}

#[test]
fn enumerates_terminal_fields_with_full_names() {
    let doc = registration_form();
    let fields = forms::form_fields(&doc).unwrap();

    let names: Vec<&str> = fields.iter().map(|f| f.full_name.as_str()).collect();
    assert_eq!(names, vec!["name", "newsletter", "address.street", "address.city"]);
}

#[test]
fn field_summaries_carry_effective_state() {
    let doc = registration_form();
    let fields = forms::form_fields(&doc).unwrap();

    let name = &fields[0];
    assert_eq!(name.widget_type, WidgetType::Text);
    assert_eq!(name.value.as_deref(), Some("Ada Lovelace"));
    assert_eq!(name.flags, 0);
    assert!(name.object_ref.is_some());

    let newsletter = &fields[1];
    assert_eq!(newsletter.widget_type, WidgetType::Checkbox);
    assert_eq!(newsletter.value, None);

    // Children inherit type and flags from the address parent.
    for child in &fields[2..] {
        assert_eq!(child.widget_type, WidgetType::Text);
        assert_eq!(child.flags, FieldFlags::REQUIRED.bits());
    }
}

#[test]
fn documents_without_forms_enumerate_empty() {
    let doc = PdfDocument::new();
    assert!(forms::form_fields(&doc).unwrap().is_empty());

    // Catalog without AcroForm
    let mut doc = PdfDocument::new();
    let catalog_ref = doc.insert_object(dict(vec![]));
    doc.set_root(catalog_ref);
    assert!(forms::form_fields(&doc).unwrap().is_empty());

    // AcroForm without a /Fields array
    let mut doc = PdfDocument::new();
    let form_ref = doc.insert_object(dict(vec![]));
    let catalog_ref = doc.insert_object(dict(vec![("AcroForm", Object::Reference(form_ref))]));
    doc.set_root(catalog_ref);
    assert!(forms::form_fields(&doc).unwrap().is_empty());
}

#[test]
fn retyped_field_is_enumerated_with_its_new_type() {
    let mut doc = registration_form();
    let fields = forms::form_fields(&doc).unwrap();
    let name_ref = fields[0].object_ref.unwrap();

    let field = doc.object_mut(name_ref).unwrap();
    forms::set_field_type(field, WidgetType::ComboBox);

    let fields = forms::form_fields(&doc).unwrap();
    assert_eq!(fields[0].full_name, "name");
    assert_eq!(fields[0].widget_type, WidgetType::ComboBox);
    // Value is untouched by a type rewrite.
    assert_eq!(fields[0].value.as_deref(), Some("Ada Lovelace"));
}

#[test]
fn utf16_field_names_are_decoded() {
    let mut doc = PdfDocument::new();
    // BOM + "été"
    let name_utf16: Vec<u8> = {
        let mut v = vec![0xFE, 0xFF];
        for unit in "été".encode_utf16() {
            v.extend_from_slice(&unit.to_be_bytes());
        }
        v
    };
    let field_ref = doc.insert_object(dict(vec![
        ("T", Object::String(name_utf16)),
        ("FT", Object::Name("Tx".to_string())),
    ]));
    let form_ref = doc.insert_object(dict(vec![(
        "Fields",
        Object::Array(vec![Object::Reference(field_ref)]),
    )]));
    let catalog_ref = doc.insert_object(dict(vec![("AcroForm", Object::Reference(form_ref))]));
    doc.set_root(catalog_ref);

    let fields = forms::form_fields(&doc).unwrap();
    assert_eq!(fields[0].full_name, "été");
}
