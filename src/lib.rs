//! # Form Oxide
//!
//! AcroForm field toolkit for PDF document object graphs: inheritance-aware
//! attribute resolution, widget-type classification, and field-type
//! rewriting.
//!
//! The crate operates on a pre-built, in-memory object graph
//! ([`PdfDocument`]) — it owns no parser, no writer, and no I/O. What it does
//! own is the semantics of interactive form fields (ISO 32000-1:2008 §12.7):
//!
//! - **Inheritable attributes**: `/FT`, `/Ff`, `/V` and friends may live on a
//!   field, on an ancestor reachable through `/Parent`, or on the document's
//!   AcroForm defaults dictionary. [`forms::resolve_inheritable`] walks that
//!   chain with first-match-wins semantics.
//! - **Widget types**: [`forms::field_type`] classifies a field into a
//!   [`WidgetType`] from its effective type name and flag bits;
//!   [`forms::set_field_type`] performs the inverse, rewriting `/FT` and
//!   editing only the flag bits the target type owns.
//! - **Values**: [`forms::field_value_text`] extracts a field's effective
//!   value whether it is stored as a string or a (filtered) stream.
//!
//! ## Quick Start
//!
//! ```
//! use form_oxide::object::{Dict, Object};
//! use form_oxide::{forms, PdfDocument, WidgetType};
//!
//! let mut doc = PdfDocument::new();
//!
//! let mut field = Dict::new();
//! field.insert("FT".to_string(), Object::Name("Btn".to_string()));
//! let field_ref = doc.insert_object(Object::Dictionary(field));
//!
//! let field = doc.load_object(field_ref).unwrap();
//! assert_eq!(forms::field_type(&doc, field), WidgetType::Checkbox);
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Document object model
pub mod document;
pub mod object;

// Stream decoders
pub mod decoders;

// Interactive form fields
pub mod forms;

// Re-exports
pub use document::PdfDocument;
pub use error::{Error, Result};
pub use forms::{FormField, WidgetType};
pub use object::{Object, ObjectRef};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
