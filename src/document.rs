//! Document object store.
//!
//! [`PdfDocument`] holds a pre-built object graph: a table of indirect
//! objects keyed by [`ObjectRef`] plus the trailer dictionary. The graph is
//! populated by whatever produced it (a parser, a generator, a test); this
//! crate only navigates and edits it.
//!
//! Navigation is reference-based: objects stay in the store and lookups hand
//! back `&Object` borrows. Nothing here is thread-safe; callers serialize
//! concurrent access to a document.

use crate::error::{Error, Result};
use crate::object::{Dict, Object, ObjectRef};
use std::collections::HashMap;

/// Maximum number of indirection hops followed when resolving a reference.
///
/// Reference chains in real documents are one hop; the bound exists so a
/// corrupt graph with a reference cycle cannot hang resolution.
const MAX_REFERENCE_HOPS: usize = 32;

/// An in-memory PDF document object graph.
#[derive(Debug)]
pub struct PdfDocument {
    /// Indirect objects by reference
    objects: HashMap<ObjectRef, Object>,
    /// Trailer dictionary (carries the /Root entry)
    trailer: Object,
    /// Next object number handed out by [`PdfDocument::insert_object`]
    next_id: u32,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    /// Create an empty document with an empty trailer dictionary.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            trailer: Object::Dictionary(Dict::new()),
            next_id: 1,
        }
    }

    /// Add an indirect object to the store, allocating a fresh reference.
    pub fn insert_object(&mut self, obj: Object) -> ObjectRef {
        let obj_ref = ObjectRef::new(self.next_id, 0);
        self.next_id += 1;
        self.objects.insert(obj_ref, obj);
        obj_ref
    }

    /// Insert or replace the object stored at `obj_ref`.
    pub fn set_object(&mut self, obj_ref: ObjectRef, obj: Object) {
        self.next_id = self.next_id.max(obj_ref.id + 1);
        self.objects.insert(obj_ref, obj);
    }

    /// Get the object stored at `obj_ref`, if any.
    pub fn get_object(&self, obj_ref: ObjectRef) -> Option<&Object> {
        self.objects.get(&obj_ref)
    }

    /// Mutable access to the object stored at `obj_ref`.
    pub fn object_mut(&mut self, obj_ref: ObjectRef) -> Option<&mut Object> {
        self.objects.get_mut(&obj_ref)
    }

    /// Load an object by its reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectNotFound`] if the reference is not in the store.
    pub fn load_object(&self, obj_ref: ObjectRef) -> Result<&Object> {
        self.objects
            .get(&obj_ref)
            .ok_or(Error::ObjectNotFound(obj_ref.id, obj_ref.gen))
    }

    /// The trailer dictionary.
    pub fn trailer(&self) -> &Object {
        &self.trailer
    }

    /// Mutable access to the trailer dictionary.
    pub fn trailer_mut(&mut self) -> &mut Object {
        &mut self.trailer
    }

    /// Point the trailer's /Root entry at `catalog_ref`.
    pub fn set_root(&mut self, catalog_ref: ObjectRef) {
        self.trailer.dict_put("Root", Object::Reference(catalog_ref));
    }

    /// Follow indirect references until a direct object is reached.
    ///
    /// Direct objects resolve to themselves. Dangling references, and chains
    /// longer than [`MAX_REFERENCE_HOPS`], resolve to `None`.
    pub fn resolve<'a>(&'a self, obj: &'a Object) -> Option<&'a Object> {
        let mut current = obj;
        for _ in 0..MAX_REFERENCE_HOPS {
            match current.as_reference() {
                Some(obj_ref) => current = self.objects.get(&obj_ref)?,
                None => return Some(current),
            }
        }
        log::warn!("Reference chain exceeds {} hops, treating as dangling", MAX_REFERENCE_HOPS);
        None
    }

    /// Get the document catalog (the object behind the trailer's /Root).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPdf`] if the trailer has no /Root entry or
    /// /Root is not a reference, and [`Error::ObjectNotFound`] if the
    /// reference is dangling.
    pub fn catalog(&self) -> Result<&Object> {
        let root_ref = self
            .trailer
            .dict_get("Root")
            .ok_or_else(|| Error::InvalidPdf("Trailer missing /Root entry".to_string()))?
            .as_reference()
            .ok_or_else(|| Error::InvalidPdf("/Root is not a reference".to_string()))?;

        self.load_object(root_ref)
    }

    /// Get the interactive-form defaults dictionary (catalog /AcroForm).
    ///
    /// A safe optional-chained lookup of trailer → /Root → /AcroForm: any
    /// missing link yields `None` rather than an error.
    pub fn acro_form(&self) -> Option<&Object> {
        self.catalog()
            .ok()
            .and_then(|catalog| catalog.dict_get("AcroForm"))
            .and_then(|form| self.resolve(form))
    }
}
