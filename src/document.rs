//! The ordered element multimap produced by a transformation.
//!
//! [`MetadataDocument`] is the output side of the engine: an ordered
//! mapping from element name (e.g. `dcterms:subject`) to the ordered
//! values recorded for it. Element names appear in first-append order and
//! values accumulate in append order, so document ordering follows the
//! entity's field declaration order, then the derived-elements order.
//!
//! A document is created empty at the start of one entity's
//! transformation, populated during that transformation, and handed to
//! the renderer complete; it is never reused across entities.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;

/// Ordered multimap of output element names to their values.
///
/// An element name is only present once at least one value has been
/// appended for it; there are never entries with zero values. Names may
/// receive values from many unrelated source fields; values accumulate
/// and never overwrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataDocument {
    #[serde(flatten)]
    elements: IndexMap<String, Vec<String>>,
}

impl MetadataDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        MetadataDocument::default()
    }

    /// Append a value under the given element name.
    pub fn append(&mut self, element: &str, value: impl Into<String>) {
        self.elements
            .entry(element.to_string())
            .or_default()
            .push(value.into());
    }

    /// Append every value, in order, under the given element name.
    ///
    /// Appending nothing leaves the document unchanged; no empty entry is
    /// created for the element.
    pub fn extend(&mut self, element: &str, values: impl IntoIterator<Item = String>) {
        for value in values {
            self.append(element, value);
        }
    }

    /// Values recorded for an element, in append order.
    #[must_use]
    pub fn values(&self, element: &str) -> Option<&[String]> {
        self.elements.get(element).map(Vec::as_slice)
    }

    /// Number of distinct element names recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no elements have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate elements in first-append order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.elements
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Serialize the document as a JSON object of element name to value
    /// array, preserving element and value order.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
