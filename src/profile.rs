//! Profile configuration: mapping tables and element selection.
//!
//! A [`Profile`] bundles everything that distinguishes one output schema
//! from another: the field/sub-record/relator mapping tables, the special
//! element configuration (titles, notes, file links, persistent link,
//! thumbnail), and the static serialization descriptors (metadata format
//! and document wrapper). Profiles are plain values handed to the
//! transformer; the engine varies only by the data carried here, never by
//! profile identity.
//!
//! Built-in profiles live in [`crate::dplava`] and [`crate::qdc`].
//! `Profile` derives serde, so further schemas can be loaded from
//! configuration files without code changes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OAI metadata-format descriptor advertised for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFormat {
    /// Metadata prefix (e.g. `oai_qdc`).
    pub prefix: String,
    /// URL of the XML schema documents validate against.
    pub schema: String,
    /// Namespace URI of the root element.
    pub namespace: String,
}

/// Root element and attribute declarations wrapped around a rendered
/// document.
///
/// Attributes are kept in declaration order; they carry the namespace
/// prefix declarations and the `xsi:schemaLocation` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentWrapper {
    /// Name of the root element (e.g. `mdRecord`).
    pub root_element: String,
    /// Attributes on the root element, in declaration order.
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
}

/// A named output schema: mapping tables plus element configuration.
///
/// Toggleable elements use `Option<String>`: `None` disables the element
/// for the profile, suppressing the corresponding output entirely. File
/// links are toggled through [`media_type_elements`](Self::media_type_elements)
/// itself; an empty map disables them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Metadata-format descriptor for this profile.
    pub format: MetadataFormat,
    /// Root element and namespace declarations for rendered documents.
    pub wrapper: DocumentWrapper,
    /// Flat field-name to element mapping.
    #[serde(default)]
    pub field_mapping: IndexMap<String, String>,
    /// Nested mapping for sub-record fields, keyed by the parent field
    /// name and then by sub-field name. Keyed by field name rather than
    /// sub-record type: two fields holding the same type may map
    /// differently.
    #[serde(default)]
    pub sub_record_mapping: IndexMap<String, IndexMap<String, String>>,
    /// Relator-code to element mapping for linked agents.
    #[serde(default)]
    pub relator_mapping: IndexMap<String, String>,
    /// Fields whose values are linked-agent references.
    #[serde(default)]
    pub linked_agent_fields: Vec<String>,
    /// Fields whose values are title sub-records.
    #[serde(default)]
    pub title_sub_record_fields: Vec<String>,
    /// Fields whose values are note sub-records.
    #[serde(default)]
    pub note_sub_record_fields: Vec<String>,
    /// Element receiving untyped titles; `None` disables them.
    #[serde(default)]
    pub main_title_element: Option<String>,
    /// Element receiving typed titles; `None` disables them.
    #[serde(default)]
    pub alternative_title_element: Option<String>,
    /// Element receiving notes whose type has no specific mapping;
    /// `None` suppresses such notes.
    #[serde(default)]
    pub default_note_element: Option<String>,
    /// Elements for note types mapped differently from the default.
    #[serde(default)]
    pub note_type_elements: IndexMap<String, String>,
    /// Media-use URI to element mapping for derived file links; an empty
    /// map disables file links.
    #[serde(default)]
    pub media_type_elements: IndexMap<String, String>,
    /// Element receiving the entity's persistent URL; `None` disables it.
    #[serde(default)]
    pub persistent_link_element: Option<String>,
    /// Element receiving the representative-image URL; `None` disables
    /// it.
    #[serde(default)]
    pub thumbnail_element: Option<String>,
    /// Strip HTML tags from extracted values.
    #[serde(default)]
    pub strip_markup: bool,
}

/// How one entity field is handled during transformation.
///
/// Produced by [`Profile::classify`]; first match wins, checked in the
/// declaration order of the variants below. Title and note fields fall
/// through in the transformer: a flat mapping entry for the same field
/// fires in addition to the special handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldHandling<'a> {
    /// Values are agent references routed by relator code.
    LinkedAgent,
    /// Values are title sub-records.
    TitleSubRecords,
    /// Values are note sub-records.
    NoteSubRecords,
    /// Values map directly to the named output element.
    Direct(&'a str),
    /// Values are sub-records flattened through the nested mapping.
    SubRecords(&'a IndexMap<String, String>),
    /// The field contributes nothing to the document.
    Skip,
}

impl Profile {
    /// Classify a field by name.
    ///
    /// Checked in order: linked-agent set, title set, note set, flat
    /// field mapping, sub-record mapping; anything else is skipped.
    /// Classification looks only at the name; emptiness and visibility
    /// are checked by the transformer where each category requires.
    #[must_use]
    pub fn classify(&self, field_name: &str) -> FieldHandling<'_> {
        if self.linked_agent_fields.iter().any(|f| f == field_name) {
            return FieldHandling::LinkedAgent;
        }
        if self.title_sub_record_fields.iter().any(|f| f == field_name) {
            return FieldHandling::TitleSubRecords;
        }
        if self.note_sub_record_fields.iter().any(|f| f == field_name) {
            return FieldHandling::NoteSubRecords;
        }
        if let Some(element) = self.field_mapping.get(field_name) {
            return FieldHandling::Direct(element);
        }
        if let Some(nested) = self.sub_record_mapping.get(field_name) {
            return FieldHandling::SubRecords(nested);
        }
        FieldHandling::Skip
    }

    /// Element a field maps to directly, if any.
    #[must_use]
    pub fn field_element(&self, field_name: &str) -> Option<&str> {
        self.field_mapping.get(field_name).map(String::as_str)
    }

    /// Nested sub-field mapping for a sub-record field, if any.
    #[must_use]
    pub fn sub_record_elements(&self, field_name: &str) -> Option<&IndexMap<String, String>> {
        self.sub_record_mapping.get(field_name)
    }

    /// Element a relator code routes to, if the code is recognized.
    #[must_use]
    pub fn relator_element(&self, code: &str) -> Option<&str> {
        self.relator_mapping.get(code).map(String::as_str)
    }

    /// Destination element for a note of the given type.
    ///
    /// Specific note-type mappings win over the default note element;
    /// `None` means the note is suppressed.
    #[must_use]
    pub fn note_element(&self, note_type: &str) -> Option<&str> {
        self.note_type_elements
            .get(note_type)
            .map(String::as_str)
            .or(self.default_note_element.as_deref())
    }
}

/// Build an owned ordered table from a static pair slice.
pub(crate) fn table(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

/// Build an owned name list from a static slice.
pub(crate) fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
