//! The record transformation engine.
//!
//! [`RecordTransformer`] walks an entity's fields in declaration order,
//! routes each field through the profile's classification, and
//! accumulates output values into a [`MetadataDocument`]:
//!
//! - Direct-mapped fields run through value extraction
//! - Sub-record fields flatten one level through the nested mapping
//! - Title, note, and linked-agent fields get their special handling
//! - The derived file-link, persistent-URL, and thumbnail elements are
//!   appended last, in that order
//!
//! The transformer holds only read-only configuration; every call to
//! [`transform`](RecordTransformer::transform) builds a fresh document,
//! so one transformer can serve any number of entities, from any number
//! of threads, without locking.
//!
//! # Examples
//!
//! ```ignore
//! use oaimap::{dplava, Entity, RecordTransformer, StaticHost};
//!
//! let profile = dplava::profile();
//! let host = StaticHost::new().with_label("node:3", "Collection A");
//! let transformer = RecordTransformer::new(&profile, &host);
//!
//! let entity = Entity::builder("node:17")
//!     .reference("field_member_of", "node:3")
//!     .scalar("field_language", "eng")
//!     .build();
//!
//! let document = transformer.transform(&entity)?;
//! assert_eq!(document.values("dc:language"), Some(&["eng".to_string()][..]));
//! # Ok::<(), oaimap::MapError>(())
//! ```

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::document::MetadataDocument;
use crate::entity::{Entity, FieldValue, FieldValues, SubRecord};
use crate::error::{MapError, Result};
use crate::host::{MediaRef, RepositoryHost};
use crate::profile::{FieldHandling, Profile};

/// Sub-field holding a title sub-record's text.
const TITLE_FIELD: &str = "field_title";
/// Sub-field holding a title sub-record's type; non-empty means the
/// title is an alternative title.
const TITLE_TYPE_FIELD: &str = "field_title_type";
/// Sub-field holding a note sub-record's text.
const NOTE_FIELD: &str = "field_note";
/// Sub-field holding a note sub-record's type.
const NOTE_TYPE_FIELD: &str = "field_note_type";

lazy_static! {
    static ref MARKUP_TAG: Regex = Regex::new("<[^>]*>").expect("valid markup pattern");
}

/// Maps entities onto metadata documents using a fixed profile and host.
#[derive(Debug)]
pub struct RecordTransformer<'a, H> {
    profile: &'a Profile,
    host: &'a H,
}

impl<'a, H: RepositoryHost> RecordTransformer<'a, H> {
    /// Create a transformer over the given profile and host services.
    #[must_use]
    pub fn new(profile: &'a Profile, host: &'a H) -> Self {
        RecordTransformer { profile, host }
    }

    /// Transform an entity into its metadata document.
    ///
    /// Fields are visited in declaration order. Direct-mapped and
    /// sub-record fields require the field to be visible and non-empty;
    /// linked-agent, title, and note fields apply their own per-item
    /// checks instead. Derived elements come last in fixed order: file
    /// links, persistent URL, thumbnail.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MalformedValue`] when a value item's shape
    /// contradicts its field's classification, which indicates the host
    /// violated the field iteration contract.
    pub fn transform(&self, entity: &Entity) -> Result<MetadataDocument> {
        debug!(
            entity = %entity.id,
            profile = %self.profile.format.prefix,
            "transforming record"
        );
        let mut document = MetadataDocument::new();
        self.add_fields(entity, &mut document)?;
        self.add_file_links(entity, &mut document);
        self.add_persistent_link(entity, &mut document);
        self.add_thumbnail(entity, &mut document);
        Ok(document)
    }

    fn add_fields(&self, entity: &Entity, document: &mut MetadataDocument) -> Result<()> {
        for (field_name, values) in &entity.fields {
            match self.profile.classify(field_name) {
                FieldHandling::LinkedAgent => {
                    self.add_linked_agents(values, document);
                    continue;
                },
                FieldHandling::TitleSubRecords => {
                    self.add_titles(field_name, values, document)?;
                },
                FieldHandling::NoteSubRecords => {
                    self.add_notes(field_name, values, document)?;
                },
                FieldHandling::Direct(_) | FieldHandling::SubRecords(_) | FieldHandling::Skip => {},
            }
            // Title and note fields fall through here: a flat mapping
            // entry for the same field fires in addition.
            if let Some(element) = self.profile.field_element(field_name) {
                if values.visible && !values.is_empty() {
                    let extracted = self.extract_values(field_name, values)?;
                    document.extend(element, extracted);
                }
            } else if let Some(nested) = self.profile.sub_record_elements(field_name) {
                if values.visible && !values.is_empty() {
                    self.flatten_sub_records(field_name, values, nested, document)?;
                }
            } else {
                trace!(field = field_name, "field contributes nothing");
            }
        }
        Ok(())
    }

    /// Extract the output strings for one field's value list.
    ///
    /// An alias item marks the whole field as navigation data: extraction
    /// stops and the field emits nothing, including values collected
    /// before the alias was reached.
    fn extract_values(&self, field_name: &str, values: &FieldValues) -> Result<Vec<String>> {
        let mut extracted = Vec::with_capacity(values.len());
        for item in &values.items {
            match item {
                FieldValue::Alias(_) => {
                    trace!(field = field_name, "alias value suppresses field");
                    return Ok(Vec::new());
                },
                FieldValue::Scalar(text) => extracted.push(self.clean(text)),
                FieldValue::Reference { target_id, .. } => {
                    let value = self
                        .host
                        .reference_label(target_id)
                        .unwrap_or_else(|| target_id.clone());
                    extracted.push(self.clean(&value));
                },
                FieldValue::Paragraph(_) => {
                    return Err(MapError::MalformedValue {
                        field: field_name.to_string(),
                        reason: "embedded sub-record in a scalar-mapped value list".to_string(),
                    });
                },
            }
        }
        Ok(extracted)
    }

    /// Flatten sub-record values one level through the nested mapping.
    fn flatten_sub_records(
        &self,
        field_name: &str,
        values: &FieldValues,
        nested: &IndexMap<String, String>,
        document: &mut MetadataDocument,
    ) -> Result<()> {
        for item in &values.items {
            let sub_record = expect_sub_record(field_name, item)?;
            if !sub_record.visible {
                continue;
            }
            for (sub_name, sub_values) in &sub_record.fields {
                let Some(element) = nested.get(sub_name) else {
                    continue;
                };
                if sub_values.visible && !sub_values.is_empty() {
                    let extracted = self.extract_values(sub_name, sub_values)?;
                    document.extend(element, extracted);
                }
            }
        }
        Ok(())
    }

    /// Route title sub-records to the main or alternative title element.
    ///
    /// A title with a non-empty type sub-field is an alternative title;
    /// all others are main titles. A disabled destination suppresses
    /// output for that case only.
    fn add_titles(
        &self,
        field_name: &str,
        values: &FieldValues,
        document: &mut MetadataDocument,
    ) -> Result<()> {
        for item in &values.items {
            let sub_record = expect_sub_record(field_name, item)?;
            if !sub_record.visible {
                continue;
            }
            let Some(title) = sub_record.field(TITLE_FIELD) else {
                continue;
            };
            if !title.visible || title.is_empty() {
                continue;
            }
            let typed = sub_record
                .field(TITLE_TYPE_FIELD)
                .is_some_and(|field| !field.is_empty());
            let destination = if typed {
                self.profile.alternative_title_element.as_deref()
            } else {
                self.profile.main_title_element.as_deref()
            };
            if let Some(element) = destination {
                document.append(element, self.field_text(title));
            } else {
                trace!(field = field_name, typed, "title element disabled");
            }
        }
        Ok(())
    }

    /// Route note sub-records by note type, with a default fallback.
    fn add_notes(
        &self,
        field_name: &str,
        values: &FieldValues,
        document: &mut MetadataDocument,
    ) -> Result<()> {
        for item in &values.items {
            let sub_record = expect_sub_record(field_name, item)?;
            if !sub_record.visible {
                continue;
            }
            let Some(note) = sub_record.field(NOTE_FIELD) else {
                continue;
            };
            if !note.visible || note.is_empty() {
                continue;
            }
            let note_type = sub_record
                .field(NOTE_TYPE_FIELD)
                .map(|field| self.field_text(field))
                .unwrap_or_default();
            if let Some(element) = self.profile.note_element(&note_type) {
                document.append(element, self.field_text(note));
            } else {
                trace!(field = field_name, note_type = %note_type, "note element disabled");
            }
        }
        Ok(())
    }

    /// Append linked-agent labels routed by relator code.
    ///
    /// Unrecognized relator codes and unloadable targets are routine and
    /// dropped without complaint; there is no raw-identifier fallback
    /// for agents.
    fn add_linked_agents(&self, values: &FieldValues, document: &mut MetadataDocument) {
        for item in &values.items {
            let FieldValue::Reference {
                target_id,
                relator: Some(code),
            } = item
            else {
                continue;
            };
            let Some(element) = self.profile.relator_element(code) else {
                trace!(code = %code, "unmapped relator code");
                continue;
            };
            if let Some(label) = self.host.reference_label(target_id) {
                document.append(element, label);
            }
        }
    }

    /// Append file links for each configured media-use URI.
    fn add_file_links(&self, entity: &Entity, document: &mut MetadataDocument) {
        for (uri, element) in &self.profile.media_type_elements {
            let Some(term) = self.host.term_for_uri(uri) else {
                continue;
            };
            let Some(media) = self.host.media_with_term(entity, &term) else {
                continue;
            };
            self.add_media(&media, element, document);
        }
    }

    /// Append the public URL of the file behind a media item.
    fn add_media(&self, media: &MediaRef, element: &str, document: &mut MetadataDocument) {
        let Some(file) = self.host.media_file(media) else {
            return;
        };
        if let Some(url) = self.host.file_url(&file) {
            document.append(element, url);
        }
    }

    /// Append the entity's persistent URL, using its alias form.
    fn add_persistent_link(&self, entity: &Entity, document: &mut MetadataDocument) {
        let Some(element) = self.profile.persistent_link_element.as_deref() else {
            return;
        };
        if let Some(address) = self.host.canonical_address(entity, true) {
            document.append(element, address);
        }
    }

    /// Append the representative-image URL.
    fn add_thumbnail(&self, entity: &Entity, document: &mut MetadataDocument) {
        let Some(element) = self.profile.thumbnail_element.as_deref() else {
            return;
        };
        if let Some(media) = self.host.representative_image(entity) {
            self.add_media(&media, element, document);
        }
    }

    /// Render a sub-field's values as one display string. Multi-valued
    /// sub-fields join with ", ", matching the host's display-string
    /// rendering; embedded sub-records contribute nothing.
    fn field_text(&self, values: &FieldValues) -> String {
        let parts: Vec<String> = values
            .items
            .iter()
            .filter_map(|item| match item {
                FieldValue::Scalar(text) | FieldValue::Alias(text) => Some(text.clone()),
                FieldValue::Reference { target_id, .. } => Some(
                    self.host
                        .reference_label(target_id)
                        .unwrap_or_else(|| target_id.clone()),
                ),
                FieldValue::Paragraph(_) => None,
            })
            .collect();
        parts.join(", ")
    }

    fn clean(&self, value: &str) -> String {
        if self.profile.strip_markup {
            strip_markup(value)
        } else {
            value.to_string()
        }
    }
}

/// Remove markup tags from a value, leaving its text content.
fn strip_markup(value: &str) -> String {
    MARKUP_TAG.replace_all(value, "").into_owned()
}

fn expect_sub_record<'v>(field_name: &str, item: &'v FieldValue) -> Result<&'v SubRecord> {
    match item {
        FieldValue::Paragraph(sub_record) => Ok(sub_record),
        _ => Err(MapError::MalformedValue {
            field: field_name.to_string(),
            reason: "expected embedded sub-records".to_string(),
        }),
    }
}
