//! Repository entity structures consumed by the mapping engine.
//!
//! This module provides the input-side data model:
//! - [`Entity`] — a digital-library item with named, repeatable fields
//! - [`FieldValues`] — one field's ordered value list and its access gate
//! - [`FieldValue`] — a single value: scalar, alias, reference, or
//!   embedded sub-record
//! - [`SubRecord`] — an owned nested record reachable only through its
//!   parent field
//!
//! Fields are stored in insertion order using `IndexMap`; the order in
//! which the host declares fields drives the order of the produced
//! metadata elements.
//!
//! # Examples
//!
//! Build an entity with the builder API:
//!
//! ```
//! use oaimap::Entity;
//!
//! let entity = Entity::builder("node:17")
//!     .label("Annual report")
//!     .scalar("field_language", "eng")
//!     .reference("field_member_of", "node:3")
//!     .build();
//!
//! assert_eq!(entity.fields.len(), 2);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

fn default_visible() -> bool {
    true
}

/// A digital-repository entity record.
///
/// Entities carry a stable identifier, an optional display label, and a
/// set of named fields. Field order is preserved and meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identifier of the entity within the host repository.
    pub id: String,
    /// Display label, if the entity has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Fields keyed by name, in declaration order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldValues>,
}

/// The ordered value list held by one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValues {
    /// Whether the requesting consumer may view this field. Computed by
    /// the host's access layer before the entity reaches the mapper.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Values in declaration order. Most fields carry one or two.
    #[serde(default)]
    pub items: SmallVec<[FieldValue; 2]>,
}

/// One item in a field's value list.
///
/// The variant plays the role of the item's main property: it decides
/// how the item is interpreted during extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text, number, or date already rendered as a string.
    Scalar(String),
    /// URL alias redirect. Aliases are navigation data, not descriptive
    /// metadata; encountering one suppresses the entire field.
    Alias(String),
    /// Reference to another entity, resolved to the target's display
    /// label through the host, with the raw identifier as fallback when
    /// the target cannot be loaded.
    Reference {
        /// Identifier of the referenced entity.
        target_id: String,
        /// Relator code naming the agent's role relative to the entity
        /// (e.g. `relators:aut`), set on linked-agent fields.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        relator: Option<String>,
    },
    /// An owned, versioned nested record.
    Paragraph(SubRecord),
}

/// An owned nested record embedded in a parent field.
///
/// Sub-records have their own named fields and their own access gate but
/// no independent identity; they are only reachable through the field
/// that owns them, and they nest one level at most.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubRecord {
    /// Sub-record type (e.g. `faceted_subject`, `origin_information`).
    pub record_type: String,
    /// Whether the requesting consumer may view this sub-record.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Sub-fields keyed by name, in declaration order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldValues>,
}

impl Entity {
    /// Create an entity with no label and no fields.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Entity {
            id: id.into(),
            label: None,
            fields: IndexMap::new(),
        }
    }

    /// Create a builder for fluently constructing entities.
    #[must_use]
    pub fn builder(id: impl Into<String>) -> EntityBuilder {
        EntityBuilder {
            entity: Entity::new(id),
        }
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValues> {
        self.fields.get(name)
    }

    /// Insert a field, replacing any previous value list under the name.
    pub fn set_field(&mut self, name: impl Into<String>, values: FieldValues) {
        self.fields.insert(name.into(), values);
    }
}

impl FieldValues {
    /// Create an empty, visible value list.
    #[must_use]
    pub fn new() -> Self {
        FieldValues {
            visible: true,
            items: SmallVec::new(),
        }
    }

    /// Create a visible value list from the given items.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = FieldValue>) -> Self {
        FieldValues {
            visible: true,
            items: items.into_iter().collect(),
        }
    }

    /// Whether the list holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of values in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append a value to the list.
    pub fn push(&mut self, value: FieldValue) {
        self.items.push(value);
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        FieldValues::new()
    }
}

impl SubRecord {
    /// Create an empty, visible sub-record of the given type.
    #[must_use]
    pub fn new(record_type: impl Into<String>) -> Self {
        SubRecord {
            record_type: record_type.into(),
            visible: true,
            fields: IndexMap::new(),
        }
    }

    /// Create a builder for fluently constructing sub-records.
    #[must_use]
    pub fn builder(record_type: impl Into<String>) -> SubRecordBuilder {
        SubRecordBuilder {
            sub_record: SubRecord::new(record_type),
        }
    }

    /// Look up a sub-field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValues> {
        self.fields.get(name)
    }
}

/// Builder for fluently constructing [`Entity`] values.
///
/// Value-appending methods add to any value list already declared under
/// the field name, so repeatable fields read naturally:
///
/// ```
/// use oaimap::Entity;
///
/// let entity = Entity::builder("node:9")
///     .scalar("field_subject", "Maps")
///     .scalar("field_subject", "Surveying")
///     .build();
///
/// assert_eq!(entity.field("field_subject").unwrap().len(), 2);
/// ```
#[derive(Debug)]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    /// Set the entity's display label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.entity.label = Some(label.into());
        self
    }

    /// Append a scalar value to the named field.
    #[must_use]
    pub fn scalar(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_value(field.into(), FieldValue::Scalar(value.into()));
        self
    }

    /// Append an alias value to the named field.
    #[must_use]
    pub fn alias(mut self, field: impl Into<String>, path: impl Into<String>) -> Self {
        self.push_value(field.into(), FieldValue::Alias(path.into()));
        self
    }

    /// Append an entity reference to the named field.
    #[must_use]
    pub fn reference(mut self, field: impl Into<String>, target_id: impl Into<String>) -> Self {
        self.push_value(
            field.into(),
            FieldValue::Reference {
                target_id: target_id.into(),
                relator: None,
            },
        );
        self
    }

    /// Append a linked-agent reference with its relator code.
    #[must_use]
    pub fn linked_agent(
        mut self,
        field: impl Into<String>,
        relator: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        self.push_value(
            field.into(),
            FieldValue::Reference {
                target_id: target_id.into(),
                relator: Some(relator.into()),
            },
        );
        self
    }

    /// Append an embedded sub-record to the named field.
    #[must_use]
    pub fn paragraph(mut self, field: impl Into<String>, sub_record: SubRecord) -> Self {
        self.push_value(field.into(), FieldValue::Paragraph(sub_record));
        self
    }

    /// Insert a field with an explicit value list, replacing any values
    /// declared so far under the name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, values: FieldValues) -> Self {
        self.entity.set_field(name, values);
        self
    }

    /// Mark the named field as not viewable by the requesting consumer.
    ///
    /// Declares the field empty-but-hidden if it does not exist yet.
    #[must_use]
    pub fn hidden(mut self, field: impl Into<String>) -> Self {
        self.entity
            .fields
            .entry(field.into())
            .or_insert_with(FieldValues::new)
            .visible = false;
        self
    }

    /// Finish building and return the entity.
    #[must_use]
    pub fn build(self) -> Entity {
        self.entity
    }

    fn push_value(&mut self, field: String, value: FieldValue) {
        self.entity
            .fields
            .entry(field)
            .or_insert_with(FieldValues::new)
            .push(value);
    }
}

/// Builder for fluently constructing [`SubRecord`] values.
#[derive(Debug)]
pub struct SubRecordBuilder {
    sub_record: SubRecord,
}

impl SubRecordBuilder {
    /// Append a scalar value to the named sub-field.
    #[must_use]
    pub fn scalar(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_value(field.into(), FieldValue::Scalar(value.into()));
        self
    }

    /// Append an entity reference to the named sub-field.
    #[must_use]
    pub fn reference(mut self, field: impl Into<String>, target_id: impl Into<String>) -> Self {
        self.push_value(
            field.into(),
            FieldValue::Reference {
                target_id: target_id.into(),
                relator: None,
            },
        );
        self
    }

    /// Insert a sub-field with an explicit value list.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, values: FieldValues) -> Self {
        self.sub_record.fields.insert(name.into(), values);
        self
    }

    /// Mark the whole sub-record as not viewable.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.sub_record.visible = false;
        self
    }

    /// Finish building and return the sub-record.
    #[must_use]
    pub fn build(self) -> SubRecord {
        self.sub_record
    }

    fn push_value(&mut self, field: String, value: FieldValue) {
        self.sub_record
            .fields
            .entry(field)
            .or_insert_with(FieldValues::new)
            .push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_declaration_order() {
        let entity = Entity::builder("node:1")
            .scalar("field_b", "1")
            .scalar("field_a", "2")
            .scalar("field_c", "3")
            .build();

        let names: Vec<&str> = entity.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["field_b", "field_a", "field_c"]);
    }

    #[test]
    fn test_builder_appends_repeated_values() {
        let entity = Entity::builder("node:1")
            .scalar("field_subject", "First")
            .scalar("field_subject", "Second")
            .build();

        let values = entity.field("field_subject").unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.items[0], FieldValue::Scalar("First".to_string()));
        assert_eq!(values.items[1], FieldValue::Scalar("Second".to_string()));
    }

    #[test]
    fn test_hidden_marks_field_invisible() {
        let entity = Entity::builder("node:1")
            .scalar("field_note", "secret")
            .hidden("field_note")
            .build();

        let values = entity.field("field_note").unwrap();
        assert!(!values.visible);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_sub_record_builder() {
        let sub = SubRecord::builder("origin_information")
            .scalar("field_date_created", "1901")
            .scalar("field_publisher", "Acme Press")
            .build();

        assert_eq!(sub.record_type, "origin_information");
        assert!(sub.visible);
        assert_eq!(sub.field("field_date_created").unwrap().len(), 1);
    }

    #[test]
    fn test_linked_agent_carries_relator() {
        let entity = Entity::builder("node:1")
            .linked_agent("field_linked_agent", "relators:aut", "node:7")
            .build();

        let values = entity.field("field_linked_agent").unwrap();
        match &values.items[0] {
            FieldValue::Reference { target_id, relator } => {
                assert_eq!(target_id, "node:7");
                assert_eq!(relator.as_deref(), Some("relators:aut"));
            },
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let entity = Entity::builder("node:1")
            .label("Example")
            .scalar("field_language", "eng")
            .reference("field_member_of", "node:3")
            .build();

        let json = serde_json::to_string(&entity).unwrap();
        let restored: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(entity, restored);
    }
}
