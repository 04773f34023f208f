#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # oaimap
//!
//! A Rust library for mapping digital-repository entity records onto
//! OAI-PMH metadata documents. Given an entity's field values and a
//! declarative, profile-scoped mapping table, the engine produces an
//! ordered element multimap ready for XML serialization — applying
//! access filtering, sub-record flattening, relator-based agent routing,
//! and derived link/thumbnail/file elements along the way.
//!
//! ## Quick Start
//!
//! ```
//! use oaimap::{dplava, Entity, RecordTransformer, StaticHost};
//!
//! # fn main() -> Result<(), oaimap::MapError> {
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
//! assert_eq!(
//!     document.values("dcterms:isPartOf"),
//!     Some(&["Collection A".to_string()][..])
//! );
//! assert_eq!(
//!     document.values("dc:language"),
//!     Some(&["eng".to_string()][..])
//! );
//!
//! let xml = oaimap::render::document_to_xml(&document, &profile)?;
//! assert!(xml.contains("<dc:language>eng</dc:language>"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Profiles
//!
//! A [`Profile`] is a plain value bundling mapping tables with element
//! configuration; the transformation algorithm never varies by profile.
//! Two profiles ship with the crate:
//!
//! - [`dplava`] — the DPLA-of-Virginia aggregation schema (`mdRecord`)
//! - [`qdc`] — Qualified Dublin Core (`oai_qdc`)
//!
//! Custom profiles can be built in code or loaded from configuration,
//! since [`Profile`] implements serde's traits.
//!
//! ## Modules
//!
//! - [`entity`] — input data model (`Entity`, `FieldValues`,
//!   `FieldValue`, `SubRecord`) and builders
//! - [`document`] — the ordered element multimap output
//! - [`profile`] — profile configuration and field classification
//! - [`dplava`] / [`qdc`] — the built-in profiles
//! - [`host`] — collaborator contracts plus the in-memory `StaticHost`
//! - [`transform`] — the transformation engine
//! - [`render`] — XML serialization of finished documents
//! - [`error`] — error types and result alias

pub mod document;
pub mod dplava;
pub mod entity;
pub mod error;
pub mod host;
pub mod profile;
pub mod qdc;
pub mod render;
pub mod transform;

pub use document::MetadataDocument;
pub use entity::{Entity, EntityBuilder, FieldValue, FieldValues, SubRecord, SubRecordBuilder};
pub use error::{MapError, Result};
pub use host::{FileRef, MediaRef, RepositoryHost, StaticHost, TermRef};
pub use profile::{DocumentWrapper, FieldHandling, MetadataFormat, Profile};
pub use transform::RecordTransformer;
