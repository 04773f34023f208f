//! XML rendering of metadata documents.
//!
//! This module serializes a finished [`MetadataDocument`] against a
//! profile's wrapper configuration: the root element name, the namespace
//! prefix declarations, and the schema location. Element content is
//! escaped; element names are emitted as-is, since they come from the
//! profile's own tables.
//!
//! # Examples
//!
//! ```ignore
//! use oaimap::{dplava, render};
//!
//! let profile = dplava::profile();
//! let xml = render::document_to_xml(&document, &profile)?;
//! assert!(xml.starts_with("<?xml"));
//! # Ok::<(), oaimap::MapError>(())
//! ```

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::document::MetadataDocument;
use crate::error::Result;
use crate::profile::Profile;

/// Render a document as an XML string wrapped in the profile's root
/// element.
///
/// Elements appear in the document's order; each value becomes one
/// element with escaped text content.
///
/// # Errors
///
/// Returns an error if the XML writer fails or produces invalid UTF-8.
pub fn document_to_xml(document: &MetadataDocument, profile: &Profile) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let root_name = profile.wrapper.root_element.as_str();
    let mut root = BytesStart::new(root_name);
    for (name, value) in &profile.wrapper.attributes {
        root.push_attribute((name.as_str(), value.as_str()));
    }
    writer.write_event(Event::Start(root))?;

    for (element, values) in document.iter() {
        for value in values {
            writer.write_event(Event::Start(BytesStart::new(element)))?;
            writer.write_event(Event::Text(BytesText::new(value)))?;
            writer.write_event(Event::End(BytesEnd::new(element)))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new(root_name)))?;
    Ok(String::from_utf8(writer.into_inner())?)
}
