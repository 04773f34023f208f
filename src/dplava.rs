//! The DPLAVA mapping profile.
//!
//! This module provides the mapping tables and element configuration for
//! the DPLA-of-Virginia metadata schema, an aggregation profile mixing
//! Dublin Core terms with EDM elements under the `mdRecord` root.
//!
//! The profile covers:
//! - Descriptive fields mapped to `dc:`/`dcterms:` elements
//! - Identifier families (PURL, DOI, Handle, ARK) surfaced as
//!   `edm:isShownAt`
//! - Faceted, hierarchical-geographic, origin, and related-item
//!   sub-records flattened into their own elements
//! - Linked agents routed by MARC relator code
//! - A derived original-file link (`edm:preview`), persistent URL, and
//!   thumbnail URL
//!
//! # Examples
//!
//! ```ignore
//! use oaimap::{dplava, Entity, RecordTransformer, StaticHost};
//!
//! let profile = dplava::profile();
//! let host = StaticHost::new();
//! let transformer = RecordTransformer::new(&profile, &host);
//! let document = transformer.transform(&entity)?;
//! # Ok::<(), oaimap::MapError>(())
//! ```

use indexmap::IndexMap;

use crate::profile::{names, table, DocumentWrapper, MetadataFormat, Profile};

/// Namespace URI of the DPLAVA schema.
pub const NAMESPACE: &str = "http://dplava.lib.virginia.edu";

/// Schema URL rendered documents validate against.
pub const SCHEMA: &str = "https://dplava.lib.virginia.edu/dplava.xsd";

/// Flat field-to-element mapping.
const FIELD_MAPPING: &[(&str, &str)] = &[
    ("field_member_of", "dcterms:isPartOf"),
    ("field_resource_type", "dcterms:type"),
    ("field_table_of_contents", "dcterms:description"),
    ("field_description", "dcterms:description"),
    ("field_language", "dc:language"),
    ("field_target_audience", "dcterms:educationLevel"),
    ("field_local_identifier", "dcterms:identifier"),
    ("field_purl", "edm:isShownAt"),
    ("field_doi", "edm:isShownAt"),
    ("field_handle", "edm:isShownAt"),
    ("field_ark", "edm:isShownAt"),
    ("field_isbn", "dcterms:identifier"),
    ("field_oclc_number", "dcterms:identifier"),
    ("field_genre", "edm:hasType"),
    ("field_subject", "dcterms:subject"),
    ("field_temporal_subject", "dcterms:temporal"),
    ("field_geographic_subject", "dcterms:spatial"),
    ("field_coordinates", "dcterms:spatial"),
    ("field_geographic_code", "dcterms:spatial"),
    ("field_lcc_classification", "dcterms:subject"),
    ("field_extent", "dcterms:extent"),
    ("field_physical_form", "dcterms:medium"),
    ("field_restriction_on_access", "dcterms:accessRights"),
    ("field_use_and_reproduction", "dcterms:rights"),
    ("field_rights_statement", "dcterms:rights"),
];

/// Sub-field mappings for faceted subject sub-records.
const FACETED_SUBJECT: &[(&str, &str)] = &[
    ("field_topic_general_subdivision_", "dcterms:subject"),
    ("field_temporal_chronological_sub", "dcterms:temporal"),
    ("field_geographic_geographic_subd", "dcterms:spatial"),
];

/// Sub-field mappings for hierarchical geographic sub-records. Every
/// level of the hierarchy flattens to `dcterms:spatial`.
const HIERARCHICAL_GEOGRAPHIC: &[(&str, &str)] = &[
    ("field_continent", "dcterms:spatial"),
    ("field_country", "dcterms:spatial"),
    ("field_region", "dcterms:spatial"),
    ("field_state", "dcterms:spatial"),
    ("field_territory", "dcterms:spatial"),
    ("field_county", "dcterms:spatial"),
    ("field_city", "dcterms:spatial"),
    ("field_city_section", "dcterms:spatial"),
    ("field_island", "dcterms:spatial"),
    ("field_area", "dcterms:spatial"),
    ("field_extraterrestrial_area", "dcterms:spatial"),
];

/// Sub-field mappings for origin-information sub-records.
const ORIGIN_INFORMATION: &[(&str, &str)] = &[
    ("field_date_created", "dcterms:created"),
    ("field_date_issued", "dcterms:issued"),
    ("field_date_captured", "dcterms:date"),
    ("field_date_valid", "dcterms:date"),
    ("field_date_modified", "dcterms:date"),
    ("field_copyright_date", "dcterms:date"),
    ("field_publisher", "dcterms:publisher"),
    ("field_other_date", "dcterms:date"),
];

/// Sub-field mappings for related-item sub-records.
const RELATED_ITEM: &[(&str, &str)] = &[
    ("field_title", "dcterms:relation"),
    ("field_url", "dcterms:relation"),
];

/// Relator-code routing for linked agents.
const RELATOR_MAPPING: &[(&str, &str)] = &[
    ("relators:aut", "dcterms:creator"),
    ("relators:ato", "dcterms:contributor"),
    ("relators:cmp", "dcterms:creator"),
    ("relators:cnd", "dcterms:contributor"),
    ("relators:ctb", "dcterms:contributor"),
    ("relators:crp", "dcterms:contributor"),
    ("relators:cre", "dcterms:creator"),
    ("relators:dpc", "dcterms:contributor"),
    ("relators:drt", "dcterms:contributor"),
    ("relators:edt", "dcterms:contributor"),
    ("relators:ive", "dcterms:creator"),
    ("relators:ivr", "dcterms:contributor"),
    ("relators:prf", "dcterms:contributor"),
    ("relators:pht", "dcterms:creator"),
    ("relators:cph", "dcterms:rightsHolder"),
    ("relators:pbl", "dcterms:contributor"),
    ("relators:sgn", "dcterms:contributor"),
    ("relators:spk", "dcterms:contributor"),
    ("relators:spn", "dcterms:contributor"),
    ("relators:vdg", "dcterms:contributor"),
];

/// Media-use URIs whose files surface as document elements.
const MEDIA_TYPE_ELEMENTS: &[(&str, &str)] =
    &[("http://pcdm.org/use#OriginalFile", "edm:preview")];

/// Build the DPLAVA mapping profile.
#[must_use]
pub fn profile() -> Profile {
    Profile {
        format: MetadataFormat {
            prefix: "mdRecord".to_string(),
            schema: SCHEMA.to_string(),
            namespace: NAMESPACE.to_string(),
        },
        wrapper: DocumentWrapper {
            root_element: "mdRecord".to_string(),
            attributes: wrapper_attributes(),
        },
        field_mapping: table(FIELD_MAPPING),
        sub_record_mapping: sub_record_mapping(),
        relator_mapping: table(RELATOR_MAPPING),
        linked_agent_fields: names(&["field_linked_agent", "field_organizations"]),
        title_sub_record_fields: names(&["field_title"]),
        note_sub_record_fields: names(&["field_note_paragraph"]),
        main_title_element: Some("dcterms:title".to_string()),
        alternative_title_element: Some("dcterms:alternative".to_string()),
        default_note_element: Some("dcterms:description".to_string()),
        note_type_elements: table(&[("provenance", "dc:provenance")]),
        media_type_elements: table(MEDIA_TYPE_ELEMENTS),
        persistent_link_element: Some("dcterms:identifier".to_string()),
        thumbnail_element: Some("dcterms:identifier".to_string()),
        strip_markup: true,
    }
}

fn sub_record_mapping() -> IndexMap<String, IndexMap<String, String>> {
    [
        ("field_faceted_subject", FACETED_SUBJECT),
        ("field_hierarchical_geographic_su", HIERARCHICAL_GEOGRAPHIC),
        ("field_origin_information", ORIGIN_INFORMATION),
        ("field_related_item", RELATED_ITEM),
    ]
    .into_iter()
    .map(|(field, pairs)| (field.to_string(), table(pairs)))
    .collect()
}

fn wrapper_attributes() -> IndexMap<String, String> {
    table(&[
        ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
        ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ("xmlns:edm", "http://www.europeana.eu/schemas/edm/"),
        ("xmlns", NAMESPACE),
        ("xmlns:dcterms", "http://purl.org/dc/terms/"),
        ("xmlns:rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
        (
            "xsi:schemaLocation",
            "http://dplava.lib.virginia.edu https://dplava.lib.virginia.edu/dplava.xsd",
        ),
    ])
}
