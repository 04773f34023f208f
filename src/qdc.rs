//! The Qualified Dublin Core mapping profile.
//!
//! This module provides the mapping tables and element configuration for
//! `oai_qdc`, serving Qualified Dublin Core documents from the same
//! transformation engine as [`crate::dplava`]. The profile swaps the
//! vocabulary wholesale and flips a few switches:
//!
//! - Identifier families collapse onto `dcterms:identifier` instead of
//!   `edm:isShownAt`
//! - Untyped titles land in `dc:title`
//! - Untyped notes are suppressed entirely; `provenance` notes still map
//! - No derived file links
//!
//! The transformation rules themselves are untouched; everything that
//! differs lives in the [`Profile`] value built here.

use indexmap::IndexMap;

use crate::profile::{names, table, DocumentWrapper, MetadataFormat, Profile};

/// Namespace URI of the Qualified Dublin Core schema.
pub const NAMESPACE: &str = "http://worldcat.org/xmlschemas/qdc-1.0/";

/// Schema URL rendered documents validate against.
pub const SCHEMA: &str = "http://worldcat.org/xmlschemas/qdc/1.0/qdc-1.0.xsd";

/// Flat field-to-element mapping.
const FIELD_MAPPING: &[(&str, &str)] = &[
    ("field_member_of", "dcterms:isPartOf"),
    ("field_resource_type", "dcterms:type"),
    ("field_genre", "dcterms:type"),
    ("field_abstract", "dcterms:abstract"),
    ("field_description", "dcterms:description"),
    ("field_table_of_contents", "dcterms:tableOfContents"),
    ("field_target_audience", "dcterms:educationLevel"),
    ("field_language", "dcterms:language"),
    ("field_local_identifier", "dcterms:identifier"),
    ("field_purl", "dcterms:identifier"),
    ("field_doi", "dcterms:identifier"),
    ("field_handle", "dcterms:identifier"),
    ("field_ark", "dcterms:identifier"),
    ("field_open_url", "dcterms:identifier"),
    ("field_isbn", "dcterms:identifier"),
    ("field_issn", "dcterms:identifier"),
    ("field_ismn", "dcterms:identifier"),
    ("field_repec", "dcterms:identifier"),
    ("field_gpo_number", "dcterms:identifier"),
    ("field_oclc_number", "dcterms:identifier"),
    ("field_pubmed_central_number", "dcterms:identifier"),
    ("field_pubmed_number", "dcterms:identifier"),
    ("field_subject", "dcterms:subject"),
    ("field_subject_name_person", "dcterms:subject"),
    ("field_subject_name_organization", "dcterms:subject"),
    ("field_geographic_subject", "dcterms:spatial"),
    ("field_temporal_subject", "dcterms:temporal"),
    ("field_coordinates", "dcterms:spatial"),
    ("field_geographic_code", "dcterms:spatial"),
    ("field_lcc_classification", "dcterms:subject"),
    ("field_ddc_classification", "dcterms:subject"),
    ("field_sudoc_number", "dcterms:subject"),
    ("field_swank_classification", "dcterms:subject"),
    ("field_state_gov_classification", "dcterms:subject"),
    ("field_conference", "dcterms:contributor"),
    ("field_publication_title", "dcterms:isPartOf"),
    ("field_publication_identifier", "dcterms:isPartOf"),
    ("field_extent", "dcterms:extent"),
    ("field_physical_form", "dcterms:medium"),
    ("field_title_plain", "dcterms:relation"),
    ("field_url", "dcterms:relation"),
    ("field_funder", "dcterms:contributor"),
    ("field_access_conditions", "dcterms:accessRights"),
    ("field_restriction_on_access", "dcterms:accessRights"),
    ("field_use_and_reproduction", "dcterms:rights"),
    ("field_rights_statement", "dcterms:rights"),
    ("field_use_license", "dcterms:license"),
    ("field_copyright_holder", "dcterms:rightsHolder"),
];

/// Sub-field mappings for series sub-records.
const SERIES: &[(&str, &str)] = &[("field_series_titles", "dcterms:isPartOf")];

/// Sub-field mappings for origin-information sub-records. Copyright
/// dates get their own qualified element here.
const ORIGIN_INFORMATION: &[(&str, &str)] = &[
    ("field_date_created", "dcterms:created"),
    ("field_date_issued", "dcterms:issued"),
    ("field_date_captured", "dcterms:date"),
    ("field_date_valid", "dcterms:date"),
    ("field_date_modified", "dcterms:date"),
    ("field_other_date", "dcterms:date"),
    ("field_copyright_date", "dcterms:dateCopyrighted"),
    ("field_publisher", "dcterms:publisher"),
];

/// Sub-field mappings for related-item sub-records.
const RELATED_ITEM: &[(&str, &str)] = &[
    ("field_title_plain", "dcterms:relation"),
    ("field_url", "dcterms:relation"),
];

/// Relator-code routing for linked agents.
const RELATOR_MAPPING: &[(&str, &str)] = &[
    ("relators:asn", "dcterms:contributor"),
    ("relators:aut", "dcterms:creator"),
    ("relators:ato", "dcterms:contributor"),
    ("relators:cmp", "dcterms:creator"),
    ("relators:cnd", "dcterms:contributor"),
    ("relators:ctb", "dcterms:contributor"),
    ("relators:cph", "dcterms:rightsHolder"),
    ("relators:crp", "dcterms:contributor"),
    ("relators:cre", "dcterms:creator"),
    ("relators:dgc", "dcterms:contributor"),
    ("relators:dgg", "dcterms:contributor"),
    ("relators:dgs", "dcterms:contributor"),
    ("relators:dpc", "dcterms:contributor"),
    ("relators:drt", "dcterms:contributor"),
    ("relators:edt", "dcterms:contributor"),
    ("relators:fnd", "dcterms:contributor"),
    ("relators:hst", "dcterms:contributor"),
    ("relators:his", "dcterms:contributor"),
    ("relators:ive", "dcterms:creator"),
    ("relators:ivr", "dcterms:contributor"),
    ("relators:prf", "dcterms:contributor"),
    ("relators:pht", "dcterms:creator"),
    ("relators:pbl", "dcterms:contributor"),
    ("relators:sgn", "dcterms:contributor"),
    ("relators:spk", "dcterms:contributor"),
    ("relators:spn", "dcterms:contributor"),
    ("relators:vdg", "dcterms:contributor"),
];

/// Build the Qualified Dublin Core mapping profile.
#[must_use]
pub fn profile() -> Profile {
    Profile {
        format: MetadataFormat {
            prefix: "oai_qdc".to_string(),
            schema: SCHEMA.to_string(),
            namespace: NAMESPACE.to_string(),
        },
        wrapper: DocumentWrapper {
            root_element: "oai_qdc:qualifieddc".to_string(),
            attributes: wrapper_attributes(),
        },
        field_mapping: table(FIELD_MAPPING),
        sub_record_mapping: sub_record_mapping(),
        relator_mapping: table(RELATOR_MAPPING),
        linked_agent_fields: names(&["field_linked_agent", "field_organizations"]),
        title_sub_record_fields: names(&["field_title"]),
        note_sub_record_fields: names(&["field_note_paragraph"]),
        main_title_element: Some("dc:title".to_string()),
        alternative_title_element: Some("dcterms:alternative".to_string()),
        // Untyped notes are not part of the QDC output.
        default_note_element: None,
        note_type_elements: table(&[("provenance", "dc:provenance")]),
        // No file links in QDC documents.
        media_type_elements: IndexMap::new(),
        persistent_link_element: Some("dcterms:identifier".to_string()),
        thumbnail_element: Some("dcterms:identifier".to_string()),
        strip_markup: true,
    }
}

fn sub_record_mapping() -> IndexMap<String, IndexMap<String, String>> {
    [
        ("field_series_paragraph", SERIES),
        ("field_origin_information", ORIGIN_INFORMATION),
        ("field_related_item_paragraph", RELATED_ITEM),
    ]
    .into_iter()
    .map(|(field, pairs)| (field.to_string(), table(pairs)))
    .collect()
}

fn wrapper_attributes() -> IndexMap<String, String> {
    table(&[
        ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
        ("xmlns:dcterms", "http://purl.org/dc/terms/"),
        ("xmlns:oai_qdc", NAMESPACE),
        ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        (
            "xsi:schemaLocation",
            "http://worldcat.org/xmlschemas/qdc-1.0/ http://worldcat.org/xmlschemas/qdc/1.0/qdc-1.0.xsd",
        ),
    ])
}
