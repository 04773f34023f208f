//! Integration tests for the oaimap transformation engine.

use oaimap::{dplava, qdc, render, Entity, RecordTransformer, StaticHost};

mod common;

use common::{create_full_entity, create_full_host, create_label_host};

#[test]
fn test_minimal_record_under_dplava() {
    let profile = dplava::profile();
    let host = StaticHost::new().with_label("node:3", "Collection A");
    let entity = Entity::builder("node:17")
        .reference("field_member_of", "node:3")
        .scalar("field_language", "eng")
        .build();

    let document = RecordTransformer::new(&profile, &host)
        .transform(&entity)
        .unwrap();

    let names: Vec<&str> = document.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["dcterms:isPartOf", "dc:language"]);
    assert_eq!(
        document.values("dcterms:isPartOf").unwrap(),
        &["Collection A"]
    );
    assert_eq!(document.values("dc:language").unwrap(), &["eng"]);
}

#[test]
fn test_minimal_record_under_qdc_swaps_language_element() {
    let profile = qdc::profile();
    let host = StaticHost::new().with_label("node:3", "Collection A");
    let entity = Entity::builder("node:17")
        .reference("field_member_of", "node:3")
        .scalar("field_language", "eng")
        .build();

    let document = RecordTransformer::new(&profile, &host)
        .transform(&entity)
        .unwrap();

    assert_eq!(document.values("dcterms:language").unwrap(), &["eng"]);
    assert!(document.values("dc:language").is_none());
    assert_eq!(
        document.values("dcterms:isPartOf").unwrap(),
        &["Collection A"]
    );
}

#[test]
fn test_full_record_under_dplava() {
    let profile = dplava::profile();
    let host = create_full_host();
    let entity = create_full_entity();

    let document = RecordTransformer::new(&profile, &host)
        .transform(&entity)
        .unwrap();

    let names: Vec<&str> = document.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec![
            "dcterms:title",
            "dcterms:alternative",
            "dcterms:isPartOf",
            "dc:language",
            "dcterms:description",
            "dcterms:subject",
            "dcterms:spatial",
            "dcterms:created",
            "dcterms:publisher",
            "dcterms:creator",
            "dcterms:contributor",
            "dc:provenance",
            "edm:preview",
            "dcterms:identifier",
        ]
    );

    assert_eq!(
        document.values("dcterms:title").unwrap(),
        &["Annual report 1901"]
    );
    assert_eq!(document.values("dcterms:alternative").unwrap(), &["AR 1901"]);
    // Subjects accumulate across the flat field and the faceted
    // sub-record, in declaration order.
    assert_eq!(
        document.values("dcterms:subject").unwrap(),
        &["Farming", "Agriculture"]
    );
    assert_eq!(document.values("dcterms:spatial").unwrap(), &["Virginia"]);
    // Untyped notes join the descriptions under the default element.
    assert_eq!(
        document.values("dcterms:description").unwrap(),
        &["Yearly summary of operations", "Binding repaired in 1950"]
    );
    assert_eq!(
        document.values("dcterms:creator").unwrap(),
        &["Smith, Jane"]
    );
    assert_eq!(
        document.values("dcterms:contributor").unwrap(),
        &["Acme Press"]
    );
    assert_eq!(
        document.values("edm:preview").unwrap(),
        &["https://repo.example.org/files/4.tiff"]
    );
    // Persistent URL first, thumbnail second.
    assert_eq!(
        document.values("dcterms:identifier").unwrap(),
        &[
            "https://repo.example.org/items/annual-report-1901",
            "https://repo.example.org/files/5.jpg"
        ]
    );
}

#[test]
fn test_full_record_under_qdc() {
    let profile = qdc::profile();
    let host = create_full_host();
    let entity = create_full_entity();

    let document = RecordTransformer::new(&profile, &host)
        .transform(&entity)
        .unwrap();

    // Untyped titles land in the unqualified element.
    assert_eq!(
        document.values("dc:title").unwrap(),
        &["Annual report 1901"]
    );
    assert_eq!(document.values("dcterms:alternative").unwrap(), &["AR 1901"]);

    // No file links in QDC.
    assert!(document.values("edm:preview").is_none());

    // Faceted subjects are not part of the QDC tables.
    assert!(document.values("dcterms:spatial").is_none());
    assert_eq!(document.values("dcterms:subject").unwrap(), &["Farming"]);

    // Untyped notes are suppressed; provenance notes still map.
    assert_eq!(
        document.values("dcterms:description").unwrap(),
        &["Yearly summary of operations"]
    );
    assert_eq!(
        document.values("dc:provenance").unwrap(),
        &["Gift of the Smith family"]
    );

    // Derived persistent URL and thumbnail survive.
    assert_eq!(
        document.values("dcterms:identifier").unwrap(),
        &[
            "https://repo.example.org/items/annual-report-1901",
            "https://repo.example.org/files/5.jpg"
        ]
    );
}

#[test]
fn test_transformation_is_idempotent() {
    let profile = dplava::profile();
    let host = create_full_host();
    let entity = create_full_entity();
    let transformer = RecordTransformer::new(&profile, &host);

    let first = transformer.transform(&entity).unwrap();
    let second = transformer.transform(&entity).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_hidden_fields_and_sub_records_are_excluded() {
    let profile = dplava::profile();
    let host = create_label_host();
    let hidden_origin = oaimap::SubRecord::builder("origin_information")
        .scalar("field_date_created", "1901")
        .hidden()
        .build();
    let entity = Entity::builder("node:17")
        .scalar("field_subject", "Farming")
        .hidden("field_subject")
        .paragraph("field_origin_information", hidden_origin)
        .scalar("field_language", "eng")
        .build();

    let document = RecordTransformer::new(&profile, &host)
        .transform(&entity)
        .unwrap();

    assert!(document.values("dcterms:subject").is_none());
    assert!(document.values("dcterms:created").is_none());
    assert_eq!(document.values("dc:language").unwrap(), &["eng"]);
}

#[test]
fn test_render_full_record_as_xml() {
    let profile = dplava::profile();
    let host = create_full_host();
    let entity = create_full_entity();

    let document = RecordTransformer::new(&profile, &host)
        .transform(&entity)
        .unwrap();
    let xml = render::document_to_xml(&document, &profile).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<mdRecord"));
    assert!(xml.contains("xmlns:dcterms=\"http://purl.org/dc/terms/\""));
    assert!(xml.contains(
        "xsi:schemaLocation=\"http://dplava.lib.virginia.edu https://dplava.lib.virginia.edu/dplava.xsd\""
    ));
    assert!(xml.contains("<dcterms:title>Annual report 1901</dcterms:title>"));
    assert!(xml.contains("<edm:preview>https://repo.example.org/files/4.tiff</edm:preview>"));
    assert!(xml.contains("</mdRecord>"));
}

#[test]
fn test_render_qdc_record_uses_prefixed_root() {
    let profile = qdc::profile();
    let host = create_label_host();
    let entity = Entity::builder("node:17")
        .scalar("field_language", "eng")
        .build();

    let document = RecordTransformer::new(&profile, &host)
        .transform(&entity)
        .unwrap();
    let xml = render::document_to_xml(&document, &profile).unwrap();

    assert!(xml.contains("<oai_qdc:qualifieddc"));
    assert!(xml.contains("xmlns:oai_qdc=\"http://worldcat.org/xmlschemas/qdc-1.0/\""));
    assert!(xml.contains("<dcterms:language>eng</dcterms:language>"));
}

#[test]
fn test_json_export_preserves_order() {
    let profile = dplava::profile();
    let host = create_label_host();
    let entity = Entity::builder("node:17")
        .reference("field_member_of", "node:3")
        .scalar("field_language", "eng")
        .build();

    let document = RecordTransformer::new(&profile, &host)
        .transform(&entity)
        .unwrap();
    let json = document.to_json().unwrap();

    let part_of_at = json.find("dcterms:isPartOf").unwrap();
    let language_at = json.find("dc:language").unwrap();
    assert!(part_of_at < language_at);
    assert!(json.contains("Collection A"));
}

#[test]
fn test_profile_tables_do_not_leak_between_transforms() {
    let dplava_profile = dplava::profile();
    let qdc_profile = qdc::profile();
    let host = create_label_host();
    let entity = Entity::builder("node:17")
        .scalar("field_language", "eng")
        .build();

    let under_dplava = RecordTransformer::new(&dplava_profile, &host)
        .transform(&entity)
        .unwrap();
    let under_qdc = RecordTransformer::new(&qdc_profile, &host)
        .transform(&entity)
        .unwrap();

    assert_eq!(under_dplava.values("dc:language").unwrap(), &["eng"]);
    assert!(under_dplava.values("dcterms:language").is_none());
    assert_eq!(under_qdc.values("dcterms:language").unwrap(), &["eng"]);
    assert!(under_qdc.values("dc:language").is_none());
}
