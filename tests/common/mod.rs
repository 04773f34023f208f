//! Common test helpers and fixtures shared across the test suite.

use oaimap::{Entity, StaticHost, SubRecord};

/// Creates a host with every collaborator table a full record needs:
/// reference labels, the original-file media chain, a representative
/// image, and a canonical address.
pub fn create_full_host() -> StaticHost {
    StaticHost::new()
        .with_label("node:3", "Collection A")
        .with_label("agent:smith", "Smith, Jane")
        .with_label("agent:acme", "Acme Press")
        .with_term("http://pcdm.org/use#OriginalFile", "term:original")
        .with_media("node:17", "term:original", "media:9")
        .with_file("media:9", "file:4")
        .with_url("file:4", "https://repo.example.org/files/4.tiff")
        .with_image("node:17", "media:11")
        .with_file("media:11", "file:5")
        .with_url("file:5", "https://repo.example.org/files/5.jpg")
        .with_address("node:17", "https://repo.example.org/items/annual-report-1901")
}

/// Creates a host that resolves reference labels only, so no derived
/// elements appear in the output.
#[allow(dead_code)]
pub fn create_label_host() -> StaticHost {
    StaticHost::new()
        .with_label("node:3", "Collection A")
        .with_label("agent:smith", "Smith, Jane")
        .with_label("agent:acme", "Acme Press")
}

/// Creates a representative entity exercising every handling category:
/// titles (untyped and typed), direct-mapped scalars and references,
/// faceted-subject and origin-information sub-records, linked agents,
/// and notes (typed and untyped).
#[allow(dead_code)]
pub fn create_full_entity() -> Entity {
    let main_title = SubRecord::builder("title")
        .scalar("field_title", "Annual report 1901")
        .build();
    let alt_title = SubRecord::builder("title")
        .scalar("field_title", "AR 1901")
        .scalar("field_title_type", "abbreviated")
        .build();
    let faceted = SubRecord::builder("faceted_subject")
        .scalar("field_topic_general_subdivision_", "Agriculture")
        .scalar("field_geographic_geographic_subd", "Virginia")
        .build();
    let origin = SubRecord::builder("origin_information")
        .scalar("field_date_created", "1901")
        .scalar("field_publisher", "Acme Press")
        .build();
    let provenance_note = SubRecord::builder("note")
        .scalar("field_note", "Gift of the Smith family")
        .scalar("field_note_type", "provenance")
        .build();
    let untyped_note = SubRecord::builder("note")
        .scalar("field_note", "Binding repaired in 1950")
        .build();

    Entity::builder("node:17")
        .label("Annual report 1901")
        .paragraph("field_title", main_title)
        .paragraph("field_title", alt_title)
        .reference("field_member_of", "node:3")
        .scalar("field_language", "eng")
        .scalar("field_description", "Yearly summary of operations")
        .scalar("field_subject", "Farming")
        .paragraph("field_faceted_subject", faceted)
        .paragraph("field_origin_information", origin)
        .linked_agent("field_linked_agent", "relators:aut", "agent:smith")
        .linked_agent("field_linked_agent", "relators:pbl", "agent:acme")
        .paragraph("field_note_paragraph", provenance_note)
        .paragraph("field_note_paragraph", untyped_note)
        .build()
}
