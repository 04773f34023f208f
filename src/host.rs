//! Collaborator contracts supplied by the host repository system.
//!
//! The engine never stores or loads anything itself; reference labels,
//! media, files, and canonical addresses come from a [`RepositoryHost`]
//! injected at transformer construction. All lookups are synchronous and
//! absence-tolerant: a collaborator that cannot resolve something
//! returns `None` and the corresponding output is simply omitted. No
//! retry or timeout logic lives here.
//!
//! [`StaticHost`] is an in-memory implementation backed by lookup
//! tables, used throughout the test suite and handy for fixtures.

use indexmap::IndexMap;

use crate::entity::Entity;

/// Opaque handle to a taxonomy term held by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermRef(pub String);

/// Opaque handle to a media item held by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef(pub String);

/// Opaque handle to a file held by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRef(pub String);

/// Services the host repository supplies to the mapping engine.
pub trait RepositoryHost {
    /// Display label of the referenced entity, if it can be loaded.
    fn reference_label(&self, target_id: &str) -> Option<String>;

    /// Taxonomy term matching a media-use URI.
    fn term_for_uri(&self, uri: &str) -> Option<TermRef>;

    /// Media on the entity tagged with the given term.
    fn media_with_term(&self, entity: &Entity, term: &TermRef) -> Option<MediaRef>;

    /// The file backing a media item.
    fn media_file(&self, media: &MediaRef) -> Option<FileRef>;

    /// Public URL of a file.
    fn file_url(&self, file: &FileRef) -> Option<String>;

    /// Best representative image for the entity.
    fn representative_image(&self, entity: &Entity) -> Option<MediaRef>;

    /// Canonical absolute address of the entity, using its alias form
    /// when `use_alias` is set.
    fn canonical_address(&self, entity: &Entity, use_alias: bool) -> Option<String>;
}

/// In-memory [`RepositoryHost`] backed by lookup tables.
///
/// Every table starts empty, so a fresh `StaticHost` resolves nothing
/// and a transformation against it emits no reference labels or derived
/// elements. Populate only what a fixture needs:
///
/// ```
/// use oaimap::StaticHost;
///
/// let host = StaticHost::new()
///     .with_label("node:3", "Collection A")
///     .with_address("node:17", "https://repo.example.org/items/17");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    labels: IndexMap<String, String>,
    terms: IndexMap<String, String>,
    media: IndexMap<(String, String), String>,
    images: IndexMap<String, String>,
    files: IndexMap<String, String>,
    urls: IndexMap<String, String>,
    addresses: IndexMap<String, String>,
}

impl StaticHost {
    /// Create a host that resolves nothing.
    #[must_use]
    pub fn new() -> Self {
        StaticHost::default()
    }

    /// Register a display label for an entity id.
    #[must_use]
    pub fn with_label(mut self, target_id: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(target_id.into(), label.into());
        self
    }

    /// Register a taxonomy term for a media-use URI.
    #[must_use]
    pub fn with_term(mut self, uri: impl Into<String>, term: impl Into<String>) -> Self {
        self.terms.insert(uri.into(), term.into());
        self
    }

    /// Register a media item tagged with a term on an entity.
    #[must_use]
    pub fn with_media(
        mut self,
        entity_id: impl Into<String>,
        term: impl Into<String>,
        media: impl Into<String>,
    ) -> Self {
        self.media
            .insert((entity_id.into(), term.into()), media.into());
        self
    }

    /// Register the representative image media for an entity.
    #[must_use]
    pub fn with_image(mut self, entity_id: impl Into<String>, media: impl Into<String>) -> Self {
        self.images.insert(entity_id.into(), media.into());
        self
    }

    /// Register the file backing a media item.
    #[must_use]
    pub fn with_file(mut self, media: impl Into<String>, file: impl Into<String>) -> Self {
        self.files.insert(media.into(), file.into());
        self
    }

    /// Register the public URL of a file.
    #[must_use]
    pub fn with_url(mut self, file: impl Into<String>, url: impl Into<String>) -> Self {
        self.urls.insert(file.into(), url.into());
        self
    }

    /// Register the canonical address of an entity.
    #[must_use]
    pub fn with_address(mut self, entity_id: impl Into<String>, address: impl Into<String>) -> Self {
        self.addresses.insert(entity_id.into(), address.into());
        self
    }
}

impl RepositoryHost for StaticHost {
    fn reference_label(&self, target_id: &str) -> Option<String> {
        self.labels.get(target_id).cloned()
    }

    fn term_for_uri(&self, uri: &str) -> Option<TermRef> {
        self.terms.get(uri).cloned().map(TermRef)
    }

    fn media_with_term(&self, entity: &Entity, term: &TermRef) -> Option<MediaRef> {
        self.media
            .get(&(entity.id.clone(), term.0.clone()))
            .cloned()
            .map(MediaRef)
    }

    fn media_file(&self, media: &MediaRef) -> Option<FileRef> {
        self.files.get(&media.0).cloned().map(FileRef)
    }

    fn file_url(&self, file: &FileRef) -> Option<String> {
        self.urls.get(&file.0).cloned()
    }

    fn representative_image(&self, entity: &Entity) -> Option<MediaRef> {
        self.images.get(&entity.id).cloned().map(MediaRef)
    }

    fn canonical_address(&self, entity: &Entity, _use_alias: bool) -> Option<String> {
        self.addresses.get(&entity.id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_host_resolves_nothing() {
        let host = StaticHost::new();
        let entity = Entity::new("node:1");

        assert_eq!(host.reference_label("node:2"), None);
        assert_eq!(host.term_for_uri("http://pcdm.org/use#OriginalFile"), None);
        assert_eq!(host.representative_image(&entity), None);
        assert_eq!(host.canonical_address(&entity, true), None);
    }

    #[test]
    fn test_media_chain_resolves_end_to_end() {
        let host = StaticHost::new()
            .with_term("http://pcdm.org/use#OriginalFile", "term:original")
            .with_media("node:1", "term:original", "media:9")
            .with_file("media:9", "file:4")
            .with_url("file:4", "https://repo.example.org/files/4.tiff");
        let entity = Entity::new("node:1");

        let term = host.term_for_uri("http://pcdm.org/use#OriginalFile").unwrap();
        let media = host.media_with_term(&entity, &term).unwrap();
        let file = host.media_file(&media).unwrap();
        assert_eq!(
            host.file_url(&file).as_deref(),
            Some("https://repo.example.org/files/4.tiff")
        );
    }

    #[test]
    fn test_media_lookup_is_per_entity() {
        let host = StaticHost::new()
            .with_term("uri:x", "term:x")
            .with_media("node:1", "term:x", "media:1");
        let other = Entity::new("node:2");

        let term = host.term_for_uri("uri:x").unwrap();
        assert_eq!(host.media_with_term(&other, &term), None);
    }
}
