//! Manifest wire shape and the ordered version catalog

use serde::Deserialize;

use crate::catalog::error::CatalogError;

/// Wire shape of the versions manifest resource
///
/// The manifest is a JSON object with a single `versions` array, ordered
/// oldest first, latest last.
#[derive(Debug, Deserialize)]
pub struct VersionsManifest {
    pub versions: Vec<String>,
}

/// Ordered list of published documentation versions, oldest first.
///
/// Non-empty by construction; position in the list is the sole source of
/// recency truth. The catalog is immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCatalog {
    versions: Vec<String>,
}

impl VersionCatalog {
    /// Build a catalog from an ordered version list.
    ///
    /// Rejects an empty list, so every constructed catalog has a latest entry.
    pub fn new(versions: Vec<String>) -> Result<Self, CatalogError> {
        if versions.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { versions })
    }

    pub fn from_manifest(manifest: VersionsManifest) -> Result<Self, CatalogError> {
        Self::new(manifest.versions)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// The version at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.versions.get(index).map(String::as_str)
    }

    /// Index of `version` in publication order, absent when not published.
    pub fn position(&self, version: &str) -> Option<usize> {
        self.versions.iter().position(|v| v == version)
    }

    /// The most recently published version.
    pub fn latest(&self) -> &str {
        // The constructor rejects empty lists.
        self.versions
            .last()
            .expect("catalog is non-empty by construction")
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[&str]) -> VersionCatalog {
        VersionCatalog::new(entries.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn new_rejects_empty_version_list() {
        let result = VersionCatalog::new(vec![]);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn latest_is_the_last_entry() {
        let catalog = catalog(&["v1.0.0", "v1.1.0", "v2.0.0"]);
        assert_eq!(catalog.latest(), "v2.0.0");
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn position_finds_published_versions_only() {
        let catalog = catalog(&["v1.0.0", "v1.1.0"]);

        assert_eq!(catalog.position("v1.1.0"), Some(1));
        assert_eq!(catalog.position("v9.9.9"), None);
    }

    #[test]
    fn from_manifest_preserves_publication_order() {
        let manifest: VersionsManifest =
            serde_json::from_str(r#"{"versions": ["v1.0.0", "v2.0.0"]}"#).unwrap();
        let catalog = VersionCatalog::from_manifest(manifest).unwrap();

        assert_eq!(catalog.versions(), ["v1.0.0", "v2.0.0"]);
    }
}
