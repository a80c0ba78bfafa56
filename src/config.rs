use serde::Deserialize;

// =============================================================================
// Fetch-related constants
// =============================================================================

/// Timeout for the versions-manifest fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with manifest requests
pub const USER_AGENT: &str = "docs-header";

// =============================================================================
// Site layout defaults
// =============================================================================

/// Default site-root path a versioned page links back to
pub const DEFAULT_SITE_ROOT: &str = "/";

/// Default path prefix identifying versioned documentation pages
pub const DEFAULT_DOCS_PREFIX: &str = "/docs/";

/// Default path of the full version-index page
pub const DEFAULT_VERSIONS_PAGE_PATH: &str = "/d4/de0/versions.html";

/// Default site-root path of the versions manifest resource
pub const DEFAULT_MANIFEST_PATH: &str = "/versions.json";

/// Default label for the unreleased development head
pub const DEFAULT_TRUNK_LABEL: &str = "trunk/develop";

/// Default warning shown on pages for a non-latest version
pub const DEFAULT_STALE_NOTICE: &str =
    "⚠️ This is the documentation for an old version. Click here to switch to the latest version.";

/// Site layout configuration
///
/// Every field has a default matching the reference site layout, so a partial
/// JSON object (or no configuration at all) yields a working setup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Path prefix of versioned documentation pages, e.g. "/docs/"
    pub docs_prefix: String,
    /// Path of the page listing every published version
    pub versions_page_path: String,
    /// Site-root path of the versions manifest resource
    pub manifest_path: String,
    /// Path the trunk entry and the stale-version warning link back to
    pub site_root: String,
    /// Display label for the unreleased development head
    pub trunk_label: String,
    /// Warning text shown on stale pages
    pub stale_notice: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_prefix: DEFAULT_DOCS_PREFIX.to_string(),
            versions_page_path: DEFAULT_VERSIONS_PAGE_PATH.to_string(),
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            site_root: DEFAULT_SITE_ROOT.to_string(),
            trunk_label: DEFAULT_TRUNK_LABEL.to_string(),
            stale_notice: DEFAULT_STALE_NOTICE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from a JSON document, filling defaults per field.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
