//! Current-version token derived from the page path

use serde::Serialize;

use crate::config::SiteConfig;

/// Version context of the page being viewed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum VersionToken {
    /// A concrete released version taken from a versioned docs path
    Release(String),
    /// The unreleased development head
    Trunk,
    /// The version-index page itself carries no version context
    VersionsIndex,
}

/// Derive the version token from a page path.
///
/// A path under the versioned-docs prefix yields the first segment after the
/// prefix as a `Release`, verbatim; no check that it is actually published.
/// The version-index page yields `VersionsIndex`. Everything else is the
/// trunk view. Total function.
pub fn extract_version_token(path: &str, config: &SiteConfig) -> VersionToken {
    if let Some(rest) = path.strip_prefix(&config.docs_prefix) {
        let version = rest.split('/').next().unwrap_or_default();
        return VersionToken::Release(version.to_string());
    }

    if path.starts_with(&config.versions_page_path) {
        return VersionToken::VersionsIndex;
    }

    VersionToken::Trunk
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/docs/v2.5.1/index.html", VersionToken::Release("v2.5.1".to_string()))]
    #[case("/docs/v1.0.0/", VersionToken::Release("v1.0.0".to_string()))]
    #[case("/docs/v1.0.0", VersionToken::Release("v1.0.0".to_string()))]
    #[case("/docs/", VersionToken::Release(String::new()))]
    #[case("/d4/de0/versions.html", VersionToken::VersionsIndex)]
    #[case("/d4/de0/versions.html?utm=1", VersionToken::VersionsIndex)]
    #[case("/", VersionToken::Trunk)]
    #[case("/index.html", VersionToken::Trunk)]
    #[case("/docs", VersionToken::Trunk)]
    #[case("/d4/de0/other.html", VersionToken::Trunk)]
    fn extract_version_token_classifies_paths(#[case] path: &str, #[case] expected: VersionToken) {
        assert_eq!(extract_version_token(path, &SiteConfig::default()), expected);
    }

    #[test]
    fn extract_version_token_honors_configured_prefixes() {
        let config = SiteConfig {
            docs_prefix: "/manual/".to_string(),
            versions_page_path: "/all-versions.html".to_string(),
            ..SiteConfig::default()
        };

        assert_eq!(
            extract_version_token("/manual/v3.0.0/intro.html", &config),
            VersionToken::Release("v3.0.0".to_string())
        );
        assert_eq!(
            extract_version_token("/all-versions.html", &config),
            VersionToken::VersionsIndex
        );
        // The default docs prefix is no longer special.
        assert_eq!(
            extract_version_token("/docs/v3.0.0/intro.html", &config),
            VersionToken::Trunk
        );
    }
}
