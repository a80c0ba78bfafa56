//! Page surface the rendered fragments are applied through

#[cfg(test)]
use mockall::automock;

/// The page mutations driven by version resolution
///
/// This is the whole DOM contract the crate consumes; locating the actual
/// elements is the embedding page's concern.
#[cfg_attr(test, automock)]
pub trait PageSurface {
    /// Current inner content of the footer container, preserved across
    /// footer replacement
    fn footer_inner(&self) -> String;

    /// Insert the stale-version warning ahead of the title area
    fn prepend_stale_banner(&mut self, html: &str);

    /// Append the concrete version to the project-brief text
    fn append_title_version(&mut self, version: &str);

    /// Replace the footer container's content
    fn replace_footer(&mut self, html: &str);
}

/// In-process page surface used by the CLI and tests
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemoryPage {
    pub banner: Option<String>,
    pub title_suffix: Option<String>,
    pub footer: String,
}

impl InMemoryPage {
    /// A page whose footer container already holds `footer_inner`.
    pub fn with_footer(footer_inner: &str) -> Self {
        Self {
            footer: footer_inner.to_string(),
            ..Self::default()
        }
    }
}

impl PageSurface for InMemoryPage {
    fn footer_inner(&self) -> String {
        self.footer.clone()
    }

    fn prepend_stale_banner(&mut self, html: &str) {
        self.banner = Some(html.to_string());
    }

    fn append_title_version(&mut self, version: &str) {
        self.title_suffix = Some(format!(" {version}"));
    }

    fn replace_footer(&mut self, html: &str) {
        self.footer = html.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_page_records_each_mutation() {
        let mut page = InMemoryPage::with_footer("<li>crumbs</li>");

        page.prepend_stale_banner("<div>old</div>");
        page.append_title_version("v1.0.0");
        page.replace_footer("<li>versions</li><li>crumbs</li>");

        assert_eq!(page.banner.as_deref(), Some("<div>old</div>"));
        assert_eq!(page.title_suffix.as_deref(), Some(" v1.0.0"));
        assert_eq!(page.footer, "<li>versions</li><li>crumbs</li>");
    }
}
