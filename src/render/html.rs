//! HTML fragments for the warning banner and the footer version list
//!
//! Markup uses the theme's CSS custom properties for colors so the fragments
//! follow light/dark mode without their own stylesheet.

use crate::config::SiteConfig;
use crate::resolve::selector::{FooterEntry, LinkTarget, Selection};

const ACTIVE_STYLE: &str = "background-image: none; color: var(--toc-active-color); font-weight: bold;";
const BANNER_LINK_STYLE: &str = "padding: 16px; margin-bottom: 20px; text-align: center; border: 1px solid var(--warning-color-dark); border-radius: var(--border-radius-large);";
const FOOTER_ITEM_STYLE: &str = "box-shadow: inset -1px 0 0 0 var(--separator-color); background-image: none; margin-right: 48px;";

/// Builds the HTML fragments for one resolved page view
pub struct HtmlRenderer {
    config: SiteConfig,
}

impl HtmlRenderer {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// The stale-version warning block, linking back to the site root.
    pub fn stale_banner(&self) -> String {
        format!(
            concat!(
                "<div style=\"width: 100%; display: flex; flex-direction: column;\">\n",
                "  <a style=\"{style}\" href=\"{root}\">\n",
                "    {notice}\n",
                "  </a>\n",
                "</div>\n",
            ),
            style = BANNER_LINK_STYLE,
            root = self.config.site_root,
            notice = self.config.stale_notice,
        )
    }

    /// New content for the footer container: the version-list prefix followed
    /// by `existing_inner` unchanged, so content already in the footer keeps
    /// its place after the inserted links.
    pub fn footer_html(&self, selection: &Selection, existing_inner: &str) -> String {
        let mut html = format!(
            "<li style=\"{FOOTER_ITEM_STYLE}\"><span style=\"color: var(--toc-foreground);\">Docs version:</span>",
        );

        for entry in &selection.entries {
            html.push_str(&self.footer_entry(entry));
            html.push_str(", ");
        }

        html.push_str(&format!(
            "<a href=\"{}\">others</a>",
            self.config.versions_page_path
        ));

        html.push_str(existing_inner);
        html
    }

    fn footer_entry(&self, entry: &FooterEntry) -> String {
        let (label, href) = match &entry.target {
            LinkTarget::Trunk => (
                self.config.trunk_label.as_str(),
                format!("{}index.html", self.config.site_root),
            ),
            LinkTarget::Release(version) => (
                version.as_str(),
                format!("{}{}/index.html", self.config.docs_prefix, version),
            ),
        };

        if entry.active {
            format!("<span style=\"{ACTIVE_STYLE}\">{label}</span>")
        } else {
            format!("<a href=\"{href}\">{label}</a>")
        }
    }
}
