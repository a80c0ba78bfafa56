//! Page-level orchestration: load, resolve, render
//!
//! Single async entry point wiring the catalog source, the path extractor,
//! the selector, and the renderer. Catalog failure disables the whole
//! versioning feature for this page view without touching the surface.

use tracing::{debug, warn};

use crate::catalog::source::CatalogSource;
use crate::config::SiteConfig;
use crate::render::html::HtmlRenderer;
use crate::render::surface::PageSurface;
use crate::resolve::selector::{Selection, select};
use crate::resolve::token::{VersionToken, extract_version_token};

/// Resolve versioning for the page at `path` and apply it to `page`.
///
/// Fetches the catalog once, computes the selection, then mutates the page:
/// stale pages get the warning banner and the concrete version appended to
/// the title area; every page gets the footer version list, inserted ahead
/// of the footer's existing content.
///
/// Returns the selection, or `None` when the catalog was unavailable and the
/// page was left untouched.
pub async fn apply_versioning<S, P>(
    config: &SiteConfig,
    source: &S,
    path: &str,
    page: &mut P,
) -> Option<Selection>
where
    S: CatalogSource + ?Sized,
    P: PageSurface + ?Sized,
{
    let catalog = match source.fetch_catalog().await {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!("versions manifest unavailable, skipping version links: {err}");
            return None;
        }
    };

    let token = extract_version_token(path, config);
    debug!(?token, latest = catalog.latest(), "resolving page version");

    let selection = select(&catalog, token);
    let renderer = HtmlRenderer::new(config.clone());

    if selection.is_stale {
        if let VersionToken::Release(version) = &selection.current {
            page.append_title_version(version);
        }
        page.prepend_stale_banner(&renderer.stale_banner());
    }

    let footer = renderer.footer_html(&selection, &page.footer_inner());
    page.replace_footer(&footer);

    Some(selection)
}
