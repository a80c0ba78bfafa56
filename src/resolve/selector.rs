//! Decides which versions to surface and whether the page is stale

use serde::Serialize;

use crate::catalog::manifest::VersionCatalog;
use crate::resolve::cursor::VersionCursor;
use crate::resolve::navigator::{floor_to_major_version, previous_version};
use crate::resolve::token::VersionToken;

/// A single footer slot, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterEntry {
    pub target: LinkTarget,
    /// Active entries render as a non-clickable marker instead of a link
    pub active: bool,
}

/// What a footer entry points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    /// The unreleased development head at the site root
    Trunk,
    /// A released version's documentation tree
    Release(String),
}

/// Outcome of version selection for one page view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Most recently published version
    pub latest: String,
    /// Most recent version of the prior major line, or the immediate
    /// predecessor of latest when latest is the sole release on its line.
    /// Absent for a single-entry catalog.
    pub secondary: Option<String>,
    /// True when the page shows a concrete, non-latest version
    pub is_stale: bool,
    /// Version context the page was resolved against
    pub current: VersionToken,
    /// Ordered footer slots: trunk, then latest, then secondary
    pub entries: Vec<FooterEntry>,
}

/// Combine catalog and current token into the featured version set.
///
/// Pure and idempotent: the same catalog and token always produce an
/// identical selection, and the catalog is never mutated. Entries are built
/// straight from the featured versions with no de-duplication pass.
pub fn select(catalog: &VersionCatalog, current: VersionToken) -> Selection {
    let latest = catalog.latest().to_string();

    let floor = floor_to_major_version(catalog, &latest);
    let secondary = if floor == latest {
        // Latest is alone on its major line; fall back to its immediate
        // predecessor, which may belong to an older line or not exist.
        previous_version(catalog, &VersionCursor::Unresolved(latest.clone())).map(|c| c.value)
    } else {
        Some(floor)
    };

    let is_stale = matches!(&current, VersionToken::Release(v) if *v != latest);

    let mut entries = vec![FooterEntry {
        target: LinkTarget::Trunk,
        active: current == VersionToken::Trunk,
    }];

    entries.push(release_entry(latest.clone(), &current));
    if let Some(version) = &secondary {
        entries.push(release_entry(version.clone(), &current));
    }

    Selection {
        latest,
        secondary,
        is_stale,
        current,
        entries,
    }
}

fn release_entry(version: String, current: &VersionToken) -> FooterEntry {
    let active = matches!(current, VersionToken::Release(v) if *v == version);
    FooterEntry {
        target: LinkTarget::Release(version),
        active,
    }
}
