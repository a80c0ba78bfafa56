//! Positions within a specific catalog

use crate::catalog::manifest::VersionCatalog;

/// A resolved position: version value plus its index in the catalog it was
/// computed against. Invalid once detached from that catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCursor {
    pub value: String,
    pub index: usize,
}

/// A cursor into a catalog, resolved or not.
///
/// `Unresolved` carries only a version value whose index must be looked up.
/// `Resolved` carries an index already known from a previous step; it is
/// trusted verbatim so repeated backward walks stay O(1) per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCursor {
    Unresolved(String),
    Resolved(ResolvedCursor),
}

impl VersionCursor {
    /// Resolve this cursor to an index within `catalog`.
    ///
    /// An `Unresolved` value absent from the catalog resolves to `None`.
    pub fn resolve_index(&self, catalog: &VersionCatalog) -> Option<usize> {
        match self {
            VersionCursor::Unresolved(value) => catalog.position(value),
            VersionCursor::Resolved(cursor) => Some(cursor.index),
        }
    }
}
