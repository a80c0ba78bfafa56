//! Backward traversal over a version catalog
//!
//! Predecessor lookups and the major-version floor query the selector builds
//! on. All operations are pure; the catalog is never mutated.

use crate::catalog::manifest::VersionCatalog;
use crate::resolve::cursor::{ResolvedCursor, VersionCursor};

/// The catalog entry immediately preceding `cursor`.
///
/// Absent when the cursor resolves to index 0 (nothing published earlier),
/// resolves out of range, or names a version the catalog does not contain.
pub fn previous_version(
    catalog: &VersionCatalog,
    cursor: &VersionCursor,
) -> Option<ResolvedCursor> {
    let index = cursor.resolve_index(catalog)?;

    if index == 0 || index >= catalog.len() {
        return None;
    }

    catalog.get(index - 1).map(|value| ResolvedCursor {
        value: value.to_string(),
        index: index - 1,
    })
}

/// Major component of a version string: leading `v` stripped, first
/// dot-delimited segment parsed base 10.
///
/// `None` means the version cannot be classified; callers must treat it as
/// equal to no major, including another unclassifiable one. The malformed
/// string itself is left as-is.
pub fn version_major_part(version: &str) -> Option<u64> {
    let first = version.split('.').next()?;
    first.strip_prefix('v').unwrap_or(first).parse::<u64>().ok()
}

/// The NaN-style equality rule: unclassifiable majors match nothing.
fn same_major(a: Option<u64>, b: Option<u64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// The earliest catalog entry on `target`'s major line.
///
/// Seeds the backward walk from `target`'s own resolved index and steps while
/// the previous entry shares the target's major, so the query is valid for
/// any published target, not only the latest. A target the catalog does not
/// contain is returned unchanged.
pub fn floor_to_major_version(catalog: &VersionCatalog, target: &str) -> String {
    let target_major = version_major_part(target);

    let Some(start) = catalog.position(target) else {
        return target.to_string();
    };

    let mut cursor = ResolvedCursor {
        value: target.to_string(),
        index: start,
    };

    while let Some(previous) = previous_version(catalog, &VersionCursor::Resolved(cursor.clone())) {
        if !same_major(version_major_part(&previous.value), target_major) {
            break;
        }
        cursor = previous;
    }

    cursor.value
}
