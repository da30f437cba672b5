//! Nearest-ancestor display-asset resolution.
//!
//! When an item lacks a logo or backdrop set of its own, clients fall back
//! to the nearest ancestor that has one. Callers check the item's own asset
//! first and skip the walk entirely when it is present; own assets always
//! win over inherited ones.

use std::collections::HashSet;

use tracing::warn;
use vireo_model::{ItemId, MediaItem};

use crate::error::{CoreError, Result};
use crate::registry::LibraryGraph;

/// Id of the nearest ancestor with a logo, walking strictly upward from
/// the item's parent.
pub fn inherited_logo(
    graph: &dyn LibraryGraph,
    item: &MediaItem,
) -> Result<Option<ItemId>> {
    walk_ancestors(graph, item, |ancestor| {
        ancestor.has_logo().then_some(ancestor.id)
    })
}

/// Id of the nearest ancestor with a non-empty backdrop set, together with
/// the count of backdrops at that ancestor (never at any other level).
pub fn inherited_backdrops(
    graph: &dyn LibraryGraph,
    item: &MediaItem,
) -> Result<Option<(ItemId, usize)>> {
    walk_ancestors(graph, item, |ancestor| {
        ancestor
            .has_backdrops()
            .then(|| (ancestor.id, ancestor.backdrop_paths.len()))
    })
}

/// Upward walk over the parent chain, first match wins.
///
/// The graph guarantees an acyclic, finite parent relation; the visited set
/// turns a broken guarantee into `CycleDetected` instead of a hang. A
/// parent id that no longer resolves terminates the walk: absence stays
/// non-fatal.
fn walk_ancestors<T>(
    graph: &dyn LibraryGraph,
    item: &MediaItem,
    mut pick: impl FnMut(&MediaItem) -> Option<T>,
) -> Result<Option<T>> {
    let mut seen = HashSet::new();
    seen.insert(item.id);

    let mut next = item.parent_id;
    while let Some(id) = next {
        if !seen.insert(id) {
            return Err(CoreError::CycleDetected(id));
        }
        let Some(ancestor) = graph.get(&id) else {
            warn!(
                item = %item.id,
                parent = %id,
                "dangling parent reference; stopping ancestor walk"
            );
            return Ok(None);
        };
        if let Some(found) = pick(&ancestor) {
            return Ok(Some(found));
        }
        next = ancestor.parent_id;
    }
    Ok(None)
}
