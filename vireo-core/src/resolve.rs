use std::sync::Arc;

use vireo_model::{ItemId, MediaItem};

use crate::error::{CoreError, Result};
use crate::registry::LibraryGraph;

/// Resolves textual identifiers to library items.
///
/// Thin glue over the library graph: it owns only the parsing policy.
/// Empty input maps to the nil sentinel, which the graph resolves per its
/// own convention (commonly the root item).
#[derive(Clone, Copy)]
pub struct ItemResolver<'a> {
    graph: &'a dyn LibraryGraph,
}

impl std::fmt::Debug for ItemResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemResolver").finish_non_exhaustive()
    }
}

impl<'a> ItemResolver<'a> {
    pub fn new(graph: &'a dyn LibraryGraph) -> Self {
        Self { graph }
    }

    pub fn resolve(&self, id: &str) -> Result<Arc<MediaItem>> {
        let id = ItemId::parse(id)
            .map_err(|_| CoreError::InvalidIdentifier(id.to_string()))?;
        self.graph.get(&id).ok_or(CoreError::NotFound(id))
    }
}
