//! Collaborator traits consumed by the view-model core.
//!
//! These keep the core independent of how items, users, and secondary
//! entities are actually stored: the server wires in its storage-backed
//! implementations, tests use the in-memory ones from [`crate::library`].

use std::path::PathBuf;
use std::sync::Arc;

use vireo_model::{ItemId, MediaItem, User, UserId};

/// Read access to the library's hierarchical item graph.
pub trait LibraryGraph: Send + Sync {
    /// Fetch an item by id.
    ///
    /// The graph owns the empty-identity convention: implementations may
    /// map the nil id to a designated root item.
    fn get(&self, id: &ItemId) -> Option<Arc<MediaItem>>;

    /// Children of a container visible to `user`.
    ///
    /// Implementations filter by the user's maximum permitted rating (and,
    /// where the container defines one, its recency window) before
    /// returning; the core treats the result as pre-filtered.
    fn visible_children(
        &self,
        item: &MediaItem,
        user: &User,
    ) -> Vec<Arc<MediaItem>>;
}

/// Keyed lookup over the known-users collection.
pub trait UserRegistry: Send + Sync {
    fn user_by_id(&self, id: &UserId) -> Option<Arc<User>>;
}

/// Secondary-entity registry resolving people and studios by name.
///
/// Matching semantics (case sensitivity and so on) belong to the
/// implementation; the core passes names through unmodified.
#[cfg_attr(test, mockall::automock)]
pub trait ImageRegistry: Send + Sync {
    fn person_image(&self, name: &str) -> Option<PathBuf>;

    fn studio_image(&self, name: &str) -> Option<PathBuf>;
}
