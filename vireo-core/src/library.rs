//! In-memory collaborator implementations.
//!
//! These back the integration tests and small single-process deployments;
//! a storage-backed server substitutes its own [`LibraryGraph`] and
//! [`UserRegistry`] implementations.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use vireo_model::{ItemId, MediaItem, User, UserId};

use crate::registry::{ImageRegistry, LibraryGraph, UserRegistry};

/// In-memory item graph with a designated root.
///
/// Child order is insertion order, which the builder preserves.
#[derive(Debug, Default)]
pub struct InMemoryLibrary {
    items: HashMap<ItemId, Arc<MediaItem>>,
    children: HashMap<ItemId, Vec<ItemId>>,
    root: Option<ItemId>,
}

impl InMemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, indexing it under its parent when one is set.
    pub fn insert(&mut self, item: MediaItem) -> Arc<MediaItem> {
        let item = Arc::new(item);
        if let Some(parent) = item.parent_id {
            self.children.entry(parent).or_default().push(item.id);
        }
        self.items.insert(item.id, Arc::clone(&item));
        item
    }

    /// Insert an item and mark it as the graph's root. The root is what the
    /// nil (empty) identity resolves to.
    pub fn insert_root(&mut self, item: MediaItem) -> Arc<MediaItem> {
        let item = self.insert(item);
        self.root = Some(item.id);
        item
    }

    pub fn root(&self) -> Option<Arc<MediaItem>> {
        self.root.and_then(|id| self.items.get(&id).cloned())
    }

    /// Items added within the user's recent-items window, most recent
    /// first, restricted to what the user may view.
    pub fn recently_added(
        &self,
        user: &User,
        now: DateTime<Utc>,
    ) -> Vec<Arc<MediaItem>> {
        let cutoff = user.recent_cutoff(now);
        let mut recent: Vec<Arc<MediaItem>> = self
            .items
            .values()
            .filter(|item| item.added_at >= cutoff)
            .filter(|item| user.can_view(item.rating))
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        recent
    }
}

impl LibraryGraph for InMemoryLibrary {
    fn get(&self, id: &ItemId) -> Option<Arc<MediaItem>> {
        let id = if id.is_nil() { self.root? } else { *id };
        self.items.get(&id).cloned()
    }

    fn visible_children(
        &self,
        item: &MediaItem,
        user: &User,
    ) -> Vec<Arc<MediaItem>> {
        let Some(child_ids) = self.children.get(&item.id) else {
            return Vec::new();
        };
        child_ids
            .iter()
            .filter_map(|id| self.items.get(id))
            .filter(|child| user.can_view(child.rating))
            .cloned()
            .collect()
    }
}

/// Keyed in-memory user registry.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: HashMap<UserId, Arc<User>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: User) -> Arc<User> {
        let user = Arc::new(user);
        self.users.insert(user.id, Arc::clone(&user));
        user
    }
}

impl UserRegistry for InMemoryUsers {
    fn user_by_id(&self, id: &UserId) -> Option<Arc<User>> {
        self.users.get(id).cloned()
    }
}

/// Exact-match, case-sensitive name-to-image registry.
#[derive(Debug, Default)]
pub struct InMemoryImageRegistry {
    people: HashMap<String, PathBuf>,
    studios: HashMap<String, PathBuf>,
}

impl InMemoryImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        image: impl Into<PathBuf>,
    ) {
        self.people.insert(name.into(), image.into());
    }

    pub fn add_studio(
        &mut self,
        name: impl Into<String>,
        image: impl Into<PathBuf>,
    ) {
        self.studios.insert(name.into(), image.into());
    }
}

impl ImageRegistry for InMemoryImageRegistry {
    fn person_image(&self, name: &str) -> Option<PathBuf> {
        self.people.get(name).cloned()
    }

    fn studio_image(&self, name: &str) -> Option<PathBuf> {
        self.studios.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use vireo_model::{ItemKind, ParentalRating};

    #[test]
    fn nil_id_resolves_to_root() {
        let mut library = InMemoryLibrary::new();
        let root = library.insert_root(MediaItem::new(ItemKind::Folder, "Media"));

        let resolved = library.get(&ItemId::nil()).unwrap();
        assert_eq!(resolved.id, root.id);
    }

    #[test]
    fn nil_id_without_root_is_a_miss() {
        let library = InMemoryLibrary::new();
        assert!(library.get(&ItemId::nil()).is_none());
    }

    #[test]
    fn visible_children_filter_by_rating_and_keep_order() {
        let mut library = InMemoryLibrary::new();
        let root = library.insert_root(MediaItem::new(ItemKind::Folder, "Media"));

        let mut first = MediaItem::new(ItemKind::Movie, "Cars");
        first.parent_id = Some(root.id);
        first.rating = Some(ParentalRating::G);
        let mut second = MediaItem::new(ItemKind::Movie, "Heat");
        second.parent_id = Some(root.id);
        second.rating = Some(ParentalRating::R);
        let mut third = MediaItem::new(ItemKind::Movie, "Up");
        third.parent_id = Some(root.id);
        third.rating = Some(ParentalRating::G);
        let first = library.insert(first);
        library.insert(second);
        let third = library.insert(third);

        let mut kid = User::new("kid");
        kid.max_parental_rating = Some(ParentalRating::Pg);

        let visible = library.visible_children(&root, &kid);
        let ids: Vec<ItemId> = visible.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }

    #[test]
    fn recently_added_respects_window_and_rating() {
        let now = Utc::now();
        let mut library = InMemoryLibrary::new();

        let mut fresh = MediaItem::new(ItemKind::Movie, "Fresh");
        fresh.added_at = now - Duration::days(2);
        let mut stale = MediaItem::new(ItemKind::Movie, "Stale");
        stale.added_at = now - Duration::days(30);
        let mut adult = MediaItem::new(ItemKind::Movie, "Adult");
        adult.added_at = now - Duration::days(1);
        adult.rating = Some(ParentalRating::Nc17);
        let fresh = library.insert(fresh);
        library.insert(stale);
        library.insert(adult);

        let mut kid = User::new("kid");
        kid.max_parental_rating = Some(ParentalRating::Pg13);
        kid.recent_item_days = 14;

        let recent = library.recently_added(&kid, now);
        let ids: Vec<ItemId> = recent.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![fresh.id]);
    }
}
