//! The serialization graph builder.
//!
//! One [`ItemDto`] per item: personalization attached, inherited display
//! assets resolved, parent linkage set, people and studios enriched, and,
//! when requested, one level of visible children built beneath the root.
//! A build is synchronous and side-effect free; concurrent builds need no
//! coordination.

use tracing::debug;
use vireo_model::{MediaItem, User, UserId};

use crate::dto::ItemDto;
use crate::enrich::Enricher;
use crate::error::{CoreError, Result};
use crate::inherit;
use crate::registry::{ImageRegistry, LibraryGraph, UserRegistry};

#[derive(Clone, Copy)]
pub struct DtoBuilder<'a> {
    graph: &'a dyn LibraryGraph,
    users: &'a dyn UserRegistry,
    images: &'a dyn ImageRegistry,
}

impl std::fmt::Debug for DtoBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DtoBuilder").finish_non_exhaustive()
    }
}

impl<'a> DtoBuilder<'a> {
    pub fn new(
        graph: &'a dyn LibraryGraph,
        users: &'a dyn UserRegistry,
        images: &'a dyn ImageRegistry,
    ) -> Self {
        Self {
            graph,
            users,
            images,
        }
    }

    /// Build the view-model node for `item` on behalf of `user_id`.
    ///
    /// An unknown user is a hard error; a silently depersonalized response
    /// would be worse than a failed one. With `include_children`, visible
    /// children of a container are built exactly one level deep; their own
    /// `children` field stays absent even when they are containers.
    pub fn build(
        &self,
        item: &MediaItem,
        include_children: bool,
        user_id: &UserId,
    ) -> Result<ItemDto> {
        let user = self
            .users
            .user_by_id(user_id)
            .ok_or(CoreError::UserNotFound(*user_id))?;
        debug!(
            item = %item.id,
            user = %user.id,
            include_children,
            "building item view model"
        );
        self.build_node(item, include_children, &user)
    }

    fn build_node(
        &self,
        item: &MediaItem,
        include_children: bool,
        user: &User,
    ) -> Result<ItemDto> {
        let user_data = user.item_data(&item.id).cloned();

        // Own assets always win; the ancestor walk runs only when the item
        // has none, so an inherited reference is never set alongside one.
        let parent_logo_item_id = if item.has_logo() {
            None
        } else {
            inherit::inherited_logo(self.graph, item)?
        };

        let (parent_backdrop_item_id, parent_backdrop_count) =
            if item.has_backdrops() {
                (None, None)
            } else {
                match inherit::inherited_backdrops(self.graph, item)? {
                    Some((id, count)) => (Some(id), Some(count)),
                    None => (None, None),
                }
            };

        // Absent, not empty, for non-containers: callers distinguish
        // "not applicable" from "nothing visible".
        let children = if include_children && item.is_container() {
            let visible = self.graph.visible_children(item, user);
            let mut nodes = Vec::with_capacity(visible.len());
            for child in visible {
                nodes.push(self.build_node(&child, false, user)?);
            }
            Some(nodes)
        } else {
            None
        };

        let enricher = Enricher::new(self.images);
        let people = (!item.people.is_empty())
            .then(|| enricher.enrich_people(&item.people));
        let studios = (!item.studios.is_empty())
            .then(|| enricher.enrich_studios(&item.studios));

        Ok(ItemDto {
            item: item.clone(),
            user_data,
            kind: item.kind,
            is_folder: item.is_container(),
            parent_logo_item_id,
            parent_backdrop_item_id,
            parent_backdrop_count,
            parent_id: item.parent_id,
            children,
            people,
            studios,
        })
    }
}
