//! Serialization-ready view-model types.
//!
//! Every optional field skips serialization when absent, so clients can
//! rely on the presence of a key meaning the datum exists. In particular
//! `children` distinguishes "not a container" (key absent) from "container
//! with nothing visible" (empty array).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vireo_model::{ItemId, ItemKind, MediaItem, PersonInfo, UserItemData};

/// The projection of one library item the API layer serializes.
///
/// Built fresh per request and discarded after the response; no caching,
/// and the source item is copied, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub item: MediaItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserItemData>,
    pub kind: ItemKind,
    pub is_folder: bool,
    /// Set only when the item has no logo of its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_logo_item_id: Option<ItemId>,
    /// Set only when the item has no backdrops of its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_backdrop_item_id: Option<ItemId>,
    /// Backdrop count at the resolving ancestor; present iff
    /// `parent_backdrop_item_id` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_backdrop_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ItemDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<ItemPerson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studios: Option<Vec<ItemStudio>>,
}

/// A cast/crew reference enriched with its representative image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPerson {
    #[serde(flatten)]
    pub person: PersonInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_image_path: Option<PathBuf>,
}

/// A studio reference enriched with its representative image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStudio {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_image_path: Option<PathBuf>,
}
