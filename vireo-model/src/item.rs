use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::ids::ItemId;
use crate::rating::ParentalRating;

/// Closed set of entity-kind tags, decided when an item is constructed.
///
/// Serialized clients key off this tag, so it deliberately replaces any
/// run-time type inspection with an explicit enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Movie,
    Series,
    Season,
    Episode,
    Folder,
}

impl ItemKind {
    /// Whether items of this kind can own child items.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Series | Self::Season | Self::Folder)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "Series",
            Self::Season => "Season",
            Self::Episode => "Episode",
            Self::Folder => "Folder",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named cast/crew reference carried by an item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonInfo {
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub role: Option<String>,
}

impl PersonInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
        }
    }

    pub fn with_role(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Some(role.into()),
        }
    }
}

/// A node in the library's hierarchical media graph.
///
/// The library graph owns identity and the parent/child relation; this type
/// is read-only from the view-model core's perspective. The parent chain is
/// expected to be finite and acyclic, though consumers walking it still
/// guard against a graph that breaks that expectation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub logo_path: Option<PathBuf>,
    /// Ordered backdrop assets; empty is equivalent to absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrop_paths: Vec<PathBuf>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub parent_id: Option<ItemId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub people: Vec<PersonInfo>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub studios: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub rating: Option<ParentalRating>,
    pub added_at: DateTime<Utc>,
}

impl MediaItem {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            kind,
            name: name.into(),
            logo_path: None,
            backdrop_paths: Vec::new(),
            parent_id: None,
            people: Vec::new(),
            studios: Vec::new(),
            rating: None,
            added_at: Utc::now(),
        }
    }

    pub fn has_logo(&self) -> bool {
        self.logo_path.is_some()
    }

    pub fn has_backdrops(&self) -> bool {
        !self.backdrop_paths.is_empty()
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }
}
