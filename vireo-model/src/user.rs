use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::ids::{ItemId, UserId};
use crate::rating::ParentalRating;

/// Per-(user, item) interaction state.
///
/// The view-model layer attaches this record wholesale; it never interprets
/// the fields.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserItemData {
    /// Resume position in seconds.
    pub position_secs: f32,
    pub play_count: u32,
    pub played: bool,
    pub favorite: bool,
}

/// A known user of the media server.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Most restrictive rating the user may see; `None` means unrestricted.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub max_parental_rating: Option<ParentalRating>,
    /// Window, in days, for "recently added" views.
    pub recent_item_days: u32,
    /// Interaction state keyed by item id; one record per touched item.
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_data: HashMap<ItemId, UserItemData>,
}

impl User {
    pub const DEFAULT_RECENT_ITEM_DAYS: u32 = 14;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            max_parental_rating: None,
            recent_item_days: Self::DEFAULT_RECENT_ITEM_DAYS,
            item_data: HashMap::new(),
        }
    }

    /// Gets user data for an item, if there is any. Absence is the steady
    /// state for items the user has never touched.
    pub fn item_data(&self, item: &ItemId) -> Option<&UserItemData> {
        self.item_data.get(item)
    }

    /// Whether an item carrying `rating` falls within this user's limit.
    /// Unrated items and unrestricted users always pass.
    pub fn can_view(&self, rating: Option<ParentalRating>) -> bool {
        match (rating, self.max_parental_rating) {
            (Some(rating), Some(max)) => rating <= max,
            _ => true,
        }
    }

    /// Start of this user's recent-items window, counting back from `now`.
    pub fn recent_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(i64::from(self.recent_item_days))
    }
}
