use thiserror::Error;
use vireo_model::{ItemId, UserId};

/// Failures surfaced by the view-model core.
///
/// Lookup misses inside enrichment are not errors; they degrade to absent
/// optional fields. Missing optional data on an item (logo, backdrops,
/// people, studios) never raises either.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("item not found: {0}")]
    NotFound(ItemId),

    #[error("invalid item identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The parent chain revisited an item. The library graph guarantees an
    /// acyclic parent relation; this is the fail-safe if it lies.
    #[error("parent cycle detected at item {0}")]
    CycleDetected(ItemId),
}

pub type Result<T> = std::result::Result<T, CoreError>;
