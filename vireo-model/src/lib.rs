//! Core data model definitions shared across Vireo crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod item;
pub mod rating;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ItemId, UserId};
pub use item::{ItemKind, MediaItem, PersonInfo};
pub use rating::ParentalRating;
pub use user::{User, UserItemData};
