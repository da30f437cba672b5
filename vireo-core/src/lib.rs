//! # Vireo Core
//!
//! View-model core for the Vireo media server. It projects hierarchically
//! organized library items into serialization-ready DTOs, merging in
//! per-user state and display assets inherited from ancestor items.
//!
//! ## Overview
//!
//! - **Item resolution**: textual ids to library items, with the empty
//!   identity delegated to the graph's root convention
//! - **Ancestor asset resolution**: nearest-ancestor fallback for logos and
//!   backdrops when an item has none of its own
//! - **Personalization**: per-user watch state attached without mutating
//!   shared items
//! - **Enrichment**: cast/crew and studio references joined with their
//!   representative images
//! - **Graph building**: bounded-depth recursive DTO trees filtered by the
//!   user's permitted content
//!
//! The core is a library component: it consumes read-only item graphs and
//! user records through the collaborator traits in [`registry`] and emits
//! [`dto::ItemDto`] trees. It never fetches from or writes to any store,
//! and a build is synchronous, stateless, and safe to run concurrently.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// The serialization graph builder
pub mod builder;

/// Injected external tool locations
pub mod config;

/// Serialization-ready view-model types
pub mod dto;

/// Person and studio reference enrichment
pub mod enrich;

/// Error types and error handling utilities
pub mod error;

/// Nearest-ancestor display-asset resolution
pub mod inherit;

/// In-memory collaborator implementations
pub mod library;

/// Collaborator traits consumed by the core
pub mod registry;

/// Textual-id to item resolution
pub mod resolve;

pub use builder::DtoBuilder;
pub use config::TranscoderConfig;
pub use dto::{ItemDto, ItemPerson, ItemStudio};
pub use error::{CoreError, Result};
pub use library::{InMemoryImageRegistry, InMemoryLibrary, InMemoryUsers};
pub use registry::{ImageRegistry, LibraryGraph, UserRegistry};
pub use resolve::ItemResolver;
