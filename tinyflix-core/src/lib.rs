//! # TinyFlix Core
//!
//! Client-side domain logic for the TinyFlix video catalog: playback state,
//! bookmarks, comment threads, and catalog queries.
//!
//! ## Overview
//!
//! - **Playback**: [`player::PlayerController`] drives the
//!   `Idle → Loading → Ready ⇄ Playing ⇄ Paused → Ended` state machine with
//!   source failover and generation-checked async loads
//! - **Time display**: [`format::format_time`] renders `m:ss` / `h:mm:ss`
//! - **Bookmarks**: [`bookmarks::BookmarkStore`] snapshots positions and seeks
//!   the player on activation
//! - **Comments**: [`comments::CommentThread`] with validated text, replies,
//!   and independent like counters
//! - **Catalog**: [`catalog::CatalogSearchEngine`] runs search → filter → sort
//!
//! Rendering, media delivery, and persistence live outside this crate. The
//! presentation layer talks to the core through the types above plus the
//! [`accessibility`] data they expose.
//!
//! ## Example
//!
//! ```
//! use tinyflix_core::prelude::*;
//!
//! let video = Video::new("Big Buck Bunny").with_duration(596.0);
//! let mut player = PlayerController::new(PlayerConfig::default());
//! let mut bookmarks = BookmarkStore::default();
//!
//! let ticket = player.select(&video);
//! player.on_loaded(ticket);
//! player.seek(45.0)?;
//! let now = player.current_time();
//! let bookmark = bookmarks.add(video.id, now, Some("Chase"))?;
//!
//! player.seek(0.0)?;
//! bookmarks.activate(bookmark.id, &mut player)?;
//! assert_eq!(player.current_time(), 45.0);
//! # Ok::<(), tinyflix_core::CoreError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// ARIA values, live-region urgency, and the focus seam
pub mod accessibility;

/// Per-video bookmarks
pub mod bookmarks;

/// Catalog search, filter, and sort pipeline
pub mod catalog;

/// Comments and replies
pub mod comments;

/// Tunables shared by the components
pub mod config;

/// Error types and presentation helpers
pub mod error;

/// Time and view-count formatting
pub mod format;

/// Playback state machine and media loading
pub mod player;

pub mod prelude;

/// Input validation errors
pub mod validation;

pub use error::{CoreError, ErrorKind, ErrorPresentation, Result};
pub use tinyflix_model;
