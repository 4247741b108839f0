//! # pager-types
//!
//! Shared value types for menu/content pager synchronization.
//!
//! This crate provides the foundational types used across the pager crates:
//! - [`PageIndex`], [`ScrollSample`] - Positions and continuous scroll input
//! - [`SelectionChanged`], [`IndexChanged`] - Events raised by coordinators
//! - [`ScrollCommand`] - Instructions handed to rendering collaborators
//! - [`SyncError`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod events;
mod index;

pub use error::{Side, SyncError};
pub use events::{IndexChanged, ScrollCommand, SelectionChanged};
pub use index::{PageIndex, ScrollSample};
