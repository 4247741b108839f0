//! Error types for pager synchronization.

use thiserror::Error;

use crate::PageIndex;

/// Which half of a coordinator pair a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The selectable menu strip.
    Menu,
    /// The swipeable content pager.
    Content,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Menu => f.write_str("menu"),
            Side::Content => f.write_str("content"),
        }
    }
}

/// Errors reported to the embedding application.
///
/// Clamped scroll derivations and re-entrant events dropped by the guard are
/// expected steady-state behavior and are only logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// A discrete selection targeted an index outside `[0, count)`.
    #[error("index {index} out of range (count: {count})")]
    IndexOutOfRange {
        /// The rejected index.
        index: PageIndex,
        /// Number of items at the time of the request.
        count: usize,
    },

    /// The engine was built without one side of the coordinator pair.
    #[error("coordinator pair is not initialized: {missing} side missing")]
    UninitializedPair {
        /// The side that was never attached.
        missing: Side,
    },

    /// The two data sources disagree on the number of pages.
    #[error("data source counts differ (menu: {menu}, content: {content})")]
    CountMismatch {
        /// Count reported by the menu data source.
        menu: usize,
        /// Count reported by the content data source.
        content: usize,
    },
}
