//! Authoritative current/previous page index.

use pager_types::{PageIndex, SyncError};

/// Holds the current and previous page index for a set of `count` pages.
///
/// The model never clamps on `set`; callers decide whether an out-of-range
/// request is rejected or clamped before it gets here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexModel {
    count: usize,
    current: PageIndex,
    previous: PageIndex,
}

impl IndexModel {
    /// Create a model for `count` pages, positioned on the first page.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: PageIndex::FIRST,
            previous: PageIndex::FIRST,
        }
    }

    /// Move to `index`, recording the prior value as previous.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::IndexOutOfRange`] if `index` is outside
    /// `[0, count)`. The model is unchanged on error.
    pub fn set(&mut self, index: PageIndex) -> Result<PageIndex, SyncError> {
        if !index.is_within(self.count) {
            return Err(SyncError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        self.previous = self.current;
        self.current = index;
        Ok(index)
    }

    /// The current page.
    pub fn get(&self) -> PageIndex {
        self.current
    }

    /// The page that was current before the latest `set`.
    pub fn previous(&self) -> PageIndex {
        self.previous
    }

    /// Number of pages.
    pub fn count(&self) -> usize {
        self.count
    }

    /// True when there are no pages, so no index is valid.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Change the page count after a data reload.
    ///
    /// Keeps the current page when it is still valid, otherwise moves it to
    /// the last valid page. `previous` is clamped the same way so both
    /// indices stay addressable. An empty set resets both to the first page.
    pub fn resize(&mut self, count: usize) {
        self.count = count;
        match PageIndex::last_of(count) {
            None => {
                self.current = PageIndex::FIRST;
                self.previous = PageIndex::FIRST;
            }
            Some(last) => {
                self.current = self.current.min(last);
                self.previous = self.previous.min(last);
            }
        }
    }
}
