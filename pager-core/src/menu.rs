//! Menu strip coordinator.
//!
//! Turns discrete taps into [`SelectionChanged`] events and inbound sync
//! requests into [`ScrollCommand`]s. Pure: nothing here talks to a view.

use pager_types::{PageIndex, ScrollCommand, SelectionChanged, SyncError};

use crate::source::MenuDataSource;

/// Horizontal placement of one menu item, derived from the item widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrame {
    /// Leading edge of the item.
    pub start: f64,
    /// Width of the item.
    pub width: f64,
}

impl ItemFrame {
    /// Trailing edge of the item.
    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    /// Horizontal center of the item.
    pub fn center(&self) -> f64 {
        self.start + self.width / 2.0
    }
}

/// Coordinates the menu strip's selection.
#[derive(Debug)]
pub struct MenuCoordinator<M> {
    source: M,
    count: usize,
    selected: PageIndex,
}

impl<M: MenuDataSource> MenuCoordinator<M> {
    /// Create a coordinator with the first item selected.
    pub fn new(source: M) -> Self {
        let count = source.count();
        Self {
            source,
            count,
            selected: PageIndex::FIRST,
        }
    }

    /// Handle a user tap on item `index`.
    ///
    /// Returns `Ok(None)` when there are no items or the item is already
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::IndexOutOfRange`] if `index` is outside
    /// `[0, count)`. No event is produced and the selection is unchanged.
    pub fn select(&mut self, index: PageIndex) -> Result<Option<SelectionChanged>, SyncError> {
        if self.count == 0 {
            return Ok(None);
        }
        if !index.is_within(self.count) {
            return Err(SyncError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        if index == self.selected {
            return Ok(None);
        }

        let previous = std::mem::replace(&mut self.selected, index);
        Ok(Some(SelectionChanged {
            previous,
            current: index,
        }))
    }

    /// Programmatically move the selection to `index`.
    ///
    /// Never produces a selection event. Returns the command for the menu
    /// view, or `None` if `index` is already selected or not addressable.
    pub fn move_to(&mut self, index: PageIndex, animated: bool) -> Option<ScrollCommand> {
        if !index.is_within(self.count) {
            tracing::warn!(%index, count = self.count, "menu move_to ignored: index out of range");
            return None;
        }
        if index == self.selected {
            return None;
        }
        self.selected = index;
        Some(ScrollCommand::new(index, animated))
    }

    /// The currently selected item.
    pub fn selected(&self) -> PageIndex {
        self.selected
    }

    /// Number of items as of the last load.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of items the data source reports right now.
    pub fn source_count(&self) -> usize {
        self.source.count()
    }

    /// Re-read the item count from the data source.
    ///
    /// A selection past the new end moves to the last item. Returns the new
    /// count.
    pub fn reload(&mut self) -> usize {
        self.count = self.source.count();
        self.selected = match PageIndex::last_of(self.count) {
            Some(last) => self.selected.min(last),
            None => PageIndex::FIRST,
        };
        self.count
    }

    /// Render the cell for item `index`, if it exists.
    pub fn cell(&self, index: PageIndex) -> Option<M::Cell> {
        index
            .is_within(self.count)
            .then(|| self.source.render_item(index))
    }

    /// Placement of item `index` along the strip.
    pub fn item_frame(&self, index: PageIndex) -> Option<ItemFrame> {
        if !index.is_within(self.count) {
            return None;
        }
        let start = (0..index.value())
            .map(|i| self.width_at(PageIndex::new(i)))
            .sum();
        Some(ItemFrame {
            start,
            width: self.width_at(index),
        })
    }

    /// Total width of all items.
    pub fn content_width(&self) -> f64 {
        (0..self.count).map(|i| self.width_at(PageIndex::new(i))).sum()
    }

    /// Hit-test a horizontal position on the strip.
    ///
    /// Each item covers `[start, end)`. Positions before the first item or
    /// past the last one hit nothing.
    pub fn item_at(&self, x: f64) -> Option<PageIndex> {
        if !x.is_finite() || x < 0.0 {
            return None;
        }
        let mut start = 0.0;
        for i in 0..self.count {
            let index = PageIndex::new(i);
            let end = start + self.width_at(index);
            if x < end {
                return Some(index);
            }
            start = end;
        }
        None
    }

    /// Item width with unusable values treated as zero.
    fn width_at(&self, index: PageIndex) -> f64 {
        let width = self.source.width_for_item(index);
        if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        }
    }
}
