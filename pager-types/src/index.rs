//! Page positions and scroll samples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based position of a page within a fixed-size set.
///
/// A `PageIndex` carries no bound of its own; validity is always judged
/// against the `count` reported by the data sources.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageIndex(usize);

impl PageIndex {
    /// The first page.
    pub const FIRST: PageIndex = PageIndex(0);

    /// Create a page index.
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Get the raw position.
    pub const fn value(&self) -> usize {
        self.0
    }

    /// Check whether this index addresses one of `count` pages.
    pub const fn is_within(&self, count: usize) -> bool {
        self.0 < count
    }

    /// The last valid index for `count` pages, or `None` when empty.
    pub fn last_of(count: usize) -> Option<Self> {
        count.checked_sub(1).map(Self)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PageIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<PageIndex> for usize {
    fn from(index: PageIndex) -> Self {
        index.0
    }
}

/// One continuous-scroll update from the content pager.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSample {
    /// Horizontal scroll distance, in the same units as `viewport_width`.
    pub offset: f64,
    /// Width of one visible page.
    pub viewport_width: f64,
}

impl ScrollSample {
    /// Create a scroll sample.
    pub fn new(offset: f64, viewport_width: f64) -> Self {
        Self {
            offset,
            viewport_width,
        }
    }

    /// Continuous page position (`offset / viewport_width`).
    ///
    /// Returns `None` when the viewport has no width or either value is not
    /// finite.
    pub fn position(&self) -> Option<f64> {
        if !self.offset.is_finite()
            || !self.viewport_width.is_finite()
            || self.viewport_width <= 0.0
        {
            return None;
        }
        Some(self.offset / self.viewport_width)
    }

    /// Convert the sample into a (possibly out-of-range) page position.
    ///
    /// Rounds half up, so a sample exactly between two pages resolves to the
    /// larger index. Returns `None` for the same samples as [`position`].
    ///
    /// [`position`]: ScrollSample::position
    pub fn nearest_page(&self) -> Option<i64> {
        let position = self.position()?;
        // Compare the fraction instead of adding 0.5: the sum can round up
        // to the next integer just below a half.
        let floor = position.floor();
        let rounded = if position - floor >= 0.5 {
            floor + 1.0
        } else {
            floor
        };
        // Saturating float-to-int cast keeps absurd offsets clampable.
        Some(rounded as i64)
    }
}
