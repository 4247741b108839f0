//! Content pager coordinator.
//!
//! Derives a discrete page from continuous scroll samples and turns inbound
//! sync requests into [`ScrollCommand`]s.
//!
//! Two mechanisms keep programmatic moves from echoing back as user input:
//! - `move_to` marks its target as already emitted, so the settle at the
//!   target coalesces with it.
//! - While a programmatic move is in flight, samples that keep advancing from
//!   where the move started toward its target are absorbed, so the pages the
//!   animation passes over are not reported. A sample that stalls, reverses or
//!   leaves that path is user input and ends the move, as does reaching the
//!   target or `begin_drag`.

use pager_types::{IndexChanged, PageIndex, ScrollCommand, ScrollSample};

use crate::source::ContentDataSource;

/// A programmatic move that has not settled yet, in page units.
#[derive(Debug, Clone, Copy)]
struct InFlight {
    target: PageIndex,
    origin: f64,
    reached: f64,
}

impl InFlight {
    fn new(target: PageIndex, origin: f64) -> Self {
        Self {
            target,
            origin,
            reached: origin,
        }
    }

    /// Whether `position` continues the animation: between origin and target,
    /// and strictly past the furthest point reached so far. Before the first
    /// step a sample resting on the origin still counts.
    fn advances(&self, position: f64) -> bool {
        let target = self.target.value() as f64;
        let (lo, hi) = if self.origin <= target {
            (self.origin, target)
        } else {
            (target, self.origin)
        };
        if position < lo || position > hi {
            return false;
        }
        let step = (position - self.reached) * (target - self.origin).signum();
        step > 0.0 || (self.reached == self.origin && position == self.origin)
    }
}

/// Coordinates the content pager's page position.
#[derive(Debug)]
pub struct ContentCoordinator<C> {
    source: C,
    count: usize,
    last_emitted: PageIndex,
    in_flight: Option<InFlight>,
    last_sample: Option<ScrollSample>,
}

impl<C: ContentDataSource> ContentCoordinator<C> {
    /// Create a coordinator resting on the first page.
    pub fn new(source: C) -> Self {
        let count = source.count();
        Self {
            source,
            count,
            last_emitted: PageIndex::FIRST,
            in_flight: None,
            last_sample: None,
        }
    }

    /// Feed one continuous scroll update.
    ///
    /// Returns an event only on a transition to a page other than the last
    /// emitted one. Out-of-range pages are clamped to the nearest bound.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> Option<IndexChanged> {
        if self.count == 0 {
            return None;
        }
        let position = sample.position()?;
        let raw = sample.nearest_page()?;
        self.last_sample = Some(sample);

        let derived = self.clamp(raw);

        if let Some(mut flight) = self.in_flight {
            if derived == flight.target {
                tracing::trace!(target = %flight.target, "programmatic move settled");
                self.in_flight = None;
                return None;
            }
            if flight.advances(position) {
                flight.reached = position;
                self.in_flight = Some(flight);
                return None;
            }
            tracing::debug!(
                target = %flight.target,
                position,
                "scroll left programmatic move path"
            );
            self.in_flight = None;
        }

        if derived == self.last_emitted {
            return None;
        }

        let previous = std::mem::replace(&mut self.last_emitted, derived);
        Some(IndexChanged {
            previous,
            current: derived,
        })
    }

    /// Programmatically scroll to `index`.
    ///
    /// The target is recorded as emitted before the command is returned, so
    /// the scroll it causes is not reported as a user change. Returns `None`
    /// if `index` is already the current page or is not addressable.
    pub fn move_to(&mut self, index: PageIndex, animated: bool) -> Option<ScrollCommand> {
        if !index.is_within(self.count) {
            tracing::warn!(%index, count = self.count, "content move_to ignored: index out of range");
            return None;
        }
        if index == self.last_emitted {
            return None;
        }
        let origin = self
            .last_sample
            .and_then(|sample| sample.position())
            .unwrap_or(self.last_emitted.value() as f64);
        self.last_emitted = index;
        self.in_flight = Some(InFlight::new(index, origin));
        Some(ScrollCommand::new(index, animated))
    }

    /// The user started dragging the pager.
    ///
    /// Any in-flight programmatic target is abandoned; subsequent samples are
    /// treated as user input again.
    pub fn begin_drag(&mut self) {
        if let Some(flight) = self.in_flight.take() {
            tracing::debug!(target = %flight.target, "drag superseded programmatic move");
        }
    }

    /// The page most recently emitted or moved to.
    pub fn current(&self) -> PageIndex {
        self.last_emitted
    }

    /// Target of a programmatic move that has not settled yet.
    pub fn in_flight(&self) -> Option<PageIndex> {
        self.in_flight.map(|flight| flight.target)
    }

    /// The most recent usable scroll sample.
    pub fn last_sample(&self) -> Option<ScrollSample> {
        self.last_sample
    }

    /// Number of pages as of the last load.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of pages the data source reports right now.
    pub fn source_count(&self) -> usize {
        self.source.count()
    }

    /// Re-read the page count from the data source.
    ///
    /// A position past the new end moves to the last page and any in-flight
    /// move is dropped. Returns the new count.
    pub fn reload(&mut self) -> usize {
        self.count = self.source.count();
        if let Some(flight) = self.in_flight.take() {
            tracing::debug!(target = %flight.target, "reload dropped programmatic move");
        }
        self.last_emitted = match PageIndex::last_of(self.count) {
            Some(last) => self.last_emitted.min(last),
            None => PageIndex::FIRST,
        };
        self.count
    }

    /// Render page `index`, if it exists.
    pub fn page(&self, index: PageIndex) -> Option<C::Page> {
        index
            .is_within(self.count)
            .then(|| self.source.render_item(index))
    }

    fn clamp(&self, raw: i64) -> PageIndex {
        let max = self.count.saturating_sub(1);
        let clamped = match usize::try_from(raw) {
            Ok(value) => value.min(max),
            Err(_) => 0,
        };
        if i64::try_from(clamped).ok() != Some(raw) {
            tracing::debug!(raw, clamped, count = self.count, "derived index clamped");
        }
        PageIndex::new(clamped)
    }
}
