//! Capability contracts implemented by the embedding application.
//!
//! The core never renders anything. It asks data sources how many pages
//! exist and how wide menu items are, hands [`ScrollCommand`]s to views, and
//! reports what happened to observers.

use pager_types::{PageIndex, ScrollCommand};

/// Supplies the items of the menu strip.
pub trait MenuDataSource {
    /// Renderable cell content for one menu item.
    type Cell;

    /// Number of menu items.
    fn count(&self) -> usize;

    /// Width of the item at `index`, in layout units.
    fn width_for_item(&self, index: PageIndex) -> f64;

    /// Produce the cell content for the item at `index`.
    ///
    /// Only called with indices inside `[0, count)`.
    fn render_item(&self, index: PageIndex) -> Self::Cell;
}

/// Supplies the pages of the content pager.
pub trait ContentDataSource {
    /// A displayable page.
    type Page;

    /// Number of pages.
    fn count(&self) -> usize;

    /// Produce the page at `index`.
    ///
    /// Only called with indices inside `[0, count)`.
    fn render_item(&self, index: PageIndex) -> Self::Page;
}

/// A rendering collaborator that can scroll itself to a page.
///
/// Implementations may report the resulting scroll positions back into the
/// engine synchronously from inside `scroll_to`; the engine's guard drops
/// anything that would re-enter a propagation.
pub trait PagerView {
    /// Bring `command.index` into view.
    fn scroll_to(&self, command: ScrollCommand);
}

/// Observational hooks for index changes. Both methods default to no-ops.
pub trait SyncObserver {
    /// The user selected a new menu item and the content was told to follow.
    fn on_menu_selection_changed(&self, _previous: PageIndex, _current: PageIndex) {}

    /// The user scrolled the content to a new page and the menu was told to follow.
    fn on_content_index_changed(&self, _previous: PageIndex, _current: PageIndex) {}
}

/// Observer that writes every relayed change to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SyncObserver for TracingObserver {
    fn on_menu_selection_changed(&self, previous: PageIndex, current: PageIndex) {
        tracing::info!(%previous, %current, "menu selection changed");
    }

    fn on_content_index_changed(&self, previous: PageIndex, current: PageIndex) {
        tracing::info!(%previous, %current, "content index changed");
    }
}
