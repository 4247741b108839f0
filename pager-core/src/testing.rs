//! In-memory collaborators for tests and headless hosts.
//!
//! All doubles are cheap to clone; clones share state, so a test can hand
//! one clone to the engine and inspect the other.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pager_types::{PageIndex, ScrollCommand};

use crate::source::{ContentDataSource, MenuDataSource, PagerView, SyncObserver};

/// Data source backed by a list of `(title, menu width)` pairs.
///
/// Serves both sides: menu cells and content pages are the titles.
#[derive(Debug, Clone)]
pub struct StaticSource {
    items: Rc<RefCell<Vec<(String, f64)>>>,
    default_width: f64,
}

impl StaticSource {
    /// Create a source from explicit items.
    pub fn new(items: Vec<(String, f64)>) -> Self {
        let default_width = items.first().map(|(_, w)| *w).unwrap_or(100.0);
        Self {
            items: Rc::new(RefCell::new(items)),
            default_width,
        }
    }

    /// Create `count` items titled `Page 0`, `Page 1`, ... of equal width.
    pub fn numbered(count: usize, width: f64) -> Self {
        Self {
            items: Rc::new(RefCell::new(numbered_items(count, width))),
            default_width: width,
        }
    }

    /// Replace the items with `count` numbered pages.
    pub fn set_pages(&self, count: usize) {
        *self.items.borrow_mut() = numbered_items(count, self.default_width);
    }

    /// Replace the items.
    pub fn set_items(&self, items: Vec<(String, f64)>) {
        *self.items.borrow_mut() = items;
    }
}

fn numbered_items(count: usize, width: f64) -> Vec<(String, f64)> {
    (0..count).map(|i| (format!("Page {i}"), width)).collect()
}

impl MenuDataSource for StaticSource {
    type Cell = String;

    fn count(&self) -> usize {
        self.items.borrow().len()
    }

    fn width_for_item(&self, index: PageIndex) -> f64 {
        self.items
            .borrow()
            .get(index.value())
            .map(|(_, width)| *width)
            .unwrap_or(0.0)
    }

    fn render_item(&self, index: PageIndex) -> String {
        self.items
            .borrow()
            .get(index.value())
            .map(|(title, _)| title.clone())
            .unwrap_or_default()
    }
}

impl ContentDataSource for StaticSource {
    type Page = String;

    fn count(&self) -> usize {
        self.items.borrow().len()
    }

    fn render_item(&self, index: PageIndex) -> String {
        MenuDataSource::render_item(self, index)
    }
}

type ScrollHook = Rc<dyn Fn(ScrollCommand)>;

/// View that records every command it receives.
///
/// An optional hook runs after recording, outside any internal borrow, so
/// it may call back into the engine the way a toolkit scroll view reports
/// its own position.
#[derive(Clone, Default)]
pub struct RecordingView {
    inner: Rc<RefCell<RecordingViewInner>>,
}

#[derive(Default)]
struct RecordingViewInner {
    commands: Vec<ScrollCommand>,
    hook: Option<ScrollHook>,
}

impl RecordingView {
    /// Create an empty recording view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` after each recorded command.
    pub fn on_scroll(&self, hook: impl Fn(ScrollCommand) + 'static) {
        self.inner.borrow_mut().hook = Some(Rc::new(hook));
    }

    /// All commands received so far.
    pub fn commands(&self) -> Vec<ScrollCommand> {
        self.inner.borrow().commands.clone()
    }

    /// The most recent command.
    pub fn last(&self) -> Option<ScrollCommand> {
        self.inner.borrow().commands.last().copied()
    }

    /// Number of commands received.
    pub fn len(&self) -> usize {
        self.inner.borrow().commands.len()
    }

    /// True when no command has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget recorded commands (the hook is kept).
    pub fn clear(&self) {
        self.inner.borrow_mut().commands.clear();
    }
}

impl PagerView for RecordingView {
    fn scroll_to(&self, command: ScrollCommand) {
        let hook = {
            let mut inner = self.inner.borrow_mut();
            inner.commands.push(command);
            inner.hook.clone()
        };
        if let Some(hook) = hook {
            hook(command);
        }
    }
}

impl fmt::Debug for RecordingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("RecordingView")
            .field("commands", &inner.commands)
            .field("hooked", &inner.hook.is_some())
            .finish()
    }
}

/// A change reported to a [`SyncObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedChange {
    /// `on_menu_selection_changed` was called.
    Menu {
        /// Previous selection.
        previous: PageIndex,
        /// New selection.
        current: PageIndex,
    },
    /// `on_content_index_changed` was called.
    Content {
        /// Previous page.
        previous: PageIndex,
        /// New page.
        current: PageIndex,
    },
}

/// Observer that records every notification.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    changes: Rc<RefCell<Vec<ObservedChange>>>,
}

impl RecordingObserver {
    /// Create an empty recording observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far.
    pub fn changes(&self) -> Vec<ObservedChange> {
        self.changes.borrow().clone()
    }
}

impl SyncObserver for RecordingObserver {
    fn on_menu_selection_changed(&self, previous: PageIndex, current: PageIndex) {
        self.changes
            .borrow_mut()
            .push(ObservedChange::Menu { previous, current });
    }

    fn on_content_index_changed(&self, previous: PageIndex, current: PageIndex) {
        self.changes
            .borrow_mut()
            .push(ObservedChange::Content { previous, current });
    }
}
