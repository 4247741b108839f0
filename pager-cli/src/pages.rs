//! Data source backed by a [`PagerFile`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pager_core::{ContentDataSource, MenuDataSource};
use pager_types::PageIndex;

use crate::config::{PageEntry, PagerFile};

/// Pages loaded from `pager.toml`, shared by the menu and content sides.
///
/// Clones share the page list, so [`replace`](Self::replace) is visible to
/// an engine holding another clone once it reloads.
#[derive(Debug, Clone)]
pub struct PageSet {
    pages: Rc<RefCell<Vec<PageEntry>>>,
    item_width: Rc<Cell<f64>>,
}

impl PageSet {
    /// Create a page set from a loaded file.
    pub fn from_file(file: &PagerFile) -> Self {
        Self {
            pages: Rc::new(RefCell::new(file.pages.clone())),
            item_width: Rc::new(Cell::new(file.default_item_width())),
        }
    }

    /// Swap in the pages of a freshly loaded file.
    pub fn replace(&self, file: &PagerFile) {
        *self.pages.borrow_mut() = file.pages.clone();
        self.item_width.set(file.default_item_width());
    }

    fn len(&self) -> usize {
        self.pages.borrow().len()
    }

    fn title(&self, index: PageIndex) -> String {
        self.pages
            .borrow()
            .get(index.value())
            .map(|page| page.title.clone())
            .unwrap_or_default()
    }
}

impl MenuDataSource for PageSet {
    type Cell = String;

    fn count(&self) -> usize {
        self.len()
    }

    fn width_for_item(&self, index: PageIndex) -> f64 {
        let default = self.item_width.get();
        self.pages
            .borrow()
            .get(index.value())
            .and_then(|page| page.width)
            .unwrap_or(default)
    }

    fn render_item(&self, index: PageIndex) -> String {
        self.title(index)
    }
}

impl ContentDataSource for PageSet {
    type Page = String;

    fn count(&self) -> usize {
        self.len()
    }

    fn render_item(&self, index: PageIndex) -> String {
        format!("[{}] {}", index, self.title(index))
    }
}
