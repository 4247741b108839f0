//! Recording of a simulated session.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pager_core::{PagerView, SyncObserver};
use pager_types::{PageIndex, ScrollCommand, Side};
use serde::Serialize;

/// One line of a simulated session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// An input event was applied.
    Input {
        /// The input as typed.
        input: String,
    },
    /// The engine told a view to scroll.
    Scrolled {
        /// Which view.
        side: String,
        /// Target page.
        index: PageIndex,
        /// Whether the move is animated.
        animated: bool,
    },
    /// A menu tap was relayed to the content pager.
    MenuSelectionChanged {
        /// Selection before the tap.
        previous: PageIndex,
        /// New selection.
        current: PageIndex,
    },
    /// A content scroll was relayed to the menu strip.
    ContentIndexChanged {
        /// Page before the scroll.
        previous: PageIndex,
        /// New page.
        current: PageIndex,
    },
    /// The engine rejected an input.
    Rejected {
        /// Error message.
        error: String,
    },
    /// Synchronized state after an input.
    State {
        /// Current page, absent when there are no pages.
        current: Option<PageIndex>,
        /// Previous page, absent when there are no pages.
        previous: Option<PageIndex>,
    },
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Input { input } => write!(f, "> {input}"),
            Entry::Scrolled {
                side,
                index,
                animated,
            } => {
                let how = if *animated { "animated" } else { "instant" };
                write!(f, "  {side} view -> {index} ({how})")
            }
            Entry::MenuSelectionChanged { previous, current } => {
                write!(f, "  menu selection changed {previous} -> {current}")
            }
            Entry::ContentIndexChanged { previous, current } => {
                write!(f, "  content index changed {previous} -> {current}")
            }
            Entry::Rejected { error } => write!(f, "  rejected: {error}"),
            Entry::State { current, previous } => match (current, previous) {
                (Some(current), Some(previous)) => {
                    write!(f, "  state: current={current} previous={previous}")
                }
                _ => write!(f, "  state: no pages"),
            },
        }
    }
}

/// Shared, append-only list of entries.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Rc<RefCell<Vec<Entry>>>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&self, entry: Entry) {
        self.entries.borrow_mut().push(entry);
    }

    /// Copy of all entries.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }
}

impl SyncObserver for Transcript {
    fn on_menu_selection_changed(&self, previous: PageIndex, current: PageIndex) {
        self.push(Entry::MenuSelectionChanged { previous, current });
    }

    fn on_content_index_changed(&self, previous: PageIndex, current: PageIndex) {
        self.push(Entry::ContentIndexChanged { previous, current });
    }
}

/// View that logs commands to the transcript and queues them for playback.
#[derive(Debug, Clone)]
pub struct TranscriptView {
    side: Side,
    transcript: Transcript,
    queued: Rc<RefCell<Vec<ScrollCommand>>>,
}

impl TranscriptView {
    /// Create a view for one side of the pair.
    pub fn new(side: Side, transcript: Transcript) -> Self {
        Self {
            side,
            transcript,
            queued: Rc::default(),
        }
    }

    /// Take the commands received since the last call.
    pub fn drain(&self) -> Vec<ScrollCommand> {
        std::mem::take(&mut *self.queued.borrow_mut())
    }
}

impl PagerView for TranscriptView {
    fn scroll_to(&self, command: ScrollCommand) {
        self.transcript.push(Entry::Scrolled {
            side: self.side.to_string(),
            index: command.index,
            animated: command.animated,
        });
        self.queued.borrow_mut().push(command);
    }
}
