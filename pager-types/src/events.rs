//! Events and commands exchanged between coordinators and the engine.

use serde::{Deserialize, Serialize};

use crate::PageIndex;

/// A user tap on the menu strip changed the selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChanged {
    /// Selection before the tap.
    pub previous: PageIndex,
    /// Newly selected item.
    pub current: PageIndex,
}

/// A user scroll of the content pager settled on a different page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexChanged {
    /// Last page emitted before this one.
    pub previous: PageIndex,
    /// Page derived from the scroll position (already clamped).
    pub current: PageIndex,
}

/// Instruction for a rendering collaborator to show a page.
///
/// Produced by a coordinator's programmatic `move_to`; the engine hands it to
/// the matching view. Animation is fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollCommand {
    /// Page to bring into view.
    pub index: PageIndex,
    /// Whether the view should animate the move.
    pub animated: bool,
}

impl ScrollCommand {
    /// Create a scroll command.
    pub fn new(index: PageIndex, animated: bool) -> Self {
        Self { index, animated }
    }
}
