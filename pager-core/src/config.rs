//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`SyncEngine`](crate::SyncEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Animate the content pager when a menu tap is relayed (default: true).
    #[serde(default = "default_animate")]
    pub animate_content: bool,
    /// Animate the menu strip when a content scroll is relayed (default: true).
    ///
    /// Hosts that relay on every scroll frame may prefer `false` so the menu
    /// tracks the finger without lag.
    #[serde(default = "default_animate")]
    pub animate_menu: bool,
}

fn default_animate() -> bool {
    true
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            animate_content: default_animate(),
            animate_menu: default_animate(),
        }
    }
}

impl SyncConfig {
    /// Set whether relayed content moves are animated.
    pub fn with_animate_content(mut self, animate: bool) -> Self {
        self.animate_content = animate;
        self
    }

    /// Set whether relayed menu moves are animated.
    pub fn with_animate_menu(mut self, animate: bool) -> Self {
        self.animate_menu = animate;
        self
    }
}
