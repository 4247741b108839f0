//! # pager-core
//!
//! Pure logic for keeping a paged menu strip and a content pager in sync.
//!
//! The coordinators in this crate are state machines without side effects:
//! they turn taps and scroll samples into events, and inbound sync requests
//! into [`ScrollCommand`](pager_types::ScrollCommand)s. [`SyncEngine`] is the
//! thin shell that relays events between them, executes commands on the
//! host's views, and guards against feedback loops.
//!
//! ## Example
//!
//! ```
//! use pager_core::testing::{RecordingView, StaticSource};
//! use pager_core::SyncEngine;
//! use pager_types::PageIndex;
//!
//! let pages = StaticSource::numbered(2, 160.0);
//! let content_view = RecordingView::new();
//! let engine = SyncEngine::builder()
//!     .menu(pages.clone(), RecordingView::new())
//!     .content(pages, content_view.clone())
//!     .build()?;
//!
//! engine.tap(PageIndex::new(1))?;
//! assert_eq!(engine.current_index(), Some(PageIndex::new(1)));
//! assert_eq!(content_view.len(), 1);
//! # Ok::<(), pager_types::SyncError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod content;
pub mod engine;
pub mod index;
pub mod menu;
pub mod source;
pub mod testing;

pub use config::SyncConfig;
pub use content::ContentCoordinator;
pub use engine::{SyncEngine, SyncEngineBuilder, SyncPhase, SyncSnapshot};
pub use index::IndexModel;
pub use menu::{ItemFrame, MenuCoordinator};
pub use source::{ContentDataSource, MenuDataSource, PagerView, SyncObserver, TracingObserver};
