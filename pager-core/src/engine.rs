//! Bidirectional menu/content synchronization.
//!
//! [`SyncEngine`] owns both coordinators, their views, and the only copy of
//! the synchronized state. A user event on one side is relayed as a
//! programmatic move on the other:
//!
//! ```text
//! tap(i) ──► MenuCoordinator::select ──► SelectionChanged
//!                                            │ guard: Idle → PropagatingFromMenu
//!                                            ▼
//!                         ContentCoordinator::move_to ──► content view
//!
//! scroll(x, w) ──► ContentCoordinator::on_scroll ──► IndexChanged
//!                                            │ guard: Idle → PropagatingFromContent
//!                                            ▼
//!                            MenuCoordinator::move_to ──► menu view
//! ```
//!
//! Views may call back into the engine synchronously from `scroll_to`. No
//! internal borrow is held across a view or observer call, and any event
//! raised while a propagation is running is dropped.

use std::cell::RefCell;
use std::fmt;

use pager_types::{IndexChanged, PageIndex, ScrollSample, SelectionChanged, Side, SyncError};

use crate::config::SyncConfig;
use crate::content::ContentCoordinator;
use crate::index::IndexModel;
use crate::menu::{ItemFrame, MenuCoordinator};
use crate::source::{ContentDataSource, MenuDataSource, PagerView, SyncObserver};

/// Propagation state of the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SyncPhase {
    /// Ready to accept an event from either side.
    #[default]
    Idle,
    /// Relaying a menu selection to the content pager.
    PropagatingFromMenu,
    /// Relaying a content page change to the menu strip.
    PropagatingFromContent,
}

impl SyncPhase {
    /// True while a propagation is running (the reentrancy guard is held).
    pub fn is_guarded(&self) -> bool {
        *self != SyncPhase::Idle
    }
}

/// Synchronized index state, owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SyncState {
    index: IndexModel,
    phase: SyncPhase,
}

/// Read-only copy of the engine's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSnapshot {
    /// Page both sides were last synchronized to.
    pub current: PageIndex,
    /// Page that was current before the latest transition.
    pub previous: PageIndex,
    /// Number of pages.
    pub count: usize,
    /// Propagation state at the time of the snapshot.
    pub phase: SyncPhase,
}

/// Resets the phase to `Idle` when a propagation ends, including by unwinding.
struct Propagation<'a> {
    state: &'a RefCell<SyncState>,
}

impl Drop for Propagation<'_> {
    fn drop(&mut self) {
        self.state.borrow_mut().phase = SyncPhase::Idle;
    }
}

/// Keeps a menu strip and a content pager on the same page.
///
/// Single-threaded: methods take `&self` so views can hold a handle and
/// report back re-entrantly, and the engine is not `Sync`.
pub struct SyncEngine<M, C> {
    menu: RefCell<MenuCoordinator<M>>,
    content: RefCell<ContentCoordinator<C>>,
    menu_view: Box<dyn PagerView>,
    content_view: Box<dyn PagerView>,
    observers: Vec<Box<dyn SyncObserver>>,
    config: SyncConfig,
    state: RefCell<SyncState>,
}

impl<M: MenuDataSource, C: ContentDataSource> SyncEngine<M, C> {
    /// Start building an engine.
    pub fn builder() -> SyncEngineBuilder<M, C> {
        SyncEngineBuilder::new()
    }

    /// Handle a user tap on menu item `index`.
    ///
    /// Taps on the selected item, taps while there are no pages, and taps
    /// arriving during a propagation do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::IndexOutOfRange`] if `index` is outside
    /// `[0, count)`.
    pub fn tap(&self, index: PageIndex) -> Result<(), SyncError> {
        let phase = self.phase();
        if phase.is_guarded() {
            tracing::debug!(%index, ?phase, "tap dropped during propagation");
            return Ok(());
        }

        let event = self.menu.borrow_mut().select(index)?;
        if let Some(event) = event {
            self.relay_selection(event);
        }
        Ok(())
    }

    /// Handle one continuous scroll update from the content pager.
    ///
    /// A `viewport_width` of zero or less is ignored.
    pub fn scroll(&self, offset: f64, viewport_width: f64) {
        let sample = ScrollSample::new(offset, viewport_width);
        let event = self.content.borrow_mut().on_scroll(sample);
        if let Some(event) = event {
            self.relay_index_change(event);
        }
    }

    /// The user started dragging the content pager.
    pub fn begin_drag(&self) {
        self.content.borrow_mut().begin_drag();
    }

    /// Re-read the page counts from both data sources.
    ///
    /// Indices past the new end are clamped to the last page.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::CountMismatch`] if the sources disagree. Nothing
    /// is reloaded in that case.
    pub fn reload(&self) -> Result<(), SyncError> {
        let menu = self.menu.borrow().source_count();
        let content = self.content.borrow().source_count();
        if menu != content {
            return Err(SyncError::CountMismatch { menu, content });
        }

        self.menu.borrow_mut().reload();
        self.content.borrow_mut().reload();
        self.state.borrow_mut().index.resize(menu);
        tracing::debug!(count = menu, "pager data reloaded");
        Ok(())
    }

    /// The synchronized page, or `None` when there are no pages.
    pub fn current_index(&self) -> Option<PageIndex> {
        let state = self.state.borrow();
        (!state.index.is_empty()).then(|| state.index.get())
    }

    /// The page before the latest transition, or `None` when there are no pages.
    pub fn previous_index(&self) -> Option<PageIndex> {
        let state = self.state.borrow();
        (!state.index.is_empty()).then(|| state.index.previous())
    }

    /// Current propagation state.
    pub fn phase(&self) -> SyncPhase {
        self.state.borrow().phase
    }

    /// Number of pages.
    pub fn count(&self) -> usize {
        self.state.borrow().index.count()
    }

    /// Copy of the synchronized state.
    pub fn snapshot(&self) -> SyncSnapshot {
        let state = self.state.borrow();
        SyncSnapshot {
            current: state.index.get(),
            previous: state.index.previous(),
            count: state.index.count(),
            phase: state.phase,
        }
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> SyncConfig {
        self.config
    }

    /// Item currently selected on the menu strip.
    pub fn menu_selection(&self) -> PageIndex {
        self.menu.borrow().selected()
    }

    /// Page the content pager rests on or is moving to.
    pub fn content_position(&self) -> PageIndex {
        self.content.borrow().current()
    }

    /// Render the menu cell for `index`.
    pub fn menu_cell(&self, index: PageIndex) -> Option<M::Cell> {
        self.menu.borrow().cell(index)
    }

    /// Render the content page for `index`.
    pub fn content_page(&self, index: PageIndex) -> Option<C::Page> {
        self.content.borrow().page(index)
    }

    /// Placement of menu item `index`.
    pub fn menu_item_frame(&self, index: PageIndex) -> Option<ItemFrame> {
        self.menu.borrow().item_frame(index)
    }

    /// Menu item under horizontal position `x`.
    pub fn menu_item_at(&self, x: f64) -> Option<PageIndex> {
        self.menu.borrow().item_at(x)
    }

    fn relay_selection(&self, event: SelectionChanged) {
        let Some(propagation) = self.begin(SyncPhase::PropagatingFromMenu) else {
            return;
        };
        if !self.commit(event.previous, event.current) {
            return;
        }

        let command = self
            .content
            .borrow_mut()
            .move_to(event.current, self.config.animate_content);
        if let Some(command) = command {
            self.content_view.scroll_to(command);
        }
        drop(propagation);

        for observer in &self.observers {
            observer.on_menu_selection_changed(event.previous, event.current);
        }
    }

    fn relay_index_change(&self, event: IndexChanged) {
        let Some(propagation) = self.begin(SyncPhase::PropagatingFromContent) else {
            return;
        };
        if !self.commit(event.previous, event.current) {
            return;
        }

        let command = self
            .menu
            .borrow_mut()
            .move_to(event.current, self.config.animate_menu);
        if let Some(command) = command {
            self.menu_view.scroll_to(command);
        }
        drop(propagation);

        for observer in &self.observers {
            observer.on_content_index_changed(event.previous, event.current);
        }
    }

    /// Take the guard, or `None` if a propagation is already running.
    fn begin(&self, phase: SyncPhase) -> Option<Propagation<'_>> {
        let mut state = self.state.borrow_mut();
        if state.phase.is_guarded() {
            tracing::debug!(active = ?state.phase, attempted = ?phase, "reentrant event dropped");
            return None;
        }
        state.phase = phase;
        Some(Propagation { state: &self.state })
    }

    /// Record a transition. Returns false if the index was rejected.
    fn commit(&self, previous: PageIndex, current: PageIndex) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.index.get();
        if before != previous {
            tracing::debug!(
                %before,
                reported = %previous,
                "event origin disagreed with synchronized index"
            );
        }
        match state.index.set(current) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(%err, "transition rejected");
                false
            }
        }
    }
}

impl<M, C> fmt::Debug for SyncEngine<M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncEngine")
            .field("state", &self.state.borrow())
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Two-phase construction for [`SyncEngine`].
///
/// Both sides must be attached before [`build`](Self::build) succeeds.
pub struct SyncEngineBuilder<M, C> {
    menu: Option<(M, Box<dyn PagerView>)>,
    content: Option<(C, Box<dyn PagerView>)>,
    observers: Vec<Box<dyn SyncObserver>>,
    config: SyncConfig,
}

impl<M: MenuDataSource, C: ContentDataSource> SyncEngineBuilder<M, C> {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            menu: None,
            content: None,
            observers: Vec::new(),
            config: SyncConfig::default(),
        }
    }

    /// Attach the menu strip's data source and view.
    pub fn menu(mut self, source: M, view: impl PagerView + 'static) -> Self {
        self.menu = Some((source, Box::new(view)));
        self
    }

    /// Attach the content pager's data source and view.
    pub fn content(mut self, source: C, view: impl PagerView + 'static) -> Self {
        self.content = Some((source, Box::new(view)));
        self
    }

    /// Add an observer for relayed changes.
    pub fn observer(mut self, observer: impl SyncObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Use `config` instead of the default configuration.
    pub fn config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Activate the coordinator pair.
    ///
    /// # Errors
    ///
    /// - [`SyncError::UninitializedPair`] if either side was never attached.
    /// - [`SyncError::CountMismatch`] if the data sources report different counts.
    pub fn build(self) -> Result<SyncEngine<M, C>, SyncError> {
        let (menu_source, menu_view) = self.menu.ok_or(SyncError::UninitializedPair {
            missing: Side::Menu,
        })?;
        let (content_source, content_view) = self.content.ok_or(SyncError::UninitializedPair {
            missing: Side::Content,
        })?;

        let menu = MenuCoordinator::new(menu_source);
        let content = ContentCoordinator::new(content_source);
        if menu.count() != content.count() {
            return Err(SyncError::CountMismatch {
                menu: menu.count(),
                content: content.count(),
            });
        }

        let count = menu.count();
        tracing::debug!(count, config = ?self.config, "pager sync engine activated");

        Ok(SyncEngine {
            menu: RefCell::new(menu),
            content: RefCell::new(content),
            menu_view,
            content_view,
            observers: self.observers,
            config: self.config,
            state: RefCell::new(SyncState {
                index: IndexModel::new(count),
                phase: SyncPhase::Idle,
            }),
        })
    }
}

impl<M: MenuDataSource, C: ContentDataSource> Default for SyncEngineBuilder<M, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, C> fmt::Debug for SyncEngineBuilder<M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncEngineBuilder")
            .field("menu", &self.menu.is_some())
            .field("content", &self.content.is_some())
            .field("observers", &self.observers.len())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ObservedChange, RecordingObserver, RecordingView, StaticSource};
    use pager_types::ScrollCommand;
    use std::rc::Rc;

    const WIDTH: f64 = 300.0;

    type Engine = SyncEngine<StaticSource, StaticSource>;

    struct Harness {
        engine: Engine,
        source: StaticSource,
        menu_view: RecordingView,
        content_view: RecordingView,
        observer: RecordingObserver,
    }

    fn harness(count: usize) -> Harness {
        harness_with(count, SyncConfig::default())
    }

    fn harness_with(count: usize, config: SyncConfig) -> Harness {
        let source = StaticSource::numbered(count, 100.0);
        let menu_view = RecordingView::new();
        let content_view = RecordingView::new();
        let observer = RecordingObserver::new();
        let engine = SyncEngine::builder()
            .menu(source.clone(), menu_view.clone())
            .content(source.clone(), content_view.clone())
            .observer(observer.clone())
            .config(config)
            .build()
            .unwrap();
        Harness {
            engine,
            source,
            menu_view,
            content_view,
            observer,
        }
    }

    fn idx(i: usize) -> PageIndex {
        PageIndex::new(i)
    }

    #[test]
    fn tap_moves_content_exactly_once() {
        for target in 1..4 {
            let h = harness(4);
            h.engine.tap(idx(target)).unwrap();

            assert_eq!(
                h.content_view.commands(),
                vec![ScrollCommand::new(idx(target), true)]
            );
            assert!(h.menu_view.is_empty(), "menu must not be echoed");
        }
    }

    #[test]
    fn scenario_tap_second_of_two() {
        let h = harness(2);
        h.engine.tap(idx(1)).unwrap();

        let snapshot = h.engine.snapshot();
        assert_eq!(snapshot.previous, idx(0));
        assert_eq!(snapshot.current, idx(1));
        assert_eq!(snapshot.phase, SyncPhase::Idle);
        assert_eq!(h.content_view.len(), 1);
        assert_eq!(
            h.observer.changes(),
            vec![ObservedChange::Menu {
                previous: idx(0),
                current: idx(1)
            }]
        );
    }

    #[test]
    fn scenario_overscroll_clamps_and_moves_menu_once() {
        let h = harness(2);
        h.engine.scroll(480.0, WIDTH);

        assert_eq!(h.menu_view.commands(), vec![ScrollCommand::new(idx(1), true)]);
        assert!(h.content_view.is_empty());
        assert_eq!(
            h.observer.changes(),
            vec![ObservedChange::Content {
                previous: idx(0),
                current: idx(1)
            }]
        );
        assert_eq!(h.engine.current_index(), Some(idx(1)));
        assert_eq!(h.engine.previous_index(), Some(idx(0)));
    }

    #[test]
    fn scenario_empty_pages_do_nothing() {
        let h = harness(0);

        assert!(h.engine.tap(idx(0)).is_ok());
        assert!(h.engine.tap(idx(3)).is_ok());
        h.engine.scroll(300.0, WIDTH);
        h.engine.scroll(-40.0, WIDTH);

        assert!(h.menu_view.is_empty());
        assert!(h.content_view.is_empty());
        assert!(h.observer.changes().is_empty());
        assert_eq!(h.engine.current_index(), None);
        assert_eq!(h.engine.previous_index(), None);
    }

    #[test]
    fn content_settle_after_tap_is_not_relayed() {
        let h = harness(3);
        h.engine.tap(idx(2)).unwrap();

        // The pager animates across page 1 and settles on page 2
        h.engine.scroll(200.0, WIDTH);
        h.engine.scroll(450.0, WIDTH);
        h.engine.scroll(600.0, WIDTH);

        assert!(h.menu_view.is_empty());
        assert_eq!(h.content_view.len(), 1);
        assert_eq!(h.engine.current_index(), Some(idx(2)));
        assert_eq!(h.observer.changes().len(), 1);
    }

    #[test]
    fn menu_follow_after_scroll_is_not_relayed_back() {
        let h = harness(3);
        h.engine.scroll(300.0, WIDTH);
        assert_eq!(h.menu_view.len(), 1);

        // The menu now shows page 1; tapping it is not a change
        h.engine.tap(idx(1)).unwrap();
        assert!(h.content_view.is_empty());
    }

    #[test]
    fn previous_tracks_each_transition() {
        let h = harness(5);
        let mut expected_previous = h.engine.snapshot().current;

        let steps: Vec<Box<dyn Fn(&Engine)>> = vec![
            Box::new(|e: &Engine| e.tap(idx(3)).unwrap()),
            Box::new(|e: &Engine| {
                e.begin_drag();
                e.scroll(590.0, WIDTH)
            }),
            Box::new(|e: &Engine| e.tap(idx(0)).unwrap()),
            Box::new(|e: &Engine| {
                e.begin_drag();
                e.scroll(1200.0, WIDTH)
            }),
            Box::new(|e: &Engine| e.tap(idx(1)).unwrap()),
        ];

        for step in steps {
            step(&h.engine);
            let snapshot = h.engine.snapshot();
            assert_eq!(snapshot.previous, expected_previous);
            expected_previous = snapshot.current;
        }
        assert_eq!(h.engine.current_index(), Some(idx(1)));
    }

    #[test]
    fn tap_on_current_changes_nothing() {
        let h = harness(3);
        h.engine.tap(idx(0)).unwrap();

        assert!(h.content_view.is_empty());
        assert!(h.observer.changes().is_empty());
        assert_eq!(h.engine.snapshot().previous, idx(0));
    }

    #[test]
    fn tap_out_of_range_is_reported() {
        let h = harness(2);
        let err = h.engine.tap(idx(2)).unwrap_err();

        assert_eq!(
            err,
            SyncError::IndexOutOfRange {
                index: idx(2),
                count: 2
            }
        );
        assert!(h.content_view.is_empty());
        assert_eq!(h.engine.current_index(), Some(idx(0)));
    }

    #[test]
    fn degenerate_viewport_is_ignored() {
        let h = harness(3);
        h.engine.scroll(600.0, 0.0);
        h.engine.scroll(600.0, -300.0);

        assert!(h.menu_view.is_empty());
        assert_eq!(h.engine.current_index(), Some(idx(0)));
    }

    #[test]
    fn intermediate_pages_of_programmatic_move_do_not_move_menu() {
        let h = harness(5);
        h.engine.tap(idx(4)).unwrap();

        for step in 1..=16 {
            h.engine.scroll(step as f64 * 75.0, WIDTH);
        }

        assert!(h.menu_view.is_empty());
        assert_eq!(h.engine.current_index(), Some(idx(4)));
    }

    #[test]
    fn drag_during_programmatic_move_takes_over() {
        let h = harness(5);
        h.engine.tap(idx(4)).unwrap();
        h.engine.scroll(310.0, WIDTH);

        h.engine.begin_drag();
        h.engine.scroll(290.0, WIDTH);

        assert_eq!(h.menu_view.commands(), vec![ScrollCommand::new(idx(1), true)]);
        let snapshot = h.engine.snapshot();
        assert_eq!(snapshot.previous, idx(4));
        assert_eq!(snapshot.current, idx(1));
    }

    #[test]
    fn scroll_alone_interrupts_programmatic_move() {
        let h = harness(5);
        h.engine.tap(idx(4)).unwrap();

        // The user catches the pager on page 1 and holds it there
        h.engine.scroll(300.0, WIDTH);
        h.engine.scroll(300.0, WIDTH);

        assert_eq!(h.menu_view.commands(), vec![ScrollCommand::new(idx(1), true)]);
        assert_eq!(h.engine.content_position(), idx(1));
        assert_eq!(h.engine.menu_selection(), idx(1));
        let snapshot = h.engine.snapshot();
        assert_eq!(snapshot.previous, idx(4));
        assert_eq!(snapshot.current, idx(1));
    }

    #[test]
    fn reversed_scroll_interrupts_programmatic_move() {
        let h = harness(5);
        h.engine.tap(idx(4)).unwrap();
        h.engine.scroll(400.0, WIDTH);
        h.engine.scroll(700.0, WIDTH);

        h.engine.scroll(20.0, WIDTH);

        assert_eq!(h.menu_view.commands(), vec![ScrollCommand::new(idx(0), true)]);
        assert_eq!(h.engine.current_index(), Some(idx(0)));
    }

    #[test]
    fn later_tap_supersedes_in_flight_move() {
        let h = harness(5);
        h.engine.tap(idx(4)).unwrap();
        h.engine.scroll(320.0, WIDTH);
        h.engine.tap(idx(2)).unwrap();

        assert_eq!(
            h.content_view.commands(),
            vec![
                ScrollCommand::new(idx(4), true),
                ScrollCommand::new(idx(2), true)
            ]
        );
        h.engine.scroll(600.0, WIDTH);
        assert!(h.menu_view.is_empty());
        assert_eq!(h.engine.snapshot().previous, idx(4));
    }

    #[test]
    fn reentrant_scroll_from_content_view_is_dropped() {
        let h = harness(3);
        let engine = Rc::new(h.engine);
        let weak = Rc::downgrade(&engine);

        h.content_view.on_scroll(move |command| {
            if let Some(engine) = weak.upgrade() {
                assert_eq!(engine.phase(), SyncPhase::PropagatingFromMenu);
                // The view reports positions while jumping, as if dragged
                engine.begin_drag();
                engine.scroll((command.index.value() as f64 - 1.0) * WIDTH, WIDTH);
                engine.scroll(command.index.value() as f64 * WIDTH, WIDTH);
            }
        });

        engine.tap(idx(2)).unwrap();

        assert_eq!(h.content_view.len(), 1);
        assert!(h.menu_view.is_empty());
        assert_eq!(engine.phase(), SyncPhase::Idle);
        assert_eq!(engine.current_index(), Some(idx(2)));
        assert_eq!(engine.menu_selection(), idx(2));
        assert_eq!(h.observer.changes().len(), 1);
    }

    #[test]
    fn reentrant_tap_from_menu_view_is_dropped() {
        let h = harness(3);
        let engine = Rc::new(h.engine);
        let weak = Rc::downgrade(&engine);

        h.menu_view.on_scroll(move |_| {
            if let Some(engine) = weak.upgrade() {
                assert!(engine.tap(idx(0)).is_ok());
            }
        });

        engine.scroll(600.0, WIDTH);

        assert_eq!(h.menu_view.len(), 1);
        assert!(h.content_view.is_empty());
        assert_eq!(engine.current_index(), Some(idx(2)));
        assert_eq!(engine.menu_selection(), idx(2));

        // Once idle, the same tap is a fresh cycle
        engine.tap(idx(0)).unwrap();
        assert_eq!(h.content_view.commands(), vec![ScrollCommand::new(idx(0), true)]);
    }

    #[test]
    fn guard_released_when_view_panics() {
        struct PanickingView;

        impl PagerView for PanickingView {
            fn scroll_to(&self, _command: ScrollCommand) {
                panic!("view failed");
            }
        }

        let source = StaticSource::numbered(3, 100.0);
        let engine = SyncEngine::builder()
            .menu(source.clone(), RecordingView::new())
            .content(source, PanickingView)
            .build()
            .unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            engine.tap(idx(1)).unwrap();
        }));

        assert!(result.is_err());
        assert_eq!(engine.phase(), SyncPhase::Idle);
    }

    #[test]
    fn config_controls_animation() {
        let config = SyncConfig::default()
            .with_animate_content(false)
            .with_animate_menu(false);
        let h = harness_with(3, config);

        h.engine.tap(idx(1)).unwrap();
        h.engine.scroll(300.0, WIDTH);
        h.engine.begin_drag();
        h.engine.scroll(600.0, WIDTH);

        assert_eq!(h.content_view.commands(), vec![ScrollCommand::new(idx(1), false)]);
        assert_eq!(h.menu_view.commands(), vec![ScrollCommand::new(idx(2), false)]);
    }

    #[test]
    fn build_requires_both_sides() {
        let source = StaticSource::numbered(2, 100.0);

        let err = SyncEngine::<StaticSource, StaticSource>::builder()
            .content(source.clone(), RecordingView::new())
            .build()
            .unwrap_err();
        assert_eq!(err, SyncError::UninitializedPair { missing: Side::Menu });

        let err = SyncEngine::<StaticSource, StaticSource>::builder()
            .menu(source, RecordingView::new())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SyncError::UninitializedPair {
                missing: Side::Content
            }
        );
    }

    #[test]
    fn build_rejects_count_mismatch() {
        let err = SyncEngine::builder()
            .menu(StaticSource::numbered(2, 100.0), RecordingView::new())
            .content(StaticSource::numbered(3, 100.0), RecordingView::new())
            .build()
            .unwrap_err();

        assert_eq!(err, SyncError::CountMismatch { menu: 2, content: 3 });
    }

    #[test]
    fn reload_clamps_every_side() {
        let h = harness(5);
        h.engine.tap(idx(4)).unwrap();

        h.source.set_pages(2);
        h.engine.reload().unwrap();

        assert_eq!(h.engine.count(), 2);
        assert_eq!(h.engine.current_index(), Some(idx(1)));
        assert_eq!(h.engine.menu_selection(), idx(1));
        assert_eq!(h.engine.content_position(), idx(1));
    }

    #[test]
    fn reload_to_empty_and_back() {
        let h = harness(3);
        h.source.set_pages(0);
        h.engine.reload().unwrap();
        assert_eq!(h.engine.current_index(), None);

        h.source.set_pages(2);
        h.engine.reload().unwrap();
        h.engine.tap(idx(1)).unwrap();
        assert_eq!(h.engine.current_index(), Some(idx(1)));
    }

    #[test]
    fn reload_rejects_count_mismatch() {
        let menu_source = StaticSource::numbered(3, 100.0);
        let content_source = StaticSource::numbered(3, 100.0);
        let engine = SyncEngine::builder()
            .menu(menu_source.clone(), RecordingView::new())
            .content(content_source, RecordingView::new())
            .build()
            .unwrap();

        menu_source.set_pages(4);
        assert_eq!(
            engine.reload().unwrap_err(),
            SyncError::CountMismatch { menu: 4, content: 3 }
        );
        assert_eq!(engine.count(), 3);
    }

    #[test]
    fn rendering_passthrough() {
        let h = harness(2);

        assert_eq!(h.engine.menu_cell(idx(1)).as_deref(), Some("Page 1"));
        assert_eq!(h.engine.content_page(idx(0)).as_deref(), Some("Page 0"));
        assert_eq!(h.engine.content_page(idx(2)), None);
        assert_eq!(h.engine.menu_item_frame(idx(1)).map(|f| f.start), Some(100.0));
        assert_eq!(h.engine.menu_item_at(150.0), Some(idx(1)));
    }
}
