//! Headless playback of user input against a [`SyncEngine`].
//!
//! The simulator stands in for both views. Commands sent to the content view
//! are played back as scroll samples, frame by frame when animated, the way a
//! real pager reports its offset while it moves.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::str::FromStr;

use pager_core::{SyncEngine, TracingObserver};
use pager_types::{PageIndex, Side};

use crate::config::PagerFile;
use crate::pages::PageSet;
use crate::transcript::{Entry, Transcript, TranscriptView};

/// One simulated user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// `tap:N` - tap menu item N.
    Tap(usize),
    /// `scroll:OFFSET[:WIDTH]` - a single content scroll sample.
    Scroll {
        /// Horizontal offset.
        offset: f64,
        /// Viewport width; the configured width when absent.
        width: Option<f64>,
    },
    /// `drag` - the user grabs the content pager.
    Drag,
    /// `swipe:N` - drag the content pager to page N.
    Swipe(usize),
    /// `reload` - re-read the page set.
    Reload,
}

impl FromStr for Input {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split(':');
        let kind = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let input = match (kind, args.as_slice()) {
            ("tap", [n]) => Input::Tap(n.parse().with_context(|| format!("bad page in '{s}'"))?),
            ("scroll", [offset]) => Input::Scroll {
                offset: offset
                    .parse()
                    .with_context(|| format!("bad offset in '{s}'"))?,
                width: None,
            },
            ("scroll", [offset, width]) => Input::Scroll {
                offset: offset
                    .parse()
                    .with_context(|| format!("bad offset in '{s}'"))?,
                width: Some(
                    width
                        .parse()
                        .with_context(|| format!("bad width in '{s}'"))?,
                ),
            },
            ("drag", []) => Input::Drag,
            ("swipe", [n]) => {
                Input::Swipe(n.parse().with_context(|| format!("bad page in '{s}'"))?)
            }
            ("reload", []) => Input::Reload,
            _ => bail!(
                "unknown input '{s}' (expected tap:N, scroll:OFFSET[:WIDTH], drag, swipe:N, reload)"
            ),
        };
        Ok(input)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Tap(n) => write!(f, "tap:{n}"),
            Input::Scroll {
                offset,
                width: None,
            } => write!(f, "scroll:{offset}"),
            Input::Scroll {
                offset,
                width: Some(width),
            } => write!(f, "scroll:{offset}:{width}"),
            Input::Drag => write!(f, "drag"),
            Input::Swipe(n) => write!(f, "swipe:{n}"),
            Input::Reload => write!(f, "reload"),
        }
    }
}

/// A synchronized pair driven by simulated input.
#[derive(Debug)]
pub struct Simulator {
    engine: SyncEngine<PageSet, PageSet>,
    pages: PageSet,
    transcript: Transcript,
    menu_view: TranscriptView,
    content_view: TranscriptView,
    viewport_width: f64,
    frames: u32,
    offset: f64,
}

impl Simulator {
    /// Build a simulator for a page set.
    pub fn new(file: &PagerFile) -> Result<Self> {
        let pages = PageSet::from_file(file);
        let transcript = Transcript::new();
        let menu_view = TranscriptView::new(Side::Menu, transcript.clone());
        let content_view = TranscriptView::new(Side::Content, transcript.clone());

        let engine = SyncEngine::builder()
            .menu(pages.clone(), menu_view.clone())
            .content(pages.clone(), content_view.clone())
            .observer(TracingObserver)
            .observer(transcript.clone())
            .config(file.sync)
            .build()
            .context("Failed to activate pager")?;

        Ok(Self {
            engine,
            pages,
            transcript,
            menu_view,
            content_view,
            viewport_width: file.content.viewport_width,
            frames: file.content.animation_frames,
            offset: 0.0,
        })
    }

    /// The engine being driven.
    pub fn engine(&self) -> &SyncEngine<PageSet, PageSet> {
        &self.engine
    }

    /// Everything recorded so far.
    pub fn transcript(&self) -> Vec<Entry> {
        self.transcript.entries()
    }

    /// Swap in a freshly loaded page set; takes effect on the next `reload`.
    pub fn replace_pages(&self, file: &PagerFile) {
        self.pages.replace(file);
    }

    /// Apply one input and play back any resulting content animation.
    pub fn apply(&mut self, input: Input) {
        self.transcript.push(Entry::Input {
            input: input.to_string(),
        });

        match input {
            Input::Tap(n) => {
                if let Err(err) = self.engine.tap(PageIndex::new(n)) {
                    self.transcript.push(Entry::Rejected {
                        error: err.to_string(),
                    });
                }
            }
            Input::Scroll { offset, width } => {
                self.offset = offset;
                self.engine
                    .scroll(offset, width.unwrap_or(self.viewport_width));
            }
            Input::Drag => self.engine.begin_drag(),
            Input::Swipe(n) => {
                self.engine.begin_drag();
                self.glide_to(n as f64 * self.viewport_width);
            }
            Input::Reload => {
                if let Err(err) = self.engine.reload() {
                    self.transcript.push(Entry::Rejected {
                        error: err.to_string(),
                    });
                }
            }
        }

        self.play_back();
        self.transcript.push(Entry::State {
            current: self.engine.current_index(),
            previous: self.engine.previous_index(),
        });
    }

    /// Feed programmatic content moves back as scroll samples.
    fn play_back(&mut self) {
        // Menu moves have no scroll feedback
        self.menu_view.drain();

        // Scroll samples only relay to the menu, so one pass is enough.
        for command in self.content_view.drain() {
            let target = command.index.value() as f64 * self.viewport_width;
            if command.animated {
                self.glide_to(target);
            } else {
                self.offset = target;
                self.engine.scroll(target, self.viewport_width);
            }
        }
    }

    fn glide_to(&mut self, target: f64) {
        let start = self.offset;
        for frame in 1..=self.frames {
            let offset = start + (target - start) * f64::from(frame) / f64::from(self.frames);
            self.offset = offset;
            self.engine.scroll(offset, self.viewport_width);
        }
    }
}
