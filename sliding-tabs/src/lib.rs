//! A horizontally scrolling tab strip engine with an animated selection
//! indicator, kept in sync with a paged content view.
//!
//! The crate is toolkit-agnostic: it owns tab state, selection, scroll
//! interpolation and styling, and emits its output as a display list
//! ([`Frame`]) the host replays onto its own rendering surface. The host
//! plugs in through small trait seams: [`Pager`] or [`PagedView`] for the
//! content view, [`TabAdapter`] for titles and icons, [`TextMeasure`] for
//! label widths.
//!
//! # Example
//!
//! ```no_run
//! use std::{rc::Rc, time::Instant};
//!
//! use sliding_tabs::{IndicatorStyle, Pager, SlidingTabLayout};
//!
//! fn bind(pager: Rc<dyn Pager>) -> SlidingTabLayout {
//!     let layout = SlidingTabLayout::new();
//!     layout.set_size(360.0, 48.0);
//!     layout.set_indicator(IndicatorStyle::default().height(3.0).creep(true));
//!     layout.set_pager(Some(pager));
//!     layout
//! }
//!
//! fn draw(layout: &SlidingTabLayout) {
//!     if layout.take_invalidated() {
//!         let frame = layout.paint(Instant::now());
//!         for tab in &frame.tabs {
//!             // Draw the label at tab.bounds with tab.color ...
//!         }
//!     }
//! }
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod easing;

pub mod color;
pub mod layout;
pub mod measure;
pub mod mediator;
pub mod pager;
pub mod palette;
pub mod render;
pub mod strip;

pub use color::Color;
pub use layout::{SlidingTabLayout, TabMode, TabPadding, TabTemplate};
pub use measure::{HeuristicTextMeasure, TextMeasure};
pub use mediator::{MediatorError, SlidingTabLayoutMediator};
pub use pager::{
    AdapterChangeListener, AdapterDataObserver, PageChangeListener, PagedView, Pager, ScrollState,
    TabAdapter,
};
pub use palette::{SimpleTabPalette, TabPalette};
pub use render::{DrawCommand, DrawableHandle, Frame, IconHandle, Rect, TabVisual};
pub use strip::{IndicatorGravity, IndicatorStyle, SlidingTabStrip, StripDefaults, Tab};
