//! Seams to the paged content view.
//!
//! The strip never talks to a concrete paging widget. It consumes one of two
//! trait surfaces: [`Pager`], the classic adapter-driven pager with listener
//! registration on the pager itself, or [`PagedView`], the newer callback
//! style paired with a [`SlidingTabLayoutMediator`]. Both feed the same three
//! signals (scroll ticks, page selection, scroll state) through
//! [`PageChangeListener`].
//!
//! Listeners are identified by [`Rc`] pointer identity, so the exact handle
//! passed to an `add_*` call must be passed to the matching `remove_*`.
//!
//! [`SlidingTabLayoutMediator`]: crate::mediator::SlidingTabLayoutMediator

use std::rc::Rc;

use crate::render::IconHandle;

/// The scroll state of a paged view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// Not scrolling. The only settled state.
    #[default]
    Idle,
    /// The user is actively dragging.
    Dragging,
    /// Released and animating toward a resting page.
    Settling,
}

/// Observes page scrolling and selection.
///
/// All methods default to no-ops so implementors only override the signals
/// they care about.
pub trait PageChangeListener {
    /// The view is scrolled to `position + offset` pages, with `offset` in
    /// `[0, 1)`. `pixel_offset` is the same offset in pixels.
    fn on_page_scrolled(&self, position: usize, offset: f32, pixel_offset: f32) {
        let _ = (position, offset, pixel_offset);
    }

    /// A new page became the selected one.
    fn on_page_selected(&self, position: usize) {
        let _ = position;
    }

    /// The scroll state changed.
    fn on_page_scroll_state_changed(&self, state: ScrollState) {
        let _ = state;
    }
}

/// Observes the pager's adapter being replaced.
pub trait AdapterChangeListener {
    /// The pager's adapter changed from `old` to `new`. Either may be absent.
    fn on_adapter_changed(&self, old: Option<Rc<dyn TabAdapter>>, new: Option<Rc<dyn TabAdapter>>);
}

/// Observes changes to an adapter's data set.
///
/// The granular range notifications all funnel into [`on_changed`] by
/// default; the strip rebuilds wholesale either way.
///
/// [`on_changed`]: AdapterDataObserver::on_changed
pub trait AdapterDataObserver {
    /// The data set changed in some unspecified way.
    fn on_changed(&self);

    /// Items in `[start, start + count)` changed in place.
    fn on_item_range_changed(&self, start: usize, count: usize) {
        let _ = (start, count);
        self.on_changed();
    }

    /// `count` items were inserted at `start`.
    fn on_item_range_inserted(&self, start: usize, count: usize) {
        let _ = (start, count);
        self.on_changed();
    }

    /// `count` items were removed at `start`.
    fn on_item_range_removed(&self, start: usize, count: usize) {
        let _ = (start, count);
        self.on_changed();
    }

    /// `count` items moved from `from` to `to`.
    fn on_item_range_moved(&self, from: usize, to: usize, count: usize) {
        let _ = (from, to, count);
        self.on_changed();
    }

    /// The previous data set is entirely invalid.
    fn on_invalidated(&self) {
        self.on_changed();
    }
}

/// Supplies tab content and data-set change notifications.
pub trait TabAdapter {
    /// Number of pages, and therefore tabs.
    fn count(&self) -> usize;

    /// Title of the page at `position`.
    fn title(&self, position: usize) -> String;

    /// Optional icon of the page at `position`.
    fn icon(&self, position: usize) -> Option<IconHandle> {
        let _ = position;
        None
    }

    /// Registers an observer for data-set changes.
    fn register_observer(&self, observer: Rc<dyn AdapterDataObserver>);

    /// Unregisters a previously registered observer. Unknown observers are
    /// ignored.
    fn unregister_observer(&self, observer: Rc<dyn AdapterDataObserver>);
}

/// The classic pager surface: adapter-driven, with listeners registered on
/// the pager itself.
pub trait Pager {
    /// The currently selected page.
    fn current_item(&self) -> usize;

    /// Selects a page, optionally animating the transition.
    fn set_current_item(&self, position: usize, smooth: bool);

    /// The current adapter, if one is set.
    fn adapter(&self) -> Option<Rc<dyn TabAdapter>>;

    /// Registers a page change listener.
    fn add_page_change_listener(&self, listener: Rc<dyn PageChangeListener>);

    /// Unregisters a page change listener by pointer identity.
    fn remove_page_change_listener(&self, listener: Rc<dyn PageChangeListener>);

    /// Registers an adapter change listener.
    fn add_adapter_change_listener(&self, listener: Rc<dyn AdapterChangeListener>);

    /// Unregisters an adapter change listener by pointer identity.
    fn remove_adapter_change_listener(&self, listener: Rc<dyn AdapterChangeListener>);
}

/// The callback-style pager surface driven through a mediator.
pub trait PagedView {
    /// The currently selected page.
    fn current_item(&self) -> usize;

    /// Selects a page, optionally animating the transition.
    fn set_current_item(&self, position: usize, smooth: bool);

    /// The current adapter, if one is set.
    fn adapter(&self) -> Option<Rc<dyn TabAdapter>>;

    /// Registers a page change callback.
    fn register_page_change_callback(&self, callback: Rc<dyn PageChangeListener>);

    /// Unregisters a page change callback by pointer identity.
    fn unregister_page_change_callback(&self, callback: Rc<dyn PageChangeListener>);
}
