//! End-to-end strip/pager synchronization scenarios driven through the
//! public API with a simulated pager.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Instant,
};

use sliding_tabs::{
    AdapterChangeListener, AdapterDataObserver, Color, DrawCommand, IndicatorStyle,
    PageChangeListener, Pager, ScrollState, SlidingTabLayout, TabAdapter, TabMode,
};

struct SimAdapter {
    titles: RefCell<Vec<String>>,
    observers: RefCell<Vec<Rc<dyn AdapterDataObserver>>>,
}

impl SimAdapter {
    fn new(titles: &[&str]) -> Rc<Self> {
        Rc::new(Self {
            titles: RefCell::new(titles.iter().map(|t| t.to_string()).collect()),
            observers: RefCell::new(Vec::new()),
        })
    }

    fn remove_last(&self) {
        self.titles.borrow_mut().pop();
        let observers = self.observers.borrow().clone();
        let count = self.titles.borrow().len();
        for observer in observers {
            observer.on_item_range_removed(count, 1);
        }
    }
}

impl TabAdapter for SimAdapter {
    fn count(&self) -> usize {
        self.titles.borrow().len()
    }

    fn title(&self, position: usize) -> String {
        self.titles.borrow()[position].clone()
    }

    fn register_observer(&self, observer: Rc<dyn AdapterDataObserver>) {
        self.observers.borrow_mut().push(observer);
    }

    fn unregister_observer(&self, observer: Rc<dyn AdapterDataObserver>) {
        self.observers
            .borrow_mut()
            .retain(|o| !Rc::ptr_eq(o, &observer));
    }
}

/// A pager that simulates real gesture sequences: a drag emits Dragging,
/// scroll ticks, Settling, a final selection and Idle, in that order.
struct SimPager {
    adapter: RefCell<Option<Rc<dyn TabAdapter>>>,
    current: Cell<usize>,
    page_listeners: RefCell<Vec<Rc<dyn PageChangeListener>>>,
    adapter_listeners: RefCell<Vec<Rc<dyn AdapterChangeListener>>>,
}

impl SimPager {
    fn new(adapter: Rc<dyn TabAdapter>) -> Rc<Self> {
        Rc::new(Self {
            adapter: RefCell::new(Some(adapter)),
            current: Cell::new(0),
            page_listeners: RefCell::new(Vec::new()),
            adapter_listeners: RefCell::new(Vec::new()),
        })
    }

    fn listeners(&self) -> Vec<Rc<dyn PageChangeListener>> {
        self.page_listeners.borrow().clone()
    }

    fn emit_state(&self, state: ScrollState) {
        for listener in self.listeners() {
            listener.on_page_scroll_state_changed(state);
        }
    }

    fn emit_scrolled(&self, position: usize, offset: f32) {
        for listener in self.listeners() {
            listener.on_page_scrolled(position, offset, offset * 320.0);
        }
    }

    fn emit_selected(&self, position: usize) {
        self.current.set(position);
        for listener in self.listeners() {
            listener.on_page_selected(position);
        }
    }

    /// A full swipe gesture from `from` to `to` (adjacent pages).
    fn swipe(&self, from: usize, to: usize) {
        self.emit_state(ScrollState::Dragging);
        if to > from {
            for offset in [0.25, 0.5, 0.75] {
                self.emit_scrolled(from, offset);
            }
        } else {
            for offset in [0.75, 0.5, 0.25] {
                self.emit_scrolled(to, offset);
            }
        }
        self.emit_state(ScrollState::Settling);
        self.emit_selected(to);
        self.emit_scrolled(to, 0.0);
        self.emit_state(ScrollState::Idle);
    }
}

impl Pager for SimPager {
    fn current_item(&self) -> usize {
        self.current.get()
    }

    fn set_current_item(&self, position: usize, _smooth: bool) {
        self.emit_selected(position);
        self.emit_scrolled(position, 0.0);
    }

    fn adapter(&self) -> Option<Rc<dyn TabAdapter>> {
        self.adapter.borrow().clone()
    }

    fn add_page_change_listener(&self, listener: Rc<dyn PageChangeListener>) {
        self.page_listeners.borrow_mut().push(listener);
    }

    fn remove_page_change_listener(&self, listener: Rc<dyn PageChangeListener>) {
        self.page_listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, &listener));
    }

    fn add_adapter_change_listener(&self, listener: Rc<dyn AdapterChangeListener>) {
        self.adapter_listeners.borrow_mut().push(listener);
    }

    fn remove_adapter_change_listener(&self, listener: Rc<dyn AdapterChangeListener>) {
        self.adapter_listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, &listener));
    }
}

fn fixed_layout(titles: &[&str]) -> (SlidingTabLayout, Rc<SimPager>, Rc<SimAdapter>) {
    let adapter = SimAdapter::new(titles);
    let pager = SimPager::new(adapter.clone());
    let layout = SlidingTabLayout::new();
    layout.set_tab_mode(TabMode::Fixed);
    layout.set_size(400.0, 48.0);
    layout.set_show_text_scale_anim(false);
    layout.set_indicator(IndicatorStyle::default().height(3.0));
    layout.set_pager(Some(pager.clone()));
    (layout, pager, adapter)
}

fn indicator_bounds(layout: &SlidingTabLayout) -> sliding_tabs::Rect {
    layout
        .paint(Instant::now())
        .indicator_bounds()
        .expect("indicator should be drawn")
}

#[test]
fn drag_midway_blends_colors_and_splits_the_indicator() {
    let (layout, pager, _adapter) = fixed_layout(&["a", "b", "c", "d"]);
    layout.set_tab_selected_text(16.0, &[Color::BLACK]);

    pager.emit_state(ScrollState::Dragging);
    pager.emit_scrolled(0, 0.5);

    let frame = layout.paint(Instant::now());
    // Both flanking tabs sit halfway between the idle and selected colors.
    let halfway = Color::mix(Color::GRAY, Color::BLACK, 0.5);
    assert_eq!(frame.tabs[0].color, halfway);
    assert_eq!(frame.tabs[1].color, halfway);
    assert_eq!(frame.tabs[2].color, Color::GRAY);

    // Tabs are 100 wide; the indicator straddles the boundary at 100.
    let bounds = frame.indicator_bounds().expect("indicator");
    assert_eq!(bounds.left, 50.0);
    assert_eq!(bounds.right, 150.0);
}

#[test]
fn a_full_swipe_lands_in_a_settled_state() {
    let (layout, pager, _adapter) = fixed_layout(&["a", "b", "c", "d"]);

    pager.swipe(0, 1);

    assert_eq!(layout.selected_position(), 1);
    let frame = layout.paint(Instant::now());
    assert_eq!(frame.tabs[1].color, Color::DARK_GRAY);
    assert_eq!(frame.tabs[0].color, Color::GRAY);
    let bounds = frame.indicator_bounds().expect("indicator");
    assert_eq!((bounds.left, bounds.right), (100.0, 200.0));

    // Swiping back restores the original selection.
    pager.swipe(1, 0);
    assert_eq!(layout.selected_position(), 0);
    let bounds = indicator_bounds(&layout);
    assert_eq!((bounds.left, bounds.right), (0.0, 100.0));
}

#[test]
fn tab_click_navigates_across_multiple_pages() {
    let (layout, pager, _adapter) = fixed_layout(&["a", "b", "c", "d"]);

    layout.click_tab(3);

    assert_eq!(pager.current_item(), 3);
    assert_eq!(layout.selected_position(), 3);
    let bounds = indicator_bounds(&layout);
    assert_eq!((bounds.left, bounds.right), (300.0, 400.0));
}

#[test]
fn removing_the_selected_page_clamps_the_selection() {
    let (layout, pager, adapter) = fixed_layout(&["a", "b", "c", "d"]);
    pager.set_current_item(3, false);
    assert_eq!(layout.selected_position(), 3);

    adapter.remove_last();

    assert_eq!(layout.tab_count(), 3);
    assert_eq!(layout.selected_position(), 2);
    // Fixed mode re-laid the remaining tabs over the full width.
    let frame = layout.paint(Instant::now());
    let width = 400.0 / 3.0;
    assert_eq!(frame.tabs[2].bounds.left, 2.0 * width);
    let bounds = frame.indicator_bounds().expect("indicator");
    assert!((bounds.left - 2.0 * width).abs() < 1e-3);
}

#[test]
fn mid_drag_frames_never_show_two_settled_tabs() {
    let (layout, pager, _adapter) = fixed_layout(&["a", "b", "c"]);
    layout.set_tab_selected_text(16.0, &[Color::BLACK]);

    pager.emit_state(ScrollState::Dragging);
    for offset in [0.1, 0.3, 0.5, 0.7, 0.9] {
        pager.emit_scrolled(0, offset);
        let frame = layout.paint(Instant::now());
        let settled = frame
            .tabs
            .iter()
            .filter(|tab| tab.color == Color::BLACK)
            .count();
        assert_eq!(settled, 0, "offset {offset} should blend, not settle");
    }
}

#[test]
fn dividers_and_indicator_coexist_in_paint_order() {
    let (layout, _pager, _adapter) = fixed_layout(&["a", "b", "c"]);
    layout.set_divider_width(2.0);

    let frame = layout.paint(Instant::now());
    assert_eq!(frame.commands.len(), 3);
    assert!(matches!(frame.commands[0], DrawCommand::Divider { .. }));
    assert!(matches!(frame.commands[1], DrawCommand::Divider { .. }));
    assert!(matches!(frame.commands[2], DrawCommand::Indicator { .. }));
}

#[test]
fn repaint_flag_follows_state_changes() {
    let (layout, pager, _adapter) = fixed_layout(&["a", "b"]);
    layout.paint(Instant::now());
    assert!(!layout.take_invalidated());

    pager.emit_scrolled(0, 0.4);
    assert!(layout.take_invalidated());
    assert!(!layout.take_invalidated());
}
