//! Terminal demo: drives a simulated pager through a swipe and a tab click
//! and prints the frames the layout produces.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Instant,
};

use sliding_tabs::{
    AdapterChangeListener, AdapterDataObserver, Color, DrawCommand, Frame, IndicatorStyle,
    PageChangeListener, Pager, ScrollState, SlidingTabLayout, TabAdapter, TabMode,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct DemoAdapter {
    titles: Vec<&'static str>,
}

impl TabAdapter for DemoAdapter {
    fn count(&self) -> usize {
        self.titles.len()
    }

    fn title(&self, position: usize) -> String {
        self.titles[position].to_string()
    }

    fn register_observer(&self, _observer: Rc<dyn AdapterDataObserver>) {}

    fn unregister_observer(&self, _observer: Rc<dyn AdapterDataObserver>) {}
}

struct DemoPager {
    adapter: Rc<dyn TabAdapter>,
    current: Cell<usize>,
    listeners: RefCell<Vec<Rc<dyn PageChangeListener>>>,
}

impl DemoPager {
    fn new(adapter: Rc<dyn TabAdapter>) -> Rc<Self> {
        Rc::new(Self {
            adapter,
            current: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn each(&self, f: impl Fn(&Rc<dyn PageChangeListener>)) {
        let listeners = self.listeners.borrow().clone();
        for listener in &listeners {
            f(listener);
        }
    }

    /// Simulates a finger swipe from `from` to `from + 1`.
    fn swipe_forward(&self, from: usize) {
        self.each(|l| l.on_page_scroll_state_changed(ScrollState::Dragging));
        for step in 1..=4 {
            let offset = step as f32 / 4.0;
            if offset < 1.0 {
                self.each(|l| l.on_page_scrolled(from, offset, offset * 360.0));
            }
        }
        self.each(|l| l.on_page_scroll_state_changed(ScrollState::Settling));
        self.current.set(from + 1);
        self.each(|l| l.on_page_selected(from + 1));
        self.each(|l| l.on_page_scrolled(from + 1, 0.0, 0.0));
        self.each(|l| l.on_page_scroll_state_changed(ScrollState::Idle));
    }
}

impl Pager for DemoPager {
    fn current_item(&self) -> usize {
        self.current.get()
    }

    fn set_current_item(&self, position: usize, _smooth: bool) {
        self.current.set(position);
        self.each(|l| l.on_page_selected(position));
        self.each(|l| l.on_page_scrolled(position, 0.0, 0.0));
    }

    fn adapter(&self) -> Option<Rc<dyn TabAdapter>> {
        Some(self.adapter.clone())
    }

    fn add_page_change_listener(&self, listener: Rc<dyn PageChangeListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    fn remove_page_change_listener(&self, listener: Rc<dyn PageChangeListener>) {
        self.listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, &listener));
    }

    fn add_adapter_change_listener(&self, _listener: Rc<dyn AdapterChangeListener>) {}

    fn remove_adapter_change_listener(&self, _listener: Rc<dyn AdapterChangeListener>) {}
}

fn print_frame(label: &str, frame: &Frame, scroll: f32) {
    println!("-- {label} (scroll {scroll:.1}px)");
    for tab in &frame.tabs {
        println!(
            "   [{:>5.1}..{:>5.1}] {:<10} size {:>4.1} alpha-mixed rgb ({:.2}, {:.2}, {:.2})",
            tab.bounds.left, tab.bounds.right, tab.label, tab.text_size, tab.color.r, tab.color.g,
            tab.color.b,
        );
    }
    for command in &frame.commands {
        match command {
            DrawCommand::Divider { x, .. } => println!("   divider at x {x:.1}"),
            DrawCommand::Indicator { bounds, .. } => {
                println!("   indicator [{:.1}..{:.1}]", bounds.left, bounds.right)
            }
            DrawCommand::IndicatorDrawable { bounds, .. } => {
                println!("   drawable  [{:.1}..{:.1}]", bounds.left, bounds.right)
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let adapter = Rc::new(DemoAdapter {
        titles: vec!["Home", "Trending", "Subscriptions", "Library"],
    });
    let pager = DemoPager::new(adapter);

    let layout = SlidingTabLayout::new();
    layout.set_tab_mode(TabMode::Scrollable);
    layout.set_size(360.0, 48.0);
    layout.set_tab_selected_text(20.0, &[Color::from_argb(0xff1e88e5)]);
    layout.set_indicator(IndicatorStyle::default().height(3.0).creep(true));
    layout.set_divider_width(1.0);
    layout.set_pager(Some(pager.clone()));

    info!(tabs = layout.tab_count(), "layout bound");

    print_frame("initial", &layout.paint(Instant::now()), layout.scroll_offset());

    pager.swipe_forward(0);
    print_frame("after swipe", &layout.paint(Instant::now()), layout.scroll_offset());

    layout.click_tab(3);
    print_frame("after click", &layout.paint(Instant::now()), layout.scroll_offset());

    // The text size tween keeps requesting frames for 300ms; settle it.
    while layout.take_invalidated() {
        std::thread::sleep(std::time::Duration::from_millis(50));
        layout.paint(Instant::now());
    }
    print_frame("settled", &layout.paint(Instant::now()), layout.scroll_offset());
}
