//! The tab layout controller.
//!
//! [`SlidingTabLayout`] glues a [`SlidingTabStrip`] to a pager: it populates
//! tabs from the pager's adapter, assigns tab geometry for the active
//! [`TabMode`], relays page scroll signals into the strip, keeps the strip
//! horizontally scrolled so the active tab stays centered, and turns tab
//! clicks back into page selections.
//!
//! The controller is a cheap clonable handle around shared state. Pager-side
//! listeners hold only a weak reference back to it, so dropping every handle
//! detaches the layout even if the pager outlives it and still holds relay
//! registrations.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Instant,
};

use tracing::{debug, trace};

use crate::{
    color::Color,
    measure::{HeuristicTextMeasure, TextMeasure},
    pager::{
        AdapterChangeListener, AdapterDataObserver, PageChangeListener, PagedView, Pager,
        ScrollState, TabAdapter,
    },
    palette::TabPalette,
    render::{Frame, IconHandle},
    strip::{IndicatorStyle, SlidingTabStrip, Tab},
};

/// How tabs share the strip's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabMode {
    /// All tabs split the available width evenly; nothing scrolls.
    Fixed,
    /// Each tab takes its intrinsic width and the strip scrolls.
    #[default]
    Scrollable,
}

/// Horizontal padding added around a tab's label in scrollable mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabPadding {
    /// Padding before the label.
    pub start: f32,
    /// Padding after the label.
    pub end: f32,
}

impl Default for TabPadding {
    fn default() -> Self {
        Self {
            start: 16.0,
            end: 16.0,
        }
    }
}

/// Builds custom tabs during population, replacing the default title-only
/// tab.
pub trait TabTemplate {
    /// Builds the tab for the page at `position`.
    fn build(&self, position: usize, title: &str, icon: Option<IconHandle>) -> Tab;
}

/// Either pager surface, driven through one code path.
#[derive(Clone)]
enum PagerBinding {
    Pager(Rc<dyn Pager>),
    Paged(Rc<dyn PagedView>),
}

impl PagerBinding {
    fn current_item(&self) -> usize {
        match self {
            Self::Pager(pager) => pager.current_item(),
            Self::Paged(view) => view.current_item(),
        }
    }

    fn set_current_item(&self, position: usize, smooth: bool) {
        match self {
            Self::Pager(pager) => pager.set_current_item(position, smooth),
            Self::Paged(view) => view.set_current_item(position, smooth),
        }
    }
}

struct LayoutInner {
    strip: SlidingTabStrip,
    width: f32,
    height: f32,
    tab_mode: TabMode,
    tab_padding: TabPadding,
    smooth_scroll: bool,
    scroll_x: f32,
    measure: Rc<dyn TextMeasure>,
    template: Option<Rc<dyn TabTemplate>>,
    binding: Option<PagerBinding>,
    adapter: Option<Rc<dyn TabAdapter>>,
    page_relay: Option<Rc<PageChangeRelay>>,
    adapter_relay: Option<Rc<AdapterChangeRelay>>,
    data_observer: Option<Rc<DataObserverRelay>>,
    on_tab_clicked: Option<Rc<dyn Fn(usize)>>,
    on_tab_reclicked: Option<Rc<dyn Fn(usize)>>,
    on_tab_selected: Option<Rc<dyn Fn(usize)>>,
    on_tabs_created: Option<Rc<dyn Fn()>>,
}

impl LayoutInner {
    /// Assigns every tab's horizontal bounds for the active mode.
    fn layout_tabs(&mut self) {
        let count = self.strip.tab_count();
        if count == 0 {
            return;
        }
        match self.tab_mode {
            TabMode::Fixed => {
                let tab_width = self.width / count as f32;
                for index in 0..count {
                    self.strip.set_tab_bounds(
                        index,
                        index as f32 * tab_width,
                        (index + 1) as f32 * tab_width,
                    );
                }
            }
            TabMode::Scrollable => {
                // The first and last tabs absorb the configured edge padding
                // into their intrinsic width.
                let left_padding = self.strip.left_padding();
                let right_padding = self.strip.right_padding();
                let widths: Vec<f32> = self
                    .strip
                    .tabs()
                    .iter()
                    .enumerate()
                    .map(|(index, tab)| {
                        let mut width = self.measure.text_width(tab.label(), tab.text_size())
                            + self.tab_padding.start
                            + self.tab_padding.end;
                        if index == 0 {
                            width += left_padding;
                        }
                        if index == count - 1 {
                            width += right_padding;
                        }
                        width
                    })
                    .collect();
                let mut left = 0.0;
                for (index, width) in widths.into_iter().enumerate() {
                    self.strip.set_tab_bounds(index, left, left + width);
                    left += width;
                }
            }
        }
    }

    /// Scrolls the strip so that the page at `position + offset` is centered,
    /// interpolating between the flanking tabs' spans while dragging.
    fn update_scroll(&mut self, position: usize, offset: f32) {
        let tabs = self.strip.tabs();
        let count = tabs.len();
        if count == 0 || self.width <= 0.0 || position >= count {
            return;
        }
        let tab = &tabs[position];
        let (left, width) = if offset > 0.0 && position + 1 < count {
            let next = &tabs[position + 1];
            (
                tab.left() + (next.left() - tab.left()) * offset,
                tab.width() + (next.width() - tab.width()) * offset,
            )
        } else {
            (tab.left(), tab.width())
        };
        let target = left + width / 2.0 - self.width / 2.0;
        let max = (tabs[count - 1].right() - self.width).max(0.0);
        self.scroll_x = target.clamp(0.0, max);
    }
}

/// Relays page change signals from the pager into the layout.
pub(crate) struct PageChangeRelay {
    inner: Weak<RefCell<LayoutInner>>,
}

impl PageChangeListener for PageChangeRelay {
    fn on_page_scrolled(&self, position: usize, offset: f32, _pixel_offset: f32) {
        if let Some(inner) = self.inner.upgrade() {
            SlidingTabLayout { inner }.handle_page_scrolled(position, offset);
        }
    }

    fn on_page_selected(&self, position: usize) {
        if let Some(inner) = self.inner.upgrade() {
            SlidingTabLayout { inner }.handle_page_selected(position);
        }
    }

    fn on_page_scroll_state_changed(&self, state: ScrollState) {
        if let Some(inner) = self.inner.upgrade() {
            SlidingTabLayout { inner }.handle_scroll_state(state);
        }
    }
}

/// Relays adapter swaps on the classic pager into the layout.
struct AdapterChangeRelay {
    inner: Weak<RefCell<LayoutInner>>,
}

impl AdapterChangeListener for AdapterChangeRelay {
    fn on_adapter_changed(
        &self,
        _old: Option<Rc<dyn TabAdapter>>,
        new: Option<Rc<dyn TabAdapter>>,
    ) {
        if let Some(inner) = self.inner.upgrade() {
            SlidingTabLayout { inner }.set_pager_adapter(new);
        }
    }
}

/// Relays adapter data-set changes into a wholesale rebuild.
struct DataObserverRelay {
    inner: Weak<RefCell<LayoutInner>>,
}

impl AdapterDataObserver for DataObserverRelay {
    fn on_changed(&self) {
        if let Some(inner) = self.inner.upgrade() {
            SlidingTabLayout { inner }.rebuild();
        }
    }
}

/// A tab strip controller bound to a pager. See the
/// [module documentation](self).
#[derive(Clone)]
pub struct SlidingTabLayout {
    inner: Rc<RefCell<LayoutInner>>,
}

impl Default for SlidingTabLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl SlidingTabLayout {
    /// Creates an unbound layout with the default configuration.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(LayoutInner {
                strip: SlidingTabStrip::new(),
                width: 0.0,
                height: 0.0,
                tab_mode: TabMode::default(),
                tab_padding: TabPadding::default(),
                smooth_scroll: true,
                scroll_x: 0.0,
                measure: Rc::new(HeuristicTextMeasure::default()),
                template: None,
                binding: None,
                adapter: None,
                page_relay: None,
                adapter_relay: None,
                data_observer: None,
                on_tab_clicked: None,
                on_tab_reclicked: None,
                on_tab_selected: None,
                on_tabs_created: None,
            })),
        }
    }

    /// Binds a classic pager, replacing any previous binding. Passing `None`
    /// unbinds and empties the strip.
    pub fn set_pager(&self, pager: Option<Rc<dyn Pager>>) {
        self.unbind();
        let Some(pager) = pager else {
            self.rebuild();
            return;
        };
        let page_relay = Rc::new(PageChangeRelay {
            inner: Rc::downgrade(&self.inner),
        });
        let adapter_relay = Rc::new(AdapterChangeRelay {
            inner: Rc::downgrade(&self.inner),
        });
        pager.add_page_change_listener(page_relay.clone());
        pager.add_adapter_change_listener(adapter_relay.clone());
        let adapter = pager.adapter();
        {
            let mut inner = self.inner.borrow_mut();
            inner.binding = Some(PagerBinding::Pager(pager));
            inner.page_relay = Some(page_relay);
            inner.adapter_relay = Some(adapter_relay);
        }
        self.set_pager_adapter(adapter);
    }

    /// Binds a callback-style paged view. Used by the mediator, which owns
    /// the attach/detach protocol.
    pub(crate) fn bind_paged_view(&self, view: Rc<dyn PagedView>) {
        self.unbind();
        let page_relay = Rc::new(PageChangeRelay {
            inner: Rc::downgrade(&self.inner),
        });
        view.register_page_change_callback(page_relay.clone());
        let adapter = view.adapter();
        {
            let mut inner = self.inner.borrow_mut();
            inner.binding = Some(PagerBinding::Paged(view));
            inner.page_relay = Some(page_relay);
        }
        self.set_pager_adapter(adapter);
    }

    /// Unbinds whatever is bound and empties the strip.
    pub(crate) fn unbind_and_clear(&self) {
        self.unbind();
        self.rebuild();
    }

    /// Removes every listener registration from the current binding and
    /// adapter.
    fn unbind(&self) {
        let (binding, page_relay, adapter_relay, adapter, observer) = {
            let mut inner = self.inner.borrow_mut();
            (
                inner.binding.take(),
                inner.page_relay.take(),
                inner.adapter_relay.take(),
                inner.adapter.take(),
                inner.data_observer.take(),
            )
        };
        match binding {
            Some(PagerBinding::Pager(pager)) => {
                if let Some(relay) = page_relay {
                    pager.remove_page_change_listener(relay);
                }
                if let Some(relay) = adapter_relay {
                    pager.remove_adapter_change_listener(relay);
                }
            }
            Some(PagerBinding::Paged(view)) => {
                if let Some(relay) = page_relay {
                    view.unregister_page_change_callback(relay);
                }
            }
            None => {}
        }
        if let (Some(adapter), Some(observer)) = (adapter, observer) {
            adapter.unregister_observer(observer);
        }
    }

    /// Swaps the adapter the tabs are populated from, moving the data
    /// observer registration along, then rebuilds.
    pub(crate) fn set_pager_adapter(&self, adapter: Option<Rc<dyn TabAdapter>>) {
        let (old_adapter, old_observer) = {
            let mut inner = self.inner.borrow_mut();
            (inner.adapter.take(), inner.data_observer.take())
        };
        if let (Some(old), Some(observer)) = (old_adapter, old_observer) {
            old.unregister_observer(observer);
        }
        if let Some(adapter) = &adapter {
            let observer = Rc::new(DataObserverRelay {
                inner: Rc::downgrade(&self.inner),
            });
            adapter.register_observer(observer.clone());
            let mut inner = self.inner.borrow_mut();
            inner.adapter = Some(adapter.clone());
            inner.data_observer = Some(observer);
        }
        self.rebuild();
    }

    /// Discards and repopulates every tab from the adapter, re-lays the
    /// geometry and re-syncs selection to the pager's current page.
    pub(crate) fn rebuild(&self) {
        let (adapter, template, binding) = {
            let inner = self.inner.borrow();
            (
                inner.adapter.clone(),
                inner.template.clone(),
                inner.binding.clone(),
            )
        };

        // Adapter and template are host code; query them before taking the
        // mutable borrow.
        let mut tabs = Vec::new();
        if let Some(adapter) = &adapter {
            for position in 0..adapter.count() {
                let title = adapter.title(position);
                let icon = adapter.icon(position);
                let tab = match &template {
                    Some(template) => template.build(position, &title, icon),
                    None => Tab::new(title, icon),
                };
                tabs.push(tab);
            }
        }
        let current = binding.as_ref().map(|binding| binding.current_item());

        let created = {
            let mut inner = self.inner.borrow_mut();
            inner.strip.reset();
            let count = tabs.len();
            for tab in tabs {
                inner.strip.push_tab(tab);
            }
            inner.layout_tabs();
            if let Some(current) = current
                && count > 0
            {
                let position = current.min(count - 1);
                inner.strip.set_selected_position(position);
                inner.strip.set_first_page_position(position, 0.0);
                inner.strip.set_tab_selected(true);
                inner.update_scroll(position, 0.0);
            }
            debug!(count, "rebuilt tabs");
            inner.on_tabs_created.clone()
        };
        if let Some(created) = created {
            created();
        }
    }

    fn handle_page_scrolled(&self, position: usize, offset: f32) {
        let mut inner = self.inner.borrow_mut();
        if position >= inner.strip.tab_count() {
            trace!(position, "scroll tick outside tab range, ignoring");
            return;
        }
        trace!(position, offset, "page scrolled");
        inner.strip.set_first_page_position(position, offset);
        inner.update_scroll(position, offset);
    }

    fn handle_page_selected(&self, position: usize) {
        let selected = {
            let mut inner = self.inner.borrow_mut();
            if position >= inner.strip.tab_count() {
                trace!(position, "selection outside tab range, ignoring");
                return;
            }
            inner.strip.set_tab_selected(true);
            inner.strip.set_selected_position(position);
            inner.on_tab_selected.clone()
        };
        if let Some(selected) = selected {
            selected(position);
        }
    }

    fn handle_scroll_state(&self, state: ScrollState) {
        let mut inner = self.inner.borrow_mut();
        // Settled exactly when idle; both drag and settle animate colors.
        inner.strip.set_tab_selected(state == ScrollState::Idle);
    }

    /// Handles a tab being activated: notifies the click observer, then the
    /// re-click observer when the tab is already current, then selects the
    /// page on the bound pager.
    pub fn click_tab(&self, position: usize) {
        let (binding, clicked, reclicked, smooth, count) = {
            let inner = self.inner.borrow();
            (
                inner.binding.clone(),
                inner.on_tab_clicked.clone(),
                inner.on_tab_reclicked.clone(),
                inner.smooth_scroll,
                inner.strip.tab_count(),
            )
        };
        if position >= count {
            return;
        }
        self.inner.borrow_mut().strip.set_tab_selected(true);
        if let Some(clicked) = clicked {
            clicked(position);
        }
        if let Some(binding) = binding {
            if binding.current_item() == position
                && let Some(reclicked) = reclicked
            {
                reclicked(position);
            }
            binding.set_current_item(position, smooth);
        }
    }

    /// Sets the layout's size in pixels, re-laying tab geometry and the
    /// centering scroll.
    pub fn set_size(&self, width: f32, height: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.width = width;
        inner.height = height;
        inner.strip.set_bounds(width, height);
        inner.layout_tabs();
        let position = inner.strip.selected_position();
        inner.update_scroll(position, 0.0);
    }

    /// Switches between fixed and scrollable tab modes. A mode change
    /// repopulates so every tab is rebuilt and re-laid for the new sizing
    /// policy.
    pub fn set_tab_mode(&self, mode: TabMode) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.tab_mode == mode {
                return;
            }
            inner.tab_mode = mode;
        }
        self.rebuild();
    }

    /// Sets the per-tab label padding used by scrollable layout.
    pub fn set_tab_padding(&self, padding: TabPadding) {
        let mut inner = self.inner.borrow_mut();
        inner.tab_padding = padding;
        inner.layout_tabs();
    }

    /// Installs the host's text measurement.
    pub fn set_text_measure(&self, measure: Rc<dyn TextMeasure>) {
        let mut inner = self.inner.borrow_mut();
        inner.measure = measure;
        inner.layout_tabs();
    }

    /// Installs a tab template and repopulates with it.
    pub fn set_tab_template(&self, template: Rc<dyn TabTemplate>) {
        self.inner.borrow_mut().template = Some(template);
        self.rebuild();
    }

    /// Whether programmatic page selection animates.
    pub fn set_smooth_scroll(&self, smooth: bool) {
        self.inner.borrow_mut().smooth_scroll = smooth;
    }

    /// Observer invoked with the position of every tab click.
    pub fn set_on_tab_clicked(&self, listener: Option<Rc<dyn Fn(usize)>>) {
        self.inner.borrow_mut().on_tab_clicked = listener;
    }

    /// Observer invoked when the already-current tab is clicked again.
    pub fn set_on_tab_reclicked(&self, listener: Option<Rc<dyn Fn(usize)>>) {
        self.inner.borrow_mut().on_tab_reclicked = listener;
    }

    /// Observer invoked with the position of every page selection reported
    /// by the pager.
    pub fn set_on_tab_selected(&self, listener: Option<Rc<dyn Fn(usize)>>) {
        self.inner.borrow_mut().on_tab_selected = listener;
    }

    /// Observer invoked after each rebuild, once the tabs exist.
    pub fn set_on_tabs_created(&self, listener: Option<Rc<dyn Fn()>>) {
        self.inner.borrow_mut().on_tabs_created = listener;
    }

    /// Runs a paint pass on the strip.
    pub fn paint(&self, now: Instant) -> Frame {
        self.inner.borrow_mut().strip.paint(now)
    }

    /// Returns and clears the strip's repaint flag.
    pub fn take_invalidated(&self) -> bool {
        self.inner.borrow_mut().strip.take_invalidated()
    }

    /// The strip's horizontal scroll position keeping the active tab
    /// centered.
    pub fn scroll_offset(&self) -> f32 {
        self.inner.borrow().scroll_x
    }

    /// Number of tabs currently populated.
    pub fn tab_count(&self) -> usize {
        self.inner.borrow().strip.tab_count()
    }

    /// The currently selected tab position.
    pub fn selected_position(&self) -> usize {
        self.inner.borrow().strip.selected_position()
    }

    /// Sets the default text size and color. Forwarded to the strip.
    pub fn set_tab_text(&self, text_size: f32, text_color: Color) {
        self.inner.borrow_mut().strip.set_tab_text(text_size, text_color);
    }

    /// Sets the selected text size and colors. Forwarded to the strip.
    pub fn set_tab_selected_text(&self, text_size: f32, colors: &[Color]) {
        self.inner
            .borrow_mut()
            .strip
            .set_tab_selected_text(text_size, colors);
    }

    /// Whether every tab label is bold. Forwarded to the strip.
    pub fn set_tab_text_bold(&self, bold: bool) {
        self.inner.borrow_mut().strip.set_tab_text_bold(bold);
    }

    /// Whether only the selected label is bold. Forwarded to the strip.
    pub fn set_tab_text_selected_bold(&self, bold: bool) {
        self.inner.borrow_mut().strip.set_tab_text_selected_bold(bold);
    }

    /// Whether selection changes tween the text size. Forwarded to the
    /// strip.
    pub fn set_show_text_scale_anim(&self, animate: bool) {
        self.inner.borrow_mut().strip.set_show_text_scale_anim(animate);
    }

    /// Replaces the indicator configuration. Forwarded to the strip.
    pub fn set_indicator(&self, indicator: IndicatorStyle) {
        self.inner.borrow_mut().strip.set_indicator(indicator);
    }

    /// Divider stroke width. Forwarded to the strip.
    pub fn set_divider_width(&self, width: f32) {
        self.inner.borrow_mut().strip.set_divider_width(width);
    }

    /// Divider vertical padding. Forwarded to the strip.
    pub fn set_divider_padding(&self, padding: f32) {
        self.inner.borrow_mut().strip.set_divider_padding(padding);
    }

    /// Cyclic divider colors. Forwarded to the strip.
    pub fn set_divider_colors(&self, colors: &[Color]) {
        self.inner.borrow_mut().strip.set_divider_colors(colors);
    }

    /// Installs a caller-supplied palette. Forwarded to the strip.
    pub fn set_custom_tab_palette(&self, palette: Rc<dyn TabPalette>) {
        self.inner.borrow_mut().strip.set_custom_tab_palette(palette);
    }

    /// Observer for the resolved current text color. Forwarded to the strip.
    pub fn set_on_color_change(&self, listener: Option<Rc<dyn Fn(Color)>>) {
        self.inner.borrow_mut().strip.set_on_color_change(listener);
    }

    /// Extra padding before the first tab. The first tab's intrinsic width
    /// grows by it in scrollable mode.
    pub fn set_left_padding(&self, padding: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.strip.set_left_padding(padding);
        inner.layout_tabs();
    }

    /// Extra padding after the last tab. The last tab's intrinsic width
    /// grows by it in scrollable mode.
    pub fn set_right_padding(&self, padding: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.strip.set_right_padding(padding);
        inner.layout_tabs();
    }

    /// Runs a closure against the strip, for host integrations that need
    /// direct access to per-tab state.
    pub fn with_strip<R>(&self, f: impl FnOnce(&SlidingTabStrip) -> R) -> R {
        f(&self.inner.borrow().strip)
    }
}
