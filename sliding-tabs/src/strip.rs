//! The tab strip rendering and interpolation engine.
//!
//! [`SlidingTabStrip`] owns the ordered sequence of tabs, the selection and
//! scroll state, and every piece of interpolation logic. It is driven by
//! position/offset updates on each page-scroll tick and produces its visual
//! output as a deterministic function of that state: each call to
//! [`SlidingTabStrip::paint`] yields a [`Frame`].
//!
//! All setters mark the strip dirty instead of redrawing immediately; the
//! host pulls the flag with [`SlidingTabStrip::take_invalidated`] and paints
//! when it is set.

use std::{rc::Rc, time::Instant};

use derive_setters::Setters;

use crate::{
    color::Color,
    easing::{accelerate, decelerate},
    palette::{SimpleTabPalette, TabPalette},
    render::{DrawCommand, DrawableHandle, Frame, IconHandle, Rect, TabVisual},
};

/// Duration of the text size transition between the default and selected
/// sizes.
const TEXT_SIZE_ANIMATION_SECS: f32 = 0.3;

/// Default values for the strip's styling.
pub struct StripDefaults;

impl StripDefaults {
    /// Default text size for idle and selected labels, in pixels.
    pub const TEXT_SIZE: f32 = 16.0;
    /// Default idle label color.
    pub const TEXT_COLOR: Color = Color::GRAY;
    /// Default selected label color.
    pub const SELECTED_TEXT_COLOR: Color = Color::DARK_GRAY;
    /// Default divider color, black at 32/255 alpha.
    pub const DIVIDER_COLOR: Color = Color::BLACK.with_alpha(32.0 / 255.0);
}

/// Vertical placement of the selection indicator within the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorGravity {
    /// Along the strip's top edge, offset by the top margin.
    Top,
    /// Vertically centered.
    Center,
    /// Along the strip's bottom edge, offset by the bottom margin.
    #[default]
    Bottom,
}

/// Static configuration of the selection indicator.
///
/// An absolute `width` takes precedence over `width_ratio`; the ratio only
/// applies when it lies strictly between 0 and 1. A `height` of zero disables
/// the indicator entirely.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct IndicatorStyle {
    /// Indicator height in pixels. Zero hides the indicator.
    pub height: f32,
    /// Absolute indicator width. Zero means "span the tab".
    pub width: f32,
    /// Indicator width as a fraction of the tab width, effective in (0, 1).
    pub width_ratio: f32,
    /// Explicit indicator color. `None` derives the color from the current
    /// tab's (possibly offset-mixed) text color.
    #[setters(strip_option)]
    pub color: Option<Color>,
    /// Custom drawable stretched to the indicator bounds, overriding the
    /// rounded-rectangle rendering.
    #[setters(strip_option)]
    pub drawable: Option<DrawableHandle>,
    /// Corner radius of the rounded-rectangle rendering.
    pub corner_radius: f32,
    /// Margin from the strip's top edge when gravity is [`IndicatorGravity::Top`].
    pub top_margin: f32,
    /// Margin from the strip's bottom edge when gravity is
    /// [`IndicatorGravity::Bottom`].
    pub bottom_margin: f32,
    /// Vertical placement.
    pub gravity: IndicatorGravity,
    /// Whether the indicator's edges ease independently (elongate then catch
    /// up) instead of translating rigidly.
    pub creep: bool,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            height: 0.0,
            width: 0.0,
            width_ratio: 0.0,
            color: None,
            drawable: None,
            corner_radius: 0.0,
            top_margin: 0.0,
            bottom_margin: 0.0,
            gravity: IndicatorGravity::default(),
            creep: false,
        }
    }
}

/// One visual element in the strip.
///
/// Tabs are created in bulk during a rebuild pass and destroyed in bulk by
/// [`SlidingTabStrip::reset`]; the strip owns them exclusively. Whether a tab
/// is selected is derived from the strip's selected position, not stored
/// here.
#[derive(Debug, Clone)]
pub struct Tab {
    label: String,
    icon: Option<IconHandle>,
    left: f32,
    right: f32,
    text_size: f32,
    text_color: Color,
    bold: bool,
}

impl Tab {
    /// Creates a tab with a label and an optional icon. Geometry and text
    /// styling are assigned by the strip.
    pub fn new(label: impl Into<String>, icon: Option<IconHandle>) -> Self {
        Self {
            label: label.into(),
            icon,
            left: 0.0,
            right: 0.0,
            text_size: 0.0,
            text_color: Color::TRANSPARENT,
            bold: false,
        }
    }

    /// The tab's label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tab's icon, if any.
    pub fn icon(&self) -> Option<IconHandle> {
        self.icon
    }

    /// Left edge within the strip.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Right edge within the strip.
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Width of the tab.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Current text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Current text size.
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Whether the label is currently bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

#[derive(Debug, Clone, Copy)]
struct TextTween {
    index: usize,
    from: f32,
    to: f32,
    start: Instant,
}

/// The strip engine. See the [module documentation](self) for an overview.
pub struct SlidingTabStrip {
    tabs: Vec<Tab>,
    width: f32,
    height: f32,
    left_padding: f32,
    right_padding: f32,

    tab_selected: bool,
    first_page_position: usize,
    first_page_offset: f32,
    selected_position: usize,
    last_selected_position: Option<usize>,

    text_color: Color,
    text_size: f32,
    selected_text_size: f32,
    text_bold: bool,
    selected_text_bold: bool,
    text_scale_anim: bool,

    divider_width: f32,
    divider_padding: f32,

    indicator: IndicatorStyle,

    palette: SimpleTabPalette,
    custom_palette: Option<Rc<dyn TabPalette>>,
    on_color_change: Option<Rc<dyn Fn(Color)>>,

    tweens: Vec<TextTween>,
    dirty: bool,
}

impl Default for SlidingTabStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl SlidingTabStrip {
    /// Creates an empty strip with the default styling.
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            width: 0.0,
            height: 0.0,
            left_padding: 0.0,
            right_padding: 0.0,
            tab_selected: true,
            first_page_position: 0,
            first_page_offset: 0.0,
            selected_position: 0,
            last_selected_position: None,
            text_color: StripDefaults::TEXT_COLOR,
            text_size: StripDefaults::TEXT_SIZE,
            selected_text_size: StripDefaults::TEXT_SIZE,
            text_bold: false,
            selected_text_bold: false,
            text_scale_anim: true,
            divider_width: 0.0,
            divider_padding: 0.0,
            indicator: IndicatorStyle::default(),
            palette: SimpleTabPalette::new(
                StripDefaults::SELECTED_TEXT_COLOR,
                StripDefaults::DIVIDER_COLOR,
            ),
            custom_palette: None,
            on_color_change: None,
            tweens: Vec::new(),
            dirty: false,
        }
    }

    /// Removes all tabs and restores the initial selection state. Must be
    /// called before repopulating; in-flight text size transitions are
    /// dropped together with the tabs that owned them.
    pub fn reset(&mut self) {
        self.tabs.clear();
        self.tweens.clear();
        self.last_selected_position = None;
        self.selected_position = 0;
        self.first_page_position = 0;
        self.first_page_offset = 0.0;
        self.tab_selected = true;
        self.dirty = true;
    }

    /// Appends a tab. Its text styling starts at the strip's defaults; the
    /// first paint applies selected styling where appropriate.
    pub fn push_tab(&mut self, mut tab: Tab) {
        tab.text_size = self.text_size;
        tab.text_color = self.text_color;
        tab.bold = self.text_bold;
        self.tabs.push(tab);
        self.dirty = true;
    }

    /// Assigns a tab's horizontal bounds. Layout is owned by the controller,
    /// which places every tab after a rebuild or container resize.
    pub fn set_tab_bounds(&mut self, index: usize, left: f32, right: f32) {
        if let Some(tab) = self.tabs.get_mut(index) {
            tab.left = left;
            tab.right = right;
            self.dirty = true;
        }
    }

    /// Sets the strip's own size in pixels.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.dirty = true;
    }

    /// Extra padding applied before the first tab.
    pub fn set_left_padding(&mut self, padding: f32) {
        self.left_padding = padding;
        self.dirty = true;
    }

    /// Extra padding applied after the last tab.
    pub fn set_right_padding(&mut self, padding: f32) {
        self.right_padding = padding;
        self.dirty = true;
    }

    /// The configured padding before the first tab.
    pub fn left_padding(&self) -> f32 {
        self.left_padding
    }

    /// The configured padding after the last tab.
    pub fn right_padding(&self) -> f32 {
        self.right_padding
    }

    /// Marks the strip as settled (`true`) or mid-drag (`false`). Settled
    /// tabs use discrete palette styling; mid-drag tabs use continuously
    /// interpolated colors.
    pub fn set_tab_selected(&mut self, selected: bool) {
        self.tab_selected = selected;
        self.dirty = true;
    }

    /// Sets the selected position. Callers must ensure the position is a
    /// valid tab index.
    pub fn set_selected_position(&mut self, position: usize) {
        self.selected_position = position;
        self.dirty = true;
    }

    /// Updates the scroll position: the strip is between `position` and
    /// `position + 1`, `offset` of the way across. Callers must ensure
    /// `position` is a valid tab index.
    pub fn set_first_page_position(&mut self, position: usize, offset: f32) {
        self.first_page_position = position;
        self.first_page_offset = offset;
        self.dirty = true;
    }

    /// Sets the default (idle) text size and color, restyling every
    /// unselected tab.
    pub fn set_tab_text(&mut self, text_size: f32, text_color: Color) {
        self.text_size = text_size;
        self.text_color = text_color;
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            if index != self.selected_position {
                tab.text_size = text_size;
                tab.text_color = text_color;
            }
        }
        self.dirty = true;
    }

    /// Sets the selected text size and the cyclic selected text colors,
    /// clearing any custom palette. The scale transition disables itself
    /// when both sizes are equal.
    pub fn set_tab_selected_text(&mut self, text_size: f32, colors: &[Color]) {
        self.selected_text_size = text_size;
        if self.text_scale_anim {
            self.text_scale_anim = self.selected_text_size != self.text_size;
        }
        self.custom_palette = None;
        self.palette.set_text_colors(colors);
        let selected = self.selected_position;
        if selected < self.tabs.len() {
            let color = self.palette.text_color(selected);
            let tab = &mut self.tabs[selected];
            tab.text_size = text_size;
            tab.text_color = color;
        }
        self.dirty = true;
    }

    /// Whether every tab label is bold.
    pub fn set_tab_text_bold(&mut self, bold: bool) {
        self.text_bold = bold;
        self.dirty = true;
    }

    /// Whether only the selected tab label is bold.
    pub fn set_tab_text_selected_bold(&mut self, selected_bold: bool) {
        self.selected_text_bold = selected_bold;
        self.dirty = true;
    }

    /// Whether selection changes tween the text size instead of snapping.
    pub fn set_show_text_scale_anim(&mut self, animate: bool) {
        self.text_scale_anim = animate;
    }

    /// Divider stroke width. Zero hides the dividers.
    pub fn set_divider_width(&mut self, width: f32) {
        self.divider_width = width;
        self.dirty = true;
    }

    /// Vertical padding of the divider lines.
    pub fn set_divider_padding(&mut self, padding: f32) {
        self.divider_padding = padding;
        self.dirty = true;
    }

    /// Sets the cyclic divider colors, clearing any custom palette.
    pub fn set_divider_colors(&mut self, colors: &[Color]) {
        self.custom_palette = None;
        self.palette.set_divider_colors(colors);
        self.dirty = true;
    }

    /// Replaces the indicator configuration.
    pub fn set_indicator(&mut self, indicator: IndicatorStyle) {
        self.indicator = indicator;
        self.dirty = true;
    }

    /// Installs a caller-supplied palette, overriding the cyclic one until a
    /// color-array setter is used again.
    pub fn set_custom_tab_palette(&mut self, palette: Rc<dyn TabPalette>) {
        self.custom_palette = Some(palette);
        self.dirty = true;
    }

    /// Registers the single observer notified with the resolved current text
    /// color after each paint, or clears it with `None`.
    pub fn set_on_color_change(&mut self, listener: Option<Rc<dyn Fn(Color)>>) {
        self.on_color_change = listener;
    }

    /// Number of tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// The tabs, in order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// The currently selected position.
    pub fn selected_position(&self) -> usize {
        self.selected_position
    }

    /// Whether the strip is settled on a tab.
    pub fn is_tab_selected(&self) -> bool {
        self.tab_selected
    }

    /// Returns and clears the repaint flag. A pending text size transition
    /// re-arms the flag at the end of each paint so the host keeps painting
    /// until the tween settles.
    pub fn take_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn palette_text_color(&self, position: usize) -> Color {
        match &self.custom_palette {
            Some(palette) => palette.text_color(position),
            None => self.palette.text_color(position),
        }
    }

    fn palette_divider_color(&self, position: usize) -> Color {
        match &self.custom_palette {
            Some(palette) => palette.divider_color(position),
            None => self.palette.divider_color(position),
        }
    }

    fn only_selected_tab_bold(&self) -> bool {
        !self.text_bold && self.selected_text_bold
    }

    fn begin_text_size(&mut self, index: usize, target: f32, now: Instant) {
        if index >= self.tabs.len() {
            return;
        }
        if !self.text_scale_anim {
            self.tabs[index].text_size = target;
            return;
        }
        let from = self.tabs[index].text_size;
        self.tweens.retain(|tween| tween.index != index);
        self.tweens.push(TextTween {
            index,
            from,
            to: target,
            start: now,
        });
    }

    fn advance_tweens(&mut self, now: Instant) {
        let mut i = 0;
        while i < self.tweens.len() {
            let tween = self.tweens[i];
            let elapsed = now.saturating_duration_since(tween.start).as_secs_f32();
            let progress = (elapsed / TEXT_SIZE_ANIMATION_SECS).min(1.0);
            if let Some(tab) = self.tabs.get_mut(tween.index) {
                tab.text_size = tween.from + (tween.to - tween.from) * progress;
            }
            if progress >= 1.0 {
                self.tweens.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Clamps a tab span to the configured absolute indicator width, or to
    /// the width ratio, centered on the tab.
    fn indicator_span(&self, left: f32, right: f32) -> (f32, f32) {
        if self.indicator.width != 0.0 {
            let middle = (left + right) / 2.0;
            let half = self.indicator.width / 2.0;
            (middle - half, middle + half)
        } else if self.indicator.width_ratio > 0.0 && self.indicator.width_ratio < 1.0 {
            let middle = (left + right) / 2.0;
            let half = (right - left) / 2.0 * self.indicator.width_ratio;
            (middle - half, middle + half)
        } else {
            (left, right)
        }
    }

    /// The current text color the strip resolves to: the first page's
    /// palette color, mixed toward the next page's while dragging.
    fn resolved_current_color(&self) -> Color {
        let first = self.first_page_position;
        let mut color = self.palette_text_color(first);
        if first + 1 < self.tabs.len() {
            let second_color = self.palette_text_color(first + 1);
            if second_color != color {
                color = Color::mix(second_color, color, self.first_page_offset);
            }
        }
        color
    }

    /// Runs one paint pass and returns the resulting frame.
    ///
    /// Pure given the current state and `now`; a strip without tabs produces
    /// an empty frame.
    pub fn paint(&mut self, now: Instant) -> Frame {
        self.dirty = false;
        let mut frame = Frame::default();
        let count = self.tabs.len();
        if count == 0 {
            return frame;
        }

        // Selection transition: restyle the outgoing and incoming tabs once
        // per selection change.
        if self.last_selected_position != Some(self.selected_position) {
            if self.text_size != self.selected_text_size {
                self.begin_text_size(self.selected_position, self.selected_text_size, now);
                if let Some(last) = self.last_selected_position {
                    self.begin_text_size(last, self.text_size, now);
                }
            }

            if self.only_selected_tab_bold() {
                let selected = self.selected_position;
                if let Some(tab) = self.tabs.get_mut(selected) {
                    tab.bold = true;
                }
                if let Some(last) = self.last_selected_position
                    && let Some(tab) = self.tabs.get_mut(last)
                {
                    tab.bold = false;
                }
            }

            if self.tab_selected {
                let color = self.palette_text_color(self.selected_position);
                let selected = self.selected_position;
                if let Some(tab) = self.tabs.get_mut(selected) {
                    tab.text_color = color;
                }
                let idle = self.text_color;
                if let Some(last) = self.last_selected_position
                    && let Some(tab) = self.tabs.get_mut(last)
                {
                    tab.text_color = idle;
                }
            }

            self.last_selected_position = Some(self.selected_position);
        }

        self.advance_tweens(now);

        let first = self.first_page_position;
        let second = first + 1;
        let offset = self.first_page_offset;

        // Mid-drag: mix the two flanking tabs' colors by the scroll offset.
        if !self.tab_selected {
            let leading = Color::mix(self.text_color, self.palette_text_color(first), offset);
            self.tabs[first].text_color = leading;
            if offset > 0.0 && first < count - 1 {
                let trailing = Color::mix(self.palette_text_color(second), self.text_color, offset);
                self.tabs[second].text_color = trailing;
            }
        }

        if self.divider_width > 0.0 {
            // With no padding the divider is half the strip height.
            let divider_height = if self.divider_padding == 0.0 {
                self.height / 2.0
            } else {
                self.height - 2.0 * self.divider_padding
            };
            for i in 0..count - 1 {
                frame.commands.push(DrawCommand::Divider {
                    x: self.tabs[i].right,
                    top: (self.height - divider_height) / 2.0,
                    bottom: (self.height + divider_height) / 2.0,
                    width: self.divider_width,
                    color: self.palette_divider_color(i),
                });
            }
        }

        if self.indicator.height > 0.0 {
            let mut first_left = self.tabs[first].left;
            let mut first_right = self.tabs[first].right;
            if first == 0 && self.left_padding > 0.0 {
                first_left += self.left_padding;
            }

            let mut first_text_color = self.palette_text_color(first);
            let (indicator_left, indicator_right) = if first < count - 1 {
                let second_color = self.palette_text_color(second);
                if second_color != first_text_color {
                    first_text_color = Color::mix(second_color, first_text_color, offset);
                }

                let second_left = self.tabs[second].left;
                let mut second_right = self.tabs[second].right;
                if second == count - 1 {
                    second_right -= self.right_padding;
                }

                let (fl, fr) = self.indicator_span(first_left, first_right);
                let (sl, sr) = self.indicator_span(second_left, second_right);
                if self.indicator.creep {
                    let lt = accelerate(offset);
                    let rt = decelerate(offset);
                    (fl * (1.0 - lt) + sl * lt, fr * (1.0 - rt) + sr * rt)
                } else {
                    (fl + offset * (sl - fl), fr + offset * (sr - fr))
                }
            } else {
                // Settled on the last tab: no next tab to interpolate
                // toward, only the trailing edge padding applies.
                first_right -= self.right_padding;
                self.indicator_span(first_left, first_right)
            };

            let (top, bottom) = match self.indicator.gravity {
                IndicatorGravity::Top => (
                    self.indicator.top_margin,
                    self.indicator.top_margin + self.indicator.height,
                ),
                IndicatorGravity::Center => (
                    (self.height - self.indicator.height) / 2.0,
                    (self.height + self.indicator.height) / 2.0,
                ),
                IndicatorGravity::Bottom => (
                    self.height - self.indicator.height - self.indicator.bottom_margin,
                    self.height - self.indicator.bottom_margin,
                ),
            };
            let bounds = Rect::new(indicator_left, top, indicator_right, bottom);

            let command = match self.indicator.drawable {
                Some(drawable) => DrawCommand::IndicatorDrawable { bounds, drawable },
                None => DrawCommand::Indicator {
                    bounds,
                    corner_radius: self.indicator.corner_radius,
                    color: self.indicator.color.unwrap_or(first_text_color),
                },
            };
            frame.commands.push(command);
        }

        if let Some(listener) = self.on_color_change.clone() {
            listener(self.resolved_current_color());
        }

        frame.tabs = self
            .tabs
            .iter()
            .map(|tab| TabVisual {
                bounds: Rect::new(tab.left, 0.0, tab.right, self.height),
                label: tab.label.clone(),
                icon: tab.icon,
                color: tab.text_color,
                text_size: tab.text_size,
                bold: tab.bold,
            })
            .collect();

        if !self.tweens.is_empty() {
            self.dirty = true;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, time::Duration};

    use super::*;

    fn strip_with_tabs(labels: &[&str], tab_width: f32) -> SlidingTabStrip {
        let mut strip = SlidingTabStrip::new();
        strip.set_bounds(tab_width * labels.len() as f32, 48.0);
        strip.set_show_text_scale_anim(false);
        for (i, label) in labels.iter().enumerate() {
            strip.push_tab(Tab::new(*label, None));
            strip.set_tab_bounds(i, i as f32 * tab_width, (i + 1) as f32 * tab_width);
        }
        strip
    }

    fn indicator() -> IndicatorStyle {
        IndicatorStyle::default().height(4.0)
    }

    #[test]
    fn empty_strip_paints_nothing() {
        let mut strip = SlidingTabStrip::new();
        strip.set_indicator(indicator());
        let frame = strip.paint(Instant::now());
        assert!(frame.tabs.is_empty());
        assert!(frame.commands.is_empty());
    }

    #[test]
    fn exactly_one_tab_has_selected_styling() {
        for selected in 0..3 {
            let mut strip = strip_with_tabs(&["a", "b", "c"], 100.0);
            strip.set_tab_selected(true);
            strip.set_selected_position(selected);
            let frame = strip.paint(Instant::now());
            let selected_tabs: Vec<usize> = frame
                .tabs
                .iter()
                .enumerate()
                .filter(|(_, tab)| tab.color == Color::DARK_GRAY)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(selected_tabs, vec![selected]);
        }
    }

    #[test]
    fn indicator_rests_on_the_selected_tab_at_offset_zero() {
        let mut strip = strip_with_tabs(&["a", "b", "c"], 100.0);
        strip.set_indicator(indicator());
        strip.set_first_page_position(1, 0.0);
        let bounds = strip.paint(Instant::now()).indicator_bounds().unwrap();
        assert_eq!(bounds.left, 100.0);
        assert_eq!(bounds.right, 200.0);
        assert_eq!(bounds.bottom, 48.0);
        assert_eq!(bounds.height(), 4.0);
    }

    #[test]
    fn indicator_interpolates_linearly_between_flanking_tabs() {
        let mut strip = strip_with_tabs(&["a", "b", "c"], 100.0);
        strip.set_indicator(indicator());
        strip.set_first_page_position(0, 0.5);
        let bounds = strip.paint(Instant::now()).indicator_bounds().unwrap();
        assert_eq!(bounds.left, 50.0);
        assert_eq!(bounds.right, 150.0);
    }

    #[test]
    fn creep_stretches_the_indicator() {
        let mut strip = strip_with_tabs(&["a", "b", "c"], 100.0);
        strip.set_indicator(indicator().creep(true));
        strip.set_first_page_position(0, 0.5);
        let bounds = strip.paint(Instant::now()).indicator_bounds().unwrap();
        // Left edge accelerates (lags), right edge decelerates (leads).
        assert_eq!(bounds.left, 25.0);
        assert_eq!(bounds.right, 175.0);
        assert!(bounds.width() > 100.0);
    }

    #[test]
    fn absolute_indicator_width_is_centered_on_the_tab() {
        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_indicator(indicator().width(20.0).width_ratio(0.5));
        strip.set_first_page_position(1, 0.0);
        let bounds = strip.paint(Instant::now()).indicator_bounds().unwrap();
        assert_eq!(bounds.left, 140.0);
        assert_eq!(bounds.right, 160.0);
    }

    #[test]
    fn width_ratio_shrinks_the_indicator_symmetrically() {
        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_indicator(indicator().width_ratio(0.5));
        strip.set_first_page_position(0, 0.0);
        let bounds = strip.paint(Instant::now()).indicator_bounds().unwrap();
        assert_eq!(bounds.left, 25.0);
        assert_eq!(bounds.right, 75.0);
    }

    #[test]
    fn last_tab_uses_its_own_bounds_with_right_padding() {
        let mut strip = strip_with_tabs(&["a", "b", "c"], 100.0);
        strip.set_indicator(indicator());
        strip.set_right_padding(10.0);
        strip.set_first_page_position(2, 0.0);
        let bounds = strip.paint(Instant::now()).indicator_bounds().unwrap();
        assert_eq!(bounds.left, 200.0);
        assert_eq!(bounds.right, 290.0);
    }

    #[test]
    fn indicator_gravity_positions_vertically() {
        let mut strip = strip_with_tabs(&["a"], 100.0);
        strip.set_indicator(indicator().gravity(IndicatorGravity::Top).top_margin(2.0));
        let bounds = strip.paint(Instant::now()).indicator_bounds().unwrap();
        assert_eq!((bounds.top, bounds.bottom), (2.0, 6.0));

        strip.set_indicator(indicator().gravity(IndicatorGravity::Center));
        let bounds = strip.paint(Instant::now()).indicator_bounds().unwrap();
        assert_eq!((bounds.top, bounds.bottom), (22.0, 26.0));
    }

    #[test]
    fn explicit_indicator_color_wins_over_derived() {
        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_indicator(indicator().color(Color::WHITE));
        let frame = strip.paint(Instant::now());
        match &frame.commands[..] {
            [DrawCommand::Indicator { color, .. }] => assert_eq!(*color, Color::WHITE),
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn derived_indicator_color_mixes_flanking_palette_colors() {
        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_indicator(indicator());
        strip.set_tab_selected_text(16.0, &[Color::BLACK, Color::WHITE]);
        strip.set_first_page_position(0, 0.5);
        let frame = strip.paint(Instant::now());
        match frame.commands.last() {
            Some(DrawCommand::Indicator { color, .. }) => {
                assert_eq!(*color, Color::mix(Color::WHITE, Color::BLACK, 0.5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn custom_drawable_replaces_rounded_rect() {
        let mut strip = strip_with_tabs(&["a"], 100.0);
        strip.set_indicator(indicator().drawable(DrawableHandle(7)));
        let frame = strip.paint(Instant::now());
        assert!(matches!(
            frame.commands[0],
            DrawCommand::IndicatorDrawable {
                drawable: DrawableHandle(7),
                ..
            }
        ));
    }

    #[test]
    fn mid_drag_recolors_the_flanking_tabs() {
        let mut strip = strip_with_tabs(&["a", "b", "c"], 100.0);
        strip.set_tab_selected(false);
        strip.set_first_page_position(0, 0.5);
        let frame = strip.paint(Instant::now());
        let expected_leading = Color::mix(Color::GRAY, Color::DARK_GRAY, 0.5);
        let expected_trailing = Color::mix(Color::DARK_GRAY, Color::GRAY, 0.5);
        assert_eq!(frame.tabs[0].color, expected_leading);
        assert_eq!(frame.tabs[1].color, expected_trailing);
        assert_eq!(frame.tabs[2].color, Color::GRAY);
    }

    #[test]
    fn dividers_are_drawn_between_tabs_only() {
        let mut strip = strip_with_tabs(&["a", "b", "c"], 100.0);
        strip.set_divider_width(1.0);
        let frame = strip.paint(Instant::now());
        let dividers: Vec<_> = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Divider { .. }))
            .collect();
        assert_eq!(dividers.len(), 2);
        // No padding: half the strip height, vertically centered.
        match dividers[0] {
            DrawCommand::Divider { x, top, bottom, .. } => {
                assert_eq!(*x, 100.0);
                assert_eq!(*top, 12.0);
                assert_eq!(*bottom, 36.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn divider_padding_shrinks_the_line() {
        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_divider_width(1.0);
        strip.set_divider_padding(4.0);
        let frame = strip.paint(Instant::now());
        match &frame.commands[0] {
            DrawCommand::Divider { top, bottom, .. } => {
                assert_eq!(*top, 4.0);
                assert_eq!(*bottom, 44.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn color_change_listener_reports_the_mixed_color() {
        let reported = Rc::new(Cell::new(Color::TRANSPARENT));
        let sink = reported.clone();
        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_tab_selected_text(16.0, &[Color::BLACK, Color::WHITE]);
        strip.set_on_color_change(Some(Rc::new(move |color| sink.set(color))));
        strip.set_first_page_position(0, 0.25);
        strip.paint(Instant::now());
        assert_eq!(reported.get(), Color::mix(Color::WHITE, Color::BLACK, 0.25));
    }

    #[test]
    fn text_size_tweens_toward_the_selected_size() {
        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_show_text_scale_anim(true);
        strip.set_tab_selected_text(24.0, &[Color::DARK_GRAY]);

        let start = Instant::now();
        strip.set_selected_position(1);
        strip.paint(start);
        let halfway = strip.paint(start + Duration::from_millis(150));
        assert!(halfway.tabs[1].text_size > 16.0);
        assert!(halfway.tabs[1].text_size < 24.0);
        // A running tween keeps the repaint flag armed.
        assert!(strip.take_invalidated());

        let done = strip.paint(start + Duration::from_millis(400));
        assert_eq!(done.tabs[1].text_size, 24.0);
        assert!(!strip.take_invalidated());
    }

    #[test]
    fn reset_drops_tabs_and_running_tweens() {
        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_show_text_scale_anim(true);
        strip.set_tab_selected_text(24.0, &[Color::DARK_GRAY]);
        strip.set_selected_position(1);
        strip.paint(Instant::now());

        strip.reset();
        assert_eq!(strip.tab_count(), 0);
        assert_eq!(strip.selected_position(), 0);
        assert!(strip.is_tab_selected());
        let frame = strip.paint(Instant::now());
        assert!(frame.tabs.is_empty());
    }

    #[test]
    fn only_selected_bold_toggles_with_selection() {
        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_tab_text_selected_bold(true);
        let frame = strip.paint(Instant::now());
        assert!(frame.tabs[0].bold);
        assert!(!frame.tabs[1].bold);

        strip.set_selected_position(1);
        let frame = strip.paint(Instant::now());
        assert!(!frame.tabs[0].bold);
        assert!(frame.tabs[1].bold);
    }

    #[test]
    fn custom_palette_overrides_until_colors_are_set_again() {
        struct Inverted;
        impl TabPalette for Inverted {
            fn text_color(&self, _position: usize) -> Color {
                Color::WHITE
            }
            fn divider_color(&self, _position: usize) -> Color {
                Color::BLACK
            }
        }

        let mut strip = strip_with_tabs(&["a", "b"], 100.0);
        strip.set_custom_tab_palette(Rc::new(Inverted));
        let frame = strip.paint(Instant::now());
        assert_eq!(frame.tabs[0].color, Color::WHITE);

        // Setting simple colors reclaims the palette slot.
        strip.set_divider_colors(&[Color::GRAY]);
        strip.set_selected_position(1);
        let frame = strip.paint(Instant::now());
        assert_eq!(frame.tabs[1].color, Color::DARK_GRAY);
    }
}
