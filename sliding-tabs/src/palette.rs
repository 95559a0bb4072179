//! Per-tab color lookups.
//!
//! A palette maps a tab index to the pair of colors the strip needs while
//! painting: the selected text color for that tab and the divider color drawn
//! at its trailing edge. The built-in [`SimpleTabPalette`] cycles configured
//! arrays; hosts can replace it wholesale with their own implementation via
//! [`SlidingTabStrip::set_custom_tab_palette`].
//!
//! [`SlidingTabStrip::set_custom_tab_palette`]: crate::strip::SlidingTabStrip::set_custom_tab_palette

use tracing::warn;

use crate::color::Color;

/// Maps a tab index to its text and divider colors.
pub trait TabPalette {
    /// Returns the selected text color for the tab at `position`.
    fn text_color(&self, position: usize) -> Color;

    /// Returns the color of the divider drawn after the tab at `position`.
    fn divider_color(&self, position: usize) -> Color;
}

/// A uniform cyclical palette built from configured color arrays.
///
/// Both arrays are cycled by `position % len`, so a single entry colors every
/// tab alike while longer arrays alternate.
#[derive(Debug, Clone)]
pub struct SimpleTabPalette {
    text_colors: Vec<Color>,
    divider_colors: Vec<Color>,
}

impl SimpleTabPalette {
    /// Creates a palette with one uniform text color and one uniform divider
    /// color.
    pub fn new(text_color: Color, divider_color: Color) -> Self {
        Self {
            text_colors: vec![text_color],
            divider_colors: vec![divider_color],
        }
    }

    /// Replaces the text color cycle. An empty slice is rejected and the
    /// previous colors are kept.
    pub fn set_text_colors(&mut self, colors: &[Color]) {
        if colors.is_empty() {
            warn!("ignoring empty tab text color array");
            return;
        }
        self.text_colors = colors.to_vec();
    }

    /// Replaces the divider color cycle. An empty slice is rejected and the
    /// previous colors are kept.
    pub fn set_divider_colors(&mut self, colors: &[Color]) {
        if colors.is_empty() {
            warn!("ignoring empty divider color array");
            return;
        }
        self.divider_colors = colors.to_vec();
    }
}

impl TabPalette for SimpleTabPalette {
    fn text_color(&self, position: usize) -> Color {
        self.text_colors[position % self.text_colors.len()]
    }

    fn divider_color(&self, position: usize) -> Color {
        self.divider_colors[position % self.divider_colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_cycle_by_index() {
        let mut palette = SimpleTabPalette::new(Color::GRAY, Color::BLACK);
        palette.set_text_colors(&[Color::BLACK, Color::WHITE]);
        assert_eq!(palette.text_color(0), Color::BLACK);
        assert_eq!(palette.text_color(1), Color::WHITE);
        assert_eq!(palette.text_color(2), Color::BLACK);
        assert_eq!(palette.text_color(5), Color::WHITE);
    }

    #[test]
    fn single_color_covers_every_tab() {
        let palette = SimpleTabPalette::new(Color::DARK_GRAY, Color::BLACK);
        for position in 0..8 {
            assert_eq!(palette.text_color(position), Color::DARK_GRAY);
        }
    }

    #[test]
    fn empty_arrays_are_rejected() {
        let mut palette = SimpleTabPalette::new(Color::GRAY, Color::BLACK);
        palette.set_text_colors(&[]);
        palette.set_divider_colors(&[]);
        assert_eq!(palette.text_color(3), Color::GRAY);
        assert_eq!(palette.divider_color(3), Color::BLACK);
    }
}
