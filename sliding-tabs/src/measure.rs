//! Text measurement seam.
//!
//! Scrollable mode sizes each tab at its intrinsic content width, which
//! requires measuring label text. The strip is toolkit-agnostic, so the
//! host's text engine is consumed through [`TextMeasure`]; the bundled
//! [`HeuristicTextMeasure`] is a stand-in good enough for tests and demos.

/// Measures the advance width of a label at a given text size.
pub trait TextMeasure {
    /// Returns the width in pixels of `text` rendered at `size` pixels.
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Approximates label width as a fixed fraction of the text size per
/// character.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicTextMeasure {
    /// Average glyph advance as a fraction of the text size.
    pub advance: f32,
}

impl Default for HeuristicTextMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for HeuristicTextMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance
    }
}
