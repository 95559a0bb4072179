//! Color values and the channel mixing used while dragging between tabs.

/// A color with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
/// Configuration colors are commonly given in the `0xAARRGGBB` encoding via
/// [`Color::from_argb`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Alpha channel.
    pub a: f32,
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// The default idle tab text color.
    pub const GRAY: Color = Color::from_rgb(0.5333334, 0.5333334, 0.5333334);
    /// The default selected tab text color.
    pub const DARK_GRAY: Color = Color::from_rgb(0.26666668, 0.26666668, 0.26666668);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { a, r, g, b }
    }

    /// Creates a new opaque `Color` from three `f32` values (red, green, blue).
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { a: 1.0, r, g, b }
    }

    /// Creates a new `Color` from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: ((argb >> 24) & 0xff) as f32 / 255.0,
            r: ((argb >> 16) & 0xff) as f32 / 255.0,
            g: ((argb >> 8) & 0xff) as f32 / 255.0,
            b: (argb & 0xff) as f32 / 255.0,
        }
    }

    /// Returns this color with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Component-wise linear mix of two colors.
    ///
    /// `ratio` is the weight of `first`: a ratio of `1.0` yields `first`,
    /// `0.0` yields `second`, and anything in between blends each of the
    /// alpha, red, green and blue channels linearly.
    #[inline]
    pub fn mix(first: Color, second: Color, ratio: f32) -> Color {
        let mix = |x: f32, y: f32| x * ratio + y * (1.0 - ratio);
        Color {
            a: mix(first.a, second.a),
            r: mix(first.r, second.r),
            g: mix(first.g, second.g),
            b: mix(first.b, second.b),
        }
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}
