//! Display-list output of a strip paint pass.
//!
//! The strip does not draw to a canvas. Each paint pass instead produces a
//! [`Frame`]: the resolved visual state of every tab plus the draw commands
//! for the decorations (dividers and the selection indicator). The host
//! toolkit replays the frame onto its own rendering surface.

use smallvec::SmallVec;

use crate::color::Color;

/// Opaque host-side handle to a drawable used for a custom indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableHandle(pub u64);

/// Opaque host-side handle to a tab icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u64);

/// An axis-aligned rectangle in strip-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Rect {
    /// Creates a rectangle from its four edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Resolved visual state of one tab for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TabVisual {
    /// The tab's bounds within the strip.
    pub bounds: Rect,
    /// Label text.
    pub label: String,
    /// Optional icon; `None` hides the icon slot.
    pub icon: Option<IconHandle>,
    /// Current text color, interpolated while dragging.
    pub color: Color,
    /// Current text size in pixels, tweened on selection change.
    pub text_size: f32,
    /// Whether the label is rendered bold.
    pub bold: bool,
}

/// A single decoration to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A vertical divider line at a tab's trailing edge.
    Divider {
        /// Horizontal position of the line.
        x: f32,
        /// Top of the line.
        top: f32,
        /// Bottom of the line.
        bottom: f32,
        /// Stroke width.
        width: f32,
        /// Line color.
        color: Color,
    },
    /// The selection indicator as a rounded rectangle.
    Indicator {
        /// Indicator bounds.
        bounds: Rect,
        /// Corner radius.
        corner_radius: f32,
        /// Fill color.
        color: Color,
    },
    /// The selection indicator as a host-supplied drawable stretched to
    /// `bounds`.
    IndicatorDrawable {
        /// Indicator bounds.
        bounds: Rect,
        /// The drawable to stretch.
        drawable: DrawableHandle,
    },
}

/// The output of one paint pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Per-tab visuals, index-aligned with the strip's tabs.
    pub tabs: Vec<TabVisual>,
    /// Decorations, in paint order (dividers before the indicator).
    pub commands: SmallVec<[DrawCommand; 8]>,
}

impl Frame {
    /// Returns the indicator bounds of this frame, if an indicator was drawn.
    pub fn indicator_bounds(&self) -> Option<Rect> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Indicator { bounds, .. }
            | DrawCommand::IndicatorDrawable { bounds, .. } => Some(*bounds),
            DrawCommand::Divider { .. } => None,
        })
    }
}
