//! Draw commands.
//!
//! All rendering reduces to these primitives. Every backend is required to
//! anti-alias, so the command stream carries no per-primitive AA flag.

use crate::geometry::{Point, Rect};
use crate::Color;
use serde::{Deserialize, Serialize};

/// Stroke style for outlined primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles, circles and arcs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a line between two points
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Draw an arc, specified by the oval that bounds it
    Arc {
        /// Bounding oval of the full ellipse
        bounds: Rect,
        /// Start angle in degrees (0 = 3 o'clock, positive = clockwise)
        start_angle: f32,
        /// Sweep in degrees
        sweep_angle: f32,
        /// Box style
        style: BoxStyle,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a line between two points.
    #[must_use]
    pub const fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Line { from, to, style }
    }

    /// Create a stroked arc.
    #[must_use]
    pub const fn stroked_arc(
        bounds: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke: StrokeStyle,
    ) -> Self {
        Self::Arc {
            bounds,
            start_angle,
            sweep_angle,
            style: BoxStyle::stroke(stroke),
        }
    }

    /// Create a filled arc.
    #[must_use]
    pub const fn filled_arc(bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color) -> Self {
        Self::Arc {
            bounds,
            start_angle,
            sweep_angle,
            style: BoxStyle::fill(color),
        }
    }
}
