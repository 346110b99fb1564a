//! Widget trait and the generic per-widget baseline.

use crate::constraints::MeasureSpec;
use crate::event::Event;
use crate::geometry::{Point, Rect, ResolvedSize};
use crate::Color;
use serde::{Deserialize, Serialize};

/// Core widget trait.
///
/// All operations run on the host's single UI thread and complete without
/// suspending, so implementations need no internal locking. A widget never
/// paints itself spontaneously: it *requests* a repaint through
/// [`take_paint_request`](Widget::take_paint_request) and the host decides
/// when the paint actually happens.
pub trait Widget {
    /// Resolve a concrete size from the parent's constraints and commit it.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> ResolvedSize;

    /// Paint the widget at its committed size.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle a host-delivered input event.
    fn event(&mut self, event: &Event);

    /// Drain the pending repaint request, if any.
    ///
    /// Requests are coalesced: any number of state changes between two host
    /// paint passes collapse into a single `true`.
    fn take_paint_request(&mut self) -> bool;
}

/// Canvas trait for paint operations.
///
/// A minimal abstraction over the rendering backend. Arcs are specified by
/// the oval that bounds them, with angles in degrees (0 = 3 o'clock,
/// positive = clockwise).
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a stroked arc.
    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
        width: f32,
    );

    /// Draw a filled arc.
    fn fill_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color);
}

/// Generic per-widget baseline every widget embeds: the committed size and
/// the pending repaint flag.
#[derive(Debug, Clone, Default)]
pub struct WidgetBase {
    size: ResolvedSize,
    paint_requested: bool,
}

impl WidgetBase {
    /// Create a fresh baseline with zero size and no pending repaint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the size resolved by a measurement pass.
    pub fn commit_size(&mut self, size: ResolvedSize) {
        self.size = size;
    }

    /// The size committed by the last measurement pass.
    #[must_use]
    pub const fn size(&self) -> ResolvedSize {
        self.size
    }

    /// Flag that the widget wants to be repainted.
    pub fn request_paint(&mut self) {
        self.paint_requested = true;
    }

    /// Drain the pending repaint request.
    pub fn take_paint_request(&mut self) -> bool {
        std::mem::take(&mut self.paint_requested)
    }

    /// Capture the baseline's persisted state.
    #[must_use]
    pub fn save(&self) -> BaseState {
        BaseState::default()
    }

    /// Restore the baseline from persisted state.
    ///
    /// The baseline has no persisted fields today; widgets still route every
    /// restore through here so the chain stays uniform when it grows some.
    pub fn restore(&mut self, state: &BaseState) {
        let BaseState {} = *state;
    }
}

/// Persisted form of the widget baseline (the "superstate" that widget
/// payloads chain through).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseState {}
