//! Core types and traits for the togglekit widget toolkit.
//!
//! Widgets follow a measure-paint-event cycle driven by a single-threaded
//! host:
//!
//! 1. **Measure**: resolve a concrete size from the parent's [`MeasureSpec`]s
//! 2. **Paint**: emit drawing primitives onto a [`Canvas`](widget::Canvas)
//! 3. **Event**: react to host-delivered input and request repaints
//!
//! Persistence chains through the generic widget baseline: every widget
//! embeds a [`WidgetBase`], and widget payloads wrap the baseline's
//! [`BaseState`] when they serialize themselves across a host recreation.

pub mod canvas;
pub mod color;
pub mod constraints;
pub mod draw;
pub mod event;
pub mod geometry;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::Color;
pub use constraints::{MeasureSpec, SpecMode};
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::Event;
pub use geometry::{Point, Rect, ResolvedSize};
pub use widget::{BaseState, Canvas, Widget, WidgetBase};
