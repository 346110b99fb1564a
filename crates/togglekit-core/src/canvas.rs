//! Canvas implementations.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::geometry::{Point, Rect};
use crate::widget::Canvas;
use crate::Color;

/// A [`Canvas`] implementation that records draw operations as
/// [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand commands to a backend)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_rect(rect, color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::line(from, to, StrokeStyle { color, width }));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
        width: f32,
    ) {
        self.commands.push(DrawCommand::stroked_arc(
            bounds,
            start_angle,
            sweep_angle,
            StrokeStyle { color, width },
        ));
    }

    fn fill_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color) {
        self.commands.push(DrawCommand::filled_arc(
            bounds,
            start_angle,
            sweep_angle,
            color,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_fill_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(10.0, 20.0, 100.0, 50.0), Color::WHITE);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, style } => {
                assert_eq!(bounds.x, 10.0);
                assert_eq!(bounds.width, 100.0);
                assert_eq!(style.fill, Some(Color::WHITE));
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_draw_line() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(
            Point::new(33.0, 0.0),
            Point::new(167.0, 0.0),
            Color::BLACK,
            20.0,
        );

        match &canvas.commands()[0] {
            DrawCommand::Line { from, to, style } => {
                assert_eq!(from.x, 33.0);
                assert_eq!(to.x, 167.0);
                assert_eq!(style.width, 20.0);
            }
            _ => panic!("Expected Line command"),
        }
    }

    #[test]
    fn test_fill_circle() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(33.0, 33.0), 18.0, Color::BLACK);

        match &canvas.commands()[0] {
            DrawCommand::Circle { center, radius, .. } => {
                assert_eq!(*center, Point::new(33.0, 33.0));
                assert_eq!(*radius, 18.0);
            }
            _ => panic!("Expected Circle command"),
        }
    }

    #[test]
    fn test_arcs() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_arc(Rect::new(5.0, 5.0, 71.0, 56.0), 90.0, 180.0, Color::BLACK, 10.0);
        canvas.fill_arc(Rect::new(0.0, 0.0, 60.0, 60.0), -90.0, 180.0, Color::WHITE);

        assert_eq!(canvas.command_count(), 2);
        match &canvas.commands()[0] {
            DrawCommand::Arc { style, .. } => assert!(style.fill.is_none()),
            _ => panic!("Expected Arc command"),
        }
        match &canvas.commands()[1] {
            DrawCommand::Arc { style, .. } => assert_eq!(style.fill, Some(Color::WHITE)),
            _ => panic!("Expected Arc command"),
        }
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);

        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
