//! Input events delivered by the host.

use crate::geometry::Point;

/// Input event.
///
/// The host owns dispatch: it hit-tests against the widget's bounds before
/// delivering, so a widget that treats its whole bounding box as one target
/// is free to ignore the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A tap (or click) inside the widget's bounds.
    Tap {
        /// Position in the widget's coordinate space
        position: Point,
    },
}
