//! Measurement specs handed down by a layout parent.

use serde::{Deserialize, Serialize};

/// How strictly a layout parent imposes a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecMode {
    /// The parent imposes nothing; the child may pick any size.
    Unspecified,
    /// The parent demands exactly this size.
    Exactly,
    /// The parent allows anything up to this size.
    AtMost,
}

/// One dimension of the constraint supplied per measurement pass.
///
/// Read-only input to [`Widget::measure`](crate::widget::Widget::measure);
/// the raw measurement is not validated, degenerate values propagate through
/// the widget's own arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureSpec {
    /// Constraint mode
    pub mode: SpecMode,
    /// Raw measurement in pixels
    pub size: i32,
}

impl MeasureSpec {
    /// Create a new measure spec.
    #[must_use]
    pub const fn new(mode: SpecMode, size: i32) -> Self {
        Self { mode, size }
    }

    /// A spec that imposes nothing beyond a suggested size.
    #[must_use]
    pub const fn unspecified(size: i32) -> Self {
        Self::new(SpecMode::Unspecified, size)
    }

    /// A spec that demands exactly `size` pixels.
    #[must_use]
    pub const fn exactly(size: i32) -> Self {
        Self::new(SpecMode::Exactly, size)
    }

    /// A spec that allows up to `size` pixels.
    #[must_use]
    pub const fn at_most(size: i32) -> Self {
        Self::new(SpecMode::AtMost, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_constructors() {
        assert_eq!(
            MeasureSpec::unspecified(120),
            MeasureSpec::new(SpecMode::Unspecified, 120)
        );
        assert_eq!(
            MeasureSpec::exactly(50),
            MeasureSpec::new(SpecMode::Exactly, 50)
        );
        assert_eq!(
            MeasureSpec::at_most(400),
            MeasureSpec::new(SpecMode::AtMost, 400)
        );
    }

    #[test]
    fn test_spec_carries_raw_measurement() {
        let spec = MeasureSpec::exactly(-10);
        assert_eq!(spec.size, -10); // Degenerate inputs pass through untouched
    }
}
