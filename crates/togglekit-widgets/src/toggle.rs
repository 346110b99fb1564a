//! Two-position toggle switch widget.
//!
//! A pill-shaped track with a circular knob at the left (off) or right (on)
//! end. The switch owns exactly one piece of state, the boolean, and flips
//! it on any tap inside its bounds. Rendering is derived fresh from
//! `(state, committed size)` on every paint; the state space is two values,
//! so there is nothing worth caching.

use serde::{Deserialize, Serialize};
use togglekit_core::{
    BaseState, Canvas, Color, Event, MeasureSpec, Point, Rect, ResolvedSize, SpecMode, Widget,
    WidgetBase,
};

/// Smallest width the switch will report.
const MIN_WIDTH: i32 = 200;
/// Smallest height, fixed at a third of the minimum width.
const MIN_HEIGHT: i32 = MIN_WIDTH / 3;
/// Stroke width for the track outline.
const STROKE_WIDTH: f32 = 20.0;

/// Track outline and off-state knob color.
const OUTLINE: Color = Color::BLACK;
/// On-state knob color.
const KNOB_ON: Color = Color::WHITE;
/// On-state track fill (holo blue, #33b5e5).
const ACCENT: Color = Color {
    r: 0.2,
    g: 0.71,
    b: 0.898,
    a: 1.0,
};

/// Single-slot state-change callback; receives the post-toggle value.
pub type ChangeListener = Box<dyn FnMut(bool)>;

/// Persisted form of the switch, chaining the baseline "superstate".
///
/// Restoration pattern-matches on the tag: only the `Switch` variant carries
/// a boolean to apply, anything else delegates to the baseline and leaves
/// the switch state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SavedState {
    /// Baseline-only payload, e.g. from a foreign widget or an older layout.
    Base {
        /// Baseline state
        base: BaseState,
    },
    /// The switch's own payload wrapped around the baseline.
    Switch {
        /// Baseline state, restored before the switch payload is applied
        base: BaseState,
        /// 1 = on, any other value reads back as off
        is_on: i32,
    },
}

/// Two-position toggle switch.
pub struct Toggle {
    base: WidgetBase,
    on: bool,
    listener: Option<ChangeListener>,
}

impl std::fmt::Debug for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toggle")
            .field("on", &self.on)
            .field("size", &self.base.size())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self {
            base: WidgetBase::new(),
            on: false,
            listener: None,
        }
    }
}

impl Toggle {
    /// Create a new switch in the off state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with an initial state.
    #[must_use]
    pub fn with_state(on: bool) -> Self {
        Self {
            on,
            ..Self::default()
        }
    }

    /// Create a switch from a host-supplied attribute bag.
    ///
    /// Attributes are accepted for constructor compatibility only; every
    /// value currently falls back to the built-in defaults.
    #[must_use]
    pub fn from_attributes(attrs: &serde_json::Value) -> Self {
        let _ = attrs;
        Self::new()
    }

    /// Get current state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Replace the state-change listener slot; `None` clears it.
    ///
    /// At most one listener is active at a time.
    pub fn set_change_listener(&mut self, listener: Option<ChangeListener>) {
        self.listener = listener;
    }

    /// Flip the state, request a repaint, then notify the listener with the
    /// post-toggle value.
    pub fn toggle(&mut self) {
        self.on = !self.on;
        self.base.request_paint();
        let on = self.on;
        if let Some(listener) = self.listener.as_mut() {
            listener(on);
        }
    }

    /// Capture the switch state, wrapping the baseline's own payload.
    #[must_use]
    pub fn save(&self) -> SavedState {
        SavedState::Switch {
            base: self.base.save(),
            is_on: i32::from(self.on),
        }
    }

    /// Restore from a saved payload.
    ///
    /// A `Switch` payload unchains the baseline first, then applies the
    /// boolean (strict equality: only exactly 1 reads back as on) and
    /// requests a repaint. Any other shape restores the baseline only and
    /// leaves the boolean at its current value.
    pub fn restore(&mut self, state: &SavedState) {
        match state {
            SavedState::Switch { base, is_on } => {
                self.base.restore(base);
                self.on = *is_on == 1;
                self.base.request_paint();
            }
            SavedState::Base { base } => self.base.restore(base),
        }
    }

    /// Three-way resolution rule shared by both dimensions.
    fn resolve(mode: SpecMode, raw: i32, min: i32) -> i32 {
        match mode {
            SpecMode::Unspecified => raw,
            SpecMode::Exactly => raw.max(min),
            SpecMode::AtMost => min,
        }
    }

    /// Oval bounding the left end cap.
    fn left_cap(size: ResolvedSize) -> Rect {
        let h = size.height as f32;
        let radius = (size.height / 2) as f32;
        Rect::new(
            STROKE_WIDTH / 4.0,
            STROKE_WIDTH / 4.0,
            radius * 2.0 + STROKE_WIDTH / 4.0,
            h - STROKE_WIDTH / 2.0,
        )
    }

    /// Oval bounding the right end cap.
    fn right_cap(size: ResolvedSize) -> Rect {
        let w = size.width as f32;
        let h = size.height as f32;
        let radius = (size.height / 2) as f32;
        Rect::new(
            w - radius * 2.0 - STROKE_WIDTH / 2.0,
            STROKE_WIDTH / 4.0,
            radius * 2.0 + STROKE_WIDTH / 4.0,
            h - STROKE_WIDTH / 2.0,
        )
    }

    /// Knob radius, inset from the track by the stroke treatment.
    fn knob_radius(size: ResolvedSize) -> f32 {
        (size.height / 2) as f32 - STROKE_WIDTH / 2.0 - STROKE_WIDTH / 4.0
    }

    /// Off state: border-only track, straight sections stroked as lines and
    /// the ends capped with stroked 180-degree arcs.
    fn paint_track_outline(canvas: &mut dyn Canvas, size: ResolvedSize) {
        let w = size.width as f32;
        let h = size.height as f32;
        let radius = (size.height / 2) as f32;
        canvas.draw_line(
            Point::new(radius, 0.0),
            Point::new(w - radius, 0.0),
            OUTLINE,
            STROKE_WIDTH,
        );
        canvas.draw_line(
            Point::new(radius, h),
            Point::new(w - radius, h),
            OUTLINE,
            STROKE_WIDTH,
        );
        canvas.stroke_arc(
            Self::left_cap(size),
            90.0,
            180.0,
            OUTLINE,
            STROKE_WIDTH / 2.0,
        );
        canvas.stroke_arc(
            Self::right_cap(size),
            -90.0,
            180.0,
            OUTLINE,
            STROKE_WIDTH / 2.0,
        );
    }

    /// On state: filled track, a center rectangle between two filled
    /// 180-degree end caps.
    fn paint_track_fill(canvas: &mut dyn Canvas, size: ResolvedSize) {
        let w = size.width as f32;
        let h = size.height as f32;
        let radius = (size.height / 2) as f32;
        canvas.fill_rect(
            Rect::new(
                radius,
                STROKE_WIDTH / 4.0,
                w - radius * 2.0,
                h - STROKE_WIDTH / 2.0,
            ),
            ACCENT,
        );
        canvas.fill_arc(Self::left_cap(size), 90.0, 180.0, ACCENT);
        canvas.fill_arc(Self::right_cap(size), -90.0, 180.0, ACCENT);
    }

    /// Dark knob at the left end.
    fn paint_knob_off(canvas: &mut dyn Canvas, size: ResolvedSize) {
        let h = size.height as f32;
        canvas.fill_circle(
            Point::new(h / 2.0, h / 2.0),
            Self::knob_radius(size),
            OUTLINE,
        );
    }

    /// Light knob at the right end.
    fn paint_knob_on(canvas: &mut dyn Canvas, size: ResolvedSize) {
        let w = size.width as f32;
        let h = size.height as f32;
        canvas.fill_circle(
            Point::new(w - h / 2.0, h - h / 2.0),
            Self::knob_radius(size),
            KNOB_ON,
        );
    }
}

impl Widget for Toggle {
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> ResolvedSize {
        let width = Self::resolve(width_spec.mode, width_spec.size, MIN_WIDTH);
        // The height branch compares the raw measurements, not the resolved
        // width, and keys off the *width* spec's mode. Sizing behavior
        // depends on both quirks.
        let height = if height_spec.size < width_spec.size {
            Self::resolve(width_spec.mode, height_spec.size, MIN_HEIGHT)
        } else {
            width / 4
        };
        let size = ResolvedSize::new(width, height);
        self.base.commit_size(size);
        size
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let size = self.base.size();
        if self.on {
            Self::paint_track_fill(canvas, size);
            Self::paint_knob_on(canvas, size);
        } else {
            Self::paint_track_outline(canvas, size);
            Self::paint_knob_off(canvas, size);
        }
    }

    fn event(&mut self, event: &Event) {
        // The whole bounding box is one hit target; the tap position does
        // not matter.
        match event {
            Event::Tap { .. } => self.toggle(),
        }
    }

    fn take_paint_request(&mut self) -> bool {
        self.base.take_paint_request()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn spec_mode() -> impl Strategy<Value = SpecMode> {
        prop_oneof![
            Just(SpecMode::Unspecified),
            Just(SpecMode::Exactly),
            Just(SpecMode::AtMost),
        ]
    }

    proptest! {
        #[test]
        fn toggle_twice_is_identity(initial in any::<bool>()) {
            let mut toggle = Toggle::with_state(initial);
            toggle.toggle();
            toggle.toggle();
            prop_assert_eq!(toggle.is_on(), initial);
        }

        #[test]
        fn save_restore_round_trips(on in any::<bool>()) {
            let saved = Toggle::with_state(on).save();
            let mut restored = Toggle::new();
            restored.restore(&saved);
            prop_assert_eq!(restored.is_on(), on);
        }

        #[test]
        fn at_most_width_is_always_the_minimum(raw in any::<i32>()) {
            let mut toggle = Toggle::new();
            let size = toggle.measure(MeasureSpec::at_most(raw), MeasureSpec::exactly(10));
            prop_assert_eq!(size.width, 200);
        }

        #[test]
        fn height_never_exceeds_width(
            width_mode in spec_mode(),
            height_mode in spec_mode(),
            raw_width in 0..10_000i32,
            raw_height in 0..10_000i32,
        ) {
            let mut toggle = Toggle::new();
            let size = toggle.measure(
                MeasureSpec::new(width_mode, raw_width),
                MeasureSpec::new(height_mode, raw_height),
            );
            prop_assert!(size.height <= size.width);
        }
    }
}
