//! End-to-end host lifecycle for the toggle switch: measure, paint, tap,
//! save, recreate, restore.

use std::cell::RefCell;
use std::rc::Rc;

use togglekit_core::{
    Event, MeasureSpec, Point, Rect, RecordingCanvas, ResolvedSize, Widget,
};
use togglekit_widgets::Toggle;

#[test]
fn full_host_lifecycle() {
    let mut switch = Toggle::new();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    switch.set_change_listener(Some(Box::new(move |on| sink.borrow_mut().push(on))));

    // Layout pass. The parent demands a size below the widget's floor; the
    // widget overrides it.
    let size = switch.measure(MeasureSpec::exactly(50), MeasureSpec::exactly(10));
    assert_eq!(size, ResolvedSize::new(200, 66));

    // Initial paint.
    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    assert_eq!(canvas.command_count(), 5); // Off state: outline + knob

    // The host hit-tests before dispatching; the switch itself does not
    // care where inside the bounds the tap landed.
    let bounds = Rect::new(0.0, 0.0, size.width as f32, size.height as f32);
    let tap = Point::new(10.0, 10.0);
    assert!(bounds.contains_point(&tap));
    switch.event(&Event::Tap { position: tap });

    assert!(switch.is_on());
    assert_eq!(*seen.borrow(), vec![true]);

    // The flip requested a repaint; drain it and repaint.
    assert!(switch.take_paint_request());
    canvas.clear();
    switch.paint(&mut canvas);
    assert_eq!(canvas.command_count(), 4); // On state: filled track + knob

    // Host recreation: persist, drop, rebuild, restore.
    let saved = switch.save();
    drop(switch);

    let mut recreated = Toggle::new();
    recreated.restore(&saved);
    assert!(recreated.is_on());
    assert!(recreated.take_paint_request());

    // The restored boolean survives a fresh measurement pass.
    recreated.measure(MeasureSpec::at_most(1000), MeasureSpec::exactly(10));
    assert!(recreated.is_on());
}

#[test]
fn saved_state_survives_a_wire_round_trip() {
    let mut switch = Toggle::new();
    switch.toggle();

    let bytes = serde_json::to_vec(&switch.save()).unwrap();
    let saved = serde_json::from_slice(&bytes).unwrap();

    let mut recreated = Toggle::new();
    recreated.restore(&saved);
    assert!(recreated.is_on());
}
