//! Demonstration host for the toggle switch.
//!
//! Plays the role of the external collaborator: instantiates the widget,
//! registers a state-change listener that logs, and walks one host
//! lifecycle including a simulated recreation.

use log::info;
use serde_json::json;
use togglekit_core::{Event, MeasureSpec, Point, Rect, RecordingCanvas, Widget};
use togglekit_widgets::Toggle;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut switch = Toggle::from_attributes(&json!({ "style": "default" }));
    switch.set_change_listener(Some(Box::new(|on| info!("state changed to {on}"))));

    let size = switch.measure(MeasureSpec::exactly(320), MeasureSpec::exactly(90));
    info!("committed size {}x{}", size.width, size.height);

    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    info!("initial paint recorded {} commands", canvas.command_count());

    // Host-side hit test; the switch treats its whole bounding box as one
    // target, so any point inside counts.
    let bounds = Rect::new(0.0, 0.0, size.width as f32, size.height as f32);
    let tap = Point::new(10.0, 10.0);
    if bounds.contains_point(&tap) {
        switch.event(&Event::Tap { position: tap });
    }

    if switch.take_paint_request() {
        canvas.clear();
        switch.paint(&mut canvas);
        info!("repaint recorded {} commands", canvas.command_count());
    }

    // Simulated recreation: persist, drop, rebuild, restore, remeasure.
    let saved = switch.save();
    drop(switch);

    let mut recreated = Toggle::new();
    recreated.restore(&saved);
    recreated.measure(MeasureSpec::exactly(320), MeasureSpec::exactly(90));
    info!("restored instance is_on = {}", recreated.is_on());
}
