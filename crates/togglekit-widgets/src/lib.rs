//! Widget implementations for the togglekit toolkit.

pub mod toggle;

pub use toggle::{ChangeListener, SavedState, Toggle};
