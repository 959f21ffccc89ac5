//! Button interaction capabilities.
//!
//! Each capability is its own trait. Implementers declare only the ones they
//! support, and consumers bound on exactly the capability they use.

pub mod button;
pub mod capability;

pub use button::{FullGestureButton, TapOnlyButton};
pub use capability::{DoubleTap, Gesture, GestureKind, LongPress, Tap};
