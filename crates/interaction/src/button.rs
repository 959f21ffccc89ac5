use crate::capability::{DoubleTap, Gesture, GestureKind, LongPress, Tap};

fn handled(kind: GestureKind, control: &str) -> Gesture {
    tracing::debug!(gesture = %kind, control, "gesture handled");
    Gesture::new(kind, control)
}

/// A button that supports every gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullGestureButton {
    label: String,
}

impl FullGestureButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Tap for FullGestureButton {
    fn tap(&self) -> Gesture {
        handled(GestureKind::Tap, &self.label)
    }
}

impl DoubleTap for FullGestureButton {
    fn double_tap(&self) -> Gesture {
        handled(GestureKind::DoubleTap, &self.label)
    }
}

impl LongPress for FullGestureButton {
    fn long_press(&self) -> Gesture {
        handled(GestureKind::LongPress, &self.label)
    }
}

/// A button that only supports a single tap.
///
/// It has no double-tap or long-press behaviour to stub out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapOnlyButton {
    label: String,
}

impl TapOnlyButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Tap for TapOnlyButton {
    fn tap(&self) -> Gesture {
        handled(GestureKind::Tap, &self.label)
    }
}
