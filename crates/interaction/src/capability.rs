use serde::{Deserialize, Serialize};

/// Kind of gesture a control handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    Tap,
    DoubleTap,
    LongPress,
}

impl core::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            GestureKind::Tap => "tap",
            GestureKind::DoubleTap => "double_tap",
            GestureKind::LongPress => "long_press",
        };
        f.write_str(name)
    }
}

/// Record of a handled gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gesture {
    pub kind: GestureKind,
    pub control: String,
}

impl Gesture {
    pub fn new(kind: GestureKind, control: impl Into<String>) -> Self {
        Self {
            kind,
            control: control.into(),
        }
    }
}

/// Single tap.
pub trait Tap {
    fn tap(&self) -> Gesture;
}

/// Two taps in quick succession.
pub trait DoubleTap {
    fn double_tap(&self) -> Gesture;
}

/// Press and hold.
pub trait LongPress {
    fn long_press(&self) -> Gesture;
}
