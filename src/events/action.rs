//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; the App applies them to the picker.

use crate::picker::{AxisKind, ScrollDirection};

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No-op
    None,

    // === Application ===
    /// Quit the application
    Quit,

    // === Picker lifecycle ===
    /// Show the date picker
    OpenPicker,
    /// Hide the date picker without emitting (cancel, overlay click)
    ClosePicker,
    /// Emit the selected date and hide the picker
    ConfirmPicker,

    // === Wheel focus (keyboard) ===
    /// Focus the next wheel to the right
    FocusNext,
    /// Focus the next wheel to the left
    FocusPrev,
    /// Focus a specific wheel
    FocusAxis(AxisKind),

    // === Gestures ===
    /// Pointer pressed on a wheel, `y` in wheel pixels
    GestureStart { axis: AxisKind, y: f64 },
    /// Pointer moved while held, `y` in wheel pixels
    PointerMove { y: f64 },
    /// Pointer released
    PointerUp,

    // === Discrete scroll ===
    /// Raw scroll input over a wheel; debounced into notches by the App
    ScrollAxis { axis: AxisKind, delta: i32 },
    /// One notch on the focused wheel
    StepFocused(ScrollDirection),
}
