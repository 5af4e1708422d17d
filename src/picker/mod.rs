//! Wheel date picker
//!
//! A headless model of a three-wheel (day, month, year) date selector. Hosts
//! feed it gestures and a frame clock and draw the [`ItemVisual`]s it
//! produces; it never touches a screen itself.

pub mod axis;
pub mod calendar;
pub mod projection;
mod traits;
mod wheel;

pub use axis::{AxisKind, ScrollDirection, WheelAxis};
pub use projection::{ItemVisual, WheelGeometry};
pub use traits::SlotList;
pub use wheel::{PickerFrame, SelectedDate, WheelPicker};
