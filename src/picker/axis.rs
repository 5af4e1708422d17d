//! A single scrollable wheel: offsets, drag tracking and settle animation.
//!
//! Offsets are in pixels and grow negative as the wheel scrolls down the
//! list. Slot `i` rests at offset `-i * item_height`.

use super::traits::SlotList;

/// The three wheels of the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    Day,
    Month,
    Year,
}

impl AxisKind {
    /// Left-to-right display order.
    pub const ALL: [AxisKind; 3] = [AxisKind::Day, AxisKind::Month, AxisKind::Year];

    pub fn label(&self) -> &'static str {
        match self {
            AxisKind::Day => "Day",
            AxisKind::Month => "Month",
            AxisKind::Year => "Year",
        }
    }

    pub fn next(&self) -> AxisKind {
        match self {
            AxisKind::Day => AxisKind::Month,
            AxisKind::Month => AxisKind::Year,
            AxisKind::Year => AxisKind::Day,
        }
    }

    pub fn prev(&self) -> AxisKind {
        match self {
            AxisKind::Day => AxisKind::Year,
            AxisKind::Month => AxisKind::Day,
            AxisKind::Year => AxisKind::Month,
        }
    }
}

/// One notch of discrete scroll input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Towards slot 0 (wheel rolls down, earlier items come into view)
    Previous,
    /// Towards the last slot
    Next,
}

impl ScrollDirection {
    pub fn delta(&self) -> i64 {
        match self {
            ScrollDirection::Previous => -1,
            ScrollDirection::Next => 1,
        }
    }
}

/// Where a drag started, captured on gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragOrigin {
    offset: f64,
    pointer_y: f64,
}

/// Animation and drag state of one wheel.
#[derive(Debug, Clone)]
pub struct WheelAxis {
    items: Vec<String>,
    item_height: f64,
    /// Rendered offset
    current: f64,
    /// Offset the wheel is settling towards
    target: f64,
    /// Present while the pointer holds the wheel
    drag: Option<DragOrigin>,
}

impl WheelAxis {
    pub fn new(items: Vec<String>, item_height: f64) -> Self {
        Self {
            items,
            item_height,
            current: 0.0,
            target: 0.0,
            drag: None,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_settled(&self) -> bool {
        !self.is_dragging() && self.current == self.target
    }

    /// Resting offset of `slot`.
    pub fn canonical_offset(&self, slot: usize) -> f64 {
        -(slot as f64) * self.item_height
    }

    /// Nearest valid slot for an arbitrary offset.
    pub fn slot_for_offset(&self, offset: f64) -> usize {
        self.clamp_index((-offset / self.item_height).round() as i64)
    }

    /// Replace the item list. Offsets are left alone; callers retarget if the
    /// selected slot no longer exists.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    /// Jump straight to `slot` with no animation and drop any drag.
    pub fn seed(&mut self, slot: usize) {
        let slot = slot.min(self.last_index());
        self.target = self.canonical_offset(slot);
        self.current = self.target;
        self.drag = None;
    }

    /// Point the settle animation at `slot`.
    pub fn retarget(&mut self, slot: usize) {
        self.target = self.canonical_offset(slot.min(self.last_index()));
    }

    pub fn begin_drag(&mut self, pointer_y: f64) {
        self.drag = Some(DragOrigin {
            offset: self.current,
            pointer_y,
        });
    }

    /// Track the pointer. Returns `false` when no drag is in progress.
    pub fn drag_to(&mut self, pointer_y: f64, drag_ratio: f64) -> bool {
        let Some(origin) = self.drag else {
            return false;
        };
        self.current = origin.offset + (pointer_y - origin.pointer_y) * drag_ratio;
        self.target = self.current;
        true
    }

    /// Release the wheel and snap to the nearest slot.
    ///
    /// Returns the snapped slot, or `None` if the wheel was not being dragged.
    pub fn end_drag(&mut self) -> Option<usize> {
        self.drag.take()?;
        let slot = self.slot_for_offset(self.current);
        self.target = self.canonical_offset(slot);
        Some(slot)
    }

    /// Advance the settle animation by one frame.
    ///
    /// Moves `convergence` of the remaining distance; once closer than
    /// `settle_distance` the wheel lands exactly on its target. Returns `true`
    /// while still moving.
    pub fn tick(&mut self, convergence: f64, settle_distance: f64) -> bool {
        if self.is_dragging() {
            return false;
        }
        let remaining = self.target - self.current;
        if remaining == 0.0 {
            return false;
        }
        self.current += remaining * convergence;
        if (self.target - self.current).abs() < settle_distance {
            self.current = self.target;
        }
        self.current != self.target
    }
}

impl SlotList for WheelAxis {
    type Item = String;

    fn items(&self) -> &[String] {
        &self.items
    }

    /// The slot the wheel is settling on, not the one currently drawn.
    fn selected_index(&self) -> usize {
        self.slot_for_offset(self.target)
    }

    fn set_selected_index(&mut self, index: usize) {
        self.retarget(index);
    }
}
