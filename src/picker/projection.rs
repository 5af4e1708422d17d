//! Wheel geometry.
//!
//! Turns an axis offset into per-item visual descriptors. Items tilt away
//! from the viewer, shrink and fade with distance from the center slot, which
//! is what makes the flat list read as a drum. Nothing here knows how the
//! descriptors get drawn.

use std::ops::Range;

use super::axis::WheelAxis;
use super::traits::SlotList;

/// Maximum tilt, reached two items away from center.
const MAX_ROTATION_DEG: f64 = 45.0;
const MIN_SCALE: f64 = 0.7;
const MIN_OPACITY: f64 = 0.3;
/// Depth pop applied to the selected item.
const SELECTED_DEPTH: f64 = 20.0;

/// How one item should be drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemVisual {
    /// Slot index of the item
    #[allow(dead_code)]
    pub index: usize,
    pub label: String,
    /// Vertical position of the item's top edge within the wheel viewport
    pub y: f64,
    /// Signed distance from the center slot, in pixels
    pub distance: f64,
    pub rotate_x_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub translate_z: f64,
    pub selected: bool,
}

/// Viewport geometry shared by all three wheels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub item_height: f64,
    pub visible_items: usize,
}

impl WheelGeometry {
    pub fn new(item_height: f64, visible_items: usize) -> Self {
        Self {
            item_height,
            visible_items,
        }
    }

    /// Offset of the center slot from the top of the viewport.
    pub fn center_offset(&self) -> f64 {
        (self.visible_items / 2) as f64 * self.item_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.visible_items as f64 * self.item_height
    }

    /// Project a single item at `index` for a wheel scrolled to `offset`.
    pub fn project_item(&self, index: usize, label: &str, offset: f64) -> ItemVisual {
        let h = self.item_height;
        let center = self.center_offset();
        let y = index as f64 * h + offset + center;
        let distance = y - center;
        let max_distance = h * 2.0;
        let ratio = distance.abs() / max_distance;
        let selected = distance.abs() < h / 2.0;

        ItemVisual {
            index,
            label: label.to_string(),
            y,
            distance,
            rotate_x_deg: (distance / max_distance) * MAX_ROTATION_DEG,
            scale: (1.0 - ratio * 0.3).max(MIN_SCALE),
            opacity: (1.0 - ratio * 0.7).max(MIN_OPACITY),
            translate_z: if selected { SELECTED_DEPTH } else { 0.0 },
            selected,
        }
    }

    /// Slots of `axis` that can touch the viewport at its current offset:
    /// the slot under the center line and `visible_items / 2 + 1` either side.
    pub fn slot_window(&self, axis: &WheelAxis) -> Range<usize> {
        let reach = self.visible_items / 2 + 1;
        let center = axis.slot_for_offset(axis.current());
        let start = center.saturating_sub(reach);
        let end = (center + reach + 1).min(axis.len());
        start..end.max(start)
    }

    /// Project the items of `axis` near the viewport at its current offset.
    pub fn project_axis(&self, axis: &WheelAxis) -> Vec<ItemVisual> {
        let items = axis.items();
        self.slot_window(axis)
            .map(|i| self.project_item(i, &items[i], axis.current()))
            .collect()
    }

    /// True if any part of the item falls inside the viewport.
    pub fn is_visible(&self, item: &ItemVisual) -> bool {
        item.y + self.item_height > 0.0 && item.y < self.viewport_height()
    }
}
