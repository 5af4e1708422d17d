//! The three-wheel date picker.

use chrono::{Datelike, NaiveDate};

use super::axis::{AxisKind, ScrollDirection, WheelAxis};
use super::calendar::{self, YearWindow};
use super::projection::{ItemVisual, WheelGeometry};
use super::traits::SlotList;
use crate::config::PickerConfig;
use crate::events::bus::{DateBus, DateSelected};
use crate::log;
use crate::notification::{Notifier, ToastKind};

/// The date the wheels currently point at.
///
/// `day` never exceeds the length of `month` in `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedDate {
    pub year: i32,
    /// 1-based
    pub month: u32,
    /// 1-based
    pub day: u32,
}

impl SelectedDate {
    pub fn days_in_month(&self) -> u32 {
        calendar::days_in_month(self.year, self.month)
    }

    pub fn to_naive_date(&self) -> NaiveDate {
        // day is kept within the month, so this always resolves
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }

    /// Clamp `day` into the month. Returns `true` if it moved.
    fn clamp_day(&mut self) -> bool {
        let max = self.days_in_month();
        if self.day > max {
            self.day = max;
            true
        } else {
            false
        }
    }
}

impl From<NaiveDate> for SelectedDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Per-frame output: visual descriptors for each wheel.
#[derive(Debug, Clone)]
pub struct PickerFrame {
    pub day: Vec<ItemVisual>,
    pub month: Vec<ItemVisual>,
    pub year: Vec<ItemVisual>,
}

impl PickerFrame {
    pub fn axis(&self, kind: AxisKind) -> &[ItemVisual] {
        match kind {
            AxisKind::Day => &self.day,
            AxisKind::Month => &self.month,
            AxisKind::Year => &self.year,
        }
    }
}

fn day_labels(count: u32) -> Vec<String> {
    (1..=count).map(|d| d.to_string()).collect()
}

/// Interactive day/month/year selector.
///
/// Input arrives through the gesture operations; the host calls [`tick`]
/// once per frame and draws [`frame`]. While closed, input and confirm are
/// ignored.
///
/// [`tick`]: WheelPicker::tick
/// [`frame`]: WheelPicker::frame
pub struct WheelPicker {
    config: PickerConfig,
    geometry: WheelGeometry,
    years: YearWindow,
    selected: SelectedDate,
    day: WheelAxis,
    month: WheelAxis,
    year: WheelAxis,
    open: bool,
    bus: DateBus,
    notifier: Option<Box<dyn Notifier>>,
}

impl WheelPicker {
    /// Build a closed picker defaulting to `today`.
    ///
    /// The year wheel spans `today`'s year ± `year_span`.
    pub fn new(today: NaiveDate, config: PickerConfig) -> Self {
        let config = config.sanitized();
        let years = YearWindow::new(today.year(), config.year_span);
        let mut selected = SelectedDate::from(today);
        selected.year = years.clamp(selected.year);
        selected.clamp_day();

        let h = config.item_height;
        let month_labels = calendar::MONTH_NAMES.iter().map(|m| m.to_string()).collect();
        let year_labels = years.years().iter().map(|y| y.to_string()).collect();

        let mut picker = Self {
            config,
            geometry: WheelGeometry::new(h, config.visible_items),
            years,
            selected,
            day: WheelAxis::new(day_labels(selected.days_in_month()), h),
            month: WheelAxis::new(month_labels, h),
            year: WheelAxis::new(year_labels, h),
            open: false,
            bus: DateBus::default(),
            notifier: None,
        };
        picker.scroll_to_selected();
        picker
    }

    /// Publish confirmations on `bus` instead of a private one.
    pub fn with_bus(mut self, bus: DateBus) -> Self {
        self.bus = bus;
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> SelectedDate {
        self.selected
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected.to_naive_date()
    }

    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    pub fn axis(&self, kind: AxisKind) -> &WheelAxis {
        match kind {
            AxisKind::Day => &self.day,
            AxisKind::Month => &self.month,
            AxisKind::Year => &self.year,
        }
    }

    fn axis_mut(&mut self, kind: AxisKind) -> &mut WheelAxis {
        match kind {
            AxisKind::Day => &mut self.day,
            AxisKind::Month => &mut self.month,
            AxisKind::Year => &mut self.year,
        }
    }

    /// True once every wheel has landed on its slot.
    pub fn is_settled(&self) -> bool {
        AxisKind::ALL.iter().all(|k| self.axis(*k).is_settled())
    }

    /// Show the picker with every wheel resting on the current selection.
    pub fn open(&mut self) {
        self.open = true;
        self.scroll_to_selected();
        log::log_event(&format!("picker open at {}", self.selected_date()));
    }

    /// Hide the picker. The selection is kept.
    pub fn close(&mut self) {
        if self.open {
            log::log_event("picker closed");
        }
        self.open = false;
    }

    pub fn gesture_start(&mut self, kind: AxisKind, pointer_y: f64) {
        if !self.open {
            return;
        }
        self.axis_mut(kind).begin_drag(pointer_y);
    }

    pub fn gesture_move(&mut self, kind: AxisKind, pointer_y: f64) {
        if !self.open {
            return;
        }
        let ratio = self.config.drag_ratio;
        self.axis_mut(kind).drag_to(pointer_y, ratio);
    }

    /// Release a wheel: snap to the nearest slot and select it.
    ///
    /// Does nothing unless the wheel was being dragged.
    pub fn gesture_end(&mut self, kind: AxisKind) {
        if !self.open {
            return;
        }
        if let Some(slot) = self.axis_mut(kind).end_drag() {
            log::log_event(&format!(
                "{} snapped to slot {} (offset {})",
                kind.label(),
                slot,
                self.axis(kind).target()
            ));
            self.apply_slot(kind, slot);
        }
    }

    /// Move one item in `direction`. The selection changes now; the wheel
    /// catches up over the following frames.
    pub fn discrete_scroll(&mut self, kind: AxisKind, direction: ScrollDirection) {
        if !self.open {
            return;
        }
        let slot = self.axis_mut(kind).step(direction);
        self.apply_slot(kind, slot);
    }

    /// Emit the selection on the bus, notify, and close.
    ///
    /// Returns `false` if the picker was not open.
    pub fn confirm(&mut self) -> bool {
        if !self.open {
            return false;
        }
        let event = DateSelected::new(self.selected_date());
        let message = format!("Date selected: {}", event.formatted);
        let receivers = self.bus.publish(event);
        log::log_event(&format!("{} ({} listeners)", message, receivers));

        if let Some(notifier) = self.notifier.as_mut() {
            notifier.show(&message, ToastKind::Success);
        }
        self.close();
        true
    }

    /// Advance every released wheel one frame towards its target.
    ///
    /// Returns `true` while any wheel is still moving.
    pub fn tick(&mut self) -> bool {
        let convergence = self.config.convergence;
        let settle = self.config.settle_distance;
        let mut moving = false;
        for kind in AxisKind::ALL {
            moving |= self.axis_mut(kind).tick(convergence, settle);
        }
        moving
    }

    /// Visual descriptors for all three wheels at their current offsets.
    pub fn frame(&self) -> PickerFrame {
        PickerFrame {
            day: self.geometry.project_axis(&self.day),
            month: self.geometry.project_axis(&self.month),
            year: self.geometry.project_axis(&self.year),
        }
    }

    fn slot_of_selection(&self, kind: AxisKind) -> usize {
        match kind {
            AxisKind::Day => self.selected.day.saturating_sub(1) as usize,
            AxisKind::Month => self.selected.month.saturating_sub(1) as usize,
            AxisKind::Year => self.years.slot_of(self.selected.year),
        }
    }

    fn scroll_to_selected(&mut self) {
        for kind in AxisKind::ALL {
            let slot = self.slot_of_selection(kind);
            self.axis_mut(kind).seed(slot);
        }
    }

    fn apply_slot(&mut self, kind: AxisKind, slot: usize) {
        match kind {
            AxisKind::Day => {
                self.selected.day = slot as u32 + 1;
            }
            AxisKind::Month => {
                self.selected.month = slot as u32 + 1;
                self.sync_day_axis();
            }
            AxisKind::Year => {
                self.selected.year = self.years.year_at(slot);
                self.sync_day_axis();
            }
        }
    }

    /// Rebuild the day wheel for the selected month and pull the day back
    /// inside it.
    fn sync_day_axis(&mut self) {
        let days = self.selected.days_in_month();
        if self.day.len() != days as usize {
            self.day.set_items(day_labels(days));
        }
        if self.selected.clamp_day() {
            log::log_event(&format!("day clamped to {}", self.selected.day));
            let slot = self.slot_of_selection(AxisKind::Day);
            self.day.retarget(slot);
        }
    }
}
