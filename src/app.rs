//! Host application state.
//!
//! Owns the picker and everything around it that a page would otherwise
//! provide: input wiring, the toast area and a listener on the date bus.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use ratatui::layout::Rect;
use tokio::sync::{broadcast, mpsc};

use crate::config::Config;
use crate::events::{Action, DateBus, DateSelected};
use crate::log;
use crate::notification::{DesktopNotifier, Notifier, Toast, ToastQueue};
use crate::picker::{AxisKind, WheelPicker};
use crate::scroll::ScrollHelper;
use crate::tui::interaction::InteractionRegistry;

/// Toasts kept on screen at once.
const MAX_TOASTS: usize = 4;

/// A rectangular screen area in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

pub struct App {
    pub config: Config,
    pub picker: WheelPicker,
    /// Mouse regions, rebuilt on every render
    pub interactions: InteractionRegistry,
    pub toasts: ToastQueue,
    /// Wheel focused for keyboard stepping
    pub focused: AxisKind,
    /// Wheel currently held by the mouse
    pub active_drag: Option<AxisKind>,
    /// Most recent confirmation seen on the bus
    pub last_confirmed: Option<DateSelected>,
    pub should_quit: bool,
    scroll: ScrollHelper,
    toast_rx: mpsc::UnboundedReceiver<Toast>,
    date_rx: broadcast::Receiver<DateSelected>,
}

impl App {
    pub fn new(today: NaiveDate, config: Config) -> Self {
        let (toast_tx, toast_rx) = mpsc::unbounded_channel();
        let notifier: Box<dyn Notifier> = if config.notifications.desktop {
            Box::new(vec![
                Box::new(toast_tx) as Box<dyn Notifier>,
                Box::new(DesktopNotifier::new(config.notifications.clone())) as Box<dyn Notifier>,
            ])
        } else {
            Box::new(toast_tx)
        };

        let bus = DateBus::default();
        let date_rx = bus.subscribe();
        let picker = WheelPicker::new(today, config.picker)
            .with_bus(bus)
            .with_notifier(notifier);

        Self {
            toasts: ToastQueue::new(
                Duration::from_millis(config.notifications.toast_ttl_ms),
                MAX_TOASTS,
            ),
            scroll: ScrollHelper::new(
                config.input.scroll_debounce_ms,
                config.input.scroll_threshold,
            ),
            config,
            picker,
            interactions: InteractionRegistry::new(),
            focused: AxisKind::Day,
            active_drag: None,
            last_confirmed: None,
            should_quit: false,
            toast_rx,
            date_rx,
        }
    }

    /// Convert a terminal row into wheel pixels. One row shows one item.
    pub fn pointer_y(&self, row: u16) -> f64 {
        row as f64 * self.picker.geometry().item_height
    }

    /// Apply an action to the picker and host state.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::OpenPicker => {
                self.active_drag = None;
                self.scroll.reset();
                self.picker.open();
            }
            Action::ClosePicker => {
                self.active_drag = None;
                self.picker.close();
            }
            Action::ConfirmPicker => {
                self.active_drag = None;
                self.picker.confirm();
            }
            Action::FocusNext => self.focused = self.focused.next(),
            Action::FocusPrev => self.focused = self.focused.prev(),
            Action::FocusAxis(axis) => self.focused = axis,
            Action::GestureStart { axis, y } => {
                if let Some(previous) = self.active_drag.take() {
                    self.picker.gesture_end(previous);
                }
                self.focused = axis;
                self.active_drag = Some(axis);
                self.picker.gesture_start(axis, y);
            }
            Action::PointerMove { y } => {
                if let Some(axis) = self.active_drag {
                    self.picker.gesture_move(axis, y);
                }
            }
            Action::PointerUp => {
                if let Some(axis) = self.active_drag.take() {
                    self.picker.gesture_end(axis);
                }
            }
            Action::ScrollAxis { axis, delta } => {
                for direction in self.scroll.notches(delta) {
                    self.picker.discrete_scroll(axis, direction);
                }
            }
            Action::StepFocused(direction) => {
                self.picker.discrete_scroll(self.focused, direction);
            }
        }
    }

    /// One tick of the render clock: animate wheels, collect toasts and
    /// confirmations, expire old toasts.
    pub fn on_frame(&mut self, now: Instant) {
        self.picker.tick();

        while let Ok(toast) = self.toast_rx.try_recv() {
            self.toasts.push(toast);
        }
        self.toasts.prune(now);

        loop {
            match self.date_rx.try_recv() {
                Ok(event) => {
                    log::log_event(&format!("host received {}", event.formatted));
                    self.last_confirmed = Some(event);
                }
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    log::log(&format!("date listener skipped {} events", skipped));
                }
                Err(_) => break,
            }
        }
    }
}
