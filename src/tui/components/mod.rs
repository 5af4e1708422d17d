//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `date_picker` - The wheel picker card, drawn from picker frame descriptors
//! - `status` - Title line, last confirmed date and hotkey bar
//! - `toast` - Transient messages in the bottom-right corner

mod date_picker;
mod status;
mod toast;

pub use date_picker::render_date_picker;
pub use status::{render_hotkeys, render_status};
pub use toast::render_toasts;

use ratatui::layout::Rect;

/// Center a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
