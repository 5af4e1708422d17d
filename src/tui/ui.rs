use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;
use super::components::{render_date_picker, render_hotkeys, render_status, render_toasts};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Regions are rebuilt from scratch on every frame
    app.interactions.clear();

    // Main vertical layout: status, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Min(0),    // Status / picker
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_status(frame, main_layout[0], app);

    if app.picker.is_open() {
        render_date_picker(frame, main_layout[0], app);
    }

    render_hotkeys(frame, main_layout[1], app);
    render_toasts(frame, main_layout[0], app);
}
