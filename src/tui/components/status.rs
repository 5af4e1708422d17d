//! Title line, last confirmed date and hotkey bar.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the page behind the picker: what was picked last and how to pick.
pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "wheeldate",
        Style::new().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
    )]));
    lines.push(Line::raw(""));

    match &app.last_confirmed {
        Some(event) => {
            lines.push(Line::from(vec![
                Span::styled("Selected  ", Style::new().fg(TEXT_DIM)),
                Span::styled(
                    event.formatted.clone(),
                    Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("ISO       ", Style::new().fg(TEXT_DIM)),
                Span::styled(event.date.to_string(), Style::new().fg(TEXT_DIM)),
            ]));
        }
        None => {
            lines.push(Line::styled(
                "No date selected yet",
                Style::new().fg(TEXT_DIM).add_modifier(Modifier::ITALIC),
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the hotkey bar for the current picker state.
pub fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let hotkeys: &[(&str, &str)] = if app.picker.is_open() {
        &[
            ("←/→", "wheel"),
            ("↑/↓", "step"),
            ("drag", "spin"),
            ("enter", "confirm"),
            ("esc", "cancel"),
        ]
    } else {
        &[("o", "pick a date"), ("q", "quit")]
    };

    let mut spans = vec![];
    for (i, (key, desc)) in hotkeys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(format!(" {}", desc), Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
