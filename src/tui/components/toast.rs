//! Toast stack in the bottom-right corner.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::notification::ToastKind;
use crate::tui::theme::*;

const TOAST_WIDTH: u16 = 44;

fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Info => ACCENT_BLUE,
        ToastKind::Success => ACCENT_MINT,
        ToastKind::Error => ACCENT_CORAL,
    }
}

/// Render live toasts stacked upwards from the bottom-right of `area`,
/// newest at the bottom.
pub fn render_toasts(frame: &mut Frame, area: Rect, app: &App) {
    let width = TOAST_WIDTH.min(area.width);
    let mut bottom = area.bottom();

    for toast in app.toasts.iter().collect::<Vec<_>>().into_iter().rev() {
        if bottom < area.y + 3 {
            break;
        }
        let rect = Rect::new(area.right() - width, bottom - 3, width, 3);
        bottom -= 3;

        let color = kind_color(toast.kind);
        let max = width.saturating_sub(4) as usize;
        let message: String = toast.message.chars().take(max).collect();

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("● ", Style::new().fg(color)),
                Span::styled(message, Style::new().fg(TEXT_WHITE)),
            ]))
            .block(Block::bordered().border_style(Style::new().fg(color))),
            rect,
        );
    }
}
