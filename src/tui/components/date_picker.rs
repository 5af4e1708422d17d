//! Date picker card.
//!
//! Draws the three wheels from the picker's frame descriptors and registers
//! the mouse regions that feed gestures back into it. One terminal row holds
//! one item, so a descriptor's `y` maps to `y / item_height` rows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use super::centered;
use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::picker::{AxisKind, ItemVisual, WheelGeometry};
use crate::tui::interaction::{InteractiveRegion, PICKER_PRIORITY};
use crate::tui::theme::*;

const DAY_WIDTH: u16 = 6;
const MONTH_WIDTH: u16 = 12;
const YEAR_WIDTH: u16 = 8;
const GAP: u16 = 2;
const CARD_WIDTH: u16 = 36;
/// Rows around the wheels: borders, labels, separator, buttons
const CARD_CHROME: u16 = 5;

fn column_width(kind: AxisKind) -> u16 {
    match kind {
        AxisKind::Day => DAY_WIDTH,
        AxisKind::Month => MONTH_WIDTH,
        AxisKind::Year => YEAR_WIDTH,
    }
}

fn wheel_columns(area: Rect) -> Vec<Rect> {
    let mut constraints = vec![];
    for (i, kind) in AxisKind::ALL.iter().enumerate() {
        if i > 0 {
            constraints.push(Constraint::Length(GAP));
        }
        constraints.push(Constraint::Length(column_width(*kind)));
    }
    let split = Layout::horizontal(constraints).flex(Flex::Center).split(area);
    // Drop the gaps
    split.iter().step_by(2).copied().collect()
}

/// Render the picker card over `area` and register its mouse regions.
pub fn render_date_picker(frame: &mut Frame, area: Rect, app: &mut App) {
    let geometry = app.picker.geometry();
    let visible = geometry.visible_items as u16;
    let card = centered(area, CARD_WIDTH, visible + CARD_CHROME);

    // Pressing anywhere outside the card dismisses it
    app.interactions
        .register_click("backdrop", area.into(), Action::ClosePicker);
    app.interactions.register(InteractiveRegion::blocker(
        "card",
        card.into(),
        PICKER_PRIORITY - 1,
    ));

    frame.render_widget(Clear, card);
    let block = Block::bordered()
        .title(Line::styled(
            " Select Date ",
            Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::new().fg(ACCENT_BLUE));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let close = Rect::new(card.right().saturating_sub(4), card.y, 3, 1).intersection(card);
    frame.render_widget(
        Paragraph::new(Line::styled(" ✕ ", Style::new().fg(ACCENT_CORAL))),
        close,
    );
    app.interactions.register(
        InteractiveRegion::clickable("close", close.into(), Action::ClosePicker)
            .with_priority(PICKER_PRIORITY),
    );

    let rows = Layout::vertical([
        Constraint::Length(1),       // Labels
        Constraint::Length(visible), // Wheels
        Constraint::Length(1),       // Separator
        Constraint::Length(1),       // Buttons
    ])
    .split(inner);

    let label_cols = wheel_columns(rows[0]);
    let wheel_cols = wheel_columns(rows[1]);
    let picker_frame = app.picker.frame();

    for (i, kind) in AxisKind::ALL.iter().enumerate() {
        let (Some(label_area), Some(wheel_area)) = (label_cols.get(i), wheel_cols.get(i)) else {
            continue;
        };
        render_label(frame, *label_area, *kind, app.focused == *kind);
        render_wheel(frame, *wheel_area, picker_frame.axis(*kind), &geometry);
        app.interactions
            .register(InteractiveRegion::wheel(*kind, (*wheel_area).into()));
    }

    frame.render_widget(
        Paragraph::new(Line::styled(
            "─".repeat(rows[2].width as usize),
            Style::new().fg(TEXT_DIM),
        )),
        rows[2],
    );

    render_buttons(frame, rows[3], app);
}

fn render_label(frame: &mut Frame, area: Rect, kind: AxisKind, focused: bool) {
    let style = if focused {
        Style::new().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(TEXT_DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::styled(kind.label(), style)).alignment(Alignment::Center),
        area,
    );
}

/// Style for one item: brightness follows opacity, fully tilted items dim
/// further and the raised item is bold.
fn item_style(item: &ItemVisual) -> Style {
    let mut style = if item.selected {
        Style::new().fg(ACCENT_GOLD)
    } else {
        Style::new().fg(faded(item.opacity))
    };
    if item.translate_z > 0.0 {
        style = style.add_modifier(Modifier::BOLD);
    }
    if item.rotate_x_deg.abs() >= 45.0 || item.scale <= 0.7 {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

/// Terminal row an item lands on, if it lands inside a wheel of `height` rows.
pub(crate) fn item_row(item: &ItemVisual, geometry: &WheelGeometry, height: u16) -> Option<u16> {
    let row = (item.y / geometry.item_height).round();
    if row < 0.0 || row >= height as f64 {
        None
    } else {
        Some(row as u16)
    }
}

fn render_wheel(frame: &mut Frame, area: Rect, items: &[ItemVisual], geometry: &WheelGeometry) {
    let center = (geometry.visible_items / 2) as u16;
    if center < area.height {
        let band = Rect::new(area.x, area.y + center, area.width, 1);
        frame.render_widget(Block::new().style(Style::new().bg(HIGHLIGHT_BG)), band);
    }

    // Mid-animation two items can round onto one row; the nearer one wins
    let mut rows: Vec<Option<&ItemVisual>> = vec![None; area.height as usize];
    for item in items.iter().filter(|v| geometry.is_visible(v)) {
        let Some(row) = item_row(item, geometry, area.height) else {
            continue;
        };
        let slot = &mut rows[row as usize];
        if slot.is_none_or(|other| item.distance.abs() < other.distance.abs()) {
            *slot = Some(item);
        }
    }

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|item| match item {
            Some(item) => {
                let label: String = item.label.chars().take(area.width as usize).collect();
                Line::from(Span::styled(label, item_style(item)))
            }
            None => Line::raw(""),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_buttons(frame: &mut Frame, area: Rect, app: &mut App) {
    let cols = Layout::horizontal([
        Constraint::Length(10),
        Constraint::Length(2),
        Constraint::Length(11),
    ])
    .flex(Flex::Center)
    .split(area);

    let cancel = cols[0];
    let confirm = cols[2];

    frame.render_widget(
        Paragraph::new(Line::styled("[ Cancel ]", Style::new().fg(TEXT_DIM))),
        cancel,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            "[ Confirm ]",
            Style::new().fg(ACCENT_MINT).add_modifier(Modifier::BOLD),
        )),
        confirm,
    );

    app.interactions.register(
        InteractiveRegion::clickable("cancel", ClickRegion::from(cancel), Action::ClosePicker)
            .with_priority(PICKER_PRIORITY),
    );
    app.interactions.register(
        InteractiveRegion::clickable("confirm", ClickRegion::from(confirm), Action::ConfirmPicker)
            .with_priority(PICKER_PRIORITY),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_date_picker(frame, area, app);
            })
            .unwrap();
        terminal
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_item_row() {
        let geometry = WheelGeometry::new(50.0, 5);
        let center = geometry.project_item(3, "x", -150.0);
        assert_eq!(item_row(&center, &geometry, 5), Some(2));
        let above = geometry.project_item(0, "x", 0.0);
        assert_eq!(item_row(&above, &geometry, 5), Some(2));
        let gone = geometry.project_item(0, "x", -200.0);
        assert_eq!(item_row(&gone, &geometry, 5), None);
    }

    #[test]
    fn test_item_style_follows_descriptor() {
        let geometry = WheelGeometry::new(50.0, 5);
        let center = item_style(&geometry.project_item(3, "x", -150.0));
        assert_eq!(center.fg, Some(ACCENT_GOLD));
        assert!(center.add_modifier.contains(Modifier::BOLD));

        let far = item_style(&geometry.project_item(0, "x", -200.0));
        assert!(far.add_modifier.contains(Modifier::DIM));
        assert!(!far.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_card_shows_selection() {
        let mut app = test_app();
        app.picker.open();
        let terminal = draw(&mut app);
        let text = screen(&terminal);

        assert!(text.contains("Select Date"));
        assert!(text.contains("February"));
        assert!(text.contains("2024"));
        assert!(text.contains("Confirm"));
    }

    #[test]
    fn test_regions_route_to_wheels_and_buttons() {
        let mut app = test_app();
        app.picker.open();
        draw(&mut app);

        // Corner of the screen is backdrop
        assert_eq!(app.interactions.handle_click(0, 0), Action::ClosePicker);

        // Card is 36x10 centered in 60x20: x 12..48, y 5..15. Wheels sit on
        // rows 7..12; the middle column is Month.
        assert!(matches!(
            app.interactions.handle_click(30, 9),
            Action::GestureStart {
                axis: AxisKind::Month,
                ..
            }
        ));
        assert_eq!(
            app.interactions.handle_scroll_down(30, 9),
            Action::ScrollAxis {
                axis: AxisKind::Month,
                delta: 1
            }
        );
    }
}
