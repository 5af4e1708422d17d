//! Mouse event handling.
//!
//! Presses and scrolls are dispatched through the interaction registry,
//! which the picker view fills during each render. Drags and releases go
//! straight to whichever wheel is held, wherever the pointer is.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => match app.interactions.handle_click(x, y) {
            // Regions register the wheel; the pointer position is only known here
            Action::GestureStart { axis, .. } => Action::GestureStart {
                axis,
                y: app.pointer_y(y),
            },
            action => action,
        },
        MouseEventKind::Drag(MouseButton::Left) if app.active_drag.is_some() => {
            Action::PointerMove { y: app.pointer_y(y) }
        }
        MouseEventKind::Up(MouseButton::Left) if app.active_drag.is_some() => Action::PointerUp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ClickRegion;
    use crate::app::tests::test_app;
    use crate::picker::AxisKind;
    use crate::tui::interaction::InteractiveRegion;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_press_on_wheel_starts_gesture() {
        let mut app = test_app();
        app.interactions.register(InteractiveRegion::wheel(
            AxisKind::Month,
            ClickRegion::new(10, 5, 12, 5),
        ));

        let action = handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 12, 7));
        assert_eq!(
            action,
            Action::GestureStart {
                axis: AxisKind::Month,
                y: 7.0 * 50.0
            }
        );
    }

    #[test]
    fn test_scroll_routes_to_region() {
        let mut app = test_app();
        app.interactions.register(InteractiveRegion::wheel(
            AxisKind::Year,
            ClickRegion::new(0, 0, 10, 10),
        ));

        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollDown, 2, 2)),
            Action::ScrollAxis {
                axis: AxisKind::Year,
                delta: 1
            }
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollUp, 20, 20)),
            Action::None
        );
    }

    #[test]
    fn test_drag_only_while_held() {
        let mut app = test_app();
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 0, 3);
        assert_eq!(handle_mouse_event(&app, drag), Action::None);

        app.active_drag = Some(AxisKind::Day);
        assert_eq!(handle_mouse_event(&app, drag), Action::PointerMove { y: 150.0 });
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Up(MouseButton::Left), 0, 3)),
            Action::PointerUp
        );
    }
}
