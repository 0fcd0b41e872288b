//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::state::AppState;

/// Process a key event.
///
/// The arrow keys deliberately mutate the bound value *externally* (they
/// never touch the widget), so they exercise the programmatic-scroll path:
/// the widget notices the changed value on the next frame and chases it.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let config = *state.slider.config();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Left => state.value = (state.value - config.step()).max(config.lower()),
        KeyCode::Right => state.value = (state.value + config.step()).min(config.upper()),
        KeyCode::Home => state.value = config.lower(),
        KeyCode::End => state.value = config.upper(),
        _ => {}
    }
}

/// Process a mouse event: grab/drag/release on the slider surface, plus
/// wheel nudges.  Release runs the snap-and-settle path, which writes the
/// derived value back into `state.value`.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let inside = point_in_rect(state.slider_area, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => {
            state.dragging = true;
            state.slider.grab(mouse.column);
        }
        MouseEventKind::Drag(MouseButton::Left) if state.dragging => {
            state.slider.drag_to(mouse.column);
        }
        MouseEventKind::Up(MouseButton::Left) if state.dragging => {
            state.dragging = false;
            if state.slider.release(&mut state.value) {
                tracing::debug!(value = state.value, "settle wrote value back");
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollRight if inside => {
            state.slider.nudge(1, &mut state.value);
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollLeft if inside => {
            state.slider.nudge(-1, &mut state.value);
        }
        _ => {}
    }
}

fn point_in_rect(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.left() && column < rect.right() && row >= rect.top() && row < rect.bottom()
}
