use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::render::{RESTART_BUTTON, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start or jump.
    Activate,
    /// The game-over panel's restart button.
    Restart,
    Quit,
    Resize(u16, u16),
}

/// Map a terminal event to a game action. Any key or mouse press activates,
/// except the quit keys and, on the game-over panel, `r` or a click on
/// RESTART.
pub fn map_event(event: &Event, vp: &Viewport, game_over: bool) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key, game_over),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => {
                let (x, y) = vp.cell_to_logical(mouse.column, mouse.row);
                if game_over && RESTART_BUTTON.contains(x, y) {
                    Some(Action::Restart)
                } else {
                    Some(Action::Activate)
                }
            }
            _ => None,
        },
        Event::Resize(c, r) => Some(Action::Resize(*c, *r)),
        _ => None,
    }
}

fn map_key(key: &KeyEvent, game_over: bool) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('r') if game_over => Some(Action::Restart),
        _ => Some(Action::Activate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEvent};

    fn vp() -> Viewport {
        Viewport::fit(480, 640)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn any_key_activates() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter, KeyCode::Char('x')] {
            assert_eq!(map_event(&key(code), &vp(), false), Some(Action::Activate));
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_event(&key(KeyCode::Char('q')), &vp(), false), Some(Action::Quit));
        assert_eq!(map_event(&key(KeyCode::Esc), &vp(), true), Some(Action::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c, &vp(), false), Some(Action::Quit));
    }

    #[test]
    fn r_restarts_only_on_game_over() {
        assert_eq!(map_event(&key(KeyCode::Char('r')), &vp(), true), Some(Action::Restart));
        assert_eq!(map_event(&key(KeyCode::Char('r')), &vp(), false), Some(Action::Activate));
    }

    #[test]
    fn click_on_restart_button() {
        // 1:1 viewport: cell (200, 195) is logical (200.5, 391)
        assert_eq!(map_event(&click(200, 195), &vp(), true), Some(Action::Restart));
        assert_eq!(map_event(&click(200, 195), &vp(), false), Some(Action::Activate));
        assert_eq!(map_event(&click(10, 10), &vp(), true), Some(Action::Activate));
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(release), &vp(), false), None);
    }

    #[test]
    fn resize_passes_through() {
        assert_eq!(map_event(&Event::Resize(80, 24), &vp(), false), Some(Action::Resize(80, 24)));
    }
}
