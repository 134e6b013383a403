//! Key mapping from terminal events to viewer actions.

use crate::types::ViewerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewerAction> {
    match key.code {
        // Zoom
        KeyCode::Char('+') | KeyCode::Char('=') => Some(ViewerAction::ZoomIn),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(ViewerAction::ZoomOut),
        KeyCode::Char('0') => Some(ViewerAction::ResetView),

        // Pan
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(ViewerAction::PanLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(ViewerAction::PanRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(ViewerAction::PanUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(ViewerAction::PanDown),

        // Map selection
        KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => Some(ViewerAction::NextMap),
        KeyCode::BackTab | KeyCode::Char('p') | KeyCode::Char('P') => Some(ViewerAction::PrevMap),
        KeyCode::Char(c @ '1'..='9') => Some(ViewerAction::SelectMap(c as u8 - b'1')),

        // Files and overlays
        KeyCode::Char('o') | KeyCode::Char('O') => Some(ViewerAction::OpenFile),
        KeyCode::Char('?') | KeyCode::F(1) => Some(ViewerAction::ToggleHelp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(ViewerAction::Dismiss),

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_zoom_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(ViewerAction::ZoomIn)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('='))),
            Some(ViewerAction::ZoomIn)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(ViewerAction::ZoomOut)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('0'))),
            Some(ViewerAction::ResetView)
        );
    }

    #[test]
    fn test_pan_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(ViewerAction::PanLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(ViewerAction::PanRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(ViewerAction::PanUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(ViewerAction::PanDown)
        );
    }

    #[test]
    fn test_map_selection_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(ViewerAction::NextMap)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::BackTab)),
            Some(ViewerAction::PrevMap)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(ViewerAction::SelectMap(0))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(ViewerAction::SelectMap(8))
        );
    }

    #[test]
    fn test_overlay_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('o'))),
            Some(ViewerAction::OpenFile)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('?'))),
            Some(ViewerAction::ToggleHelp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(ViewerAction::Dismiss)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
