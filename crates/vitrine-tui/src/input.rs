use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for the second
    NextSection,
    PrevSection,
    ToggleMenu,
    MenuDown,
    MenuUp,
    MenuSelect,
    MenuJump(usize),
    FaqDown,
    FaqUp,
    FaqToggle,
    RotateNow,
    OpenLink,
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match app.mode {
        Mode::Help => {
            // Any key exits help
            return Action::ExitMode;
        }
        Mode::Menu => return handle_menu_mode(key),
        Mode::Normal => {}
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::HalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::HalfPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires a double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Section anchors
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::BackTab, _) => Action::PrevSection,

        // Nav menu
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,

        // FAQ accordion
        (KeyCode::Char('J'), KeyModifiers::SHIFT) => Action::FaqDown,
        (KeyCode::Char('K'), KeyModifiers::SHIFT) => Action::FaqUp,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::FaqToggle,

        // Carousel + links
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::RotateNow,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenLink,

        (KeyCode::Char('?'), _) => Action::Help,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

/// Key handling while the nav menu overlay is open
fn handle_menu_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
            Action::MenuDown
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => {
            Action::MenuUp
        }
        (KeyCode::Enter, KeyModifiers::NONE) => Action::MenuSelect,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ExitMode,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() && c != '0' => {
            Action::MenuJump(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use std::sync::Arc;
    use vitrine_core::{AppConfig, Page};

    fn app() -> App {
        App::new(
            Page::sample(),
            Arc::new(AppConfig::default()),
            Theme::default(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_scroll_keys() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::ScrollDown);
        assert_eq!(handle_key_event(key(KeyCode::Up), &app), Action::ScrollUp);
    }

    #[test]
    fn test_gg_requires_double_press() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::JumpToTop);
    }

    #[test]
    fn test_menu_mode_captures_keys() {
        let mut app = app();
        app.toggle_menu();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::MenuDown);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::MenuSelect);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::ExitMode);
        assert_eq!(handle_key_event(key(KeyCode::Char('3')), &app), Action::MenuJump(2));
    }

    #[test]
    fn test_any_key_leaves_help() {
        let mut app = app();
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::ExitMode);
    }

    #[test]
    fn test_faq_keys_shifted() {
        let app = app();
        let shifted = KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(shifted, &app), Action::FaqDown);
    }
}
