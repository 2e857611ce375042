//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to table actions.
///
/// Keys typed while the search input is focused never reach these bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Shifted characters match whether or not the terminal reports SHIFT.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let mut modifiers = key.modifiers;
        if let KeyCode::Char(_) = key.code {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        self.bindings
            .get(&KeyEvent::new(key.code, modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = KeyBindings {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Search
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        keys.bind(KeyCode::Esc, none, KeyAction::ClearSearch);

        // Header cursor and sorting
        keys.bind(KeyCode::Char('h'), none, KeyAction::PrevColumn);
        keys.bind(KeyCode::Left, none, KeyAction::PrevColumn);
        keys.bind(KeyCode::Char('l'), none, KeyAction::NextColumn);
        keys.bind(KeyCode::Right, none, KeyAction::NextColumn);
        keys.bind(KeyCode::Char('s'), none, KeyAction::SortFocusedColumn);
        for n in 1..=9u8 {
            keys.bind(
                KeyCode::Char(char::from(b'0' + n)),
                none,
                KeyAction::SortColumn(usize::from(n)),
            );
        }

        // Rows
        keys.bind(KeyCode::Char('k'), none, KeyAction::SelectPrevRow);
        keys.bind(KeyCode::Up, none, KeyAction::SelectPrevRow);
        keys.bind(KeyCode::Char('j'), none, KeyAction::SelectNextRow);
        keys.bind(KeyCode::Down, none, KeyAction::SelectNextRow);
        keys.bind(KeyCode::Enter, none, KeyAction::ActivateRow);

        // Pages
        keys.bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(KeyCode::Char('p'), none, KeyAction::PrevPage);
        keys.bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Char('n'), none, KeyAction::NextPage);
        keys.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.bind(KeyCode::Char('G'), none, KeyAction::LastPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);
        keys.bind(KeyCode::Char('+'), none, KeyAction::IncreasePageSize);
        keys.bind(KeyCode::Char('='), none, KeyAction::IncreasePageSize);
        keys.bind(KeyCode::Char('-'), none, KeyAction::DecreasePageSize);

        // Application
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_click_headers() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('1'))),
            Some(KeyAction::SortColumn(1))
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('9'))),
            Some(KeyAction::SortColumn(9))
        );
        assert_eq!(bindings.get(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn uppercase_g_matches_with_or_without_shift() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(KeyAction::LastPage)
        );
        assert_eq!(bindings.get(key(KeyCode::Char('G'))), Some(KeyAction::LastPage));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_does_not() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(bindings.get(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn page_keys_have_aliases() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::PageDown)), Some(KeyAction::NextPage));
        assert_eq!(bindings.get(key(KeyCode::Char('n'))), Some(KeyAction::NextPage));
        assert_eq!(bindings.get(key(KeyCode::Char('+'))), Some(KeyAction::IncreasePageSize));
    }
}
