use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Back,
    NextField,
    Submit,
    Backspace,
    Up,
    Down,
    PageUp,
    PageDown,
    Input(char),
    None,
}

/// Plain characters are always `Input`: whether `q` quits depends on the
/// screen, since the add form needs to accept it as text.
pub fn map_key(key: KeyEvent) -> AppAction {
    if key.kind == KeyEventKind::Release {
        return AppAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::Quit;
        }
        return AppAction::None;
    }

    match key.code {
        KeyCode::Esc => AppAction::Back,
        KeyCode::Tab | KeyCode::BackTab => AppAction::NextField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::PageUp => AppAction::PageUp,
        KeyCode::PageDown => AppAction::PageDown,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> AppAction {
        map_key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            AppAction::Quit
        );
    }

    #[test]
    fn q_is_plain_input() {
        assert_eq!(
            press(KeyCode::Char('q'), KeyModifiers::NONE),
            AppAction::Input('q')
        );
        assert_eq!(
            press(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            AppAction::Input('Q')
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), AppAction::Back);
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), AppAction::NextField);
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), AppAction::Submit);
        assert_eq!(press(KeyCode::PageDown, KeyModifiers::NONE), AppAction::PageDown);
        assert_eq!(press(KeyCode::F(1), KeyModifiers::NONE), AppAction::None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), AppAction::None);
    }
}
