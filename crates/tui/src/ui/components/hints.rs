use ratatui::{style::Style, text::Span};

use crate::{app::Screen, ui::theme::Theme};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Hints shown in the bottom bar for each screen.
pub fn for_screen(screen: Screen) -> Vec<KeyHint> {
    match screen {
        Screen::MainMenu => vec![
            KeyHint::new("↑↓", "select"),
            KeyHint::new("Enter", "open"),
            KeyHint::new("1-4", "jump"),
            KeyHint::new("q", "quit"),
        ],
        Screen::AddExpense => vec![
            KeyHint::new("Tab", "next field"),
            KeyHint::new("Enter", "save"),
            KeyHint::new("Esc", "back"),
        ],
        Screen::ViewExpenses => vec![
            KeyHint::new("↑↓", "scroll"),
            KeyHint::new("PgUp/PgDn", "page"),
            KeyHint::new("Esc", "back"),
        ],
        Screen::ViewTotal => vec![KeyHint::new("Esc", "back"), KeyHint::new("q", "quit")],
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}
