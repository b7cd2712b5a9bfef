pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Screen};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    // Title bar, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);

    let content = layout[1];
    match state.screen {
        Screen::MainMenu => screens::menu::render(frame, content, state),
        Screen::AddExpense => screens::add_expense::render(frame, content, state),
        Screen::ViewExpenses => screens::expenses::render(frame, content, state),
        Screen::ViewTotal => screens::total::render(frame, content, state),
    }

    render_bottom_bar(frame, layout[2], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            "Budget Tracker",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Expenses", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", state.log.len())),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = components::hints::for_screen(state.screen);
    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(
        &hints, theme,
    )));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use engine::{ExpenseLog, ExpenseRecord};
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    use super::*;
    use crate::app::{AddFormState, AppState};

    fn state(screen: Screen, log: ExpenseLog) -> AppState {
        AppState {
            screen,
            log,
            menu_selected: 0,
            form: AddFormState::default(),
            list_selected: 0,
            toast: None,
            currency_symbol: "$".to_string(),
        }
    }

    fn sample_log() -> ExpenseLog {
        [(1234.5, "Rent"), (20.0, "Food")]
            .into_iter()
            .map(|(amount, category)| {
                ExpenseRecord::try_from(&json!({
                    "amount": amount,
                    "category": category,
                    "created_at": "2024-01-01T10:00:00"
                }))
                .unwrap()
            })
            .collect()
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_list_says_so() {
        let screen = draw(&state(Screen::ViewExpenses, ExpenseLog::new()));
        assert!(screen.contains("No expenses yet."));
    }

    #[test]
    fn list_shows_formatted_rows() {
        let screen = draw(&state(Screen::ViewExpenses, sample_log()));
        assert!(screen.contains("$1,234.50"));
        assert!(screen.contains("Rent"));
        assert!(screen.contains("Food"));
    }

    #[test]
    fn total_screen_shows_sum() {
        let screen = draw(&state(Screen::ViewTotal, sample_log()));
        assert!(screen.contains("$1,254.50"));
    }

    #[test]
    fn menu_lists_every_entry() {
        let screen = draw(&state(Screen::MainMenu, ExpenseLog::new()));
        assert!(screen.contains("Add Expense"));
        assert!(screen.contains("View Total Spending"));
        assert!(screen.contains("Exit"));
    }
}
