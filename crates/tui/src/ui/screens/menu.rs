use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, MenuItem},
    ui::{
        components::{card::Card, centered_box},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let card_area = centered_box(40, MenuItem::ALL.len() as u16 * 2 + 3, area);

    let mut lines = vec![Line::default()];
    for (index, item) in MenuItem::ALL.iter().enumerate() {
        let selected = index == state.menu_selected;
        let marker = if selected { "» " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", index + 1), Style::default().fg(theme.dim)),
            Span::styled(format!("{marker}{}", item.label()), style),
        ]));
        lines.push(Line::default());
    }

    Card::new("Budget Tracker - Main Menu", &theme).focused(true).render_with(
        frame,
        card_area,
        Paragraph::new(lines).alignment(Alignment::Center),
    );
}
