use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    app::{AppState, FormField},
    ui::{
        components::{card::Card, centered_box},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let card_area = centered_box(56, 7, area);

    frame.render_widget(Clear, card_area);

    let card = Card::new("Add Expense", &theme).focused(true);
    let inner = card.inner(card_area);
    frame.render_widget(card.block(), card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category
        ])
        .margin(1)
        .split(inner);

    let form = &state.form;
    render_input(
        frame,
        rows[0],
        "Enter Expense Amount:",
        &form.amount,
        form.focus == FormField::Amount,
        &theme,
    );
    render_input(
        frame,
        rows[2],
        "Enter Expense Category:",
        &form.category,
        form.focus == FormField::Category,
        &theme,
    );

    if let Some(message) = &form.error {
        let error_area = Rect {
            x: card_area.x,
            y: card_area.y + card_area.height + 1,
            width: card_area.width,
            height: 1,
        }
        .intersection(area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            ))
            .alignment(Alignment::Center),
            error_area,
        );
    }
}

fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(format!("{label:<24}"), Style::default().fg(theme.dim)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
