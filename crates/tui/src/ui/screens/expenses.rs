use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Cell, Row, Table, TableState},
};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, money::styled_amount},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let symbol = state.currency_symbol.as_str();

    let header = Row::new(vec![Cell::from("Amount"), Cell::from("Category")]).style(
        Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'_>> = if state.log.is_empty() {
        vec![Row::new(vec![
            Cell::from(""),
            Cell::from(Span::styled(
                "No expenses yet.",
                Style::default().fg(theme.dim),
            )),
        ])]
    } else {
        state
            .log
            .iter()
            .map(|record| {
                Row::new(vec![
                    Cell::from(styled_amount(record.amount(), symbol, &theme)),
                    Cell::from(record.category().to_string()),
                ])
            })
            .collect()
    };

    let mut table_state = TableState::default();
    if !state.log.is_empty() {
        table_state.select(Some(state.list_selected));
    }

    let card = Card::new("Expense List", &theme);
    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
        .header(header)
        .block(card.block())
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(table, area, &mut table_state);
}
