use ratatui::{Frame, layout::Rect};

use crate::{
    app::AppState,
    ui::{
        components::{card::StatCard, centered_box, money::format_amount},
        theme::Theme,
    },
};

/// Recomputes the total from the in-memory log on every draw.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let total = engine::total(&state.log);
    let card_area = centered_box(40, 5, area);

    StatCard::new(
        "Total Spending",
        "Amount:",
        format_amount(total, &state.currency_symbol),
        &theme,
    )
    .render(frame, card_area);
}
