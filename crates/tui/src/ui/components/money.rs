use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Formats an amount for display: symbol prefix, `,` thousands separator and
/// two decimals, e.g. `$1,234.50`.
#[must_use]
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = whole.bytes().chain(fraction.bytes()).all(|b| b == b'0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}{symbol}{}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Creates a styled span for a money amount.
#[must_use]
pub fn styled_amount(amount: f64, symbol: &str, theme: &Theme) -> Span<'static> {
    Span::styled(format_amount(amount, symbol), Style::default().fg(theme.text))
}
