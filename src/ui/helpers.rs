use keyhue::Color as KeyColor;
use ratatui::style::Color;

/// Terminal color for a palette entry. Alpha is ignored.
pub fn to_term_color(color: KeyColor) -> Color {
    Color::Rgb(color.red(), color.green(), color.blue())
}

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}
