use keyhue::{Avatar, Shape};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use super::helpers::to_term_color;

/// Cells between the tile edges.
const TILE_WIDTH: usize = 4;

/// Renders an avatar as a one-line tile. Round shapes get half-block caps,
/// rectangles get square edges; both take the border color when bordered.
pub fn tile_spans(avatar: &Avatar) -> Vec<Span<'static>> {
    let fill = to_term_color(avatar.color());
    let edge = if avatar.has_border() {
        to_term_color(avatar.border_color())
    } else {
        fill
    };
    let mut text_style = Style::default().fg(to_term_color(avatar.text_color())).bg(fill);
    if avatar.is_bold() {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    let body = Span::styled(
        format!("{:^width$}", avatar.text(), width = TILE_WIDTH),
        text_style,
    );
    match avatar.shape() {
        Shape::Round | Shape::RoundRect { .. } => vec![
            Span::styled("▐", Style::default().fg(edge)),
            body,
            Span::styled("▌", Style::default().fg(edge)),
        ],
        Shape::Rect => vec![
            Span::styled(" ", Style::default().bg(edge)),
            body,
            Span::styled(" ", Style::default().bg(edge)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyhue::Color;
    use ratatui::style::Color as TermColor;

    #[test]
    fn round_tile_has_caps_in_border_shade() {
        let avatar = Avatar::builder()
            .with_border(1)
            .build_round("AL", Color::from_rgb(100, 200, 50));
        let spans = tile_spans(&avatar);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "▐");
        assert_eq!(spans[0].style.fg, Some(TermColor::Rgb(90, 180, 45)));
        assert_eq!(spans[1].content, " AL ");
        assert_eq!(spans[1].style.bg, Some(TermColor::Rgb(100, 200, 50)));
    }

    #[test]
    fn borderless_rect_edges_match_fill() {
        let avatar = Avatar::builder().build_rect("X", Color::from_rgb(1, 2, 3));
        let spans = tile_spans(&avatar);
        assert_eq!(spans[0].style.bg, Some(TermColor::Rgb(1, 2, 3)));
        assert_eq!(spans[2].content, " ");
    }
}
