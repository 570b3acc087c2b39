mod helpers;
mod theme;
mod tiles;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use helpers::{clamp_name, to_term_color};
use theme::Theme;

const KEY_WIDTH: usize = 24;

/// Renders the entire preview for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(Text::from(header_line(app)))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        input_line(app),
        Line::from(""),
        Line::from(Span::styled(
            "  Keys",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(key_lines(app));
    if let Some(status) = &app.status {
        body_lines.push(Line::from(""));
        body_lines.push(Line::from(Span::styled(
            format!("  {status}"),
            Style::default().fg(Theme::warn()),
        )));
    }
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(keybinds_line()))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(footer, layout[2]);
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn header_line(app: &App) -> Line<'_> {
    let mut spans = vec![
        Span::styled(
            "  keyhue  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            format!("palette: {} ({} colors)", app.palette_name(), app.generator().len()),
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(swatch) = app.random_swatch {
        spans.push(Span::raw("   random: "));
        spans.push(Span::styled("    ", Style::default().bg(to_term_color(swatch))));
        spans.push(Span::raw(format!(" {swatch}")));
    }
    Line::from(spans)
}

fn input_line(app: &App) -> Line<'_> {
    Line::from(vec![
        Span::styled("  Key: ", Style::default().fg(Theme::dim())),
        Span::styled(app.input.as_str(), Style::default().fg(Theme::text())),
        Span::styled("_", Style::default().fg(Theme::selection_marker())),
    ])
}

fn key_lines(app: &App) -> Vec<Line<'_>> {
    if app.keys.is_empty() {
        return vec![Line::from(Span::styled(
            "  No keys yet. Type a name and press Enter.",
            Style::default().fg(Theme::dim()),
        ))];
    }
    app.keys
        .iter()
        .enumerate()
        .map(|(index, key)| {
            let selected = index == app.selected_key_index;
            let marker_style = if selected {
                Style::default()
                    .fg(Theme::selection_marker())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::dim())
            };
            let avatar = app.avatar_for(key);
            let mut spans = vec![Span::styled(if selected { "> " } else { "  " }, marker_style)];
            spans.extend(tiles::tile_spans(&avatar));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                clamp_name(key, KEY_WIDTH),
                Style::default().fg(Theme::text()),
            ));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                avatar.color().to_string(),
                Style::default().fg(Theme::dim()),
            ));
            Line::from(spans)
        })
        .collect()
}

fn keybinds_line() -> Line<'static> {
    Line::from(Span::styled(
        "Enter: Add key   Tab: Next palette   Up/Down: Select   Del: Remove   F5: Random   Esc: Quit",
        Style::default().fg(Theme::dim()),
    ))
}
