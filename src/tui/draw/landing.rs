//! Landing screen: hero, prompt input, example prompts, suggestion tiles, stats.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::app::App;
use super::super::constants::{
    ACCENT, ACCENT_SECONDARY, BENEFITS, EXAMPLE_PROMPTS, LANDING_BADGE, LANDING_FOOTER,
    LANDING_SUBTITLE, LANDING_TITLE, STATS, TILES,
};
use super::input::{draw_bottom_bar, draw_input_block, draw_status_line};

/// Content column width; the landing layout is centered.
const LANDING_WIDTH: u16 = 96;
const TILE_HEIGHT: u16 = 6;

fn hero_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!(" {} ", LANDING_BADGE),
            Style::default().fg(Color::Black).bg(ACCENT_SECONDARY),
        )),
        Line::default(),
        Line::from(Span::styled(
            LANDING_TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            LANDING_SUBTITLE,
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// "Example prompts" row. Highlighted entry follows Tab; dimmed while a request is in flight.
fn example_prompts_line(app: &App) -> Line<'static> {
    let enabled = app.gate.example_prompts_enabled();
    let mut spans = vec![Span::styled(
        "Example prompts: ",
        Style::default().fg(Color::DarkGray),
    )];
    for (i, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
        let style = if !enabled {
            Style::default().fg(Color::DarkGray)
        } else if app.selected_suggestion == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT_SECONDARY)
        };
        spans.push(Span::styled(format!(" {} ", prompt), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn draw_tiles(f: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(TILES.iter().map(|_| Constraint::Ratio(1, TILES.len() as u32)))
        .split(area);
    for (i, (tile, col)) in TILES.iter().zip(cols.iter()).enumerate() {
        let selected = app.selected_suggestion == Some(EXAMPLE_PROMPTS.len() + i);
        let border = if selected { ACCENT } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", tile.title),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        let body = vec![
            Line::from(Span::styled(tile.subtitle, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                format!("“{}”", tile.prompt),
                Style::default()
                    .fg(ACCENT_SECONDARY)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];
        f.render_widget(
            Paragraph::new(body).block(block).wrap(Wrap { trim: true }),
            *col,
        );
    }
}

fn trust_lines() -> Vec<Line<'static>> {
    let mut benefits = Vec::new();
    for benefit in BENEFITS {
        benefits.push(Span::styled("✓ ", Style::default().fg(ACCENT)));
        benefits.push(Span::styled(
            format!("{}   ", benefit),
            Style::default().fg(Color::Gray),
        ));
    }
    let mut stats = Vec::new();
    for (value, label) in STATS {
        stats.push(Span::styled(
            *value,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        stats.push(Span::styled(
            format!(" {}     ", label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    vec![Line::from(benefits), Line::default(), Line::from(stats)]
}

pub(crate) fn draw_landing(f: &mut Frame, app: &App, area: Rect) {
    let [column] = Layout::horizontal([Constraint::Max(LANDING_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(super::super::constants::INPUT_LINES),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(TILE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .split(column);

    f.render_widget(
        Paragraph::new(hero_lines()).alignment(Alignment::Center),
        rows[0],
    );
    draw_input_block(f, app, rows[2]);
    draw_status_line(f, app, rows[3]);
    f.render_widget(Paragraph::new(example_prompts_line(app)), rows[5]);
    draw_tiles(f, app, rows[6]);
    f.render_widget(
        Paragraph::new(trust_lines()).alignment(Alignment::Center),
        rows[8],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            LANDING_FOOTER,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        rows[10],
    );
    draw_bottom_bar(f, app, rows[11]);
}
