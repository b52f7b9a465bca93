use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::pool::MAX_TABLE;
use crate::App;

pub const GRID_COLUMNS: usize = 4;

/// Table picker with all-time totals
pub fn render_home(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1), // all-time totals
            Constraint::Length(1), // padding
            Constraint::Min(6),    // table grid
            Constraint::Length(1), // legend
        ])
        .split(area);

    let title =
        Paragraph::new(Span::styled("Times Tables Go!", green_bold_style)).alignment(Alignment::Center);
    title.render(chunks[0], buf);

    let selected_count = app.selection.iter().filter(|s| **s).count();
    let subtitle = match selected_count {
        0 => "Choose your times tables! 🎯".to_string(),
        1 => "1 table selected".to_string(),
        n => format!("{n} tables selected"),
    };
    Paragraph::new(Span::styled(subtitle, dim_style))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let totals = Paragraph::new(Span::styled(
        format!(
            "🔥 {} streak   🏆 {} points",
            app.stats.cumulative_streak, app.stats.cumulative_score
        ),
        bold_style,
    ))
    .alignment(Alignment::Center);
    totals.render(chunks[2], buf);

    // 12 tables laid out four across
    let mut lines = vec![];
    for row in 0..(MAX_TABLE as usize / GRID_COLUMNS) {
        let mut spans = vec![];
        for col in 0..GRID_COLUMNS {
            let idx = row * GRID_COLUMNS + col;
            let marker = if app.selection[idx] { '★' } else { ' ' };
            let cell = format!("  {:>2} {} ", idx + 1, marker);
            let style = match (idx == app.home_cursor, app.selection[idx]) {
                (true, true) => Style::default()
                    .patch(green_bold_style)
                    .add_modifier(Modifier::REVERSED),
                (true, false) => Style::default()
                    .patch(bold_style)
                    .add_modifier(Modifier::REVERSED),
                (false, true) => green_bold_style,
                (false, false) => dim_style,
            };
            spans.push(Span::styled(cell, style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(chunks[4], buf);

    let legend = Paragraph::new(Span::styled(
        "(hjkl/arrows) move / (space) toggle / (s)tart / (x) start over / (esc)ape",
        italic_style,
    ));
    legend.render(chunks[5], buf);
}
