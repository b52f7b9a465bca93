use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget},
};

use super::{charting, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::util;
use crate::App;

/// Session summary with the score progression chart
pub fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(quiz) = &app.quiz else {
        return;
    };
    let Some(summary) = quiz.summary else {
        return;
    };

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);
    let magenta_style = Style::default().fg(Color::Magenta);

    let accuracy = summary.accuracy_percent();
    let is_perfect = accuracy == 100;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // banner
            Constraint::Length(1), // message
            Constraint::Length(1), // padding
            Constraint::Length(1), // session stats
            Constraint::Length(1), // all-time totals
            Constraint::Length(1), // table badge
            Constraint::Min(1),    // score chart
            Constraint::Length(1), // legend
        ])
        .split(area);

    let banner_style = if is_perfect {
        Style::default().patch(bold_style).fg(Color::Yellow)
    } else {
        Style::default().patch(bold_style).fg(Color::Green)
    };
    Paragraph::new(Span::styled(
        if is_perfect { "PERFECT!" } else { "COMPLETE!" },
        banner_style,
    ))
    .alignment(Alignment::Center)
    .render(chunks[0], buf);

    let message = if accuracy == 100 {
        "Perfect! You're a math star! 🌟"
    } else if accuracy >= 80 {
        "Great job! Keep it up! 🎉"
    } else if accuracy >= 60 {
        "Good work! Practice makes perfect! 💪"
    } else {
        "Keep practicing! You can do it! 🚀"
    };
    Paragraph::new(Span::styled(message, italic_style))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let stats = Paragraph::new(Span::styled(
        format!(
            "{} pts   {}% acc   ⚡ {} streak",
            summary.score, accuracy, summary.streak
        ),
        bold_style,
    ))
    .alignment(Alignment::Center);
    stats.render(chunks[3], buf);

    let totals = Paragraph::new(Span::styled(
        format!(
            "all-time: {} points / best streak {}",
            app.stats.cumulative_score, app.stats.cumulative_streak
        ),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    totals.render(chunks[4], buf);

    let tables = &quiz.config.tables;
    let badge = if tables.len() == 1 {
        format!("{} × times table", tables[0])
    } else {
        format!(
            "{} times tables ({})",
            tables.len(),
            util::format_tables(tables)
        )
    };
    Paragraph::new(Span::styled(badge, dim_style))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);

    let (last_question, highest_score) =
        charting::compute_chart_params(&quiz.score_coords, summary.total_questions);

    let datasets = vec![Dataset::default()
        .marker(ratatui::symbols::Marker::Braille)
        .style(magenta_style)
        .graph_type(GraphType::Line)
        .data(&quiz.score_coords)];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("question")
                .bounds([1.0, last_question])
                .labels(vec![
                    Span::styled("1", bold_style),
                    Span::styled(charting::format_label(last_question), bold_style),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("score")
                .bounds([0.0, highest_score])
                .labels(vec![
                    Span::styled("0", bold_style),
                    Span::styled(charting::format_label(highest_score), bold_style),
                ]),
        );

    chart.render(chunks[6], buf);

    let legend = Paragraph::new(Span::styled(
        "(r)eplay / (n)ew numbers / (esc)ape",
        italic_style,
    ));
    legend.render(chunks[7], buf);
}
