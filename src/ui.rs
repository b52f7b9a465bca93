pub mod charting;
pub mod home;
pub mod results;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::quiz::{Phase, STARTING_LIVES};
use crate::{App, Screen};

pub const HORIZONTAL_MARGIN: u16 = 5;
pub const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            Screen::Home => home::render_home(self, area, buf),
            Screen::Quiz => render_quiz(self, area, buf),
            Screen::Results => {
                results::render_results(self, area, buf);

                if self.celebration.is_active {
                    render_celebration_particles(&self.celebration, area, buf);
                }
            }
        }
    }
}

fn render_quiz(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(quiz) = &app.quiz else {
        return;
    };

    // styles
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
    let yellow_bold_style = Style::default().patch(bold_style).fg(Color::Yellow);
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // milestone toast
            Constraint::Length(1), // lives and streak
            Constraint::Length(1), // progress
            Constraint::Length(2), // padding
            Constraint::Length(2), // question card
            Constraint::Length(1), // padding
            Constraint::Length(4), // options
            Constraint::Min(1),    // padding
            Constraint::Length(1), // score
        ])
        .split(area);

    if let Some(toast) = &app.toast {
        Paragraph::new(Span::styled(toast.message.clone(), yellow_bold_style))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);
    }

    let mut header_spans = vec![];
    for i in 0..STARTING_LIVES {
        if i < quiz.lives {
            header_spans.push(Span::styled("♥ ", red_bold_style));
        } else {
            header_spans.push(Span::styled("♡ ", dim_style));
        }
    }
    header_spans.push(Span::raw("   "));
    header_spans.push(Span::styled(
        format!("⚡ {}", quiz.streak),
        yellow_bold_style,
    ));
    Paragraph::new(Line::from(header_spans))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let progress = Paragraph::new(Span::styled(
        format!(
            "Question {} of {}",
            quiz.index + 1,
            quiz.config.total_questions
        ),
        dim_style,
    ))
    .alignment(Alignment::Center);
    progress.render(chunks[2], buf);

    // the prompt while waiting, the right answer during feedback
    let card_lines = match quiz.phase {
        Phase::Feedback { correct, .. } => {
            let answer_style = if correct {
                green_bold_style
            } else {
                red_bold_style
            };
            let note = if correct {
                "that's correct"
            } else {
                "this is the correct answer"
            };
            vec![
                Line::from(Span::styled(
                    quiz.question.correct_answer().to_string(),
                    answer_style,
                )),
                Line::from(Span::styled(
                    note,
                    Style::default()
                        .patch(dim_style)
                        .add_modifier(Modifier::ITALIC),
                )),
            ]
        }
        _ => vec![Line::from(Span::styled(quiz.question.prompt(), bold_style))],
    };
    Paragraph::new(card_lines)
        .alignment(Alignment::Center)
        .render(chunks[4], buf);

    // options padded to equal width so the numbering lines up when centered
    let labels: Vec<String> = quiz
        .question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("({}) {}", i + 1, option))
        .collect();
    let column = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    let option_lines: Vec<Line> = labels
        .iter()
        .zip(quiz.question.options.iter())
        .map(|(label, &option)| {
            let style = match quiz.phase {
                Phase::Feedback { selected, .. } => {
                    if option == quiz.question.correct_answer() {
                        green_bold_style
                    } else if option == selected {
                        red_bold_style
                    } else {
                        dim_style
                    }
                }
                _ => bold_style,
            };
            Line::from(Span::styled(format!("{label:<column$}"), style))
        })
        .collect();
    Paragraph::new(option_lines)
        .alignment(Alignment::Center)
        .render(chunks[6], buf);

    let score = Paragraph::new(Span::styled(format!("Score {}", quiz.score), bold_style))
        .alignment(Alignment::Center);
    score.render(chunks[8], buf);
}

/// Render celebration particles on top of the results screen
fn render_celebration_particles(
    celebration: &crate::celebration::CelebrationAnimation,
    area: Rect,
    buf: &mut Buffer,
) {
    let colors = [
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::LightYellow,
    ];

    for particle in &celebration.particles {
        let x = particle.x as u16;
        let y = particle.y as u16;

        if x < area.width && y < area.height {
            let color = colors[particle.color_index % colors.len()];

            // Fade with age
            let alpha = 1.0 - (particle.age / particle.max_age);
            let style = if alpha > 0.7 {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else if alpha > 0.3 {
                Style::default().fg(color)
            } else {
                Style::default().fg(color).add_modifier(Modifier::DIM)
            };

            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_symbol(&particle.symbol.to_string());
                cell.set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryLog;
    use crate::store::FileStatsStore;
    use crate::{App, Cli, Toast};
    use ratatui::{buffer::Buffer, layout::Rect};

    fn create_test_app(tables: &[u32]) -> App {
        let cli = Cli {
            tables: tables.to_vec(),
            questions: 10,
            seed: Some(42),
            start: false,
        };
        // Paths that never resolve keep render tests off the real filesystem
        App::with_stores(
            cli,
            FileStatsStore::with_path("/nonexistent/tablr/stats.json"),
            HistoryLog::with_path("/nonexistent/tablr/sessions.csv"),
        )
    }

    fn quiz_app(tables: &[u32]) -> App {
        let mut app = create_test_app(tables);
        app.start_quiz();
        app
    }

    fn finished_app(perfect: bool) -> App {
        let mut app = quiz_app(&[7]);
        loop {
            let quiz = app.quiz.as_mut().unwrap();
            if quiz.has_finished() {
                break;
            }
            let answer = if perfect {
                quiz.question.correct_answer()
            } else {
                0
            };
            quiz.submit_answer(answer);
            quiz.advance();
        }
        app.finish_session(80, 24);
        app
    }

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_home_screen_title_and_legend() {
        let app = create_test_app(&[]);
        let rendered = render_to_string(&app, 100, 30);

        assert!(rendered.contains("Times Tables Go!"));
        assert!(rendered.contains("Choose your times tables!"));
        assert!(rendered.contains("(s)tart"));
        assert!(rendered.contains("(esc)ape"));
    }

    #[test]
    fn test_home_screen_marks_selected_tables() {
        let app = create_test_app(&[3, 7]);
        let rendered = render_to_string(&app, 100, 30);

        assert!(rendered.contains("2 tables selected"));
        assert!(rendered.contains('★'));
    }

    #[test]
    fn test_home_screen_shows_all_time_totals() {
        let mut app = create_test_app(&[]);
        app.stats.cumulative_score = 1240;
        app.stats.cumulative_streak = 12;

        let rendered = render_to_string(&app, 100, 30);

        assert!(rendered.contains("12 streak"));
        assert!(rendered.contains("1240 points"));
    }

    #[test]
    fn test_quiz_screen_shows_question_and_options() {
        let app = quiz_app(&[7]);
        let rendered = render_to_string(&app, 80, 24);

        assert!(rendered.contains("= ?"));
        assert!(rendered.contains("(1)"));
        assert!(rendered.contains("(4)"));
        assert!(rendered.contains("Question 1 of 10"));
        assert!(rendered.contains("Score 0"));
        assert!(rendered.contains('♥'));
    }

    #[test]
    fn test_quiz_screen_feedback_reveals_the_answer() {
        let mut app = quiz_app(&[7]);
        let quiz = app.quiz.as_mut().unwrap();
        let correct = quiz.question.correct_answer();
        quiz.submit_answer(0);

        let rendered = render_to_string(&app, 80, 24);

        assert!(rendered.contains("this is the correct answer"));
        assert!(rendered.contains(&correct.to_string()));
    }

    #[test]
    fn test_quiz_screen_correct_feedback_note() {
        let mut app = quiz_app(&[7]);
        let quiz = app.quiz.as_mut().unwrap();
        let correct = quiz.question.correct_answer();
        quiz.submit_answer(correct);

        let rendered = render_to_string(&app, 80, 24);

        assert!(rendered.contains("that's correct"));
    }

    #[test]
    fn test_quiz_screen_renders_milestone_toast() {
        let mut app = quiz_app(&[7]);
        app.toast = Some(Toast::new("🎉 On a roll! Streak 5!".to_string()));

        let rendered = render_to_string(&app, 80, 24);

        assert!(rendered.contains("On a roll! Streak 5!"));
    }

    #[test]
    fn test_results_screen_perfect_banner() {
        let app = finished_app(true);
        let rendered = render_to_string(&app, 100, 30);

        assert!(rendered.contains("PERFECT!"));
        assert!(rendered.contains("math star"));
        assert!(rendered.contains("100% acc"));
        assert!(rendered.contains("(r)eplay"));
        assert!(rendered.contains("7 × times table"));
    }

    #[test]
    fn test_results_screen_complete_banner() {
        let app = finished_app(false);
        let rendered = render_to_string(&app, 100, 30);

        assert!(rendered.contains("COMPLETE!"));
        assert!(rendered.contains("Keep practicing"));
        assert!(rendered.contains("0 pts"));
    }

    #[test]
    fn test_results_screen_shows_all_time_totals() {
        let app = finished_app(true);
        let rendered = render_to_string(&app, 100, 30);

        assert!(rendered.contains("all-time: 100 points"));
        assert!(rendered.contains("best streak 10"));
    }

    #[test]
    fn test_celebration_overlay_renders() {
        let mut app = finished_app(true);
        assert!(app.celebration.is_active);
        assert!(!app.celebration.particles.is_empty());

        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);
        assert!(*buffer.area() == area);

        // An imperfect session never starts the confetti
        app = finished_app(false);
        assert!(!app.celebration.is_active);
    }

    #[test]
    fn test_ui_widget_extreme_sizes() {
        let app = quiz_app(&[3, 4]);

        let small_area = Rect::new(0, 0, 10, 5);
        let mut small_buffer = Buffer::empty(small_area);
        (&app).render(small_area, &mut small_buffer);
        assert!(*small_buffer.area() == small_area);

        let large_area = Rect::new(0, 0, 500, 200);
        let mut large_buffer = Buffer::empty(large_area);
        (&app).render(large_area, &mut large_buffer);
        assert!(*large_buffer.area() == large_area);
    }

    #[test]
    fn test_every_screen_renders_without_panic() {
        for app in [create_test_app(&[2]), quiz_app(&[2]), finished_app(true)] {
            let area = Rect::new(0, 0, 80, 24);
            let mut buffer = Buffer::empty(area);
            (&app).render(area, &mut buffer);
            assert!(!buffer.content().is_empty());
        }
    }

    #[test]
    fn test_ui_constants() {
        assert_eq!(HORIZONTAL_MARGIN, 5);
        assert_eq!(VERTICAL_MARGIN, 2);

        const _: () = assert!(HORIZONTAL_MARGIN * 2 < 80);
        const _: () = assert!(VERTICAL_MARGIN * 2 < 24);
    }
}
