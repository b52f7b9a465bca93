use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Headless integration using the internal runtime + Quiz without a TTY.
// Verifies that full quiz sessions complete via Runner/TestEventSource.
#[test]
fn headless_perfect_session_completes() {
    // Arrange: a seeded ten-question session on the 7s
    let mut config = tablr::quiz::QuizConfig::new(vec![7]);
    config.seed = Some(42);
    let mut quiz = tablr::quiz::Quiz::new(config).unwrap();

    // Channel for the test event source
    let (tx, rx) = mpsc::channel();

    // Create TestEventSource and Runner with a small tick interval
    let es = tablr::runtime::TestEventSource::new(rx);
    let runner = tablr::runtime::Runner::with_tick_interval(es, Duration::from_millis(2));

    // Prime the first answer keystroke
    tx.send(tablr::runtime::QuizEvent::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::NONE,
    )))
    .unwrap();

    // Act: drive the loop, requesting the next answer whenever a
    // question is waiting (feedback holds the session between answers)
    for _ in 0..2000u32 {
        match runner.step() {
            tablr::runtime::QuizEvent::Tick => {
                quiz.on_tick();
                if quiz.phase == tablr::quiz::Phase::AwaitingAnswer {
                    tx.send(tablr::runtime::QuizEvent::Key(KeyEvent::new(
                        KeyCode::Char('c'),
                        KeyModifiers::NONE,
                    )))
                    .unwrap();
                }
            }
            tablr::runtime::QuizEvent::Resize => {}
            tablr::runtime::QuizEvent::Key(key) => {
                if let KeyCode::Char('c') = key.code {
                    let answer = quiz.question.correct_answer();
                    quiz.submit_answer(answer);
                }
            }
        }
        if quiz.has_finished() {
            break;
        }
    }

    // Assert: finished with a perfect summary
    assert!(quiz.has_finished(), "quiz should have finished");
    let summary = quiz.summary.unwrap();
    assert_eq!(summary.score, 100);
    assert_eq!(summary.streak, 10);
    assert_eq!(summary.accuracy_percent(), 100);
}

#[test]
fn headless_three_strikes_ends_early() {
    // Three wrong answers burn the three lives and end the session
    // before the ten questions run out
    let mut config = tablr::quiz::QuizConfig::new(vec![3, 4]);
    config.seed = Some(7);
    let mut quiz = tablr::quiz::Quiz::new(config).unwrap();

    let (tx, rx) = mpsc::channel();
    let es = tablr::runtime::TestEventSource::new(rx);
    let runner = tablr::runtime::Runner::with_tick_interval(es, Duration::from_millis(2));

    tx.send(tablr::runtime::QuizEvent::Key(KeyEvent::new(
        KeyCode::Char('w'),
        KeyModifiers::NONE,
    )))
    .unwrap();

    for _ in 0..2000u32 {
        match runner.step() {
            tablr::runtime::QuizEvent::Tick => {
                quiz.on_tick();
                if quiz.phase == tablr::quiz::Phase::AwaitingAnswer {
                    tx.send(tablr::runtime::QuizEvent::Key(KeyEvent::new(
                        KeyCode::Char('w'),
                        KeyModifiers::NONE,
                    )))
                    .unwrap();
                }
            }
            tablr::runtime::QuizEvent::Resize => {}
            tablr::runtime::QuizEvent::Key(key) => {
                if let KeyCode::Char('w') = key.code {
                    // 0 is never among the options, so it always grades wrong
                    quiz.submit_answer(0);
                }
            }
        }
        if quiz.has_finished() {
            break;
        }
    }

    assert!(quiz.has_finished(), "quiz should have ended early");
    assert_eq!(quiz.lives, 0);

    let summary = quiz.summary.unwrap();
    assert_eq!(summary.score, 0);
    assert_eq!(summary.streak, 0);

    // Only three of the ten questions were graded
    assert_eq!(quiz.score_coords.len(), 3);
}

#[test]
fn headless_abandoned_feedback_never_advances() {
    // A cancelled auto-advance must not move the session behind
    // the caller's back, no matter how many ticks pass
    let mut config = tablr::quiz::QuizConfig::new(vec![5]);
    config.seed = Some(1);
    let mut quiz = tablr::quiz::Quiz::new(config).unwrap();

    quiz.submit_answer(0);
    assert!(matches!(
        quiz.phase,
        tablr::quiz::Phase::Feedback { correct: false, .. }
    ));

    quiz.abandon();

    let (_tx, rx) = mpsc::channel();
    let es = tablr::runtime::TestEventSource::new(rx);
    let runner = tablr::runtime::Runner::with_tick_interval(es, Duration::from_millis(1));

    for _ in 0..30u32 {
        if let tablr::runtime::QuizEvent::Tick = runner.step() {
            quiz.on_tick();
        }
    }

    assert!(!quiz.has_finished());
    assert!(matches!(quiz.phase, tablr::quiz::Phase::Feedback { .. }));
    assert!(quiz.summary.is_none());
}
