use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Milliseconds between ticks; feedback and toast countdowns assume it.
pub const TICK_RATE_MS: u64 = 100;

/// One step of the event loop: a key the player pressed, a terminal
/// resize, or a tick of the clock that drives every countdown.
#[derive(Clone, Debug)]
pub enum QuizEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Feed of key and resize events. Ticks are not part of the feed; the
/// runner manufactures one whenever the feed stays quiet for a full
/// tick interval.
pub trait QuizEventSource {
    /// Waits up to `wait` for the next event. None means nothing arrived.
    fn poll(&self, wait: Duration) -> Option<QuizEvent>;
}

/// Narrows a raw terminal event to one the quiz reacts to. Only key
/// presses count; releases and protocol repeats are dropped.
fn translate(raw: CtEvent) -> Option<QuizEvent> {
    match raw {
        CtEvent::Key(key) if key.kind == KeyEventKind::Press => Some(QuizEvent::Key(key)),
        CtEvent::Resize(_, _) => Some(QuizEvent::Resize),
        _ => None,
    }
}

/// Reads the real terminal on a background thread, forwarding what
/// `translate` keeps. The thread exits when the terminal read fails or
/// the app side hangs up.
pub struct CrosstermEventSource {
    rx: Receiver<QuizEvent>,
}

impl CrosstermEventSource {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let raw = match event::read() {
                Ok(raw) => raw,
                Err(_) => break,
            };
            if let Some(ev) = translate(raw) {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl QuizEventSource for CrosstermEventSource {
    fn poll(&self, wait: Duration) -> Option<QuizEvent> {
        self.rx.recv_timeout(wait).ok()
    }
}

/// Channel-fed source for driving the app without a terminal.
pub struct TestEventSource {
    rx: Receiver<QuizEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<QuizEvent>) -> Self {
        Self { rx }
    }
}

impl QuizEventSource for TestEventSource {
    fn poll(&self, wait: Duration) -> Option<QuizEvent> {
        self.rx.recv_timeout(wait).ok()
    }
}

/// Merges a source with the tick clock into the single stream the app
/// consumes. Production runs at `TICK_RATE_MS`; tests shrink the
/// interval to play whole sessions in milliseconds.
pub struct Runner<S: QuizEventSource> {
    source: S,
    tick_interval: Duration,
}

impl<S: QuizEventSource> Runner<S> {
    pub fn new(source: S) -> Self {
        Self::with_tick_interval(source, Duration::from_millis(TICK_RATE_MS))
    }

    pub fn with_tick_interval(source: S, tick_interval: Duration) -> Self {
        Self {
            source,
            tick_interval,
        }
    }

    /// Next event from the source, or Tick after one quiet interval.
    pub fn step(&self) -> QuizEvent {
        match self.source.poll(self.tick_interval) {
            Some(ev) => ev,
            None => QuizEvent::Tick,
        }
    }
}
