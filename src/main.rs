pub mod app_dirs;
pub mod celebration;
pub mod error;
pub mod history;
pub mod milestone;
pub mod pool;
pub mod question;
pub mod quiz;
pub mod runtime;
pub mod store;
pub mod timer;
pub mod ui;
pub mod util;

use crate::{
    celebration::CelebrationAnimation,
    history::{HistoryLog, SessionRecord},
    quiz::{Quiz, QuizConfig, DEFAULT_TOTAL_QUESTIONS},
    runtime::{CrosstermEventSource, QuizEvent, Runner, TICK_RATE_MS},
    store::{CumulativeStats, FileStatsStore, StatsStore},
    ui::home::GRID_COLUMNS,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

/// How long a milestone toast stays on screen.
pub const TOAST_DURATION_MS: u64 = 1600;

/// multiplication tables trainer with lives, streaks, and all-time stats
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal multiplication tables trainer: pick your tables, answer multiple-choice questions against three lives, chase streak milestones, and track all-time totals across sessions."
)]
pub struct Cli {
    /// tables to practice, comma separated (1-12)
    #[clap(short = 't', long, value_delimiter = ',', value_parser = clap::value_parser!(u32).range(1..=12))]
    tables: Vec<u32>,

    /// number of questions per session
    #[clap(short = 'q', long, default_value_t = DEFAULT_TOTAL_QUESTIONS)]
    questions: usize,

    /// seed for a reproducible question order
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// skip the table picker and start immediately (needs --tables)
    #[clap(long)]
    start: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Quiz,
    Results,
}

/// Transient milestone banner shown over the quiz screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub remaining_ms: u64,
}

impl Toast {
    pub fn new(message: String) -> Self {
        Self {
            message,
            remaining_ms: TOAST_DURATION_MS,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub cli: Option<Cli>,
    pub screen: Screen,
    /// one flag per table on the picker grid
    pub selection: [bool; 12],
    pub home_cursor: usize,
    pub quiz: Option<Quiz>,
    pub stats: CumulativeStats,
    pub store: FileStatsStore,
    pub history: HistoryLog,
    pub toast: Option<Toast>,
    pub celebration: CelebrationAnimation,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        Self::with_stores(cli, FileStatsStore::new(), HistoryLog::new())
    }

    pub fn with_stores(cli: Cli, store: FileStatsStore, history: HistoryLog) -> Self {
        let mut selection = [false; 12];
        for &table in &cli.tables {
            selection[(table - 1) as usize] = true;
        }

        let start = cli.start;
        let stats = store.load();
        let mut app = Self {
            cli: Some(cli),
            screen: Screen::Home,
            selection,
            home_cursor: 0,
            quiz: None,
            stats,
            store,
            history,
            toast: None,
            celebration: CelebrationAnimation::default(),
        };

        if start {
            app.start_quiz();
        }

        app
    }

    pub fn selected_tables(&self) -> Vec<u32> {
        self.selection
            .iter()
            .enumerate()
            .filter(|(_, selected)| **selected)
            .map(|(idx, _)| idx as u32 + 1)
            .collect()
    }

    /// Begins a session with the grid selection; no-op when nothing is picked.
    pub fn start_quiz(&mut self) {
        let tables = self.selected_tables();
        if tables.is_empty() {
            return;
        }

        let mut config = QuizConfig::new(tables);
        if let Some(cli) = &self.cli {
            config.total_questions = cli.questions;
            config.seed = cli.seed;
        }
        self.begin(config);
    }

    fn begin(&mut self, config: QuizConfig) {
        // The grid only produces in-range, non-empty selections
        if let Ok(quiz) = Quiz::new(config) {
            self.quiz = Some(quiz);
            self.toast = None;
            self.celebration = CelebrationAnimation::default();
            self.screen = Screen::Quiz;
        }
    }

    /// Handles one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        if key.code == KeyCode::Esc {
            return true;
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key.code),
            Screen::Quiz => self.handle_quiz_key(key.code),
            Screen::Results => self.handle_results_key(key.code),
        }

        false
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                if self.home_cursor % GRID_COLUMNS > 0 {
                    self.home_cursor -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.home_cursor % GRID_COLUMNS < GRID_COLUMNS - 1
                    && self.home_cursor + 1 < self.selection.len()
                {
                    self.home_cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.home_cursor >= GRID_COLUMNS {
                    self.home_cursor -= GRID_COLUMNS;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.home_cursor + GRID_COLUMNS < self.selection.len() {
                    self.home_cursor += GRID_COLUMNS;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.selection[self.home_cursor] = !self.selection[self.home_cursor];
            }
            KeyCode::Char('s') => {
                self.start_quiz();
            }
            KeyCode::Char('x') => {
                self.stats = store::reset(&self.store);
            }
            _ => {}
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(quiz) = &mut self.quiz {
                    let slot = (c as usize) - ('1' as usize);
                    let selected = quiz.question.options[slot];
                    if let Some(event) = quiz.submit_answer(selected) {
                        self.toast = Some(Toast::new(event.message()));
                    }
                }
            }
            KeyCode::Backspace => {
                // Abandon the session and go back to picking tables
                if let Some(quiz) = &mut self.quiz {
                    quiz.abandon();
                }
                self.quiz = None;
                self.toast = None;
                self.screen = Screen::Home;
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('r') => {
                // Replay with the same tables
                if let Some(quiz) = &self.quiz {
                    let config = quiz.config.clone();
                    self.begin(config);
                }
            }
            KeyCode::Char('n') => {
                // Back to the picker for new numbers
                self.quiz = None;
                self.celebration = CelebrationAnimation::default();
                self.screen = Screen::Home;
            }
            _ => {}
        }
    }

    /// Advances toast, quiz feedback, and confetti by one tick.
    /// Returns true when something on screen changed.
    pub fn on_tick(&mut self, width: u16, height: u16) -> bool {
        let mut dirty = false;

        if let Some(toast) = &mut self.toast {
            dirty = true;
            toast.remaining_ms = toast.remaining_ms.saturating_sub(TICK_RATE_MS);
            if toast.remaining_ms == 0 {
                self.toast = None;
            }
        }

        if self.screen == Screen::Quiz {
            let finished = if let Some(quiz) = &mut self.quiz {
                if quiz.advance_timer.is_pending() {
                    dirty = true;
                }
                quiz.on_tick();
                quiz.has_finished()
            } else {
                false
            };

            if finished {
                self.finish_session(width, height);
                dirty = true;
            }
        }

        if self.celebration.is_active {
            self.celebration.update();
            dirty = true;
        }

        dirty
    }

    /// Folds a terminal session into the all-time totals and the history
    /// log, then lands on the results screen. Storage failures are ignored
    /// so a read-only disk never interrupts play.
    pub fn finish_session(&mut self, width: u16, height: u16) {
        let Some(quiz) = &self.quiz else {
            return;
        };
        let Some(summary) = quiz.summary else {
            return;
        };

        self.stats = store::record(&self.store, &summary);
        let record = SessionRecord::from_session(quiz, &summary);
        let _ = self.history.append(&record);

        self.toast = None;
        if summary.accuracy_percent() == 100 {
            self.celebration.start(width, height);
        }
        self.screen = Screen::Results;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.questions == 0 {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::InvalidValue, "--questions must be at least 1")
            .exit();
    }

    if cli.start && cli.tables.is_empty() {
        let mut cmd = Cli::command();
        cmd.error(
            ErrorKind::MissingRequiredArgument,
            "--start needs at least one table, e.g. --tables 3,4",
        )
        .exit();
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli);
    start_tui(&mut terminal, &mut app)?;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    Ok(())
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::spawn());

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            QuizEvent::Tick => {
                let size = terminal.size().unwrap_or_default();
                if app.on_tick(size.width, size.height) {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            QuizEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            QuizEvent::Key(key) => {
                if app.handle_key(key) {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
