use crate::error::QuizError;
use crate::milestone::{MilestoneEvent, MILESTONE_STEPS};
use crate::pool::QuestionPool;
use crate::question::Question;
use crate::runtime::TICK_RATE_MS;
use crate::timer::AdvanceTimer;
use crate::util;

pub const DEFAULT_TOTAL_QUESTIONS: usize = 10;
pub const STARTING_LIVES: u32 = 3;
pub const CORRECT_POINTS: u32 = 10;
pub const WRONG_PENALTY: u32 = 5;

/// How long feedback stays on screen before the session auto-advances.
pub const FEEDBACK_CORRECT_MS: u64 = 1000;
pub const FEEDBACK_WRONG_MS: u64 = 1200;

/// What the session is doing between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A question is displayed, waiting for a selection.
    AwaitingAnswer,
    /// A selection was just graded; its correctness is on display.
    Feedback { correct: bool, selected: u32 },
    /// The session is over and `summary` is populated.
    Terminal,
}

/// Immutable snapshot handed off when a session terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub score: u32,
    pub total_questions: usize,
    /// Consecutive-correct count held at the moment of termination.
    pub streak: u32,
}

impl ResultSummary {
    pub fn accuracy_percent(&self) -> u32 {
        util::accuracy_percent(self.score, self.total_questions)
    }
}

/// Settings a session is created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub tables: Vec<u32>,
    pub total_questions: usize,
    pub seed: Option<u64>,
}

impl QuizConfig {
    pub fn new(tables: Vec<u32>) -> Self {
        Self {
            tables,
            total_questions: DEFAULT_TOTAL_QUESTIONS,
            seed: None,
        }
    }
}

/// One quiz session from first question to terminal state.
#[derive(Debug)]
pub struct Quiz {
    pub config: QuizConfig,
    pub pool: QuestionPool,
    pub question: Question,
    /// 0-based index of the question on display.
    pub index: usize,
    pub score: u32,
    pub lives: u32,
    pub streak: u32,
    pub phase: Phase,
    pub advance_timer: AdvanceTimer,
    /// Running score after each graded answer, for the results chart.
    pub score_coords: Vec<(f64, f64)>,
    pub summary: Option<ResultSummary>,
}

impl Quiz {
    pub fn new(config: QuizConfig) -> Result<Self, QuizError> {
        if config.total_questions == 0 {
            return Err(QuizError::InvalidInput(
                "a session needs at least one question".to_string(),
            ));
        }

        let mut pool = QuestionPool::new(&config.tables, config.seed)?;
        let question = pool.next_question();

        Ok(Self {
            config,
            pool,
            question,
            index: 0,
            score: 0,
            lives: STARTING_LIVES,
            streak: 0,
            phase: Phase::AwaitingAnswer,
            advance_timer: AdvanceTimer::idle(),
            score_coords: vec![],
            summary: None,
        })
    }

    /// Grades `selected` against the current question.
    ///
    /// Only acts in `AwaitingAnswer`; a submission during feedback or after
    /// termination is ignored. A value that is not among the displayed
    /// options is simply wrong. Returns the milestone crossed by this
    /// answer, if any.
    pub fn submit_answer(&mut self, selected: u32) -> Option<MilestoneEvent> {
        if self.phase != Phase::AwaitingAnswer {
            return None;
        }

        let correct = self.question.is_correct(selected);
        let mut milestone = None;

        if correct {
            self.score += CORRECT_POINTS;
            self.streak += 1;
            if MILESTONE_STEPS.contains(&self.streak) {
                milestone = Some(MilestoneEvent::new(self.streak));
            }
            self.advance_timer.schedule(FEEDBACK_CORRECT_MS);
        } else {
            self.score = self.score.saturating_sub(WRONG_PENALTY);
            self.streak = 0;
            self.lives -= 1;
            self.advance_timer.schedule(FEEDBACK_WRONG_MS);
        }

        self.score_coords
            .push(((self.index + 1) as f64, self.score as f64));
        self.phase = Phase::Feedback { correct, selected };

        milestone
    }

    /// Leaves the feedback phase: ends the session when lives are spent or
    /// every question has been asked, otherwise serves the next question.
    pub fn advance(&mut self) {
        if !matches!(self.phase, Phase::Feedback { .. }) {
            return;
        }
        self.advance_timer.cancel();

        if self.lives == 0 || self.index + 1 == self.config.total_questions {
            self.summary = Some(ResultSummary {
                score: self.score,
                total_questions: self.config.total_questions,
                streak: self.streak,
            });
            self.phase = Phase::Terminal;
        } else {
            self.index += 1;
            self.question = self.pool.next_question();
            self.phase = Phase::AwaitingAnswer;
        }
    }

    /// Drives the feedback countdown; advances when the deadline passes.
    pub fn on_tick(&mut self) {
        if matches!(self.phase, Phase::Feedback { .. }) && self.advance_timer.on_tick(TICK_RATE_MS)
        {
            self.advance();
        }
    }

    /// Cancels any pending auto-advance so a discarded session is never
    /// mutated behind the caller's back.
    pub fn abandon(&mut self) {
        self.advance_timer.cancel();
    }

    pub fn has_finished(&self) -> bool {
        self.phase == Phase::Terminal
    }

    pub fn accuracy_percent(&self) -> u32 {
        util::accuracy_percent(self.score, self.config.total_questions)
    }
}
