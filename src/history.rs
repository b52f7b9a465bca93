use chrono::Local;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::QuizError;
use crate::quiz::{Quiz, ResultSummary};
use crate::util;

/// One finished session as it lands in the log.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionRecord {
    pub date: String,
    pub tables: String,
    pub questions: usize,
    pub score: u32,
    pub accuracy: u32,
    pub streak: u32,
}

impl SessionRecord {
    pub fn from_session(quiz: &Quiz, summary: &ResultSummary) -> Self {
        Self {
            date: Local::now().format("%c").to_string(),
            tables: util::format_tables(&quiz.config.tables),
            questions: summary.total_questions,
            score: summary.score,
            accuracy: summary.accuracy_percent(),
            streak: summary.streak,
        }
    }
}

/// Append-only CSV log of finished sessions.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::history_path().unwrap_or_else(|| PathBuf::from("tablr_sessions.csv"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn append(&self, record: &SessionRecord) -> Result<(), QuizError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // The header is only emitted when the log is brand new.
        let needs_header = !self.path.exists();

        let log_file = OpenOptions::new()
            .write(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(log_file);
        writer.serialize(record)?;
        writer.flush()?;

        Ok(())
    }
}
