use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::QuizError;
use crate::quiz::ResultSummary;

/// All-time totals carried across sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeStats {
    /// Sum of every finished session's score.
    pub cumulative_score: u64,
    /// Highest terminal streak ever reached.
    pub cumulative_streak: u32,
}

impl CumulativeStats {
    pub fn record(&mut self, summary: &ResultSummary) {
        self.cumulative_score += u64::from(summary.score);
        self.cumulative_streak = self.cumulative_streak.max(summary.streak);
    }
}

pub trait StatsStore {
    fn load(&self) -> CumulativeStats;
    fn save(&self, stats: &CumulativeStats) -> Result<(), QuizError>;
}

#[derive(Debug, Clone)]
pub struct FileStatsStore {
    path: PathBuf,
}

impl FileStatsStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::stats_path().unwrap_or_else(|| PathBuf::from("tablr_stats.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileStatsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsStore for FileStatsStore {
    fn load(&self) -> CumulativeStats {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(stats) = serde_json::from_slice::<CumulativeStats>(&bytes) {
                return stats;
            }
        }
        CumulativeStats::default()
    }

    fn save(&self, stats: &CumulativeStats) -> Result<(), QuizError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(stats).unwrap_or_default();
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Folds a finished session into the stored totals and returns the new
/// totals. A store that cannot be written to still returns the updated
/// in-memory value; losing a write never interrupts play.
pub fn record(store: &dyn StatsStore, summary: &ResultSummary) -> CumulativeStats {
    let mut stats = store.load();
    stats.record(summary);
    let _ = store.save(&stats);
    stats
}

/// Zeroes the stored totals.
pub fn reset(store: &dyn StatsStore) -> CumulativeStats {
    let stats = CumulativeStats::default();
    let _ = store.save(&stats);
    stats
}
