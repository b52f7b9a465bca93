use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Where all-time stats live, alongside any future config.
    pub fn stats_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tablr")
            .map(|proj_dirs| proj_dirs.config_dir().join("stats.json"))
    }

    /// Where the per-session history log lives.
    pub fn history_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("tablr");
            Some(state_dir.join("sessions.csv"))
        } else {
            ProjectDirs::from("", "", "tablr")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("sessions.csv"))
        }
    }
}
