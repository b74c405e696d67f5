use std::path::PathBuf;
use std::time::Duration;

pub const ACTIVITY_FILE: &str = "cyclops_activity.txt";
pub const DEFAULT_AUTHOR_NAME: &str = "Cyclops";
pub const DEFAULT_AUTHOR_EMAIL: &str = "cyclops@github.com";
pub const DAY_PAUSE: Duration = Duration::from_millis(5);
pub const MAX_COMMITS_PER_DAY: u32 = 50;

/// Knobs for a run that are not part of the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub workdir: PathBuf,
    /// Relative to `workdir`.
    pub activity_file: PathBuf,
    pub author_name: String,
    pub author_email: String,
    pub day_pause: Duration,
    pub show_progress: bool,
}

impl RunConfig {
    pub fn new<P: Into<PathBuf>>(workdir: P) -> Self {
        Self {
            workdir: workdir.into(),
            ..Self::default()
        }
    }

    pub fn with_day_pause(mut self, pause: Duration) -> Self {
        self.day_pause = pause;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn activity_path(&self) -> PathBuf {
        self.workdir.join(&self.activity_file)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            workdir: PathBuf::from("."),
            activity_file: PathBuf::from(ACTIVITY_FILE),
            author_name: DEFAULT_AUTHOR_NAME.to_string(),
            author_email: DEFAULT_AUTHOR_EMAIL.to_string(),
            day_pause: DAY_PAUSE,
            show_progress: true,
        }
    }
}
