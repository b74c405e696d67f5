use crate::calendar::Date;
use chrono::NaiveDateTime;

/// Everything needed to fabricate one commit. Built, consumed, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub date: Date,
    pub sequence: u32,
    pub message: &'static str,
    pub session_minutes: u32,
    pub changed_lines: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CommitRequest {
    /// The forged author/committer time, seconds pinned to zero.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.date.to_naive()?.and_hms_opt(self.hour, self.minute, 0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub days_processed: u32,
    pub active_days: u32,
    pub total_commits: u32,
}

impl RunSummary {
    pub fn add_day(&mut self, commits: u32) {
        self.days_processed += 1;
        if commits > 0 {
            self.active_days += 1;
            self.total_commits += commits;
        }
    }

    pub fn average_per_active_day(&self) -> Option<f64> {
        if self.active_days == 0 {
            None
        } else {
            Some(self.total_commits as f64 / self.active_days as f64)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Initializing,
    Iterating,
    Recording,
    Committing,
    Finished,
    Failed,
}
