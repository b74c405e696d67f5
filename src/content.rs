use crate::calendar::Date;
use crate::model::CommitRequest;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

pub const COMMIT_MESSAGES: [&str; 24] = [
    "Refactor authentication module",
    "Add comprehensive unit tests",
    "Optimize database queries",
    "Fix memory leak in parser",
    "Implement rate limiting middleware",
    "Update API documentation",
    "Add input validation layer",
    "Improve error handling",
    "Optimize build pipeline",
    "Add monitoring metrics",
    "Implement caching strategy",
    "Fix cross-platform compatibility",
    "Add security headers",
    "Optimize image compression",
    "Implement async processing",
    "Add logging framework",
    "Fix race condition bug",
    "Update dependency versions",
    "Add feature toggles",
    "Implement data migration",
    "Add integration tests",
    "Fix CSS responsiveness",
    "Optimize network requests",
    "Add encryption support",
];

pub const SESSION_MINUTES: std::ops::RangeInclusive<u32> = 30..=210;
pub const CHANGED_LINES: std::ops::RangeInclusive<u32> = 10..=110;
pub const WORK_HOURS: std::ops::RangeInclusive<u32> = 8..=21;

/// Draws every random value a run needs from one generator.
pub struct ContentGenerator<R: Rng = StdRng> {
    rng: R,
}

impl ContentGenerator<StdRng> {
    /// Seeded once from the wall clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(nanos)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ContentGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Zero is a legitimate draw: not every day has activity.
    pub fn pick_commit_count(&mut self, max_per_day: u32) -> u32 {
        self.rng.gen_range(0..=max_per_day)
    }

    pub fn pick_message(&mut self) -> &'static str {
        COMMIT_MESSAGES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(COMMIT_MESSAGES[0])
    }

    pub fn pick_session_minutes(&mut self) -> u32 {
        self.rng.gen_range(SESSION_MINUTES)
    }

    pub fn pick_changed_lines(&mut self) -> u32 {
        self.rng.gen_range(CHANGED_LINES)
    }

    pub fn pick_time_of_day(&mut self) -> (u32, u32) {
        let hour = self.rng.gen_range(WORK_HOURS);
        let minute = self.rng.gen_range(0..60);
        (hour, minute)
    }

    pub fn draft_commit(&mut self, date: Date, sequence: u32) -> CommitRequest {
        let session_minutes = self.pick_session_minutes();
        let changed_lines = self.pick_changed_lines();
        let message = self.pick_message();
        let (hour, minute) = self.pick_time_of_day();
        CommitRequest {
            date,
            sequence,
            message,
            session_minutes,
            changed_lines,
            hour,
            minute,
        }
    }
}
