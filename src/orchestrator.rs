use crate::activity::ActivityRecorder;
use crate::calendar::Date;
use crate::config::{RunConfig, MAX_COMMITS_PER_DAY};
use crate::content::ContentGenerator;
use crate::error::{CyclopsError, Result};
use crate::git::VersionControl;
use crate::model::{CommitRequest, RunState, RunSummary};
use crate::report;
use rand::Rng;
use std::thread;
use tracing::{debug, info, warn};

/// Walks a date range and fabricates commits through a [`VersionControl`].
pub struct Orchestrator<V: VersionControl, R: Rng> {
    vcs: V,
    generator: ContentGenerator<R>,
    recorder: ActivityRecorder,
    config: RunConfig,
    state: RunState,
}

impl<V: VersionControl, R: Rng> Orchestrator<V, R> {
    pub fn new(vcs: V, generator: ContentGenerator<R>, config: RunConfig) -> Self {
        let recorder = ActivityRecorder::new(config.activity_path());
        Self {
            vcs,
            generator,
            recorder,
            config,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "state transition");
            self.state = next;
        }
    }

    pub fn ensure_repository_initialized(&mut self) -> Result<()> {
        self.transition(RunState::Initializing);
        if self.vcs.is_initialized() {
            return Ok(());
        }

        println!("Initializing Git repository...");
        self.vcs.init().map_err(|e| match e {
            err @ CyclopsError::RepositoryInitFailed(_) => err,
            other => CyclopsError::RepositoryInitFailed(other.to_string()),
        })?;
        if let Err(e) = self
            .vcs
            .set_identity(&self.config.author_name, &self.config.author_email)
        {
            warn!(error = %e, "could not set default committer identity");
        }
        Ok(())
    }

    pub fn run(&mut self, start: Date, end: Date, max_per_day: u32) -> Result<RunSummary> {
        let result = self.run_inner(start, end, max_per_day);
        match &result {
            Ok(summary) => {
                self.transition(RunState::Finished);
                info!(
                    days = summary.days_processed,
                    commits = summary.total_commits,
                    "run finished"
                );
            }
            Err(e) => {
                self.transition(RunState::Failed);
                warn!(error = %e, "run failed");
            }
        }
        result
    }

    fn run_inner(&mut self, start: Date, end: Date, max_per_day: u32) -> Result<RunSummary> {
        validate(start, end, max_per_day)?;
        self.ensure_repository_initialized()?;

        self.transition(RunState::Iterating);
        let pb = report::day_progress(start.days_until_inclusive(&end), self.config.show_progress);
        let mut summary = RunSummary::default();

        for date in start.through(end) {
            let commits = self.generator.pick_commit_count(max_per_day);
            if commits > 0 {
                pb.suspend(|| println!("{}", report::day_line(date, commits)));
                for sequence in 1..=commits {
                    let request = self.generator.draft_commit(date, sequence);
                    if let Err(e) = self.commit_one(&request) {
                        pb.abandon();
                        eprintln!("Failed to create commit {sequence} for {date}");
                        return Err(e);
                    }
                }
            }
            summary.add_day(commits);
            self.transition(RunState::Iterating);
            pb.inc(1);

            if !self.config.day_pause.is_zero() {
                thread::sleep(self.config.day_pause);
            }
        }

        pb.finish_and_clear();
        Ok(summary)
    }

    fn commit_one(&mut self, request: &CommitRequest) -> Result<()> {
        self.transition(RunState::Recording);
        self.recorder.record(request)?;

        self.transition(RunState::Committing);
        self.vcs.stage_file(&self.config.activity_file)?;
        let timestamp = request.timestamp().ok_or_else(|| {
            CyclopsError::OutOfRange(format!(
                "{} {:02}:{:02} is not a valid time",
                request.date, request.hour, request.minute
            ))
        })?;
        debug!(
            date = %request.date,
            sequence = request.sequence,
            %timestamp,
            subject = request.message,
            "creating commit"
        );
        self.vcs.commit(request.message, timestamp)
    }
}

/// Range and count checks, done before touching the repository.
pub fn validate(start: Date, end: Date, max_per_day: u32) -> Result<()> {
    if start > end {
        return Err(CyclopsError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    if !(1..=MAX_COMMITS_PER_DAY).contains(&max_per_day) {
        return Err(CyclopsError::OutOfRange(format!(
            "max_commits_per_day must be between 1 and {MAX_COMMITS_PER_DAY}, got {max_per_day}"
        )));
    }
    Ok(())
}
