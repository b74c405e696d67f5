use chrono::{NaiveDateTime, Timelike};
use cyclops::calendar::Date;
use cyclops::config::RunConfig;
use cyclops::content::{ContentGenerator, COMMIT_MESSAGES};
use cyclops::error::{CyclopsError, Result};
use cyclops::git::VersionControl;
use cyclops::model::RunState;
use cyclops::orchestrator::Orchestrator;
use pretty_assertions::assert_eq;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Init,
    Identity(String, String),
    Stage(PathBuf),
    Commit(String, NaiveDateTime),
}

#[derive(Default)]
struct FakeVcs {
    initialized: Cell<bool>,
    fail_init: bool,
    fail_identity: bool,
    fail_commit_after: Option<usize>,
    calls: RefCell<Vec<Call>>,
}

impl FakeVcs {
    fn initialized() -> Self {
        let vcs = Self::default();
        vcs.initialized.set(true);
        vcs
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn commits(&self) -> Vec<(String, NaiveDateTime)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Commit(m, t) => Some((m.clone(), *t)),
                _ => None,
            })
            .collect()
    }
}

impl VersionControl for FakeVcs {
    fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    fn init(&self) -> Result<()> {
        self.calls.borrow_mut().push(Call::Init);
        if self.fail_init {
            return Err(CyclopsError::RepositoryInitFailed("permission denied".into()));
        }
        self.initialized.set(true);
        Ok(())
    }

    fn set_identity(&self, name: &str, email: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::Identity(name.to_string(), email.to_string()));
        if self.fail_identity {
            return Err(CyclopsError::collaborator("config", "locked"));
        }
        Ok(())
    }

    fn stage_file(&self, path: &Path) -> Result<()> {
        self.calls.borrow_mut().push(Call::Stage(path.to_path_buf()));
        Ok(())
    }

    fn commit(&self, message: &str, author_date: NaiveDateTime) -> Result<()> {
        if let Some(limit) = self.fail_commit_after {
            if self.commits().len() >= limit {
                return Err(CyclopsError::collaborator("commit", "index.lock exists"));
            }
        }
        self.calls
            .borrow_mut()
            .push(Call::Commit(message.to_string(), author_date));
        Ok(())
    }
}

fn quiet_config(dir: &Path) -> RunConfig {
    RunConfig::new(dir)
        .with_day_pause(Duration::ZERO)
        .with_progress(false)
}

fn date(s: &str) -> Date {
    Date::parse(s).unwrap()
}

/// Parse the activity file back into (date, sequence) headers, checking block shape.
fn activity_headers(path: &Path) -> Vec<(String, u32)> {
    let text = std::fs::read_to_string(path).unwrap_or_default();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len() % 5, 0, "blocks are four lines plus a blank");
    lines
        .chunks(5)
        .map(|block| {
            assert!(block[1].starts_with("// Session: "));
            assert!(block[1].ends_with(" minutes of development work"));
            assert!(block[2].starts_with("// Changes: "));
            assert!(block[2].ends_with(" lines modified"));
            assert_eq!(
                block[3],
                "/* Generated activity to demonstrate the meaninglessness of GitHub metrics */"
            );
            assert_eq!(block[4], "");
            let header = block[0].strip_prefix("// Activity log: ").unwrap();
            let (day, seq) = header.split_once(" #").unwrap();
            (day.to_string(), seq.parse().unwrap())
        })
        .collect()
}

#[test]
fn rejects_max_below_one() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs::initialized();
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(1), quiet_config(dir.path()));

    let err = orch.run(date("2024-01-01"), date("2024-01-01"), 0).unwrap_err();
    assert!(matches!(err, CyclopsError::OutOfRange(_)));
    assert_eq!(orch.state(), RunState::Failed);
    assert!(vcs.calls().is_empty());
}

#[test]
fn rejects_max_above_fifty() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs::initialized();
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(1), quiet_config(dir.path()));

    let err = orch.run(date("2024-01-01"), date("2024-01-02"), 51).unwrap_err();
    assert!(matches!(err, CyclopsError::OutOfRange(_)));
}

#[test]
fn rejects_reversed_range() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs::default();
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(1), quiet_config(dir.path()));

    let err = orch.run(date("2024-01-05"), date("2024-01-01"), 5).unwrap_err();
    assert!(matches!(err, CyclopsError::InvalidRange { .. }));
    assert!(vcs.calls().is_empty(), "validation happens before init");
}

#[test]
fn every_day_counts_even_without_commits() {
    for seed in 0..20 {
        let dir = tempdir().unwrap();
        let vcs = FakeVcs::initialized();
        let mut orch =
            Orchestrator::new(&vcs, ContentGenerator::seeded(seed), quiet_config(dir.path()));

        let summary = orch.run(date("2024-01-01"), date("2024-01-03"), 1).unwrap();
        assert_eq!(summary.days_processed, 3);
        assert!(summary.total_commits <= 3);
        assert_eq!(summary.total_commits as usize, vcs.commits().len());
        assert_eq!(summary.active_days, summary.total_commits);
        assert_eq!(orch.state(), RunState::Finished);
    }
}

#[test]
fn commits_are_forged_within_working_hours_on_their_day() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs::initialized();
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(3), quiet_config(dir.path()));

    let start = date("2024-02-25");
    let end = date("2024-03-05");
    let summary = orch.run(start, end, 6).unwrap();
    assert_eq!(summary.days_processed, 10);
    assert!(summary.total_commits > 0);

    let first = start.to_naive().unwrap();
    let last = end.to_naive().unwrap();
    for (message, ts) in vcs.commits() {
        assert!(COMMIT_MESSAGES.contains(&message.as_str()));
        assert!((8..=21).contains(&ts.hour()));
        assert!(ts.minute() < 60);
        assert_eq!(ts.second(), 0);
        assert!(ts.date() >= first && ts.date() <= last);
    }
}

#[test]
fn each_commit_stages_the_activity_file_first() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs::initialized();
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(11), quiet_config(dir.path()));
    orch.run(date("2024-01-01"), date("2024-01-10"), 4).unwrap();

    let calls = vcs.calls();
    assert_eq!(calls.len() % 2, 0);
    for pair in calls.chunks(2) {
        assert_eq!(pair[0], Call::Stage(PathBuf::from("cyclops_activity.txt")));
        assert!(matches!(pair[1], Call::Commit(..)));
    }
}

#[test]
fn activity_file_holds_one_block_per_commit_in_order() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs::initialized();
    let config = quiet_config(dir.path());
    let activity = config.activity_path();
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(8), config);

    let summary = orch.run(date("2023-12-28"), date("2024-01-04"), 5).unwrap();
    let headers = activity_headers(&activity);
    assert_eq!(headers.len(), summary.total_commits as usize);

    let commits = vcs.commits();
    for ((day, seq), (_, ts)) in headers.iter().zip(&commits) {
        assert_eq!(day, &ts.format("%Y-%m-%d").to_string());
        assert!(*seq >= 1);
    }
    for pair in headers.windows(2) {
        let (d0, s0) = &pair[0];
        let (d1, s1) = &pair[1];
        if d0 == d1 {
            assert_eq!(*s1, s0 + 1);
        } else {
            assert!(d0 < d1);
            assert_eq!(*s1, 1);
        }
    }
}

#[test]
fn initializes_missing_repository_with_identity() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs::default();
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(2), quiet_config(dir.path()));

    orch.ensure_repository_initialized().unwrap();
    assert_eq!(
        vcs.calls(),
        vec![
            Call::Init,
            Call::Identity("Cyclops".into(), "cyclops@github.com".into())
        ]
    );

    orch.ensure_repository_initialized().unwrap();
    assert_eq!(vcs.calls().len(), 2, "existing repository is left alone");
}

#[test]
fn identity_failure_is_tolerated() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs {
        fail_identity: true,
        ..FakeVcs::default()
    };
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(2), quiet_config(dir.path()));
    assert!(orch.ensure_repository_initialized().is_ok());
}

#[test]
fn init_failure_is_fatal() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs {
        fail_init: true,
        ..FakeVcs::default()
    };
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(2), quiet_config(dir.path()));

    let err = orch.run(date("2024-01-01"), date("2024-01-31"), 3).unwrap_err();
    assert!(matches!(err, CyclopsError::RepositoryInitFailed(_)));
    assert_eq!(orch.state(), RunState::Failed);
    assert!(vcs.commits().is_empty());
}

#[test]
fn first_collaborator_failure_aborts_the_run() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs {
        fail_commit_after: Some(2),
        ..FakeVcs::initialized()
    };
    let config = quiet_config(dir.path());
    let activity = config.activity_path();
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(4), config);

    let err = orch.run(date("2024-01-01"), date("2024-12-31"), 10).unwrap_err();
    assert!(matches!(
        err,
        CyclopsError::CollaboratorCallFailed { ref operation, .. } if operation == "commit"
    ));
    assert_eq!(orch.state(), RunState::Failed);
    assert_eq!(vcs.commits().len(), 2);
    // the failed commit's activity block was written before git was asked
    assert_eq!(activity_headers(&activity).len(), 3);
}

#[test]
fn unwritable_activity_file_is_fatal() {
    let dir = tempdir().unwrap();
    let vcs = FakeVcs::initialized();
    let mut config = quiet_config(dir.path());
    config.activity_file = PathBuf::from("missing-dir/activity.txt");
    let mut orch = Orchestrator::new(&vcs, ContentGenerator::seeded(6), config);

    let err = orch.run(date("2024-01-01"), date("2024-03-31"), 5).unwrap_err();
    assert!(matches!(err, CyclopsError::FileIo { .. }));
    assert!(vcs.commits().is_empty());
}
