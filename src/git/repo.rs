use super::VersionControl;
use crate::error::{CyclopsError, Result};
use chrono::NaiveDateTime;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Format git accepts for `--date` and `GIT_COMMITTER_DATE` without an offset.
const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Drives the `git` binary inside a working directory.
pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Use `path` as the working tree, or the current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir().map_err(|e| {
                CyclopsError::collaborator("open", format!("cannot resolve current dir: {e}"))
            })?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn git<I, S>(&self, operation: &str, args: I, envs: &[(&str, &str)]) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.path).args(args);
        for (key, value) in envs {
            cmd.env(key, value);
        }
        debug!(operation, ?cmd, "running git");

        let output = cmd
            .output()
            .map_err(|e| CyclopsError::collaborator(operation, format!("cannot run git: {e}")))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let message = match (stderr.is_empty(), stdout.is_empty()) {
            (false, _) => stderr,
            (true, false) => stdout,
            (true, true) => format!("exited with {}", output.status),
        };
        Err(CyclopsError::collaborator(operation, message))
    }
}

impl VersionControl for GitRepo {
    fn is_initialized(&self) -> bool {
        self.path.join(".git").exists()
    }

    fn init(&self) -> Result<()> {
        self.git("init", ["init"], &[]).map_err(|e| match e {
            CyclopsError::CollaboratorCallFailed { message, .. } => {
                CyclopsError::RepositoryInitFailed(message)
            }
            other => other,
        })
    }

    fn set_identity(&self, name: &str, email: &str) -> Result<()> {
        self.git("config", ["config", "user.name", name], &[])?;
        self.git("config", ["config", "user.email", email], &[])
    }

    fn stage_file(&self, path: &Path) -> Result<()> {
        self.git(
            "add",
            [OsStr::new("add"), OsStr::new("--"), path.as_os_str()],
            &[],
        )
    }

    fn commit(&self, message: &str, author_date: NaiveDateTime) -> Result<()> {
        let date = author_date.format(GIT_DATE_FORMAT).to_string();
        let date_arg = format!("--date={date}");
        self.git(
            "commit",
            ["commit", "--quiet", date_arg.as_str(), "-m", message],
            &[("GIT_AUTHOR_DATE", date.as_str()), ("GIT_COMMITTER_DATE", date.as_str())],
        )
    }
}
