mod repo;

pub use repo::GitRepo;

use crate::error::Result;
use chrono::NaiveDateTime;
use std::path::Path;

/// The operations a run needs from the version-control tool.
///
/// Implementations report success or failure only; callers never inspect tool output.
pub trait VersionControl {
    fn is_initialized(&self) -> bool;

    fn init(&self) -> Result<()>;

    fn set_identity(&self, name: &str, email: &str) -> Result<()>;

    fn stage_file(&self, path: &Path) -> Result<()>;

    /// Commit staged changes with `author_date` used for both author and committer.
    fn commit(&self, message: &str, author_date: NaiveDateTime) -> Result<()>;
}

impl<T: VersionControl + ?Sized> VersionControl for &T {
    fn is_initialized(&self) -> bool {
        (**self).is_initialized()
    }

    fn init(&self) -> Result<()> {
        (**self).init()
    }

    fn set_identity(&self, name: &str, email: &str) -> Result<()> {
        (**self).set_identity(name, email)
    }

    fn stage_file(&self, path: &Path) -> Result<()> {
        (**self).stage_file(path)
    }

    fn commit(&self, message: &str, author_date: NaiveDateTime) -> Result<()> {
        (**self).commit(message, author_date)
    }
}
