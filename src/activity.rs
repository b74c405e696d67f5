use crate::error::{CyclopsError, Result};
use crate::model::CommitRequest;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ActivityRecorder {
    path: PathBuf,
}

impl ActivityRecorder {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append one block for `request`. The file is reopened for every write.
    pub fn record(&self, request: &CommitRequest) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(format_entry(request).as_bytes())
            .map_err(|e| self.io_error(e))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> CyclopsError {
        CyclopsError::FileIo {
            path: self.path.display().to_string(),
            source,
        }
    }
}

pub fn format_entry(request: &CommitRequest) -> String {
    format!(
        "// Activity log: {} #{}\n\
         // Session: {} minutes of development work\n\
         // Changes: {} lines modified\n\
         /* Generated activity to demonstrate the meaninglessness of GitHub metrics */\n\n",
        request.date, request.sequence, request.session_minutes, request.changed_lines
    )
}
