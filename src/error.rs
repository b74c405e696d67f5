use thiserror::Error;

pub type Result<T> = std::result::Result<T, CyclopsError>;

#[derive(Error, Debug)]
pub enum CyclopsError {
    #[error("Invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidFormat(String),
    #[error("Out of range: {0}")]
    OutOfRange(String),
    #[error("Invalid range: start ({start}) is after end ({end})")]
    InvalidRange { start: String, end: String },
    #[error("Failed to initialize git repository: {0}")]
    RepositoryInitFailed(String),
    #[error("Cannot write activity file {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("git {operation} failed: {message}")]
    CollaboratorCallFailed { operation: String, message: String },
}

impl CyclopsError {
    pub fn collaborator(operation: impl Into<String>, message: impl Into<String>) -> Self {
        CyclopsError::CollaboratorCallFailed {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
