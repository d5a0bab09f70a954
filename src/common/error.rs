use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read snapshot {path}: {source}")]
    SnapshotOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to load configuration: {0}")]
    Config(Box<figment::Error>),
    #[error("invalid configuration: {message}")]
    ConfigValidation { message: String },
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("donor {name} has not made any donations")]
    NoDonations { name: String },
    #[error("no donor named {name}")]
    DonorNotFound { name: String },
    #[error("a donor named {name} already exists")]
    DuplicateDonor { name: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl AppError {
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// True when a snapshot could not be read because it does not exist yet.
    pub fn is_missing_snapshot(&self) -> bool {
        matches!(
            self,
            Self::SnapshotOpen { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
