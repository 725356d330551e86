use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PronounceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No data file given and none configured")]
    MissingDataFile,
}

pub type PronounceResult<T> = Result<T, PronounceError>;
