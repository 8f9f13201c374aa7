use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unreadable analyzer output: {0}")]
    AnalyzerOutput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MirrorError>;
