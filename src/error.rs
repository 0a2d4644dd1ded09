use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("snapshot parse error: {0}")]
    SnapshotParse(String),

    #[error("unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("dbt artifact error: {0}")]
    DbtParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReadinessError>;
