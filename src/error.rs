use std::path::PathBuf;

// The animation itself never fails; these all come from config files and flags.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid option `{field}`: {reason}")]
    InvalidOption { field: &'static str, reason: String },

    #[error("invalid hex color `{0}`, expected RRGGBB (e.g. 1a1b26)")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
