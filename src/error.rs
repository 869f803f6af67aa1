use std::{io, path::PathBuf};

/// Every failure the renaming core can report.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Platform name is not one of `windows`, `macos`, `unix`.
    #[error("invalid platform '{0}' (expected one of: windows, macos, unix)")]
    InvalidPlatform(String),

    /// A replacement would reintroduce a forbidden character.
    #[error("replacement '{replacement}' for '{source_char}' contains a forbidden character")]
    ConflictingReplacement { source_char: char, replacement: String },

    /// A replacement contains non-ASCII text while ASCII-only output is required.
    #[error("replacement '{replacement}' for '{source_char}' is not ASCII")]
    NonAsciiReplacement { source_char: char, replacement: String },

    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("I/O error while accessing {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid replacement config {path}")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config key is not a single known forbidden character.
    #[error("unknown replacement key '{0}'")]
    UnknownReplacementKey(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
