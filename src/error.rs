use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    // --- I/O ---
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // --- Network ---
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedUrl(String),

    #[error("Download of {url} failed: {reason}")]
    Download { url: String, reason: String },

    // --- Archives ---
    #[error("Failed to unpack {path}: {reason}")]
    Unpack { path: PathBuf, reason: String },

    // --- Shards ---
    #[error("Invalid JSON in {path} at line {line}: {source}")]
    ShardJson {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("Dataset empty: {path}")]
    DatasetEmpty { path: PathBuf },

    // --- Extractor ---
    #[error("Failed to launch extractor `{command}`: {source}")]
    ExtractorSpawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Extractor exited with {status}")]
    ExtractorFailed { status: std::process::ExitStatus },
}

pub type Result<T> = std::result::Result<T, CorpusError>;
