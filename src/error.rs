use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{origin}: at JSON path {path} → {message}")]
    Decode {
        origin: String,
        path: String,
        message: String,
    },
    #[error("{origin}: JSON pointer {pointer} selects nothing")]
    PointerMiss { origin: String, pointer: String },
    #[error("glob pattern matched no files: {0}")]
    EmptyGlob(String),
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
    #[error(transparent)]
    Glob(#[from] glob::GlobError),
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T, E = ModelError> = std::result::Result<T, E>;
