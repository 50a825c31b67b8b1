use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("embedding error: {0}")]
    Embedding(String),

    #[error(
        "embedding dimension mismatch: index holds {expected}-dimensional \
         vectors, query produced {actual}"
    )]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("input directory not found: {0}")]
    InputDir(PathBuf),
}
