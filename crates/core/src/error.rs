use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type for failures raised by trait implementations at the
/// engine and media seams.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Closed error taxonomy for gallery building, classification, and the
/// batch crop pipeline. Every variant is terminal for the enclosing run:
/// there are no retries and no partial results.
#[derive(Error, Debug)]
pub enum Error {
    #[error("image must be in jpeg extension: {path}")]
    WrongExtension { path: PathBuf },

    #[error("no faces are found for {path}")]
    NoFaceFound { path: PathBuf },

    #[error("expected exactly one face in {path}, found {count}")]
    TooManyFaces { path: PathBuf, count: usize },

    #[error("loading face engine models: {source}")]
    EngineLoad {
        #[source]
        source: BoxedError,
    },

    #[error("detecting faces in {path}: {source}")]
    Detection {
        path: PathBuf,
        #[source]
        source: BoxedError,
    },

    #[error("decoding or encoding {path}: {source}")]
    Codec {
        path: PathBuf,
        #[source]
        source: BoxedError,
    },

    #[error("reading or writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("gallery contains no entries")]
    GalleryEmpty,

    #[error("cancelled")]
    Cancelled,
}
