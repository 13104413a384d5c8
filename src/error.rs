use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while classifying a flow document into subflows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no module metadata found in any subflow definition")]
    NoModuleMetadata,

    #[error("document contains no subflow nodes")]
    NoSubflowNodes,
}

/// Errors that can occur while resolving or applying a payload encoding.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("encoding not defined: {0}")]
    Unsupported(String),

    #[error("encoding '{0}' requires an encryption key")]
    MissingKey(String),

    #[error("payload encryption failed")]
    Cipher,

    #[error("failed to serialize payload before encoding: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur during a packaging run.
#[derive(Error, Debug)]
pub enum PackageError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),

    #[error("filesystem operation failed at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize subflow JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("a run-level package name is required for the per-subflow layouts")]
    MissingPackageName,
}

impl PackageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PackageError::Io {
            path: path.into(),
            source,
        }
    }
}
