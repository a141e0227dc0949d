//! Error types shared by the runner and the transport.
//!
//! Per-asset failures never escape the runner: a non-200 status becomes
//! `AssetStatus::FailedHttp` and a `TransportError` becomes
//! `AssetStatus::FailedException`. Only `FilesystemError` ends a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal filesystem failures outside the per-asset scope.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("cannot create save directory {}: {source}", path.display())]
    CreateSaveDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write manifest {}: {source}", path.display())]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read manifest {}: {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single GET before a status code could be acted on.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("transfer failed: {0}")]
    Other(String),

    /// The response body could not be written locally.
    #[error("writing response body failed: {0}")]
    Sink(#[source] io::Error),
}
