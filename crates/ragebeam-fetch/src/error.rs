//! Error types for ragebeam-fetch.

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Stage of the portal workflow an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Auth,
    Retrieval,
    Download,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("wasn't able to log in: portal answered {0}")]
    LoginRejected(StatusCode),

    #[error("login request failed")]
    LoginTransport(#[source] reqwest::Error),

    #[error("download page answered {0}")]
    PageRejected(StatusCode),

    #[error(
        "wasn't able to get links list after {attempts} attempts{}",
        .last_status.map(|s| format!(" (last status {s})")).unwrap_or_default()
    )]
    NoLinks {
        attempts: u32,
        #[source]
        source: Option<reqwest::Error>,
        last_status: Option<StatusCode>,
    },

    #[error("can't download {url}: server answered {status}")]
    DownloadRejected { url: String, status: StatusCode },

    #[error("download of {url} failed")]
    DownloadTransport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("missing or malformed content-length header")]
    ContentLength,

    #[error("cannot derive a file name from {0}")]
    FileName(String),

    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// Workflow stage this error belongs to.
    pub fn phase(&self) -> Phase {
        match self {
            FetchError::LoginRejected(_) | FetchError::LoginTransport(_) => Phase::Auth,
            FetchError::PageRejected(_) | FetchError::NoLinks { .. } => Phase::Retrieval,
            FetchError::DownloadRejected { .. }
            | FetchError::DownloadTransport { .. }
            | FetchError::ContentLength
            | FetchError::FileName(_)
            | FetchError::Io { .. } => Phase::Download,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
