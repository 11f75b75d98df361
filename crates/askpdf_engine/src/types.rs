use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type RequestId = u64;

/// Everything one backend round trip needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub files: Vec<PathBuf>,
    pub query: String,
}

/// Decoded backend reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnswer {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmitCompleted {
        request_id: RequestId,
        result: Result<QueryAnswer, SubmitError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Why a submission failed. Only ever logged; the user sees one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    ReadFile { path: PathBuf },
    Encode,
    InvalidUrl,
    Network,
    Timeout,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::ReadFile { path } => write!(f, "cannot read {}", path.display()),
            FailureKind::Encode => write!(f, "cannot encode multipart body"),
            FailureKind::InvalidUrl => write!(f, "invalid backend url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    HttpClient(String),
    #[error("engine thread stopped")]
    Stopped,
}
