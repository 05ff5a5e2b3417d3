use std::fmt;

use scout_core::{Generation, Repository, RequestOutcome};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The debounce window for `generation` elapsed without being superseded.
    TimerElapsed { generation: Generation },
    FetchCompleted {
        generation: Generation,
        page: u32,
        result: Result<Vec<Repository>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Api { status } => Some(status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// No response was received.
    Transport,
    Timeout,
    /// The API answered with a non-success status, e.g. 403/422 when rate limited.
    Api { status: u16 },
    /// The response body was not the expected JSON shape.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Transport => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Api { status } => write!(f, "api error {status}"),
            FailureKind::Decode => write!(f, "decode error"),
        }
    }
}

/// Collapses a transport result into the coordinator's outcome type.
pub fn outcome_from(result: Result<Vec<Repository>, FetchError>) -> RequestOutcome {
    match result {
        Ok(items) => RequestOutcome::Success(items),
        Err(err) => RequestOutcome::Failure {
            status: err.status(),
            message: err.to_string(),
        },
    }
}
