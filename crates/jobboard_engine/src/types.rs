use std::fmt;

use jobboard_core::{Job, JobId, JobPage, RequestSeq};
use thiserror::Error;

/// Completion of one engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Listed {
        seq: RequestSeq,
        result: Result<JobPage, GatewayError>,
    },
    Created {
        result: Result<Job, GatewayError>,
    },
    Updated {
        id: JobId,
        result: Result<Job, GatewayError>,
    },
    Deleted {
        id: JobId,
        result: Result<(), GatewayError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GatewayError {
    pub kind: FailureKind,
    pub message: String,
}

impl GatewayError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True for 4xx responses.
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind, FailureKind::HttpStatus(code) if (400..500).contains(&code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    MalformedResponse,
    InvalidPayload,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::InvalidPayload => write!(f, "invalid payload"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
