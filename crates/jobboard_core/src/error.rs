use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport or connectivity failure.
    Network,
    /// Non-2xx response or an unreadable body.
    Server,
    /// Payload rejected by the server.
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Server => write!(f, "server error"),
            ErrorKind::Validation => write!(f, "validation error"),
        }
    }
}

/// A failed gateway call as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl GatewayFailure {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for GatewayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            f.write_str(&self.message)
        }
    }
}
