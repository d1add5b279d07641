use http::StatusCode;
use thiserror::Error;

/// A fault reported by the cluster API, or by the transport in front of it.
///
/// The gateway never classifies these further; it only carries the code and
/// message through to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteFault {
    /// The API server answered with a Status object.
    #[error("({code}) Reason: {reason}: {message}")]
    Status {
        code: u16,
        reason: String,
        message: String,
    },

    /// No status came back (connection refused, TLS, decode).
    #[error("{0}")]
    Transport(String),
}

impl RemoteFault {
    /// An empty `reason` is replaced by the canonical HTTP phrase for `code`.
    pub fn status(code: u16, reason: impl Into<String>, message: impl Into<String>) -> Self {
        let mut reason = reason.into();
        if reason.is_empty() {
            reason = StatusCode::from_u16(code)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown")
                .to_string();
        }

        RemoteFault::Status {
            code,
            reason,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        RemoteFault::Transport(message.into())
    }

    pub fn code(&self) -> Option<u16> {
        match self {
            RemoteFault::Status { code, .. } => Some(*code),
            RemoteFault::Transport(_) => None,
        }
    }
}

impl From<kube::Error> for RemoteFault {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) => {
                RemoteFault::status(resp.code, resp.reason.clone(), resp.message.clone())
            }
            other => RemoteFault::transport(other.to_string()),
        }
    }
}
