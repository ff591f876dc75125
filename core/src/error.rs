//! Error types for the probe.
//!
//! # Design
//! A probe either gets a response head or it does not. Everything that goes
//! wrong on the wire (DNS, connect, TLS, protocol) lands in `Network` with the
//! target URL and the transport's message. Descriptor and status validation
//! failures get their own variants so they can be told apart from transport
//! failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request failed before response headers were received.
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a status code outside 100-599.
    #[error("invalid HTTP status code {0}")]
    InvalidStatus(u16),

    /// A descriptor field was rejected while building the request.
    #[error("invalid request descriptor: {0}")]
    InvalidDescriptor(String),

    /// The task running the request panicked or was cancelled.
    #[error("probe task aborted: {0}")]
    Aborted(String),
}

impl ProbeError {
    pub fn network(url: impl Into<String>, message: impl ToString) -> Self {
        ProbeError::Network {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ProbeError::Network { .. })
    }
}
