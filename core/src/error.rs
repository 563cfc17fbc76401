//! Error type for the posts access layer.
//!
//! # Design
//! Every failure a caller can observe from the access layer is a
//! `RemoteRequestError`. Non-2xx responses carry the raw status code; the
//! rendered message is the exact string the form and list components
//! surface to their `error` field, so it is part of the observable
//! contract. Transport failures carry whatever description the underlying
//! transport provides.

use std::fmt;

/// Errors returned by the posts access layer.
#[derive(Debug)]
pub enum RemoteRequestError {
    /// The server answered with a non-success status.
    Http { status: u16 },

    /// The request never completed — connection refused, DNS failure,
    /// broken pipe and the like. Carries the transport's own description.
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for RemoteRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteRequestError::Http { status } => {
                write!(f, "HTTP error! status: {status}")
            }
            RemoteRequestError::Transport(msg) => write!(f, "{msg}"),
            RemoteRequestError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            RemoteRequestError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for RemoteRequestError {}
