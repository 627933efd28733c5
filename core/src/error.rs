//! Error types for the journal API client.
//!
//! # Design
//! Every non-2xx response lands in `Status`, whose message names the
//! operation that failed the way the API's own clients phrase it
//! ("Failed to fetch journal entry"). A 2xx response whose body does not
//! match the entry shape is a distinct `Decode` error rather than an
//! unchecked value handed to the caller. Transport failures carry the
//! underlying `ureq` error untranslated.

use std::fmt;

/// The logical operation an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Fetch,
    Create,
    Update,
    Delete,
    Analyze,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Op::Fetch => "fetch",
            Op::Create => "create",
            Op::Update => "update",
            Op::Delete => "delete",
            Op::Analyze => "analyze",
        };
        f.write_str(verb)
    }
}

/// Errors returned by `JournalClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Status { op: Op, status: u16, body: String },

    /// A 2xx response body did not decode into the expected entry shape.
    Decode { op: Op, detail: String },

    /// The request payload could not be serialized to JSON.
    Encode(String),

    /// The HTTP round trip failed before any status was available.
    Transport(Box<ureq::Error>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { op, status, .. } => {
                write!(f, "Failed to {op} journal entry: HTTP {status}")
            }
            ApiError::Decode { op, detail } => {
                write!(f, "Failed to {op} journal entry: unexpected response body: {detail}")
            }
            ApiError::Encode(detail) => {
                write!(f, "request serialization failed: {detail}")
            }
            ApiError::Transport(source) => {
                write!(f, "HTTP transport error: {source}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ureq::Error> for ApiError {
    fn from(source: ureq::Error) -> Self {
        ApiError::Transport(Box::new(source))
    }
}
