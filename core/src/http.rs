//! HTTP requests and responses described as plain data.
//!
//! # Design
//! `JournalClient` builds `HttpRequest` values and parses `HttpResponse`
//! values; only the `transport` module turns them into real network I/O.
//! Keeping the mapping as plain data makes every URL, method and
//! status-code decision testable without a server.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `JournalClient::build_*` methods and executed by
/// [`transport::execute`](crate::transport::execute).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by the transport after executing an `HttpRequest`, then passed
/// to `JournalClient::parse_*` methods for status checking and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
