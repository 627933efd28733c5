//! `ureq`-backed execution of [`HttpRequest`] values.
//!
//! # Design
//! The builder/parser halves of the client never touch the network; this
//! module is the single place where a request becomes a real round trip.
//! The agent is expected to be configured with `http_status_as_error(false)`
//! so 4xx/5xx responses come back as data rather than `Err`, leaving status
//! interpretation to the client's `parse_*` methods.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Execute a request and return the response as plain data.
///
/// Only transport-level failures (connection refused, interrupted body
/// reads) become `Err`; any received status is returned in the
/// `HttpResponse` untouched.
pub fn execute(agent: &ureq::Agent, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let mut response = match (&req.method, &req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => agent
            .patch(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    }
    .map_err(|e| ApiError::Transport(Box::new(e)))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(Box::new(e)))?;

    debug!(method = ?req.method, path = %req.path, status, "journal API round trip");

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
