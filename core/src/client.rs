//! Stateless request builder, executor and response parser for the journal
//! API.
//!
//! # Design
//! `JournalClient` holds the resolved base address and one `ureq` agent and
//! carries no other state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; the public `fetch_entry` /
//! `create_entry` / `update_entry` / `delete_entry` / `analyze_entry`
//! operations compose the two halves around a single round trip. The split
//! keeps every URL and status-code decision testable as plain data.

use std::fmt;

use crate::config::Config;
use crate::error::{ApiError, Op};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{AnalyzeEntry, CreateEntry, JournalEntry, UpdateEntry};

/// Client for the journal API.
///
/// Stateless between calls and cheap to clone; concurrent use from several
/// threads needs no coordination. Every entry it returns is a direct decode
/// of a server response.
#[derive(Clone)]
pub struct JournalClient {
    base_url: String,
    agent: ureq::Agent,
}

impl fmt::Debug for JournalClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JournalClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl JournalClient {
    /// Build a client from an explicit configuration.
    pub fn new(config: Config) -> Self {
        // Non-2xx statuses are data to this client, not transport errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    /// Build a client from `JOURNAL_API_URL`, defaulting to the local
    /// development server.
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// Fetch one entry by id (GET `{base}/journal/{id}`).
    pub fn fetch_entry(&self, id: i64) -> Result<JournalEntry, ApiError> {
        let req = self.build_fetch_entry(id);
        self.parse_fetch_entry(transport::execute(&self.agent, &req)?)
    }

    /// Create an entry (POST `{base}/journal`); the server assigns the id
    /// and timestamps.
    pub fn create_entry(&self, content: &str) -> Result<JournalEntry, ApiError> {
        let input = CreateEntry {
            content: content.to_string(),
        };
        let req = self.build_create_entry(&input)?;
        self.parse_create_entry(transport::execute(&self.agent, &req)?)
    }

    /// Replace an entry's content (PATCH `{base}/journal/{id}`).
    pub fn update_entry(&self, id: i64, content: &str) -> Result<JournalEntry, ApiError> {
        let input = UpdateEntry {
            content: content.to_string(),
        };
        let req = self.build_update_entry(id, &input)?;
        self.parse_update_entry(transport::execute(&self.agent, &req)?)
    }

    /// Delete an entry (DELETE `{base}/journal/{id}`).
    pub fn delete_entry(&self, id: i64) -> Result<(), ApiError> {
        let req = self.build_delete_entry(id);
        self.parse_delete_entry(transport::execute(&self.agent, &req)?)
    }

    /// Request analysis of an entry (POST `{base}/journal/{id}/analyze`);
    /// the returned entry has `analyzed_content` populated.
    pub fn analyze_entry(&self, id: i64, content: &str) -> Result<JournalEntry, ApiError> {
        let input = AnalyzeEntry {
            content: content.to_string(),
        };
        let req = self.build_analyze_entry(id, &input)?;
        self.parse_analyze_entry(transport::execute(&self.agent, &req)?)
    }

    pub fn build_fetch_entry(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/journal/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_entry(&self, input: &CreateEntry) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/journal", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_entry(&self, id: i64, input: &UpdateEntry) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/journal/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_entry(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/journal/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_analyze_entry(&self, id: i64, input: &AnalyzeEntry) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/journal/{id}/analyze", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_fetch_entry(&self, response: HttpResponse) -> Result<JournalEntry, ApiError> {
        check_status(Op::Fetch, &response)?;
        decode_entry(Op::Fetch, &response.body)
    }

    pub fn parse_create_entry(&self, response: HttpResponse) -> Result<JournalEntry, ApiError> {
        check_status(Op::Create, &response)?;
        decode_entry(Op::Create, &response.body)
    }

    pub fn parse_update_entry(&self, response: HttpResponse) -> Result<JournalEntry, ApiError> {
        check_status(Op::Update, &response)?;
        decode_entry(Op::Update, &response.body)
    }

    pub fn parse_delete_entry(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(Op::Delete, &response)
    }

    pub fn parse_analyze_entry(&self, response: HttpResponse) -> Result<JournalEntry, ApiError> {
        check_status(Op::Analyze, &response)?;
        decode_entry(Op::Analyze, &response.body)
    }
}

/// Any 2xx is success; everything else becomes a `Status` error naming the
/// failed operation.
fn check_status(op: Op, response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Status {
        op,
        status: response.status,
        body: response.body.clone(),
    })
}

/// Validate a 2xx body against the entry shape instead of trusting it.
fn decode_entry(op: Op, body: &str) -> Result<JournalEntry, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        op,
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> JournalClient {
        JournalClient::new(Config::new("http://localhost:8000"))
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    const ENTRY_JSON: &str =
        r#"{"id":1,"content":"hello","created_at":"t0","updated_at":"t0"}"#;

    #[test]
    fn build_fetch_entry_produces_correct_request() {
        let req = client().build_fetch_entry(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/journal/42");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_entry_produces_correct_request() {
        let input = CreateEntry {
            content: "Dear diary".to_string(),
        };
        let req = client().build_create_entry(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/journal");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"content": "Dear diary"}));
    }

    #[test]
    fn build_update_entry_uses_patch() {
        let input = UpdateEntry {
            content: "Revised".to_string(),
        };
        let req = client().build_update_entry(7, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:8000/journal/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["content"], "Revised");
    }

    #[test]
    fn build_delete_entry_produces_correct_request() {
        let req = client().build_delete_entry(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8000/journal/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_analyze_entry_targets_the_analyze_route() {
        let input = AnalyzeEntry {
            content: "hello".to_string(),
        };
        let req = client().build_analyze_entry(7, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/journal/7/analyze");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"content": "hello"}));
    }

    #[test]
    fn parse_fetch_entry_success() {
        let entry = client().parse_fetch_entry(response(200, ENTRY_JSON)).unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.content, "hello");
        assert!(entry.analyzed_content.is_none());
    }

    #[test]
    fn parse_fetch_entry_not_found() {
        let err = client().parse_fetch_entry(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Status { op: Op::Fetch, status: 404, .. }));
        assert_eq!(err.to_string(), "Failed to fetch journal entry: HTTP 404");
    }

    #[test]
    fn parse_create_entry_success() {
        let entry = client().parse_create_entry(response(201, ENTRY_JSON)).unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.content, "hello");
        assert_eq!(entry.created_at, "t0");
        assert_eq!(entry.updated_at, "t0");
    }

    #[test]
    fn parse_create_entry_accepts_any_2xx() {
        assert!(client().parse_create_entry(response(200, ENTRY_JSON)).is_ok());
    }

    #[test]
    fn parse_create_entry_server_error() {
        let err = client()
            .parse_create_entry(response(500, "internal error"))
            .unwrap_err();
        match err {
            ApiError::Status { op, status, body } => {
                assert_eq!(op, Op::Create);
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_update_entry_success() {
        let body = r#"{"id":1,"content":"revised","created_at":"t0","updated_at":"t1"}"#;
        let entry = client().parse_update_entry(response(200, body)).unwrap();
        assert_eq!(entry.content, "revised");
        assert_eq!(entry.updated_at, "t1");
    }

    #[test]
    fn parse_delete_entry_success_returns_nothing() {
        assert!(client().parse_delete_entry(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_entry_not_found() {
        let err = client().parse_delete_entry(response(404, "")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete journal entry: HTTP 404");
    }

    #[test]
    fn parse_analyze_entry_populates_analysis() {
        let body = r#"{"id":1,"content":"hello","analyzed_content":"hello, considered","created_at":"t0","updated_at":"t1"}"#;
        let entry = client().parse_analyze_entry(response(200, body)).unwrap();
        assert_eq!(entry.content, "hello");
        assert_eq!(entry.analyzed_content.as_deref(), Some("hello, considered"));
    }

    #[test]
    fn parse_analyze_entry_not_found() {
        let err = client().parse_analyze_entry(response(404, "")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to analyze journal entry: HTTP 404");
    }

    #[test]
    fn parse_fetch_entry_bad_json_is_a_decode_error() {
        let err = client()
            .parse_fetch_entry(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { op: Op::Fetch, .. }));
    }

    #[test]
    fn parse_fetch_entry_wrong_shape_is_a_decode_error() {
        // 2xx with a body missing required fields must not pass through.
        let err = client()
            .parse_fetch_entry(response(200, r#"{"id":1}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = JournalClient::new(Config::new("http://localhost:8000/"));
        let req = client.build_fetch_entry(1);
        assert_eq!(req.path, "http://localhost:8000/journal/1");
    }
}
