//! Domain DTOs for the journal API.
//!
//! # Design
//! Every `JournalEntry` field is server-owned: ids are assigned on create
//! and the timestamps are maintained server-side. The client never builds
//! an entry locally; each value is a direct decode of a response body.
//! DTOs are defined independently from the mock-server crate; integration
//! tests catch any schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single journal entry returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: i64,
    pub content: String,
    /// Present only after a successful analysis request.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub analyzed_content: Option<String>,
    /// RFC 3339 string, server-maintained; the client treats it as opaque text.
    pub created_at: String,
    pub updated_at: String,
}

/// Request payload for creating a new entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntry {
    pub content: String,
}

/// Request payload for replacing an entry's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEntry {
    pub content: String,
}

/// Request payload for an analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeEntry {
    pub content: String,
}
