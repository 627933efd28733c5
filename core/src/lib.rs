//! Client for the journal-entry HTTP API.
//!
//! # Overview
//! Five operations — fetch, create, update, delete, analyze — each a single
//! request/response round trip against a configurable base address. The
//! client is stateless: every `JournalEntry` it returns is a direct decode
//! of a server response and nothing is cached between calls.
//!
//! # Design
//! - `JournalClient` holds only the resolved base address and the HTTP agent.
//! - Each operation is split into `build_*` (produces a request as plain
//!   data) and `parse_*` (consumes a response as plain data); the executing
//!   methods compose the two halves around one `ureq` round trip.
//! - Response bodies are validated against the entry shape at the boundary;
//!   a 2xx with an unexpected body is an error, not an unchecked value.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::JournalClient;
pub use config::Config;
pub use error::{ApiError, Op};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{AnalyzeEntry, CreateEntry, JournalEntry, UpdateEntry};
