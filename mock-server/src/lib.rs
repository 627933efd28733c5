use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub analyzed_content: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
pub struct CreateEntry {
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateEntry {
    pub content: String,
}

#[derive(Deserialize)]
pub struct AnalyzeEntry {
    pub content: String,
}

#[derive(Default)]
pub struct Journal {
    entries: HashMap<i64, JournalEntry>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Journal>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Journal::default()));
    Router::new()
        .route("/journal", post(create_entry))
        .route(
            "/journal/{id}",
            get(fetch_entry).patch(update_entry).delete(delete_entry),
        )
        .route("/journal/{id}/analyze", post(analyze_entry))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

/// Stand-in for the real analysis service, deterministic so tests can
/// assert on the output.
fn analyze(content: &str) -> String {
    let words = content.split_whitespace().count();
    format!("Reflection ({words} words): {content}")
}

async fn create_entry(
    State(db): State<Db>,
    Json(input): Json<CreateEntry>,
) -> (StatusCode, Json<JournalEntry>) {
    let mut journal = db.write().await;
    journal.next_id += 1;
    let stamp = now();
    let entry = JournalEntry {
        id: journal.next_id,
        content: input.content,
        analyzed_content: None,
        created_at: stamp.clone(),
        updated_at: stamp,
    };
    journal.entries.insert(entry.id, entry.clone());
    debug!(id = entry.id, "created entry");
    (StatusCode::CREATED, Json(entry))
}

async fn fetch_entry(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<JournalEntry>, StatusCode> {
    let journal = db.read().await;
    journal
        .entries
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_entry(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateEntry>,
) -> Result<Json<JournalEntry>, StatusCode> {
    let mut journal = db.write().await;
    let entry = journal.entries.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    entry.content = input.content;
    entry.updated_at = now();
    Ok(Json(entry.clone()))
}

async fn delete_entry(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut journal = db.write().await;
    let removed = journal.entries.remove(&id);
    if removed.is_some() {
        debug!(id, "deleted entry");
    }
    removed.map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn analyze_entry(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<AnalyzeEntry>,
) -> Result<Json<JournalEntry>, StatusCode> {
    let mut journal = db.write().await;
    let entry = journal.entries.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    // Analysis enriches the entry; the stored content stays as-is.
    entry.analyzed_content = Some(analyze(&input.content));
    entry.updated_at = now();
    Ok(Json(entry.clone()))
}
