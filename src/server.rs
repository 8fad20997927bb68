//! HTTP adapter around the shared anagram index.
//!
//! ## Endpoints
//!
//! - `GET /anagrams/{word}.json[?limit=N]` - anagrams of a word
//! - `POST /words.json` - add words, body `{"words": [...]}`
//! - `DELETE /words.json` - clear the index
//! - `DELETE /words/{word}.json` - delete a single word
//! - `GET /stats.json` - number of groups and words
//! - `/shutdown` - graceful shutdown

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::*;
use crate::error::Error;
use crate::shared::*;
use crate::types::*;

///State handed to every handler
#[derive(Clone,Debug)]
pub struct AppState {
    pub index: SharedIndex,
    shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(index: SharedIndex) -> AppState {
        AppState {
            index,
            shutdown: Arc::new(Notify::new()),
        }
    }

    ///Ask the server to stop accepting connections and finish in-flight requests
    pub fn request_shutdown(&self) {
        self.shutdown.notify_one();
    }
}

#[derive(Debug,Deserialize)]
pub struct WordsRequest {
    #[serde(alias = "Words")]
    pub words: Vec<Word>,
}

#[derive(Debug,Serialize,Deserialize)]
pub struct AnagramsResponse {
    pub anagrams: Vec<Word>,
}

#[derive(Debug,Serialize)]
struct MessageResponse {
    message: &'static str,
}

///Client errors, rendered as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            ApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
        };
        (status, Json(serde_json::json!({ "error": error }))).into_response()
    }
}

///Create the router with all endpoints
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/anagrams/:file", get(get_anagrams))
        .route("/words.json", post(create_words).delete(delete_all_words))
        .route("/words/:file", delete(delete_word))
        .route("/stats.json", get(get_stats))
        .route("/shutdown", any(shutdown))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

///Word from a `{word}.json` path segment
fn word_from_file(file: &str) -> Result<&str, ApiError> {
    match file.strip_suffix(".json") {
        Some(word) if !word.is_empty() => Ok(word),
        _ => Err(ApiError::NotFound),
    }
}

///The first `limit` of a query string; later repetitions are ignored
fn first_limit(params: &[(String, String)]) -> Option<&str> {
    params.iter().find(|(name, _)| name == "limit").map(|(_, value)| value.as_str())
}

///`limit` must be a non-negative integer when present
fn parse_limit(limit: Option<&str>) -> Result<Option<usize>, ApiError> {
    match limit {
        None => Ok(None),
        Some(limit) => limit.trim().parse::<usize>().map(Some).map_err(|_| {
            ApiError::BadRequest(format!("limit should be a non-negative integer, got {:?}", limit))
        }),
    }
}

///GET /anagrams/{word}.json
///
///The result is truncated to `limit` first, then sorted.
async fn get_anagrams(
    State(state): State<AppState>,
    Path(file): Path<String>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<AnagramsResponse>, ApiError> {
    let word = word_from_file(&file)?;
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let limit = parse_limit(first_limit(&params))?;
    let mut anagrams = state.index.lookup_anagrams(word, limit);
    anagrams.sort();
    debug!(word, ?limit, found = anagrams.len(), "lookup");
    Ok(Json(AnagramsResponse { anagrams }))
}

///POST /words.json
///
///The body is decoded as JSON whatever the content type says
async fn create_words(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let request: WordsRequest = serde_json::from_slice(&body).map_err(|e| {
        ApiError::BadRequest(format!("body should be {{\"words\": [...]}}: {}", e))
    })?;
    let added = state.index.insert_words(&request.words);
    debug!(submitted = request.words.len(), added, "insert");
    Ok(StatusCode::CREATED)
}

///DELETE /words.json
async fn delete_all_words(State(state): State<AppState>) -> StatusCode {
    state.index.clear_all();
    info!("index cleared");
    StatusCode::NO_CONTENT
}

///DELETE /words/{word}.json
async fn delete_word(State(state): State<AppState>, Path(file): Path<String>) -> Result<StatusCode, ApiError> {
    let word = word_from_file(&file)?;
    let removed = state.index.delete_word(word);
    debug!(word, removed, "delete");
    Ok(StatusCode::NO_CONTENT)
}

///GET /stats.json
async fn get_stats(State(state): State<AppState>) -> Json<IndexStats> {
    Json(state.index.stats())
}

async fn shutdown(State(state): State<AppState>) -> Json<MessageResponse> {
    info!("shutdown requested via endpoint");
    state.request_shutdown();
    Json(MessageResponse {
        message: "Shutdown in progress. Requests finishing",
    })
}

///Resolves on Ctrl-C, SIGTERM or a request to `/shutdown`
async fn shutdown_signal(trigger: Arc<Notify>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("unable to listen for interrupt: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("unable to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("shutdown requested (signal: interrupt)"),
        _ = terminate => info!("shutdown requested (signal: terminate)"),
        _ = trigger.notified() => info!("shutdown requested (/shutdown)"),
    }
}

///Bind to the configured address and serve until shutdown
pub async fn serve(config: &Config, index: SharedIndex) -> crate::error::Result<()> {
    let state = AppState::new(index);
    let trigger = state.shutdown.clone();
    let app = router(state);

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await.map_err(Error::Server)?;
    info!("anagramsearch listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(trigger))
        .await
        .map_err(Error::Server)?;
    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_suffix_required() {
        assert_eq!(word_from_file("read.json").ok(), Some("read"));
        assert_eq!(word_from_file("read.json.json").ok(), Some("read.json"));
        assert!(word_from_file("read").is_err());
        assert!(word_from_file(".json").is_err());
    }

    #[test]
    fn limit_parsing() {
        assert_eq!(parse_limit(None).ok(), Some(None));
        assert_eq!(parse_limit(Some("3")).ok(), Some(Some(3)));
        assert_eq!(parse_limit(Some("0")).ok(), Some(Some(0)));
        assert!(parse_limit(Some("ten")).is_err());
        assert!(parse_limit(Some("-1")).is_err());
        assert!(parse_limit(Some("")).is_err());
    }

    #[test]
    fn first_limit_wins() {
        let params = vec![
            ("q".to_string(), "x".to_string()),
            ("limit".to_string(), "1".to_string()),
            ("limit".to_string(), "2".to_string()),
        ];
        assert_eq!(first_limit(&params), Some("1"));
        assert_eq!(first_limit(&params[..1]), None);
    }
}
