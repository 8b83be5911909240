// src/web.rs

//! JSON HTTP API over the comparison pipelines.
//!
//! Every route answers with an envelope, `{"success": true, "data": ...}` or
//! `{"success": false, "error": "..."}`. Each request builds its own
//! [`GitHubClient`] from the shared configuration and runs the blocking
//! pipeline on tokio's blocking pool.

use crate::config::ClientConfig;
use crate::errors::Error;
use crate::github::{find_similar_repositories, GitHubClient, SearchOptions};
use crate::similarity::MatchOptions;
use crate::{compare_repositories, fetch_repository};
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// --- Shared State ---
struct AppState {
    config: ClientConfig,
}

// --- Request Structs ---
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub repo1_url: Option<String>,
    pub repo2_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SimilarReposRequest {
    pub repo_url: Option<String>,
    pub language: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub limit: Option<usize>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FetchRepoRequest {
    pub repo_url: Option<String>,
}

/// The response envelope shared by all routes.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn success<T: Serialize>(data: T) -> Response {
    let body = ApiResponse {
        success: true,
        data: Some(data),
        error: None,
    };
    (StatusCode::OK, Json(body)).into_response()
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    let body: ApiResponse<()> = ApiResponse {
        success: false,
        data: None,
        error: Some(message.into()),
    };
    (status, Json(body)).into_response()
}

// --- Server Startup ---
pub fn create_router(config: ClientConfig) -> Router {
    let state = Arc::new(AppState { config });

    Router::new()
        .route("/api/github/compare", post(compare_handler))
        .route("/api/github/similar-repos", post(similar_repos_handler))
        .route("/api/github/fetch-repo", post(fetch_repo_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(port: u16, config: ClientConfig) -> anyhow::Result<()> {
    let app = create_router(config);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("reposim API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// --- Error Mapping ---

/// Maps a pipeline error to a status and a user-facing message.
///
/// `not_found` is the route-specific wording for a 404.
fn error_status(error: &Error, not_found: &str) -> (StatusCode, String) {
    match error {
        Error::InvalidReferenceFormat(_) => (
            StatusCode::BAD_REQUEST,
            "Invalid repository URL format".to_string(),
        ),
        Error::RateLimited { .. } => (
            StatusCode::FORBIDDEN,
            "GitHub API rate limit exceeded. Please try again later.".to_string(),
        ),
        e if e.is_not_found() => (StatusCode::NOT_FOUND, not_found.to_string()),
        e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

fn respond<T: Serialize>(
    result: std::result::Result<crate::Result<T>, JoinError>,
    not_found: &str,
) -> Response {
    match result {
        Ok(Ok(data)) => success(data),
        Ok(Err(e)) => {
            let (status, message) = error_status(&e, not_found);
            tracing::warn!(status = status.as_u16(), error = %e, "request failed");
            failure(status, message)
        }
        Err(e) => failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// --- Handlers ---

async fn compare_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CompareRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    let (Some(repo1), Some(repo2)) = (required(req.repo1_url), required(req.repo2_url)) else {
        return failure(
            StatusCode::BAD_REQUEST,
            "Both repository URLs are required",
        );
    };

    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || {
        let max_files = config.max_files;
        let client = GitHubClient::new(config)?;
        compare_repositories(
            &client,
            &repo1,
            &repo2,
            max_files,
            &MatchOptions::default(),
            None,
        )
    })
    .await;

    respond(result, "One or both repositories not found")
}

async fn similar_repos_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<SimilarReposRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    let Some(repo_url) = required(req.repo_url) else {
        return failure(StatusCode::BAD_REQUEST, "Repository URL is required");
    };

    let defaults = SearchOptions::default();
    let options = SearchOptions {
        keywords: req.keywords.unwrap_or_default(),
        language: req.language.filter(|l| !l.is_empty()),
        limit: req.limit.unwrap_or(defaults.limit),
    };

    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || {
        let client = GitHubClient::new(config)?;
        find_similar_repositories(&client, &repo_url, &options)
    })
    .await;

    respond(result, "Repository not found")
}

async fn fetch_repo_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<FetchRepoRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    let Some(repo_url) = required(req.repo_url) else {
        return failure(StatusCode::BAD_REQUEST, "Repository URL is required");
    };

    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || {
        let max_files = config.max_files;
        let client = GitHubClient::new(config)?;
        fetch_repository(&client, &repo_url, None, max_files, None)
    })
    .await;

    respond(result, "Repository not found")
}
