use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{extract::State, Json, Router};
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;

use crate::fetch::PageFetcher;
use crate::pipeline::extract_recipe;

/// Shared state for the import route. Requests are otherwise independent;
/// the fetcher's client is the only thing worth reusing.
#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<PageFetcher>,
}

/// Build the single-route import router. The route accepts any method so
/// method gating (405, OPTIONS pre-flight) stays in one place.
pub fn router(fetcher: PageFetcher) -> Router {
    Router::new()
        .route("/api/import", any(import_handler))
        .with_state(AppState {
            fetcher: Arc::new(fetcher),
        })
}

#[derive(Debug, Deserialize)]
struct ImportRequest {
    url: Option<String>,
}

async fn import_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    match method {
        Method::OPTIONS => preflight(),
        Method::POST => import(&state, &body).await,
        _ => error_response(StatusCode::METHOD_NOT_ALLOWED, "Only POST allowed"),
    }
}

async fn import(state: &AppState, body: &[u8]) -> Response {
    // an unreadable body is treated the same as a body without a url
    let url = serde_json::from_slice::<ImportRequest>(body)
        .ok()
        .and_then(|request| request.url)
        .filter(|url| !url.is_empty());

    let Some(url) = url else {
        return error_response(StatusCode::BAD_REQUEST, "Missing url");
    };

    let (fetch_url, html) = match state.fetcher.fetch(&url).await {
        Ok(fetched) => fetched,
        Err(e) => {
            warn!("Fetch failed for {url}: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    match extract_recipe(&html, &fetch_url) {
        Some(recipe) => {
            info!("Imported recipe from {fetch_url}");
            with_cors(Json(recipe).into_response())
        }
        None => error_response(
            StatusCode::NOT_FOUND,
            "Could not find recipe data (no schema.org/Recipe and heuristics failed for this page).",
        ),
    }
}

/// Empty 200 advertising the allowed methods and headers.
fn preflight() -> Response {
    let mut response = StatusCode::OK.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    with_cors(response)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    with_cors((status, Json(json!({ "error": message }))).into_response())
}

/// The endpoint is callable from any client origin, success or failure.
fn with_cors(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}
