//! Demo API
//!
//! A read-only stand-in for the fitness backend. Serves the seeded
//! collections at `GET /api/{resource}/`:
//!
//! - paginated by default: `{"count": n, "results": [...]}`
//! - as a bare array with `?format=array`
//!
//! `GET /api/` lists the collection URLs.

pub mod seed;

pub use seed::DemoData;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::resource::Resource;
use crate::server::{shutdown_signal, ServerError, ServerResult};

#[derive(Debug, Default, Deserialize)]
struct ListParams {
    format: Option<String>,
}

/// Build the demo API router around `data`
pub fn router(data: DemoData) -> Router {
    Router::new()
        .route("/api/", get(api_root))
        .route("/api/:resource/", get(list_collection))
        .route("/api/:resource", get(list_collection))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(data))
}

/// Serve the demo API until Ctrl+C
pub async fn serve(data: DemoData, addr: &str) -> ServerResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Demo API listening on {}", addr);

    axum::serve(listener, router(data))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Demo API shut down");
    Ok(())
}

async fn api_root() -> Json<Value> {
    let links: Map<String, Value> = Resource::ALL
        .iter()
        .map(|r| (r.segment().to_string(), json!(format!("/api/{}/", r.segment()))))
        .collect();
    Json(Value::Object(links))
}

async fn list_collection(
    State(data): State<Arc<DemoData>>,
    Path(segment): Path<String>,
    Query(params): Query<ListParams>,
) -> Response {
    let Ok(resource) = segment.parse::<Resource>() else {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response();
    };

    let results = match data.collection(resource) {
        Ok(results) => results,
        Err(e) => {
            tracing::error!(resource = %resource, error = %e, "Failed to encode collection");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let count = results.as_array().map_or(0, Vec::len);
    tracing::debug!(resource = %resource, count, "Serving demo collection");

    if params.format.as_deref() == Some("array") {
        Json(results).into_response()
    } else {
        Json(json!({"count": count, "results": results})).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use chrono::NaiveDate;
    use tower::util::ServiceExt;

    fn app() -> Router {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        router(DemoData::generate(seed::DEFAULT_SEED, today))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_paginated_collection() {
        let (status, body) = get_json("/api/teams/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["results"][0]["name"], "Team Marvel");
        assert_eq!(body["results"][1]["members"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_bare_array() {
        let (status, body) = get_json("/api/workouts/?format=array").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["difficulty"], "Hard");
    }

    #[tokio::test]
    async fn test_without_trailing_slash() {
        let (status, body) = get_json("/api/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 12);
    }

    #[tokio::test]
    async fn test_unknown_collection() {
        let (status, body) = get_json("/api/profiles/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Not found.");
    }

    #[tokio::test]
    async fn test_api_root() {
        let (status, body) = get_json("/api/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["leaderboard"], "/api/leaderboard/");
    }
}
