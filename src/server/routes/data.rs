//! Data Routes
//!
//! - GET /data/{resource} - Normalized, typed records as JSON
//!
//! Unlike the pages, a failing fetch is an error response here (502).

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::fetch::{CancellationToken, ResourceClient};
use crate::models::{Activity, LeaderboardEntry, Record, Team, User, Workout};
use crate::resource::Resource;
use crate::server::dto::DataResponse;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /data/{resource}
pub async fn collection(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> ServerResult<Json<DataResponse>> {
    let resource: Resource = segment
        .parse()
        .map_err(|_| ServerError::NotFound(format!("collection '{}'", segment)))?;

    let token = CancellationToken::new();
    let guard = token.drop_guard();

    let client = &state.client;
    let (count, results) = match resource {
        Resource::Activities => records_json::<Activity>(client, resource, &token).await?,
        Resource::Leaderboard => {
            records_json::<LeaderboardEntry>(client, resource, &token).await?
        }
        Resource::Teams => records_json::<Team>(client, resource, &token).await?,
        Resource::Users => records_json::<User>(client, resource, &token).await?,
        Resource::Workouts => records_json::<Workout>(client, resource, &token).await?,
    };
    guard.disarm();

    Ok(Json(DataResponse {
        resource,
        count,
        results,
    }))
}

async fn records_json<R: Record>(
    client: &ResourceClient,
    resource: Resource,
    token: &CancellationToken,
) -> ServerResult<(usize, Value)> {
    let records: Vec<R> = client.fetch_records(resource, token).await?;
    let value = serde_json::to_value(&records)
        .map_err(|e| ServerError::Internal(format!("Failed to encode records: {}", e)))?;
    Ok((records.len(), value))
}
