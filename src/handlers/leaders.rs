use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{GatewayError, GatewayResult};
use crate::leaderboard::DISPLAY_CAP;
use crate::metrics::{QUOTA_REJECTIONS, RECORDS_SERVED, REQUEST_TOTAL};
use crate::models::{LeaderRecord, LeadersQuery};
use crate::rate_limit::Decision;
use crate::state::AppState;

pub const LEADERS_PATH: &str = "/api/leaders";

// GET /api/leaders?country_code=KE
// Query is read as raw pairs so repeated keys resolve to the first value
pub async fn leaders_handler(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> GatewayResult<Json<Vec<LeaderRecord>>> {
    REQUEST_TOTAL.inc();

    if state.quota.admit() == Decision::Rejected {
        QUOTA_REJECTIONS.inc();
        warn!("hourly quota exhausted, rejecting request");
        return Err(GatewayError::QuotaExceeded);
    }

    let Query(pairs) = pairs.map_err(|rejection| {
        warn!(error = %rejection, "rejecting unparseable query string");
        GatewayError::InvalidQuery(rejection.body_text())
    })?;
    let query = LeadersQuery::from_pairs(&pairs);
    let country_code = query.country_code.as_deref();

    let records = state
        .leaderboard
        .fetch_top(DISPLAY_CAP, country_code)
        .await?;

    RECORDS_SERVED.inc_by(records.len() as f64);
    info!(records = records.len(), country_code = ?country_code, "served leaderboard");
    Ok(Json(records))
}

// unknown paths go back to the leaderboard with a 302 Found
pub async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, LEADERS_PATH)])
}
