use axum::{extract::State, Json};

use crate::models::stock::HealthResponse;
use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        database: state.db.is_some(),
    })
}
