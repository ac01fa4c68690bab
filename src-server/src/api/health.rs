use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::main_lib::AppState;

#[utoipa::path(get, path = "/", responses((status = 200, description = "App banner")))]
pub(crate) async fn root() -> Json<Value> {
    Json(json!([{ "app": "cambio" }]))
}

#[utoipa::path(get, path = "/health", responses((status = 200, description = "Liveness probe")))]
pub(crate) async fn health() -> Json<Value> {
    let checked_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default();
    Json(json!({ "healthy": true, "checked_at": checked_at }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
