use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use fournil_core::ServiceError;

use super::AppState;
use crate::model::Shift;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/shifts",
        get(list_shifts).post(append_shift).put(replace_shifts),
    )
}

async fn list_shifts(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.list_shifts()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn append_shift(
    State(svc): State<AppState>,
    Json(shift): Json<Shift>,
) -> Result<(StatusCode, Json<Shift>), ServiceError> {
    let created = svc.append_shift(shift)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_shifts(
    State(svc): State<AppState>,
    Json(rows): Json<Vec<Shift>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.replace_shifts(rows)?;
    Ok(Json(serde_json::json!({"total": total})))
}
