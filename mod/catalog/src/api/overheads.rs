use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use fournil_core::ServiceError;

use super::AppState;
use crate::model::OverheadLine;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/overheads",
        get(list_overheads).post(append_overhead).put(replace_overheads),
    )
}

async fn list_overheads(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.list_overheads()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn append_overhead(
    State(svc): State<AppState>,
    Json(line): Json<OverheadLine>,
) -> Result<(StatusCode, Json<OverheadLine>), ServiceError> {
    let created = svc.append_overhead(line)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_overheads(
    State(svc): State<AppState>,
    Json(rows): Json<Vec<OverheadLine>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.replace_overheads(rows)?;
    Ok(Json(serde_json::json!({"total": total})))
}
