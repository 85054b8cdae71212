use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use fournil_core::ServiceError;

use super::AppState;
use crate::model::Supplier;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/suppliers",
            get(list_suppliers).post(create_supplier).put(replace_suppliers),
        )
        .route(
            "/suppliers/{name}",
            get(get_supplier).patch(update_supplier).delete(delete_supplier),
        )
}

async fn list_suppliers(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.list_suppliers()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn create_supplier(
    State(svc): State<AppState>,
    Json(supplier): Json<Supplier>,
) -> Result<(StatusCode, Json<Supplier>), ServiceError> {
    let created = svc.create_supplier(supplier)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_suppliers(
    State(svc): State<AppState>,
    Json(rows): Json<Vec<Supplier>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.replace_suppliers(rows)?;
    Ok(Json(serde_json::json!({"total": total})))
}

async fn get_supplier(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Supplier>, ServiceError> {
    Ok(Json(svc.get_supplier(&name)?))
}

async fn update_supplier(
    State(svc): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<Supplier>, ServiceError> {
    Ok(Json(svc.update_supplier(&name, patch)?))
}

async fn delete_supplier(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_supplier(&name)?;
    Ok(StatusCode::NO_CONTENT)
}
