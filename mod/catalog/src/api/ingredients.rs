use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use fournil_core::ServiceError;

use super::AppState;
use crate::model::Ingredient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/ingredients",
            get(list_ingredients)
                .post(create_ingredient)
                .put(replace_ingredients),
        )
        .route(
            "/ingredients/{code}",
            get(get_ingredient)
                .patch(update_ingredient)
                .delete(delete_ingredient),
        )
}

async fn list_ingredients(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.list_ingredients()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn create_ingredient(
    State(svc): State<AppState>,
    Json(ingredient): Json<Ingredient>,
) -> Result<(StatusCode, Json<Ingredient>), ServiceError> {
    let created = svc.create_ingredient(ingredient)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_ingredients(
    State(svc): State<AppState>,
    Json(rows): Json<Vec<Ingredient>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.replace_ingredients(rows)?;
    Ok(Json(serde_json::json!({"total": total})))
}

async fn get_ingredient(
    State(svc): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Ingredient>, ServiceError> {
    Ok(Json(svc.get_ingredient(&code)?))
}

async fn update_ingredient(
    State(svc): State<AppState>,
    Path(code): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<Ingredient>, ServiceError> {
    Ok(Json(svc.update_ingredient(&code, patch)?))
}

async fn delete_ingredient(
    State(svc): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_ingredient(&code)?;
    Ok(StatusCode::NO_CONTENT)
}
