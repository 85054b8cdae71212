use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use fournil_core::ServiceError;

use super::AppState;
use crate::model::RecipeLine;
use crate::service::costing::RecipeCost;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes",
            get(list_recipe_lines)
                .post(append_recipe_line)
                .put(replace_recipe_lines),
        )
        .route("/recipes/{sku}/cost", get(recipe_cost))
        .route("/recipes/{sku}/cost/apply", post(apply_recipe_cost))
}

async fn list_recipe_lines(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.list_recipe_lines()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn append_recipe_line(
    State(svc): State<AppState>,
    Json(line): Json<RecipeLine>,
) -> Result<(StatusCode, Json<RecipeLine>), ServiceError> {
    let created = svc.append_recipe_line(line)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_recipe_lines(
    State(svc): State<AppState>,
    Json(rows): Json<Vec<RecipeLine>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.replace_recipe_lines(rows)?;
    Ok(Json(serde_json::json!({"total": total})))
}

async fn recipe_cost(
    State(svc): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<RecipeCost>, ServiceError> {
    Ok(Json(svc.recipe_cost(&sku)?))
}

async fn apply_recipe_cost(
    State(svc): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<RecipeCost>, ServiceError> {
    Ok(Json(svc.apply_recipe_cost(&sku)?))
}
