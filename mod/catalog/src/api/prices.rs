use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use fournil_core::ServiceError;

use super::AppState;
use crate::model::{IngredientPrice, SupplierPrice};
use crate::service::prices::SupplierComparison;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/supplier-prices",
            get(list_supplier_prices)
                .post(append_supplier_price)
                .put(replace_supplier_prices),
        )
        .route("/supplier-prices/{sku}/compare", get(compare_suppliers))
        .route(
            "/ingredient-prices",
            get(list_ingredient_prices)
                .post(append_ingredient_price)
                .put(replace_ingredient_prices),
        )
}

async fn list_supplier_prices(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.list_supplier_prices()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn append_supplier_price(
    State(svc): State<AppState>,
    Json(price): Json<SupplierPrice>,
) -> Result<(StatusCode, Json<SupplierPrice>), ServiceError> {
    let created = svc.append_supplier_price(price)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_supplier_prices(
    State(svc): State<AppState>,
    Json(rows): Json<Vec<SupplierPrice>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.replace_supplier_prices(rows)?;
    Ok(Json(serde_json::json!({"total": total})))
}

async fn compare_suppliers(
    State(svc): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<SupplierComparison>, ServiceError> {
    Ok(Json(svc.compare_suppliers(&sku)?))
}

async fn list_ingredient_prices(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.list_ingredient_prices()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn append_ingredient_price(
    State(svc): State<AppState>,
    Json(price): Json<IngredientPrice>,
) -> Result<(StatusCode, Json<IngredientPrice>), ServiceError> {
    let created = svc.append_ingredient_price(price)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_ingredient_prices(
    State(svc): State<AppState>,
    Json(rows): Json<Vec<IngredientPrice>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.replace_ingredient_prices(rows)?;
    Ok(Json(serde_json::json!({"total": total})))
}
