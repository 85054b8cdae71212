use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use fournil_core::ServiceError;

use super::AppState;
use crate::model::Product;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product).put(replace_products))
        .route("/products/low-stock", get(low_stock))
        .route("/products/allergen-report", get(allergen_report))
        .route(
            "/products/{sku}",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

async fn list_products(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.list_products()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn create_product(
    State(svc): State<AppState>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Product>), ServiceError> {
    let created = svc.create_product(product)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_products(
    State(svc): State<AppState>,
    Json(rows): Json<Vec<Product>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.replace_products(rows)?;
    Ok(Json(serde_json::json!({"total": total})))
}

async fn get_product(
    State(svc): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Product>, ServiceError> {
    Ok(Json(svc.get_product(&sku)?))
}

async fn update_product(
    State(svc): State<AppState>,
    Path(sku): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<Product>, ServiceError> {
    Ok(Json(svc.update_product(&sku, patch)?))
}

async fn delete_product(
    State(svc): State<AppState>,
    Path(sku): Path<String>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_product(&sku)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn low_stock(State(svc): State<AppState>) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.low_stock_products()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn allergen_report(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.allergen_report()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}
