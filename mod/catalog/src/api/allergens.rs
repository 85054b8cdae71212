use axum::{Json, Router, routing::get};

use super::AppState;
use crate::model::INCO_ALLERGENS;

pub fn routes() -> Router<AppState> {
    Router::new().route("/allergens", get(list_allergens))
}

/// The fixed INCO declarable-allergen list; the catalog validates nothing
/// against it, it only feeds pickers.
async fn list_allergens() -> Json<serde_json::Value> {
    Json(serde_json::json!({"items": INCO_ALLERGENS, "total": INCO_ALLERGENS.len()}))
}
