use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};

use fournil_core::ServiceError;

use super::AppState;
use crate::service::pricing::{MarginBreakdown, MarginParams};

pub fn routes() -> Router<AppState> {
    Router::new().route("/margins/{sku}", post(quote_margin))
}

async fn quote_margin(
    State(svc): State<AppState>,
    Path(sku): Path<String>,
    Json(params): Json<MarginParams>,
) -> Result<Json<MarginBreakdown>, ServiceError> {
    Ok(Json(svc.quote_margin(&sku, &params)?))
}
