//! Route registration — collects the module routes + system endpoints.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;

use fournil_catalog::service::{CatalogOverview, CatalogService};
use fournil_core::ServiceError;

/// Application shared state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

/// Build the complete router with all routes.
pub fn build_router(state: AppState, module_routes: Vec<(&str, Router)>) -> Router {
    // System endpoints (public, no state needed).
    let system_routes = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    let mut app: Router<()> = Router::new()
        .route("/overview", get(overview))
        .with_state(state);

    app = app.merge(system_routes);

    // Mount each module's routes under /{module_name}. Module routers
    // are already Router<()> (they called .with_state() internally).
    for (name, router) in module_routes {
        app = app.nest(&format!("/{name}"), router);
    }

    app
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "fournild",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// The dashboard KPI bar: product count, potential stockouts, monthly
/// fixed costs.
async fn overview(
    State(state): State<AppState>,
) -> Result<axum::Json<CatalogOverview>, ServiceError> {
    Ok(axum::Json(state.catalog.overview()?))
}
