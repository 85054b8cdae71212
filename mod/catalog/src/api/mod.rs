pub mod allergens;
pub mod ingredients;
pub mod io;
pub mod margins;
pub mod overheads;
pub mod prices;
pub mod products;
pub mod recipes;
pub mod suppliers;

use std::sync::Arc;

use axum::Router;

use crate::service::CatalogService;

/// Shared application state.
pub type AppState = Arc<CatalogService>;

/// Build the catalog API router.
///
/// All routes live under `/v1`; the daemon nests the result under
/// `/catalog`.
pub fn router(state: AppState) -> Router {
    Router::new().nest("/v1", api_routes()).with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(suppliers::routes())
        .merge(ingredients::routes())
        .merge(prices::routes())
        .merge(recipes::routes())
        .merge(overheads::routes())
        .merge(margins::routes())
        .merge(allergens::routes())
        .merge(io::routes())
}
