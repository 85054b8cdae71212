pub mod employees;
pub mod io;
pub mod shifts;
pub mod week;

use std::sync::Arc;

use axum::Router;

use crate::service::PlanningService;

/// Shared application state.
pub type AppState = Arc<PlanningService>;

/// Build the planning API router.
///
/// All routes live under `/v1`; the daemon nests the result under
/// `/planning`.
pub fn router(state: AppState) -> Router {
    Router::new().nest("/v1", api_routes()).with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(employees::routes())
        .merge(shifts::routes())
        .merge(week::routes())
        .merge(io::routes())
}
