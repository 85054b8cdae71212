use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use fournil_core::ServiceError;

use super::AppState;
use crate::service::io::CsvExport;
use crate::service::payroll::WeekSummary;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/week", get(current_week))
        .route("/week/{monday}", get(week_summary))
        .route("/week/{monday}/export", get(export_week))
}

/// The week containing today, the view the schedule opens on.
async fn current_week(
    State(svc): State<AppState>,
) -> Result<Json<WeekSummary>, ServiceError> {
    Ok(Json(svc.current_week()?))
}

async fn week_summary(
    State(svc): State<AppState>,
    Path(monday): Path<String>,
) -> Result<Json<WeekSummary>, ServiceError> {
    Ok(Json(svc.week_summary(&monday)?))
}

async fn export_week(
    State(svc): State<AppState>,
    Path(monday): Path<String>,
) -> Result<CsvExport, ServiceError> {
    svc.export_week(&monday)
}
