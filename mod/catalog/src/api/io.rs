use axum::{
    Json, Router,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use fournil_core::ServiceError;

use super::AppState;
use crate::service::io::CsvExport;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/export/{table}", get(export_table))
        .route("/import/{table}", post(import_table))
}

impl IntoResponse for CsvExport {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", self.filename),
                ),
            ],
            self.body,
        )
            .into_response()
    }
}

async fn export_table(
    State(svc): State<AppState>,
    Path(table): Path<String>,
) -> Result<CsvExport, ServiceError> {
    svc.export_table(&table)
}

/// Body is the raw CSV text; the whole table is replaced on success and
/// untouched when any row fails to decode.
async fn import_table(
    State(svc): State<AppState>,
    Path(table): Path<String>,
    body: String,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.import_table(&table, &body)?;
    Ok(Json(serde_json::json!({"table": table, "total": total})))
}
