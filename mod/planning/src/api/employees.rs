use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use fournil_core::ServiceError;

use super::AppState;
use crate::model::Employee;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(list_employees).post(create_employee).put(replace_employees),
        )
        .route(
            "/employees/{name}",
            get(get_employee).patch(update_employee).delete(delete_employee),
        )
}

async fn list_employees(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let items = svc.list_employees()?;
    let total = items.len();
    Ok(Json(serde_json::json!({"items": items, "total": total})))
}

async fn create_employee(
    State(svc): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<(StatusCode, Json<Employee>), ServiceError> {
    let created = svc.create_employee(employee)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_employees(
    State(svc): State<AppState>,
    Json(rows): Json<Vec<Employee>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total = svc.replace_employees(rows)?;
    Ok(Json(serde_json::json!({"total": total})))
}

async fn get_employee(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Employee>, ServiceError> {
    Ok(Json(svc.get_employee(&name)?))
}

async fn update_employee(
    State(svc): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<Employee>, ServiceError> {
    Ok(Json(svc.update_employee(&name, patch)?))
}

async fn delete_employee(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_employee(&name)?;
    Ok(StatusCode::NO_CONTENT)
}
