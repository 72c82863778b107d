//! `/api/employee` handlers: extract, delegate to [`service::employee::EmployeeService`], wrap.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::employee::EmployeeDto;

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeDto>,
) -> Result<(StatusCode, Json<EmployeeDto>), ApiError> {
    let created = state.employees.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeDto>, ApiError> {
    Ok(Json(state.employees.find_by_id(id).await?))
}

pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    Ok(Json(state.employees.find_all_employee().await?))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<EmployeeDto>,
) -> Result<Json<EmployeeDto>, ApiError> {
    Ok(Json(state.employees.update_employee(id, input).await?))
}

/// Plain-text confirmation on success.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ApiError> {
    state.employees.delete_employee(id).await?;
    Ok(format!("Employee {id} deleted successfully"))
}
