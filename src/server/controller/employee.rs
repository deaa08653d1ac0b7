use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    model::{
        api::PageQuery,
        employee::{CreateEmployeeDto, UpdateEmployeeDto},
    },
    server::{
        error::AppError,
        model::{
            employee::{CreateEmployeeParams, UpdateEmployeeParams},
            principal::Principal,
        },
        schema::{
            input::{ValidJson, ValidPath, ValidQuery},
            output::Rendered,
        },
        service::employee::EmployeeService,
        state::AppState,
    },
};

/// List employees.
///
/// # Access Control
/// - Any authenticated principal
///
/// # Arguments
/// - `query` - `offset` and `limit`; out of range values are clamped
///
/// # Returns
/// - `200 OK` - `{items, count}` where `count` is the total number of employees
/// - `401 Unauthorized` - Missing or rejected credential
/// - `422 Unprocessable Entity` - Non-integer `offset` or `limit`
pub async fn list_employees(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db, state.pagination);

    let page = service.list(query.offset, query.limit).await?;

    Ok(Json(page.into_dto(Rendered)))
}

/// Get one employee with its project ids.
///
/// # Returns
/// - `200 OK` - The employee
/// - `404 Not Found` - No employee with that id
pub async fn get_employee(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db, state.pagination);

    let employee = service.get(id).await?;

    Ok(Json(Rendered(employee)))
}

/// Create an employee.
///
/// # Access Control
/// - `add_employee`
///
/// # Returns
/// - `201 Created` - The created employee
/// - `403 Forbidden` - Principal lacks `add_employee`
/// - `422 Unprocessable Entity` - Invalid field or a reference to a missing department/project
/// - `500 Internal Server Error` - Employee created but its projects not linked; body carries `id`
pub async fn create_employee(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidJson(payload): ValidJson<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db, state.pagination);

    let params = CreateEmployeeParams::from_dto(payload)?;

    let employee = service.create(&principal, params).await?;

    Ok((StatusCode::CREATED, Json(Rendered(employee))))
}

/// Replace every field of an employee.
///
/// Takes the create payload; omitted optional fields are reset to their defaults, so an
/// omitted `project_ids` clears the employee's projects.
///
/// # Access Control
/// - `change_employee`
pub async fn replace_employee(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db, state.pagination);

    let params = CreateEmployeeParams::from_dto(payload)?;

    let employee = service.replace(&principal, id, params).await?;

    Ok(Json(Rendered(employee)))
}

/// Partially update an employee.
///
/// Only fields present in the body are written. A present `project_ids` replaces the
/// whole set; `[]` clears it.
///
/// # Access Control
/// - `change_employee`
///
/// # Returns
/// - `200 OK` - The employee after the update
/// - `404 Not Found` - No employee with that id
/// - `422 Unprocessable Entity` - Invalid field or reference; nothing is written
pub async fn update_employee(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db, state.pagination);

    let params = UpdateEmployeeParams::from_dto(id, payload)?;

    let employee = service.update(&principal, params).await?;

    Ok(Json(Rendered(employee)))
}

/// Delete an employee.
///
/// # Access Control
/// - `delete_employee`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `404 Not Found` - No employee with that id
pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db, state.pagination);

    service.delete(&principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
