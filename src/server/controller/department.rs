use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    model::{
        api::PageQuery,
        department::{CreateDepartmentDto, UpdateDepartmentDto},
    },
    server::{
        error::AppError,
        model::{
            department::{CreateDepartmentParams, UpdateDepartmentParams},
            principal::Principal,
        },
        schema::{
            input::{ValidJson, ValidPath, ValidQuery},
            output::Rendered,
        },
        service::department::DepartmentService,
        state::AppState,
    },
};

/// List departments with the ids of the projects they own.
pub async fn list_departments(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db, state.pagination);

    let page = service.list(query.offset, query.limit).await?;

    Ok(Json(page.into_dto(Rendered)))
}

pub async fn get_department(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db, state.pagination);

    let department = service.get(id).await?;

    Ok(Json(Rendered(department)))
}

/// Create a department. Requires `add_department`.
pub async fn create_department(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidJson(payload): ValidJson<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db, state.pagination);

    let params = CreateDepartmentParams::from_dto(payload)?;

    let department = service.create(&principal, params).await?;

    Ok((StatusCode::CREATED, Json(Rendered(department))))
}

/// Partially update a department. Requires `change_department`.
pub async fn update_department(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db, state.pagination);

    let params = UpdateDepartmentParams::from_dto(id, payload)?;

    let department = service.update(&principal, params).await?;

    Ok(Json(Rendered(department)))
}

/// Delete a department and its projects. Requires `delete_department`.
pub async fn delete_department(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db, state.pagination);

    service.delete(&principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
