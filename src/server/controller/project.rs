use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    model::{
        api::PageQuery,
        project::{CreateProjectDto, UpdateProjectDto},
    },
    server::{
        error::AppError,
        model::{
            principal::Principal,
            project::{CreateProjectParams, UpdateProjectParams},
        },
        schema::{
            input::{ValidJson, ValidPath, ValidQuery},
            output::Rendered,
        },
        service::project::ProjectService,
        state::AppState,
    },
};

pub async fn list_projects(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db, state.pagination);

    let page = service.list(query.offset, query.limit).await?;

    Ok(Json(page.into_dto(Rendered)))
}

pub async fn get_project(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db, state.pagination);

    let project = service.get(id).await?;

    Ok(Json(Rendered(project)))
}

/// Create a project in an existing department. Requires `add_project`.
pub async fn create_project(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidJson(payload): ValidJson<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db, state.pagination);

    let params = CreateProjectParams::from_dto(payload)?;

    let project = service.create(&principal, params).await?;

    Ok((StatusCode::CREATED, Json(Rendered(project))))
}

/// Partially update a project. Requires `change_project`.
pub async fn update_project(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db, state.pagination);

    let params = UpdateProjectParams::from_dto(id, payload)?;

    let project = service.update(&principal, params).await?;

    Ok(Json(Rendered(project)))
}

/// Delete a project. Requires `delete_project`.
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db, state.pagination);

    service.delete(&principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
