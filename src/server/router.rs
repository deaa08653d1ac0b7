use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        department::{
            create_department, delete_department, get_department, list_departments,
            update_department,
        },
        employee::{
            create_employee, delete_employee, get_employee, list_employees, replace_employee,
            update_employee,
        },
        project::{create_project, delete_project, get_project, list_projects, update_project},
    },
    middleware::auth::require_bearer,
    state::AppState,
};

/// Builds the application router.
///
/// Every route is nested under `/api` and sits behind bearer authentication.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee)
                .put(replace_employee)
                .patch(update_employee)
                .delete(delete_employee),
        )
        .route("/departments", get(list_departments).post(create_department))
        .route(
            "/departments/{id}",
            get(get_department)
                .patch(update_department)
                .delete(delete_department),
        )
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project)
                .patch(update_project)
                .delete(delete_project),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
