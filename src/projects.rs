use axum::{Json, Router, debug_handler, extract::State, routing::get};
use serde_json::{Value, json};

use crate::{
    ApiError, ApiResult, AppState,
    models::{NewProject, Project},
    store::{Collection, Store},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/projects", get(get_projects).post(create_project))
}

#[debug_handler]
pub(crate) async fn create_project(
    State(store): State<Store>,
    Json(payload): Json<NewProject>,
) -> ApiResult<Json<Value>> {
    let project = Project::new(payload);

    let written = store
        .append(Collection::Projects, &project)
        .await
        .map_err(|e| ApiError::internal("Failed to create project", e))?;

    Ok(Json(json!({
        "message": "Project created successfully",
        "id": written.id,
    })))
}

#[debug_handler]
pub(crate) async fn get_projects(State(store): State<Store>) -> Json<Vec<Project>> {
    Json(store.list(Collection::Projects).await)
}
