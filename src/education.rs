use axum::{Json, Router, debug_handler, extract::State, routing::get};
use serde_json::{Value, json};

use crate::{
    ApiError, ApiResult, AppState,
    models::{Education, NewEducation},
    store::{Collection, Store},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/education", get(get_education).post(create_education))
}

#[debug_handler]
pub(crate) async fn create_education(
    State(store): State<Store>,
    Json(payload): Json<NewEducation>,
) -> ApiResult<Json<Value>> {
    let entry = Education::new(payload);

    let written = store
        .append(Collection::Education, &entry)
        .await
        .map_err(|e| ApiError::internal("Failed to create education entry", e))?;

    Ok(Json(json!({
        "message": "Education entry created successfully",
        "id": written.id,
    })))
}

#[debug_handler]
pub(crate) async fn get_education(State(store): State<Store>) -> Json<Vec<Education>> {
    Json(store.list(Collection::Education).await)
}
