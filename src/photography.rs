use axum::{Json, Router, debug_handler, extract::State, routing::get};
use serde_json::{Value, json};

use crate::{
    ApiError, ApiResult, AppState,
    models::{NewPhoto, Photo},
    store::{Collection, Store},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/photography", get(get_photography).post(create_photography))
}

#[debug_handler]
pub(crate) async fn create_photography(
    State(store): State<Store>,
    Json(payload): Json<NewPhoto>,
) -> ApiResult<Json<Value>> {
    let photo = Photo::new(payload);

    let written = store
        .append(Collection::Photography, &photo)
        .await
        .map_err(|e| ApiError::internal("Failed to create photography entry", e))?;

    Ok(Json(json!({
        "message": "Photography entry created successfully",
        "id": written.id,
    })))
}

#[debug_handler]
pub(crate) async fn get_photography(State(store): State<Store>) -> Json<Vec<Photo>> {
    Json(store.list(Collection::Photography).await)
}
