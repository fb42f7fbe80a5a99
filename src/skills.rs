use axum::{Json, Router, debug_handler, extract::State, routing::get};
use serde_json::{Value, json};

use crate::{
    ApiError, ApiResult, AppState,
    models::{NewSkill, Skill},
    store::{Collection, Store},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/skills", get(get_skills).post(create_skill))
}

#[debug_handler]
pub(crate) async fn create_skill(
    State(store): State<Store>,
    Json(payload): Json<NewSkill>,
) -> ApiResult<Json<Value>> {
    let skill = Skill::new(payload);

    let written = store
        .append(Collection::Skills, &skill)
        .await
        .map_err(|e| ApiError::internal("Failed to create skill", e))?;

    Ok(Json(json!({
        "message": "Skill created successfully",
        "id": written.id,
    })))
}

#[debug_handler]
pub(crate) async fn get_skills(State(store): State<Store>) -> Json<Vec<Skill>> {
    Json(store.list(Collection::Skills).await)
}
