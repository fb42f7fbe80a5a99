use axum::{Json, Router, debug_handler, extract::State, routing::get};

use crate::{AppState, models::Analytics, store::Store};

pub fn router() -> Router<AppState> {
    Router::new().route("/analytics", get(get_analytics))
}

#[debug_handler]
pub(crate) async fn get_analytics(State(store): State<Store>) -> Json<Analytics> {
    Json(store.aggregate().await)
}
