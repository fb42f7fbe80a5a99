use axum::{Json, Router, debug_handler, extract::State, routing::get};
use serde_json::{Value, json};
use tracing::warn;

use crate::{
    ApiError, ApiResult, AppState,
    models::{ContactMessage, NewContactMessage},
    notify::Notifier,
    store::{Collection, Store},
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/contact",
        get(get_contact_messages).post(create_contact_message),
    )
}

pub(crate) async fn create_contact_message(
    State(store): State<Store>,
    State(notifier): State<Notifier>,
    Json(payload): Json<NewContactMessage>,
) -> ApiResult<Json<Value>> {
    let message = ContactMessage::new(payload);

    let written = store
        .append(Collection::ContactMessages, &message)
        .await
        .map_err(|e| ApiError::internal("Failed to send contact message", e))?;

    let email_sent = match notifier.contact_submitted(&message).await {
        Ok(()) => true,
        Err(e) => {
            warn!("contact notification for {} failed: {e}", written.id);
            false
        }
    };

    Ok(Json(json!({
        "message": "Contact message sent successfully",
        "id": written.id,
        "email_sent": email_sent,
    })))
}

#[debug_handler]
pub(crate) async fn get_contact_messages(
    State(store): State<Store>,
) -> Json<Vec<ContactMessage>> {
    Json(store.list(Collection::ContactMessages).await)
}
