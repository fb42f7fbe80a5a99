pub mod analytics;
pub mod config;
pub mod contact;
pub mod education;
pub mod github;
pub mod models;
pub mod notify;
pub mod photography;
pub mod projects;
pub mod resume;
pub mod seed;
pub mod skills;
pub mod store;
pub mod weather;

use axum::{
    Json, Router, debug_handler,
    extract::FromRef,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::{github::GithubClient, notify::Notifier, store::Store};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Store,
    pub github: GithubClient,
    pub notifier: Notifier,
}

/// The full application: every endpoint under /api, permissive CORS.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .merge(contact::router())
        .merge(projects::router())
        .merge(skills::router())
        .merge(education::router())
        .merge(photography::router())
        .merge(weather::router())
        .merge(github::router())
        .merge(analytics::router())
        .merge(resume::router());

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[debug_handler]
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Portfolio API is running",
        "status": "healthy",
    }))
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a client can be told. Internal causes are logged, never
/// returned; the response body is always `{"detail": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{detail}")]
    Internal {
        detail: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(detail: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            detail,
            source: source.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { detail, source } => {
                error!("{detail}: {source:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
