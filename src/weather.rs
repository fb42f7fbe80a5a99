use axum::{Json, Router, debug_handler, routing::get};

use crate::{AppState, models::Weather};

pub fn router() -> Router<AppState> {
    Router::new().route("/weather", get(get_weather))
}

// Mock payload; a real provider would slot in behind the same shape.
#[debug_handler]
pub(crate) async fn get_weather() -> Json<Weather> {
    Json(Weather {
        location: "New York, NY".to_owned(),
        temperature: "22°C".to_owned(),
        description: "Partly cloudy".to_owned(),
        icon: "⛅".to_owned(),
    })
}
