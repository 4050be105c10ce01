use crate::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

pub fn router(state: AppState, cors: bool) -> Router {
    let app = Router::new()
        .route("/phase-change", get(handlers::phase_change))
        .route("/status", get(handlers::status))
        .route("/repair-bay", get(handlers::repair_bay))
        .route("/teapot", post(handlers::teapot))
        .with_state(state);

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
