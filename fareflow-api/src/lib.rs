use axum::{
    http::Method,
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod error;
pub mod inventory;
pub mod sessions;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .route("/", get(health))
        .route("/inventory", get(inventory::list_inventory))
        .route("/inventory/{id}", get(inventory::get_inventory))
        .route(
            "/admin/inventory",
            get(admin::list_inventory).post(admin::create_inventory),
        )
        .route(
            "/admin/inventory/{id}",
            patch(admin::update_remaining_stock).delete(admin::delete_inventory),
        )
        .route("/sessions", post(sessions::create_session))
        .route("/sessions/{token}", get(sessions::get_session))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "fareflow API is running",
    }))
}
