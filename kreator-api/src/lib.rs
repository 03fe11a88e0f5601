use axum::{
    http::{HeaderName, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod error;
pub mod middleware;
pub mod packages;
pub mod quotes;
pub mod state;

pub use state::{AdminPasscodes, AppState};

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
            HeaderName::from_static(middleware::auth::PASSCODE_HEADER),
        ]);

    Router::new()
        .route("/health", get(health))
        .merge(packages::routes())
        .merge(quotes::routes())
        .merge(admin::routes(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
