// src/routes/mod.rs
pub mod chat;

use crate::{error::panic_response, state::SharedState};
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const BANNER: &str = "YOU ARE CONNECTED";

/// Routes with CORS and request tracing applied. The caller supplies the
/// state with `with_state`.
pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .route("/", get(|| async { BANNER }))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
