//! Docx Compliance Server
//!
//! Accepts an uploaded `.docx` and reports formatting compliance: fonts,
//! margins, header/footer distance, orientation, table of contents links,
//! internal and external hyperlinks.
//!
//! # Modules
//!
//! - `docx`: container and WordprocessingML reading, typed document view
//! - `checks`: the individual checks and the report they produce
//! - `routes`, `html`, `upload`: HTTP surface

pub mod checks;
pub mod config;
pub mod docx;
pub mod error;
pub mod html;
pub mod routes;
pub mod state;
pub mod upload;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/v1/health", get(routes::health::health_check))
        .merge(routes::upload::router(state.config().upload.max_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
