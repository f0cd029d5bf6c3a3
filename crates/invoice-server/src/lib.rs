//! Invoice Server - HTTP front end for invoice-layout
//!
//! Routes:
//! - `POST /generate-pdf`: render and return the PDF as a download
//! - `POST /view-pdf`: render and return the PDF for inline viewing
//! - `GET /health`: liveness probe

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health_check))
        .route("/generate-pdf", post(api::generate_pdf))
        .route("/view-pdf", post(api::view_pdf))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin and any request headers, mirrored back so credentials can be allowed
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .expose_headers([header::CONTENT_DISPOSITION])
}
