// src/lib.rs

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod errors;
pub mod extractor;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod state;

use crate::handlers::*;
use crate::state::AppState;

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/articles",
            get(list_articles_handler).post(create_article_handler),
        )
        .route("/api/v1/articles/{id}", get(get_article_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(app_state))
}
