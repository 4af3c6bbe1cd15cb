use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};

/// Services shared by the feature routers
#[derive(Clone)]
pub struct AppServices {
    pub category_service: Arc<CategoryService>,
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API router with JSON fallbacks and the HTTP middleware stack
pub fn router(services: AppServices, config: &AppConfig) -> Router {
    Router::new()
        .merge(categories_routes::routes(Arc::clone(
            &services.category_service,
        )))
        .merge(questions_routes::routes(
            Arc::clone(&services.question_service),
            Arc::clone(&services.category_service),
        ))
        .merge(quizzes_routes::routes(Arc::clone(&services.quiz_service)))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(middleware::method_not_allowed_fallback)
        .fallback(middleware::not_found_fallback)
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
