use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::services::CategoryService;
use crate::features::questions::handlers::{self, QuestionState};
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(
    question_service: Arc<QuestionService>,
    category_service: Arc<CategoryService>,
) -> Router {
    let state = QuestionState {
        question_service,
        category_service,
    };

    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route(
            "/questions/{id}",
            get(handlers::get_question).delete(handlers::delete_question),
        )
        .route("/searchQuestions", post(handlers::search_questions))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_questions_by_category),
        )
        .with_state(state)
}
