use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::CommandJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Draw the next quiz question
///
/// Picks uniformly at random among the questions of the requested category
/// (or of every category for the `"click"` marker) that are not listed in
/// `previous_questions`. Returns `question: null` when none are left.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = QuizResponseDto),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 422, description = "Missing or malformed quiz fields", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    CommandJson(dto): CommandJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let scope = dto.scope()?;
    let question = service
        .next_question(scope, &dto.previous_questions)
        .await?;

    Ok(Json(QuizResponseDto {
        success: true,
        question: question.map(Into::into),
        previous_questions: dto.previous_questions,
        quiz_category: dto.quiz_category,
    }))
}
