use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::services::CategoryService;
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, CreateQuestionDto, CreateQuestionResponseDto,
    DeleteQuestionResponseDto, ListQuestionsResponseDto, QuestionDetailResponseDto,
    QuestionResponseDto, SearchQuestionsDto, SearchQuestionsResponseDto,
};
use crate::features::questions::models::QuestionPage;
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// State for question handlers
#[derive(Clone)]
pub struct QuestionState {
    pub question_service: Arc<QuestionService>,
    pub category_service: Arc<CategoryService>,
}

fn to_dtos(page: QuestionPage) -> (Vec<QuestionResponseDto>, usize, Vec<i32>) {
    (
        page.questions.into_iter().map(Into::into).collect(),
        page.total_questions,
        page.current_category,
    )
}

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = ListQuestionsResponseDto),
        (status = 404, description = "Page is empty", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(state): State<QuestionState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ListQuestionsResponseDto>> {
    let page = state.question_service.list_page(query.page()).await?;
    let categories = state.category_service.labels().await?;

    let (questions, total_questions, current_category) = to_dtos(page);
    Ok(Json(ListQuestionsResponseDto {
        success: true,
        questions,
        total_questions,
        current_category,
        categories,
    }))
}

/// Get a single question by id
#[utoipa::path(
    get,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = QuestionDetailResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn get_question(
    State(state): State<QuestionState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<QuestionDetailResponseDto>> {
    let question = state.question_service.get(id).await?;
    Ok(Json(QuestionDetailResponseDto {
        success: true,
        question: question.into(),
    }))
}

/// Create a question
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponseDto),
        (status = 400, description = "Malformed or blank fields", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(state): State<QuestionState>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<CreateQuestionResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (question, total_questions) = state.question_service.create(dto.into()).await?;
    Ok(Json(CreateQuestionResponseDto {
        success: true,
        created: question.id,
        questions: question.into(),
        total_questions,
    }))
}

/// Delete a question
///
/// Deleting an unknown id still reports success. A store failure is reported
/// in the body (`success: false`) rather than as an HTTP error.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteQuestionResponseDto),
        (status = 404, description = "Malformed id", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(state): State<QuestionState>,
    AppPath(id): AppPath<i32>,
) -> Json<DeleteQuestionResponseDto> {
    match state.question_service.delete(id).await {
        Ok(_) => Json(DeleteQuestionResponseDto::deleted(id)),
        Err(e) => {
            tracing::error!("Question {} could not be deleted: {}", id, e);
            Json(DeleteQuestionResponseDto::failed())
        }
    }
}

/// Search questions by a case-insensitive substring of their text
#[utoipa::path(
    post,
    path = "/searchQuestions",
    params(PageQuery),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Page of matching questions", body = SearchQuestionsResponseDto),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "No matches", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(state): State<QuestionState>,
    Query(query): Query<PageQuery>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<SearchQuestionsResponseDto>> {
    let page = state
        .question_service
        .search_page(&dto.search_term, query.page())
        .await?;

    let (questions, total_questions, current_category) = to_dtos(page);
    Ok(Json(SearchQuestionsResponseDto {
        success: true,
        questions,
        total_questions,
        current_category,
    }))
}

/// List the questions of one category, ten per page
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of questions in the category", body = CategoryQuestionsResponseDto),
        (status = 404, description = "No questions for the category", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(state): State<QuestionState>,
    AppPath(category_id): AppPath<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let page = state
        .question_service
        .list_by_category(category_id, query.page())
        .await?;
    let categories = state.category_service.list().await?;

    let (questions, total_questions, current_category) = to_dtos(page);
    Ok(Json(CategoryQuestionsResponseDto {
        success: true,
        questions,
        total_questions,
        current_category,
        categories: categories
            .into_iter()
            .map(CategoryResponseDto::from)
            .collect(),
    }))
}
