use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::quizzes::selector::QuizScope;
use crate::shared::constants::ALL_CATEGORIES_MARKER;
use crate::shared::validation::lenient_opt_i32;

/// Category marker sent by the quiz client.
///
/// `type == "click"` means every category; otherwise `id` names the category.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, deserialize_with = "lenient_opt_i32")]
    #[schema(value_type = Option<i32>)]
    pub id: Option<i32>,
}

impl TryFrom<&QuizCategoryDto> for QuizScope {
    type Error = AppError;

    fn try_from(dto: &QuizCategoryDto) -> Result<Self, Self::Error> {
        if dto.kind == ALL_CATEGORIES_MARKER {
            return Ok(QuizScope::AllCategories);
        }
        dto.id.map(QuizScope::Category).ok_or_else(|| {
            AppError::Unprocessable(format!("Quiz category {:?} has no id", dto.kind))
        })
    }
}

/// Request DTO for `POST /quizzes`
///
/// `quiz_category` stays raw so the response can echo it exactly as sent.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids already asked in this quiz
    pub previous_questions: Vec<i32>,
    #[schema(value_type = QuizCategoryDto)]
    pub quiz_category: Value,
}

impl QuizRequestDto {
    pub fn scope(&self) -> Result<QuizScope, AppError> {
        let category = QuizCategoryDto::deserialize(&self.quiz_category)
            .map_err(|e| AppError::Unprocessable(format!("Invalid quiz category: {}", e)))?;
        QuizScope::try_from(&category)
    }
}

/// Response DTO for `POST /quizzes`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    /// `null` once every candidate has been asked
    pub question: Option<QuestionResponseDto>,
    pub previous_questions: Vec<i32>,
    #[serde(rename = "quizCategory")]
    #[schema(value_type = QuizCategoryDto)]
    pub quiz_category: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scope_of(value: serde_json::Value) -> Result<QuizScope, AppError> {
        let dto: QuizCategoryDto = serde_json::from_value(value).unwrap();
        QuizScope::try_from(&dto)
    }

    #[test]
    fn test_click_marker_means_all_categories() {
        assert_eq!(
            scope_of(json!({ "type": "click", "id": 0 })).unwrap(),
            QuizScope::AllCategories
        );
        assert_eq!(
            scope_of(json!({ "type": "click" })).unwrap(),
            QuizScope::AllCategories
        );
    }

    #[test]
    fn test_named_category_uses_id() {
        assert_eq!(
            scope_of(json!({ "type": "Art", "id": "2" })).unwrap(),
            QuizScope::Category(2)
        );
    }

    #[test]
    fn test_named_category_without_id_is_unprocessable() {
        assert!(matches!(
            scope_of(json!({ "type": "Art" })),
            Err(AppError::Unprocessable(_))
        ));
    }

    #[test]
    fn test_request_scope_rejects_malformed_category() {
        let request = |category: Value| QuizRequestDto {
            previous_questions: vec![],
            quiz_category: category,
        };

        assert_eq!(
            request(json!({ "type": "Art", "id": "2" })).scope().unwrap(),
            QuizScope::Category(2)
        );
        assert!(matches!(
            request(json!("Art")).scope(),
            Err(AppError::Unprocessable(_))
        ));
        assert!(matches!(
            request(json!({ "id": 2 })).scope(),
            Err(AppError::Unprocessable(_))
        ));
    }

    #[test]
    fn test_missing_marker_fails_to_decode() {
        let missing = serde_json::from_value::<QuizRequestDto>(json!({ "previous_questions": [] }));
        assert!(missing.is_err());

        let malformed = serde_json::from_value::<QuizRequestDto>(json!({
            "previous_questions": "1,2",
            "quiz_category": { "type": "click" }
        }));
        assert!(malformed.is_err());
    }
}
