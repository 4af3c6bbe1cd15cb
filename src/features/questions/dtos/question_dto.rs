use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::validation::{lenient_i32, not_blank};

/// Response DTO for question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Request DTO for creating a question.
///
/// `category` and `difficulty` accept numbers or numeric strings.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(custom(function = "not_blank", message = "Question must not be blank"))]
    pub question: String,

    #[validate(custom(function = "not_blank", message = "Answer must not be blank"))]
    pub answer: String,

    #[serde(deserialize_with = "lenient_i32")]
    #[schema(value_type = i32)]
    pub category: i32,

    #[serde(deserialize_with = "lenient_i32")]
    #[schema(value_type = i32)]
    pub difficulty: i32,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            answer: dto.answer,
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

/// Request DTO for `POST /searchQuestions`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Response DTO for `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    /// Distinct category ids on the returned page
    pub current_category: Vec<i32>,
    /// All category labels
    pub categories: Vec<String>,
}

/// Response DTO for `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub current_category: Vec<i32>,
    pub categories: Vec<CategoryResponseDto>,
}

/// Response DTO for `POST /searchQuestions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    /// Size of the whole store, not of the hit list
    pub total_questions: usize,
    pub current_category: Vec<i32>,
}

/// Response DTO for `GET /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDetailResponseDto {
    pub success: bool,
    pub question: QuestionResponseDto,
}

/// Response DTO for `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponseDto {
    pub success: bool,
    /// The stored question
    pub questions: QuestionResponseDto,
    pub created: i32,
    /// Store size after the insert; omitted when it could not be counted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<usize>,
}

/// Response DTO for `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<i32>,
}

impl DeleteQuestionResponseDto {
    pub fn deleted(id: i32) -> Self {
        Self {
            success: true,
            message: "Question successfully deleted.".to_string(),
            deleted: Some(id),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: "Question could not be deleted.".to_string(),
            deleted: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_dto_accepts_string_numbers() {
        let dto: CreateQuestionDto = serde_json::from_value(json!({
            "question": "What is 1+1?",
            "answer": "2",
            "category": "2",
            "difficulty": "1"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(NewQuestion::from(dto).category, 2);
    }

    #[test]
    fn test_create_dto_rejects_blank_text() {
        let dto: CreateQuestionDto = serde_json::from_value(json!({
            "question": "  ",
            "answer": "",
            "category": 1,
            "difficulty": 1
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("question"));
        assert!(fields.contains_key("answer"));
    }

    #[test]
    fn test_failed_delete_omits_deleted_field() {
        let body = serde_json::to_value(DeleteQuestionResponseDto::failed()).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "Question could not be deleted." }));
    }
}
