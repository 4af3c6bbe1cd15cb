mod question_dto;

pub use question_dto::{
    CategoryQuestionsResponseDto, CreateQuestionDto, CreateQuestionResponseDto,
    DeleteQuestionResponseDto, ListQuestionsResponseDto, QuestionDetailResponseDto,
    QuestionResponseDto, SearchQuestionsDto, SearchQuestionsResponseDto,
};
