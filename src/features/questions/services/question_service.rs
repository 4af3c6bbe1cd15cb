use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::{NewQuestion, Question, QuestionPage};
use crate::features::questions::repositories::QuestionRepository;
use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Listing, search and mutation of questions
pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// One page of every question; NotFound when the page is empty
    pub async fn list_page(&self, page: usize) -> Result<QuestionPage> {
        let questions = self.repository.list_all().await?;
        let result = QuestionPage::build(&questions, page, QUESTIONS_PER_PAGE, questions.len());
        non_empty(result, || format!("No questions on page {}", page))
    }

    /// One page of a single category; `total_questions` counts that category
    pub async fn list_by_category(&self, category_id: i32, page: usize) -> Result<QuestionPage> {
        let questions = self.repository.filter_by_category(category_id).await?;
        let result = QuestionPage::build(&questions, page, QUESTIONS_PER_PAGE, questions.len());
        non_empty(result, || {
            format!("No questions for category {} on page {}", category_id, page)
        })
    }

    /// One page of search hits; `total_questions` counts the whole store
    pub async fn search_page(&self, term: &str, page: usize) -> Result<QuestionPage> {
        let hits = self.repository.search(term).await?;
        if hits.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions matching {:?}",
                term
            )));
        }

        let total = self.total().await?;
        let result = QuestionPage::build(&hits, page, QUESTIONS_PER_PAGE, total);
        non_empty(result, || format!("No search results on page {}", page))
    }

    pub async fn get(&self, id: i32) -> Result<Question> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))
    }

    /// Insert a question and report the store size afterwards.
    ///
    /// The insert is already committed when the count runs, so a failing
    /// count only drops the total.
    pub async fn create(&self, new_question: NewQuestion) -> Result<(Question, Option<usize>)> {
        let question = self.repository.insert(new_question).await?;
        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        let total = match self.total().await {
            Ok(total) => Some(total),
            Err(e) => {
                tracing::warn!("Question {} stored but count failed: {}", question.id, e);
                None
            }
        };
        Ok((question, total))
    }

    /// Delete by id. Deleting an id that does not exist is still a success.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let removed = self.repository.delete_by_id(id).await?;
        if removed {
            tracing::info!("Question deleted: id={}", id);
        } else {
            tracing::info!("Delete of question {} matched no row", id);
        }
        Ok(removed)
    }

    async fn total(&self) -> Result<usize> {
        let count = self.repository.count().await?;
        usize::try_from(count)
            .map_err(|_| AppError::Internal(format!("Invalid question count: {}", count)))
    }
}

fn non_empty(page: QuestionPage, describe: impl FnOnce() -> String) -> Result<QuestionPage> {
    if page.is_empty() {
        Err(AppError::NotFound(describe()))
    } else {
        Ok(page)
    }
}
