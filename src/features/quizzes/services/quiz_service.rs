use std::collections::HashSet;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::questions::models::Question;
use crate::features::questions::repositories::QuestionRepository;
use crate::features::quizzes::selector::{select_next, CandidatePicker, QuizScope};

/// Draws quiz questions from the store
pub struct QuizService {
    repository: Arc<dyn QuestionRepository>,
    picker: Arc<dyn CandidatePicker>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuestionRepository>, picker: Arc<dyn CandidatePicker>) -> Self {
        Self { repository, picker }
    }

    /// Next unseen question in `scope`, or `None` when every candidate was asked
    pub async fn next_question(
        &self,
        scope: QuizScope,
        previous_questions: &[i32],
    ) -> Result<Option<Question>> {
        let candidates = match scope {
            QuizScope::AllCategories => self.repository.list_all().await?,
            QuizScope::Category(id) => self.repository.filter_by_category(id).await?,
        };

        let asked: HashSet<i32> = previous_questions.iter().copied().collect();
        let pool_size = candidates.len();
        let question = select_next(candidates, &asked, self.picker.as_ref());

        match &question {
            Some(q) => tracing::debug!(
                "Quiz question drawn: id={}, scope={:?}, pool={}",
                q.id,
                scope,
                pool_size
            ),
            None => tracing::debug!(
                "Quiz round exhausted: scope={:?}, pool={}, asked={}",
                scope,
                pool_size,
                asked.len()
            ),
        }

        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::quizzes::selector::ThreadRngPicker;
    use crate::shared::test_helpers::{seeded_question_repository, FixedPicker};

    fn service(picker: Arc<dyn CandidatePicker>) -> QuizService {
        QuizService::new(Arc::new(seeded_question_repository()), picker)
    }

    #[tokio::test]
    async fn test_category_round_stays_in_category() {
        let service = service(Arc::new(ThreadRngPicker));
        for _ in 0..20 {
            let question = service
                .next_question(QuizScope::Category(2), &[])
                .await
                .unwrap()
                .unwrap();
            assert_eq!(question.category, 2);
        }
    }

    #[tokio::test]
    async fn test_all_categories_reaches_beyond_one_category() {
        let service = service(Arc::new(ThreadRngPicker));
        let mut categories = HashSet::new();
        for _ in 0..200 {
            if let Some(q) = service
                .next_question(QuizScope::AllCategories, &[])
                .await
                .unwrap()
            {
                categories.insert(q.category);
            }
        }
        assert!(categories.len() > 1);
    }

    #[tokio::test]
    async fn test_previous_questions_are_never_repeated() {
        // Category 2 holds ids 16..=19
        let service = service(Arc::new(FixedPicker(0)));
        let question = service
            .next_question(QuizScope::Category(2), &[16, 17, 19])
            .await
            .unwrap();
        assert_eq!(question.map(|q| q.id), Some(18));
    }

    #[tokio::test]
    async fn test_exhausted_round_returns_none() {
        let service = service(Arc::new(FixedPicker(0)));
        let question = service
            .next_question(QuizScope::Category(2), &[16, 17, 18, 19])
            .await
            .unwrap();
        assert!(question.is_none());
    }

    #[tokio::test]
    async fn test_unknown_category_returns_none() {
        let service = service(Arc::new(FixedPicker(0)));
        let question = service
            .next_question(QuizScope::Category(100), &[])
            .await
            .unwrap();
        assert!(question.is_none());
    }
}
