//! In-memory stores and fixtures shared by unit and HTTP tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use tokio::sync::RwLock;

use crate::app::{self, AppServices};
use crate::core::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::categories::CategoryService;
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::questions::repositories::QuestionRepository;
use crate::features::questions::QuestionService;
use crate::features::quizzes::selector::CandidatePicker;
use crate::features::quizzes::QuizService;

/// Question with generated text in the given category
pub fn question(id: i32, category: i32) -> Question {
    Question {
        id,
        question: Sentence(3..8).fake(),
        answer: Sentence(1..3).fake(),
        category,
        difficulty: 1,
    }
}

pub fn new_question(question: &str, answer: &str, category: i32, difficulty: i32) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

/// Always picks the same index
pub struct FixedPicker(pub usize);

impl CandidatePicker for FixedPicker {
    fn pick_index(&self, _len: usize) -> usize {
        self.0
    }
}

#[derive(Default)]
struct QuestionTable {
    next_id: i32,
    rows: Vec<Question>,
}

/// Vec-backed question store keeping insertion order
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    table: RwLock<QuestionTable>,
}

impl InMemoryQuestionRepository {
    pub fn with_questions(rows: Vec<Question>) -> Self {
        let next_id = rows.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            table: RwLock::new(QuestionTable { next_id, rows }),
        }
    }

    async fn select(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        let table = self.table.read().await;
        table.rows.iter().filter(|q| keep(q)).cloned().collect()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>> {
        Ok(self.select(|_| true).await)
    }

    async fn filter_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        Ok(self.select(|q| q.category == category_id).await)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let needle = term.to_lowercase();
        Ok(self
            .select(|q| q.question.to_lowercase().contains(&needle))
            .await)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>> {
        Ok(self.select(|q| q.id == id).await.into_iter().next())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.table.read().await.rows.len() as i64)
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question> {
        let mut table = self.table.write().await;
        let id = table.next_id.max(1);
        table.next_id = id + 1;
        let stored = question.with_id(id);
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|q| q.id != id);
        Ok(table.rows.len() < before)
    }
}

/// Store operation a `FaultyQuestionRepository` refuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Delete,
    Count,
}

/// In-memory store where one operation always fails with a pool timeout
pub struct FaultyQuestionRepository {
    inner: InMemoryQuestionRepository,
    fault: Fault,
}

impl FaultyQuestionRepository {
    pub fn new(inner: InMemoryQuestionRepository, fault: Fault) -> Self {
        Self { inner, fault }
    }

    fn check(&self, operation: Fault) -> Result<()> {
        if self.fault == operation {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl QuestionRepository for FaultyQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>> {
        self.inner.list_all().await
    }

    async fn filter_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        self.inner.filter_by_category(category_id).await
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>> {
        self.inner.search(term).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>> {
        self.inner.find_by_id(id).await
    }

    async fn count(&self) -> Result<i64> {
        self.check(Fault::Count)?;
        self.inner.count().await
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question> {
        self.inner.insert(question).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        self.check(Fault::Delete)?;
        self.inner.delete_by_id(id).await
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    rows: Vec<Category>,
}

impl InMemoryCategoryRepository {
    /// Categories numbered from 1 in the given order
    pub fn with_labels(labels: &[&str]) -> Self {
        let rows = labels
            .iter()
            .zip(1..)
            .map(|(label, id)| Category {
                id,
                label: label.to_string(),
            })
            .collect();
        Self { rows }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        Ok(self.rows.clone())
    }
}

pub const SEED_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Same rows as the seed migration: 6 categories, 19 questions
pub fn seed_questions() -> Vec<Question> {
    let rows: [(i32, &str, &str, i32, i32); 19] = [
        (2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
        (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
        (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
        (6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
        (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        (10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        (11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
        (12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
        (13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        (14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        (15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        (16, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
        (17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
        (19, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
        (20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
        (21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
        (22, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        (23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ];

    rows.into_iter()
        .map(|(id, question, answer, category, difficulty)| Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
        .collect()
}

pub fn seeded_question_repository() -> InMemoryQuestionRepository {
    InMemoryQuestionRepository::with_questions(seed_questions())
}

pub fn seeded_category_repository() -> InMemoryCategoryRepository {
    InMemoryCategoryRepository::with_labels(&SEED_CATEGORIES)
}

fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 64 * 1024,
    }
}

/// Full router over the given stores
pub fn app_with(
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
    picker: Arc<dyn CandidatePicker>,
) -> Router {
    let services = AppServices {
        category_service: Arc::new(CategoryService::new(categories)),
        question_service: Arc::new(QuestionService::new(Arc::clone(&questions))),
        quiz_service: Arc::new(QuizService::new(questions, picker)),
    };
    app::router(services, &test_app_config())
}

/// Full router over the seeded dataset
pub fn seeded_app(picker: Arc<dyn CandidatePicker>) -> Router {
    app_with(
        Arc::new(seeded_question_repository()),
        Arc::new(seeded_category_repository()),
        picker,
    )
}
