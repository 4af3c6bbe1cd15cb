//! Trivia questions: paginated listing, category filtering, search and
//! create/delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Page of all questions |
//! | POST | `/questions` | Create a question |
//! | GET | `/questions/{id}` | Single question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/searchQuestions?page=N` | Substring search on question text |
//! | GET | `/categories/{id}/questions?page=N` | Page of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgQuestionRepository;
pub use services::QuestionService;
