//! Quiz play: one random, not yet asked question per request.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next question for `{previous_questions, quiz_category}` |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod selector;
pub mod services;

pub use selector::ThreadRngPicker;
pub use services::QuizService;
