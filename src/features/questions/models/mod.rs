mod question;
mod question_page;

pub use question::{NewQuestion, Question};
pub use question_page::QuestionPage;
