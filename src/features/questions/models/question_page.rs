use std::collections::BTreeSet;

use crate::features::questions::models::Question;
use crate::shared::types::paginate;

/// One visible page of a question listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Categories present on this page only, not in the whole result set
    pub current_category: Vec<i32>,
}

impl QuestionPage {
    /// Slice `results` to `page` and aggregate categories over that slice.
    ///
    /// `total_questions` is passed in because listings disagree on what it
    /// counts (the filtered set, or the whole store for search).
    pub fn build(results: &[Question], page: usize, page_size: usize, total_questions: usize) -> Self {
        let visible = paginate(results, page, page_size);
        Self {
            current_category: distinct_categories(visible),
            questions: visible.to_vec(),
            total_questions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Distinct category ids appearing in `page`, ascending
pub fn distinct_categories(page: &[Question]) -> Vec<i32> {
    page.iter()
        .map(|q| q.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
