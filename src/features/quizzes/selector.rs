//! Random selection of the next quiz question.
//!
//! A round moves through three stages: the candidate pool is gathered,
//! previously asked questions are excluded, and one of the remaining
//! candidates is drawn (or the round is exhausted).

use std::collections::HashSet;

use rand::Rng;

use crate::features::questions::models::Question;

/// Where candidates are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    AllCategories,
    Category(i32),
}

/// Uniform choice of an index, injectable so tests can be deterministic
pub trait CandidatePicker: Send + Sync {
    /// An index in `0..len`; never called with `len == 0`
    fn pick_index(&self, len: usize) -> usize;
}

/// Picker backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl CandidatePicker for ThreadRngPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Candidates gathered for the round, before exclusion
#[derive(Debug, Clone)]
pub struct CandidatePool {
    candidates: Vec<Question>,
}

/// Candidates left once already-asked ids are removed
#[derive(Debug, Clone)]
pub struct RemainingPool {
    candidates: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Selected(Question),
    Exhausted,
}

impl CandidatePool {
    pub fn new(candidates: Vec<Question>) -> Self {
        Self { candidates }
    }

    pub fn exclude(self, asked: &HashSet<i32>) -> RemainingPool {
        RemainingPool {
            candidates: self
                .candidates
                .into_iter()
                .filter(|q| !asked.contains(&q.id))
                .collect(),
        }
    }
}

impl RemainingPool {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn select(mut self, picker: &dyn CandidatePicker) -> Selection {
        if self.is_empty() {
            return Selection::Exhausted;
        }
        let len = self.candidates.len();
        let index = picker.pick_index(len).min(len - 1);
        Selection::Selected(self.candidates.swap_remove(index))
    }
}

impl Selection {
    pub fn into_question(self) -> Option<Question> {
        match self {
            Selection::Selected(question) => Some(question),
            Selection::Exhausted => None,
        }
    }
}

/// Draw one question from `pool` whose id is not in `exclude_ids`
pub fn select_next(
    pool: Vec<Question>,
    exclude_ids: &HashSet<i32>,
    picker: &dyn CandidatePicker,
) -> Option<Question> {
    CandidatePool::new(pool)
        .exclude(exclude_ids)
        .select(picker)
        .into_question()
}
