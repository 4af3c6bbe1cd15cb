/// Number of questions on one page of any question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Quiz category type tag meaning "draw from every category"
pub const ALL_CATEGORIES_MARKER: &str = "click";
