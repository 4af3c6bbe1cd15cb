use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error envelope shared by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// HTTP status code, repeated in the body
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.into(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=` query parameter used by every question listing.
///
/// Kept as raw text: a missing or non-numeric page means page 1, while an
/// integer below 1 or too large for `usize` resolves to a page past the end.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<u32>, minimum = 1)]
    pub page: Option<String>,
}

/// Page index no listing can reach; `paginate` yields nothing for it
const OUT_OF_RANGE_PAGE: usize = usize::MAX;

impl PageQuery {
    pub fn page(&self) -> usize {
        let Some(raw) = self.page.as_deref().map(str::trim) else {
            return 1;
        };
        let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return 1;
        }

        match raw.parse::<usize>() {
            Ok(page) if page >= 1 => page,
            _ => OUT_OF_RANGE_PAGE,
        }
    }
}

/// Slice one 1-indexed page out of an ordered sequence.
///
/// Pages past the end are empty rather than an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
