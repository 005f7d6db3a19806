//! # List Query Parameters
//!
//! Parses the `/api/products` query string into a structured query.
//!
//! `page` and `limit` arrive as raw strings so that a non-numeric value falls
//! back to the default instead of failing extraction; no list request is ever
//! rejected over its query parameters.

use serde::Deserialize;

/// Default page when unspecified or unparseable
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when unspecified or unparseable
pub const DEFAULT_LIMIT: usize = 5;

/// Raw query parameters as they appear on the request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Parsed list query
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Case-insensitive substring match against `name`
    pub search: Option<String>,

    /// Exact match against the stored lowercase category
    pub category: Option<String>,

    /// 1-based page number
    pub page: usize,

    /// Page size; zero yields an empty page
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListQuery {
    /// Number of records to skip before the requested page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Page number 1 with a given limit
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        Self {
            search: params.search.filter(|s| !s.is_empty()),
            category: params.category.filter(|c| !c.is_empty()),
            page: parse_clamped(params.page.as_deref(), DEFAULT_PAGE, 1),
            limit: parse_clamped(params.limit.as_deref(), DEFAULT_LIMIT, 0),
        }
    }
}

/// Parse a numeric parameter, falling back to `default` when absent or
/// non-numeric and clamping to `min` when below it.
fn parse_clamped(raw: Option<&str>, default: usize, min: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|n| n.max(min as i64) as usize)
        .unwrap_or(default)
}
