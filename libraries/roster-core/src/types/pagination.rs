/// Page-based windowing over the users table
use serde::{Deserialize, Serialize};

/// Page size used when `limit` is absent, unparsable, or below 1
pub const DEFAULT_LIMIT: i64 = 10;

/// A normalized page window
///
/// `page` is always at least 1 and `limit` at least 1, so `offset()` is
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Normalize a raw page/limit pair
    ///
    /// `page < 1` becomes 1 and `limit < 1` becomes [`DEFAULT_LIMIT`].
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: if page < 1 { 1 } else { page },
            limit: if limit < 1 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Build a window from raw query-string values
    ///
    /// Absent or non-numeric values count as 0 and are then normalized
    /// like any other out-of-range value.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(parse_or_zero(page), parse_or_zero(limit))
    }

    /// 1-based page number
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Maximum rows per page
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to skip before this page
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_LIMIT)
    }
}

fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(0)
}

/// Pagination block returned alongside a page of users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page (after normalization)
    pub page: i64,
    /// Requested page size (after normalization)
    pub page_size: i64,
    /// `ceil(total / page_size)`
    pub page_count: i64,
    /// Number of rows in the whole table
    pub total: i64,
}

impl Pagination {
    /// Describe `request` against a table of `total` rows
    pub fn new(request: &PageRequest, total: i64) -> Self {
        let total = total.max(0);
        let limit = request.limit();
        let page_count = total / limit + i64::from(total % limit > 0);

        Self {
            page: request.page(),
            page_size: limit,
            page_count,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        let request = PageRequest::parse(None, None);
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), DEFAULT_LIMIT);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn non_numeric_values_use_defaults() {
        let request = PageRequest::parse(Some("two"), Some("ten"));
        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn values_below_one_are_normalized() {
        assert_eq!(PageRequest::new(0, 0), PageRequest::new(1, 10));
        assert_eq!(PageRequest::new(-3, -1), PageRequest::new(1, 10));
        assert_eq!(PageRequest::parse(Some("-2"), Some("0")), PageRequest::default());
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        assert_eq!(PageRequest::parse(Some("2"), Some("10")).offset(), 10);
        assert_eq!(PageRequest::new(5, 3).offset(), 12);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let request = PageRequest::new(i64::MAX, i64::MAX);
        assert_eq!(request.offset(), i64::MAX);
    }

    #[test]
    fn page_count_rounds_up() {
        let request = PageRequest::new(2, 10);
        let pagination = Pagination::new(&request, 15);
        assert_eq!(
            pagination,
            Pagination {
                page: 2,
                page_size: 10,
                page_count: 2,
                total: 15,
            }
        );

        assert_eq!(Pagination::new(&request, 20).page_count, 2);
        assert_eq!(Pagination::new(&request, 21).page_count, 3);
    }

    #[test]
    fn empty_table_has_zero_pages() {
        let pagination = Pagination::new(&PageRequest::default(), 0);
        assert_eq!(pagination.page_count, 0);
        assert_eq!(pagination.total, 0);
    }

    #[test]
    fn pagination_field_names() {
        let json = serde_json::to_value(Pagination::new(&PageRequest::default(), 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 1, "page_size": 10, "page_count": 1, "total": 3})
        );
    }
}
