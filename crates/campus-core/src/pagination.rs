//! Page-based pagination for listing endpoints.
//!
//! Listing endpoints take two required query parameters:
//!
//! - `page`: page number, starting at 1
//! - `page_size`: items per page, between 1 and [`MAX_PAGE_SIZE`]
//!
//! A missing parameter is reported as [`AppError::MissingParameter`]; an out
//! of range value as [`AppError::BadRequest`].
//!
//! # Example
//!
//! ```ignore
//! async fn list_students(
//!     Query(params): Query<PageParams>,
//! ) -> Result<Json<PaginatedStudents>, AppError> {
//!     let page = params.resolve()?;
//!     let students = repository.list_students(page).await?;
//!     // ...
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::errors::AppError;

pub const MAX_PAGE_SIZE: i64 = 500;

/// Deserializes an optional string into an optional i64.
///
/// Empty query values (`?page=`) are treated as absent.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Raw pagination query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page number, starting at 1
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (1-500)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page_size: Option<i64>,
}

impl PageParams {
    /// Checks presence and bounds of both parameters.
    pub fn resolve(&self) -> Result<Page, AppError> {
        let number = self
            .page
            .ok_or_else(|| AppError::missing_parameter("page"))?;
        let size = self
            .page_size
            .ok_or_else(|| AppError::missing_parameter("page_size"))?;

        let page = Page { number, size };
        page.validate()?;

        // The row window must be addressable.
        (number - 1)
            .checked_mul(size)
            .and_then(|offset| offset.checked_add(size))
            .ok_or_else(|| AppError::bad_request(format!("page {number} is out of range")))?;

        Ok(page)
    }
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct Page {
    #[validate(range(min = 1))]
    pub number: i64,
    #[validate(range(min = 1, max = 500))]
    pub size: i64,
}

impl Page {
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.size
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.size)
    }
}

/// Metadata about a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub page_size: i64,
    /// Total number of items across all pages
    pub total: i64,
    /// Whether there are more items after this page
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(page: Page, total: i64) -> Self {
        Self {
            page: page.number,
            page_size: page.size,
            total,
            has_more: page.offset().saturating_add(page.limit()) < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<i64>, page_size: Option<i64>) -> PageParams {
        PageParams { page, page_size }
    }

    #[test]
    fn test_resolve_valid_page() {
        let page = params(Some(3), Some(20)).resolve().unwrap();
        assert_eq!(page, Page { number: 3, size: 20 });
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_missing_page_is_missing_parameter() {
        let err = params(None, Some(10)).resolve().unwrap_err();
        assert!(matches!(err, AppError::MissingParameter { name } if name == "page"));
    }

    #[test]
    fn test_missing_page_size_is_missing_parameter() {
        let err = params(Some(1), None).resolve().unwrap_err();
        assert!(matches!(err, AppError::MissingParameter { name } if name == "page_size"));
    }

    #[test]
    fn test_page_zero_is_bad_request() {
        let err = params(Some(0), Some(10)).resolve().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_page_size_over_max_is_bad_request() {
        let err = params(Some(1), Some(MAX_PAGE_SIZE + 1)).resolve().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_page_past_addressable_rows_is_bad_request() {
        let err = params(Some(i64::MAX), Some(2)).resolve().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m.contains("out of range")));

        let err = params(Some(i64::MAX / 500 + 2), Some(MAX_PAGE_SIZE))
            .resolve()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_offset_and_meta_saturate_on_unchecked_pages() {
        let page = Page {
            number: i64::MAX,
            size: 2,
        };
        assert_eq!(page.offset(), i64::MAX);
        assert!(!PaginationMeta::new(page, 10).has_more);
    }

    #[test]
    fn test_empty_values_deserialize_as_absent() {
        let params: PageParams = serde_json::from_str(r#"{"page":"","page_size":"5"}"#).unwrap();
        assert_eq!(params.page, None);
        assert_eq!(params.page_size, Some(5));
    }

    #[test]
    fn test_meta_has_more() {
        let page = Page { number: 1, size: 2 };
        assert!(PaginationMeta::new(page, 3).has_more);
        assert!(!PaginationMeta::new(page, 2).has_more);
    }
}
