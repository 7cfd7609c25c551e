// crates/domain/src/options.rs
use std::str::FromStr;

use delivery_query_shared_kernel::{DomainError, DomainResult, ErrorContext, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of deliveries returned when filtering by origin city and type.
pub const CITY_AND_TYPE_LIMIT: usize = 10;

pub const DEFAULT_COUNT_ON_PAGE: usize = 100;
pub const DEFAULT_PAGE_NUMBER: usize = 1;

/// One-based page selection. Example spec strings: `3` or `3:25` (page 3, 25 per page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub count_on_page: usize,
    pub page_number: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { count_on_page: DEFAULT_COUNT_ON_PAGE, page_number: DEFAULT_PAGE_NUMBER }
    }
}

impl PageRequest {
    pub const fn new(page_number: usize, count_on_page: usize) -> Self {
        Self { count_on_page, page_number }
    }

    pub const fn first(count_on_page: usize) -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, count_on_page)
    }

    /// Number of leading elements to skip, or `None` when the request cannot
    /// select anything (zero page, zero size, or an offset past `usize::MAX`).
    pub fn offset(&self) -> Option<usize> {
        if self.count_on_page == 0 {
            return None;
        }
        self.page_number.checked_sub(1)?.checked_mul(self.count_on_page)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.page_number == 0 {
            return Err(DomainError::InvalidPaging { field: "page_number".into(), value: self.page_number });
        }
        if self.count_on_page == 0 {
            return Err(DomainError::InvalidPaging { field: "count_on_page".into(), value: self.count_on_page });
        }
        Ok(())
    }

    /// Loads a request from JSON; absent fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("reading page request")
    }
}

impl FromStr for PageRequest {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = |details: String| DomainError::InvalidPageSpec { spec: s.to_string(), details };

        let (page, count) = match s.split_once(':') {
            Some((page, count)) => (page.trim(), Some(count.trim())),
            None => (s.trim(), None),
        };
        if page.is_empty() {
            return Err(invalid("empty page number".into()));
        }

        let page_number = page.parse::<usize>().map_err(|e| invalid(format!("page number: {e}")))?;
        let count_on_page = match count {
            Some(c) => c.parse::<usize>().map_err(|e| invalid(format!("count on page: {e}")))?,
            None => DEFAULT_COUNT_ON_PAGE,
        };

        let request = Self::new(page_number, count_on_page);
        request.validate()?;
        Ok(request)
    }
}
