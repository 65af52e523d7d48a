//! Pagination types
//!
//! Defines the list options sent with every list request and the pagination
//! block returned with every list response.

use crate::http::RequestConfig;
use serde::{Deserialize, Serialize};

/// Query parameter selecting the page number
pub const PAGE_NUMBER_PARAM: &str = "page[number]";

/// Query parameter selecting the page size
pub const PAGE_SIZE_PARAM: &str = "page[size]";

/// Options common to every list operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// The page number to request (1-based). Server default when unset.
    pub page_number: Option<u32>,
    /// The number of elements per page. Server default when unset.
    pub page_size: Option<u32>,
}

impl ListOptions {
    /// Create empty list options (server defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific page
    #[must_use]
    pub fn page(mut self, number: u32) -> Self {
        self.page_number = Some(number);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Add the page parameters to a request
    pub fn apply_to(&self, mut request: RequestConfig) -> RequestConfig {
        if let Some(number) = self.page_number {
            request = request.query(PAGE_NUMBER_PARAM, number.to_string());
        }
        if let Some(size) = self.page_size {
            request = request.query(PAGE_SIZE_PARAM, size.to_string());
        }
        request
    }
}

/// The `meta.pagination` block of a list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pagination {
    /// Page contained in this response
    #[serde(default)]
    pub current_page: u32,
    /// Previous page, if any
    #[serde(default)]
    pub prev_page: Option<u32>,
    /// Next page, if any
    #[serde(default)]
    pub next_page: Option<u32>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of items across all pages
    #[serde(default)]
    pub total_count: u64,
}

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available, starting with this page number
    Continue {
        /// Page number to request next
        page_number: u32,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// One page of a list response
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Pagination block, absent on endpoints that are not paged
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, pagination: Option<Pagination>) -> Self {
        Self { items, pagination }
    }

    /// Work out which page follows this one.
    ///
    /// A `next-page` that does not move forward is treated as the end so a
    /// misbehaving server cannot keep a pager looping on the same page.
    pub fn next_page(&self) -> NextPage {
        match &self.pagination {
            Some(p) => match p.next_page {
                Some(next) if next > p.current_page => NextPage::Continue { page_number: next },
                _ => NextPage::Done,
            },
            None => NextPage::Done,
        }
    }
}
