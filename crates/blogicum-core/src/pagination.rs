//! Page requests and results for post listings.

use serde::Serialize;

use crate::error::DomainError;

/// Posts shown per listing page.
pub const POSTS_PER_PAGE: u64 = 10;

// Postgres binds OFFSET as a signed 64-bit integer.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u64,
    pub size: u64,
}

impl PageRequest {
    /// Page `number` of a post listing. Page 0 does not exist.
    pub fn new(number: u64) -> Result<Self, DomainError> {
        Self::with_size(number, POSTS_PER_PAGE)
    }

    /// Pages whose offset does not fit a SQL `OFFSET` cannot hold any rows
    /// and are not found either.
    pub fn with_size(number: u64, size: u64) -> Result<Self, DomainError> {
        let offset = number
            .checked_sub(1)
            .and_then(|n| n.checked_mul(size))
            .filter(|&offset| size > 0 && offset <= MAX_OFFSET);
        if offset.is_none() {
            return Err(DomainError::not_found("page", number));
        }
        Ok(Self { number, size })
    }

    pub fn first() -> Self {
        Self {
            number: 1,
            size: POSTS_PER_PAGE,
        }
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.number - 1) * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of results plus the totals needed to render pager links.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            number: request.number,
            size: request.size,
            total_items,
        }
    }

    /// An empty listing still has one (empty) page.
    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.size).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Requests past the last page are not found.
    pub fn ensure_in_range(self) -> Result<Self, DomainError> {
        if self.number > self.total_pages() {
            return Err(DomainError::not_found("page", self.number));
        }
        Ok(self)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_items: self.total_items,
        }
    }
}
