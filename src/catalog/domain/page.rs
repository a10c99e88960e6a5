//! Pagination request and result types.

use super::CatalogDomainError;
use serde::{Deserialize, Serialize};

/// Zero-based page request.
///
/// # Examples
///
/// ```
/// use carboot::catalog::domain::PageRequest;
///
/// let request = PageRequest::new(2, 20)?;
/// assert_eq!(request.offset(), 40);
/// assert!(PageRequest::new(0, 0).is_err());
/// # Ok::<(), carboot::catalog::domain::CatalogDomainError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::InvalidPageSize`] when `size` is zero.
    pub const fn new(page: u32, size: u32) -> Result<Self, CatalogDomainError> {
        if size == 0 {
            return Err(CatalogDomainError::InvalidPageSize);
        }
        Ok(Self { page, size })
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Returns the number of items preceding this page.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of a result set, together with the total match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    page: u32,
    size: u32,
    total: u64,
}

impl<T> Page<T> {
    /// Creates a page from its items, the request that produced it, and the
    /// total number of matches across all pages.
    #[must_use]
    pub const fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total,
        }
    }

    /// Returns the items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the requested page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Returns the total number of matches across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of pages the full result set spans.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.size))
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reports whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
