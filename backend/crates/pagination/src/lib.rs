//! Offset pagination primitives shared by Pinboard backend endpoints.
//!
//! A [`PageRequest`] captures a validated zero-based page index and page
//! size; a [`Page`] wraps one page of results together with the totals a
//! client needs to render paging controls. Services produce `Page<Entity>`
//! values from repositories and convert them with [`Page::map`] at the DTO
//! boundary, mirroring the request flow: handler builds the request,
//! repository fills the envelope, service maps the items.
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(0, 2)?;
//! let page = Page::new(vec![10, 20], request, 5);
//! assert_eq!(page.total_pages(), 3);
//! assert_eq!(page.map(|n| n * 2).items(), &[20, 40]);
//! # Ok::<(), pagination::PageRequestError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Page size applied when a caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Rejected [`PageRequest`] parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The page size was zero; an empty window can never make progress.
    #[error("page size must be at least 1")]
    SizeZero,
    /// The page size exceeded [`MAX_PAGE_SIZE`].
    #[error("page size {size} exceeds the maximum of {max}")]
    SizeTooLarge {
        /// Requested page size.
        size: u32,
        /// Largest size the API serves.
        max: u32,
    },
}

/// Validated request for one page of results.
///
/// The page index is zero-based. Construction enforces the size bounds so
/// downstream query code can trust `limit`/`offset` without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest", rename_all = "camelCase")]
pub struct PageRequest {
    page: u32,
    size: u32,
}

/// Unvalidated wire shape backing [`PageRequest`] deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageRequest {
    #[serde(default)]
    page: u32,
    #[serde(default = "default_size")]
    size: u32,
}

const fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = PageRequestError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(raw.page, raw.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a request for `page` with `size` items per page.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::SizeZero`] for a zero size and
    /// [`PageRequestError::SizeTooLarge`] when `size` exceeds
    /// [`MAX_PAGE_SIZE`].
    pub const fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::SizeZero);
        }
        if size > MAX_PAGE_SIZE {
            return Err(PageRequestError::SizeTooLarge {
                size,
                max: MAX_PAGE_SIZE,
            });
        }
        Ok(Self { page, size })
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of items per page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Row offset for an SQL `OFFSET` clause.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.page as i64 * self.size as i64
    }

    /// Row limit for an SQL `LIMIT` clause.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size as i64
    }
}

/// One page of results plus the totals needed for paging controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    page: u32,
    size: u32,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Wrap `items` as the page described by `request` out of
    /// `total_elements` matching rows.
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total_elements,
        }
    }

    /// Empty page for `request`.
    #[must_use]
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Items on this page, in store order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, yielding its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Zero-based index of this page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size (the page may hold fewer items).
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Total number of matching rows across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of pages needed to cover every matching row.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.size as u64)
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page as u64 + 1) < self.total_pages()
    }

    /// Convert every item with `f`, keeping the envelope intact.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
