use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::query::filters::Pagination;

/// `{count, data}` envelope returned by list queries.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct QueryResult<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> QueryResult<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// One page of a search, with page markers. `next_page` only signals that
/// the page came back full; no total count is computed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Page<T> {
    pub count: usize,
    pub data: Vec<T>,
    pub current_page: u32,
    pub page_size: u32,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            count: data.len(),
            next_page: pagination.next_page(data.len()),
            prev_page: pagination.prev_page(),
            current_page: pagination.page(),
            page_size: pagination.page_size(),
            data,
        }
    }

    /// Slices an already complete, ordered list down to one page.
    pub fn slice(all: Vec<T>, pagination: Pagination) -> Self {
        if pagination.is_unbounded() {
            return Self::new(all, pagination);
        }
        let data = all
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();
        Self::new(data, pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_markers_from_full_page() {
        let page = Page::new(vec![1; 10], Pagination::new(2, 10));
        assert_eq!(page.count, 10);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.next_page, Some(3));
        assert_eq!(page.prev_page, Some(1));
    }

    #[test]
    fn test_short_page_has_no_next() {
        let page = Page::new(vec![1; 4], Pagination::new(1, 10));
        assert_eq!(page.next_page, None);
        assert_eq!(page.prev_page, None);
    }

    #[test]
    fn test_slice_after_grouping() {
        let all: Vec<u32> = (1..=25).collect();
        let third = Page::slice(all.clone(), Pagination::new(3, 10));
        assert_eq!(third.data, (21..=25).collect::<Vec<_>>());
        assert_eq!(third.next_page, None);

        let everything = Page::slice(all, Pagination::unbounded());
        assert_eq!(everything.count, 25);
    }
}
