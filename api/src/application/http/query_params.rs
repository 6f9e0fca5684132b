use std::collections::HashMap;

use spatrem_core::domain::query::filters::{DEFAULT_PAGE_SIZE, Pagination, RawFilter};

/// Pagination parameters as sent by clients: `page` (1-based) and
/// `page_size`. Values that are not integers fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PaginationParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE as i64),
        )
    }
}

/// Filter and pagination parameters of the search endpoints.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub filter: RawFilter,
    pub pagination: PaginationParams,
}

fn integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

impl SearchParams {
    /// Parse from a query string or form map
    /// Handles:
    /// - sl, tl, genre, magazine, after_date, before_date
    /// - gender, nationality, language_area, year_birth, year_death
    /// - sortby
    /// - page=1, page_size=10
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = RawFilter::default();
        let mut pagination = PaginationParams::default();

        for (key, value) in query_map {
            let value = Some(value.clone());
            match key.as_str() {
                "sl" => filter.sl = value,
                "tl" => filter.tl = value,
                "genre" => filter.genre = value,
                "magazine" => filter.magazine = value,
                "after_date" => filter.after_date = value,
                "before_date" => filter.before_date = value,
                "gender" => filter.gender = value,
                "nationality" => filter.nationality = value,
                "language_area" => filter.language_area = value,
                "year_birth" => filter.year_birth = value,
                "year_death" => filter.year_death = value,
                "sortby" => filter.sortby = value,
                "page" => pagination.page = value.as_deref().and_then(integer),
                "page_size" => pagination.page_size = value.as_deref().and_then(integer),
                _ => {}
            }
        }

        Self { filter, pagination }
    }

    /// Form fields take precedence over query string parameters.
    pub fn from_query_and_form(
        query_map: &HashMap<String, String>,
        form: &HashMap<String, String>,
    ) -> Self {
        let mut merged = query_map.clone();
        merged.extend(form.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::from_query_map(&merged)
    }
}
