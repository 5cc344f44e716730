// src/filters.rs
use serde::Deserialize;

use crate::pagination::PageRequest;

/// Parametry stronicowania z query stringa (`?page=2&limit=10`).
/// Wartości nienumeryczne traktowane są jak brakujące.
#[derive(Debug, Default, Deserialize)]
pub struct PagingParams {
    #[serde(default)]
    page: Option<String>,
    #[serde(default)]
    limit: Option<String>,
}

impl PagingParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(parse_number(&self.page), parse_number(&self.limit))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListingParams {
    // Paginacja
    #[serde(flatten)]
    paging: PagingParams,

    // Filtry
    #[serde(default)]
    category_id: Option<String>,
    #[serde(default)]
    search: Option<String>,
}

impl ArticleListingParams {
    pub fn page_request(&self) -> PageRequest {
        self.paging.page_request()
    }

    pub fn filter(&self) -> ArticleFilter {
        ArticleFilter {
            category_id: parse_number(&self.category_id),
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

/// Filtr listy artykułów współdzielony przez zapytanie zliczające i pobierające.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

fn parse_number(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|s| s.trim().parse::<i64>().ok())
}
