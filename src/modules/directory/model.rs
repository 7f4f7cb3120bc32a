use std::time::Duration;

use validator::Validate;

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub page_size: u32,
    pub debounce: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { page_size: 10, debounce: Duration::from_millis(300) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct DirectoryQuery {
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: u32,
    #[validate(range(min = 1, message = "Page size must be at least 1"))]
    pub page_size: u32,
    pub search_term: String,
}

impl DirectoryQuery {
    pub fn new(page: u32, page_size: u32, search_term: impl Into<String>) -> Self {
        DirectoryQuery { page, page_size, search_term: search_term.into() }
    }

    /// Query string pairs for `GET /api/users`. An empty search term is left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.page_size.to_string())];
        if !self.search_term.is_empty() {
            pairs.push(("search", self.search_term.clone()));
        }
        pairs
    }
}
