use log::info;
use serde::{Deserialize, Serialize};

use crate::api::RecipeSource;
use crate::error::Result;

/// One entry of a search result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// A single search submission and whatever it returned
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub query: String,
    pub results: Vec<RecipeSummary>,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
        }
    }

    /// Fetches results for `query`, replacing any previous ones
    pub async fn get_results(&mut self, source: &dyn RecipeSource) -> Result<()> {
        self.results = source.search(&self.query).await?;
        info!("Search '{}' returned {} recipes", self.query, self.results.len());
        Ok(())
    }

    /// Results shown on the 1-based `page`; empty when out of range
    pub fn page(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        if page == 0 || per_page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(per_page);
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + per_page).min(self.results.len());
        &self.results[start..end]
    }

    pub fn num_pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.results.len().div_ceil(per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_with(n: usize) -> Search {
        let mut search = Search::new("pizza");
        search.results = (0..n)
            .map(|i| RecipeSummary {
                id: i.to_string(),
                title: format!("Pizza {i}"),
                author: "Closet Cooking".to_string(),
                img: String::new(),
            })
            .collect();
        search
    }

    #[test]
    fn test_paging() {
        let search = search_with(28);

        assert_eq!(search.num_pages(10), 3);
        assert_eq!(search.page(1, 10).len(), 10);
        assert_eq!(search.page(1, 10)[0].id, "0");
        assert_eq!(search.page(3, 10).len(), 8);
        assert_eq!(search.page(3, 10)[0].id, "20");
        assert!(search.page(4, 10).is_empty());
        assert!(search.page(0, 10).is_empty());
    }

    #[test]
    fn test_empty_results() {
        let search = search_with(0);
        assert_eq!(search.num_pages(10), 0);
        assert!(search.page(1, 10).is_empty());
    }
}
