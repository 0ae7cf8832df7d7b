/// Offline catalog used when no TMDB credential is configured
use std::collections::BTreeSet;

use crate::{
    error::AppResult,
    models::MovieRecord,
    services::providers::{CatalogProvider, SearchFilter},
};

/// Fixed sample movies served in demo mode
pub fn sample_movies() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new(1, "全面啟動").with_release("2010-07-16", 8.8),
        MovieRecord::new(2, "刺激1995").with_release("1994-09-23", 9.3),
        MovieRecord::new(3, "寄生上流").with_release("2019-05-30", 8.6),
        MovieRecord::new(4, "神隱少女").with_release("2001-07-20", 8.5),
        MovieRecord::new(5, "星際效應").with_release("2014-11-07", 8.6),
    ]
}

#[derive(Debug, Clone, Default)]
pub struct SampleProvider;

impl SampleProvider {
    pub fn new() -> Self {
        Self
    }

    fn sample(&self, limit: usize) -> Vec<MovieRecord> {
        let mut movies = sample_movies();
        movies.truncate(limit);
        movies
    }
}

#[async_trait::async_trait]
impl CatalogProvider for SampleProvider {
    async fn search_by_title(&self, _query: &str, limit: usize) -> AppResult<Vec<MovieRecord>> {
        Ok(self.sample(limit))
    }

    async fn search_by_region(
        &self,
        _country_codes: &BTreeSet<String>,
        limit: usize,
    ) -> AppResult<Vec<MovieRecord>> {
        Ok(self.sample(limit))
    }

    async fn search_multi(
        &self,
        _filter: &SearchFilter,
        limit: usize,
    ) -> AppResult<Vec<MovieRecord>> {
        Ok(self.sample(limit))
    }

    /// The sample set carries no cast data
    async fn search_by_actor(&self, _name: &str, _limit: usize) -> AppResult<Vec<MovieRecord>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}
