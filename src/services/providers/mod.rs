/// Movie catalog abstraction
///
/// The live TMDB client and the offline sample catalog implement the same
/// trait. Which one backs the application is decided once, from the
/// configuration, in [`build_provider`]; call sites never branch on the mode.
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::{
    config::{CatalogMode, Config},
    error::AppResult,
    models::{Genre, MovieRecord},
};

pub mod sample;
pub mod tmdb;

pub use sample::SampleProvider;
pub use tmdb::TmdbProvider;

/// Combined filter for [`CatalogProvider::search_multi`]
///
/// A non-blank title switches the query to title search and the genre and
/// country filters are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub title: Option<String>,
    pub genres: Vec<Genre>,
    pub country_codes: BTreeSet<String>,
}

impl SearchFilter {
    pub fn by_genre(genre: Genre) -> Self {
        Self {
            genres: vec![genre],
            ..Self::default()
        }
    }

    /// The title to search for, if title mode applies
    pub fn title_query(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Trait for movie catalogs
///
/// Every operation returns normalized records; an empty result is `Ok(vec![])`.
/// Any failed fetch aborts the whole batch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search movies whose title matches `query`
    async fn search_by_title(&self, query: &str, limit: usize) -> AppResult<Vec<MovieRecord>>;

    /// Discover movies originating from any of the given countries
    async fn search_by_region(
        &self,
        country_codes: &BTreeSet<String>,
        limit: usize,
    ) -> AppResult<Vec<MovieRecord>>;

    /// Title search when a title is given, otherwise discover by genre and country
    async fn search_multi(&self, filter: &SearchFilter, limit: usize)
        -> AppResult<Vec<MovieRecord>>;

    /// Movies of the first person matching `name`, most popular first
    async fn search_by_actor(&self, name: &str, limit: usize) -> AppResult<Vec<MovieRecord>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Builds the catalog selected by the configuration
pub fn build_provider(config: &Config) -> AppResult<Arc<dyn CatalogProvider>> {
    let provider: Arc<dyn CatalogProvider> = match config.catalog_mode() {
        CatalogMode::Live { api_key } => Arc::new(TmdbProvider::new(
            api_key,
            config.tmdb_api_url.clone(),
            config.tmdb_language.clone(),
            config.request_timeout_secs,
        )?),
        CatalogMode::Demo => {
            tracing::warn!("TMDB_API_KEY not set, serving sample catalog data");
            Arc::new(SampleProvider::new())
        }
    };

    tracing::info!(provider = provider.name(), "Catalog provider ready");
    Ok(provider)
}
