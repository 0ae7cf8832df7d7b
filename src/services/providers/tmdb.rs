/// TMDB (The Movie Database) catalog provider
///
/// API Flow:
/// 1. Title search: /search/movie, or /discover/movie for genre and country filters
/// 2. Actor search: /search/person → first match → /person/{id}/movie_credits
/// 3. For every returned movie: /movie/{id}/videos → trailer selection
///
/// Trailer lookups run one movie at a time and the first failure aborts the
/// batch, so callers never see a partially built result list.
use std::collections::BTreeSet;
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{MovieRecord, TmdbCredits, TmdbMovieItem, TmdbPage, TmdbPerson, TmdbVideo},
    services::{
        providers::{CatalogProvider, SearchFilter},
        trailer,
    },
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        language: String,
        timeout_secs: u64,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
        })
    }

    /// GET `path` with the API key appended and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {} for {}: {}",
                status, path, body
            )));
        }

        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                response = %response_text,
                "Failed to deserialize TMDB response"
            );
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })
    }

    /// Trailer URL for one movie, `None` when no suitable video exists
    async fn fetch_trailer(&self, movie_id: u64) -> AppResult<Option<String>> {
        let path = format!("/movie/{}/videos", movie_id);
        let videos: TmdbPage<TmdbVideo> = self.get_json(&path, &[]).await?;
        let trailer = trailer::select_trailer(&videos.results);

        tracing::debug!(
            movie_id = movie_id,
            candidates = videos.results.len(),
            found = trailer.is_some(),
            "Trailer lookup completed"
        );

        Ok(trailer)
    }

    /// Truncates to `limit` and normalizes each item, looking up its trailer
    async fn normalize(
        &self,
        mut items: Vec<TmdbMovieItem>,
        limit: usize,
    ) -> AppResult<Vec<MovieRecord>> {
        items.truncate(limit);

        let mut movies = Vec::with_capacity(items.len());
        for item in items {
            let trailer_url = self.fetch_trailer(item.id).await?;
            movies.push(item.into_record(trailer_url));
        }
        Ok(movies)
    }

    async fn title_search(&self, query: &str, limit: usize) -> AppResult<Vec<MovieRecord>> {
        let page: TmdbPage<TmdbMovieItem> = self
            .get_json(
                "/search/movie",
                &[("query", query), ("language", self.language.as_str())],
            )
            .await?;
        let movies = self.normalize(page.results, limit).await?;

        tracing::info!(
            query = %query,
            results = movies.len(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(movies)
    }

    async fn discover(&self, filter: &SearchFilter, limit: usize) -> AppResult<Vec<MovieRecord>> {
        let genre_ids = filter
            .genres
            .iter()
            .flat_map(|g| g.tmdb_ids())
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let countries = filter
            .country_codes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("|");

        let mut params = vec![("language", self.language.as_str())];
        if !genre_ids.is_empty() {
            params.push(("with_genres", genre_ids.as_str()));
        }
        if !countries.is_empty() {
            params.push(("with_origin_country", countries.as_str()));
        }

        let page: TmdbPage<TmdbMovieItem> = self.get_json("/discover/movie", &params).await?;
        let movies = self.normalize(page.results, limit).await?;

        tracing::info!(
            genres = %genre_ids,
            countries = %countries,
            results = movies.len(),
            provider = "tmdb",
            "Discover completed"
        );

        Ok(movies)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn search_by_title(&self, query: &str, limit: usize) -> AppResult<Vec<MovieRecord>> {
        self.title_search(query, limit).await
    }

    async fn search_by_region(
        &self,
        country_codes: &BTreeSet<String>,
        limit: usize,
    ) -> AppResult<Vec<MovieRecord>> {
        let filter = SearchFilter {
            country_codes: country_codes.clone(),
            ..SearchFilter::default()
        };
        self.discover(&filter, limit).await
    }

    async fn search_multi(
        &self,
        filter: &SearchFilter,
        limit: usize,
    ) -> AppResult<Vec<MovieRecord>> {
        match filter.title_query() {
            Some(title) => self.title_search(title, limit).await,
            None => self.discover(filter, limit).await,
        }
    }

    async fn search_by_actor(&self, name: &str, limit: usize) -> AppResult<Vec<MovieRecord>> {
        let people: TmdbPage<TmdbPerson> =
            self.get_json("/search/person", &[("query", name)]).await?;

        // Ambiguous names are not disambiguated
        let Some(person) = people.results.first() else {
            tracing::info!(actor = %name, provider = "tmdb", "No person matched");
            return Ok(Vec::new());
        };

        let path = format!("/person/{}/movie_credits", person.id);
        let credits: TmdbCredits = self.get_json(&path, &[]).await?;

        let mut cast = credits.cast;
        cast.sort_by(|a, b| {
            let a = a.popularity.unwrap_or(0.0);
            let b = b.popularity.unwrap_or(0.0);
            b.total_cmp(&a)
        });

        let movies = self.normalize(cast, limit).await?;

        tracing::info!(
            actor = %name,
            person_id = person.id,
            results = movies.len(),
            provider = "tmdb",
            "Actor search completed"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
