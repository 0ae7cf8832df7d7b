use serde::Deserialize;
use std::collections::BTreeSet;

use crate::{
    error::{AppError, AppResult},
    models::{catalog::resolve_country, Genre, MovieRecord},
    services::providers::{CatalogProvider, SearchFilter},
};

/// One search action, as chosen in the search menu
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum SearchQuery {
    Title {
        query: String,
    },
    /// Discovers by the genre's catalog ids (a genre-only filter), rather
    /// than title-searching for the genre's label
    Genre {
        genre: Genre,
    },
    Actor {
        name: String,
    },
    /// Country names or ISO codes
    Region {
        countries: Vec<String>,
    },
    Multi {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        genres: Vec<Genre>,
        #[serde(default)]
        countries: Vec<String>,
    },
}

impl SearchQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchQuery::Title { .. } => "title",
            SearchQuery::Genre { .. } => "genre",
            SearchQuery::Actor { .. } => "actor",
            SearchQuery::Region { .. } => "region",
            SearchQuery::Multi { .. } => "multi",
        }
    }
}

/// Resolves country names or codes into a set of ISO codes
pub fn resolve_countries(inputs: &[String]) -> AppResult<BTreeSet<String>> {
    inputs
        .iter()
        .map(|input| {
            resolve_country(input)
                .map(str::to_string)
                .ok_or_else(|| AppError::InvalidInput(format!("Unknown country: {}", input)))
        })
        .collect()
}

fn require_text<'a>(value: &'a str, what: &str) -> AppResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{} cannot be empty", what)));
    }
    Ok(value)
}

/// Validates the query and runs it against the catalog
pub async fn run_search(
    provider: &dyn CatalogProvider,
    query: &SearchQuery,
    limit: usize,
) -> AppResult<Vec<MovieRecord>> {
    let movies = match query {
        SearchQuery::Title { query } => {
            let query = require_text(query, "Search query")?;
            provider.search_by_title(query, limit).await?
        }
        SearchQuery::Genre { genre } => {
            provider
                .search_multi(&SearchFilter::by_genre(*genre), limit)
                .await?
        }
        SearchQuery::Actor { name } => {
            let name = require_text(name, "Actor name")?;
            provider.search_by_actor(name, limit).await?
        }
        SearchQuery::Region { countries } => {
            let codes = resolve_countries(countries)?;
            if codes.is_empty() {
                return Err(AppError::InvalidInput(
                    "Select at least one country".to_string(),
                ));
            }
            provider.search_by_region(&codes, limit).await?
        }
        SearchQuery::Multi {
            title,
            genres,
            countries,
        } => {
            let mut filter = SearchFilter {
                title: title.clone(),
                genres: genres.clone(),
                country_codes: BTreeSet::new(),
            };
            // countries only apply in discover mode; a title query ignores them
            if filter.title_query().is_none() {
                filter.country_codes = resolve_countries(countries)?;
            }
            provider.search_multi(&filter, limit).await?
        }
    };

    tracing::info!(
        kind = query.kind(),
        results = movies.len(),
        provider = provider.name(),
        "Search completed"
    );

    Ok(movies)
}
