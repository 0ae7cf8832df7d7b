use std::collections::HashSet;

use crate::{
    error::AppResult,
    models::{Genre, MovieRecord},
    services::{
        mood::{classify_mood, mood_to_genres, Mood, DEFAULT_MOOD},
        providers::{CatalogProvider, SearchFilter},
    },
};

/// How many of a mood's genres are expanded into catalog queries
pub const GENRE_BUCKETS: usize = 2;
/// Movies requested per expanded genre
pub const PER_GENRE_LIMIT: usize = 5;

/// Outcome of a mood recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct MoodRecommendation {
    pub mood: Mood,
    /// False when no keyword matched and [`DEFAULT_MOOD`] was substituted
    pub detected: bool,
    pub genres: Vec<Genre>,
    pub movies: Vec<MovieRecord>,
}

/// Classifies `text`, queries the mood's leading genres and merges the
/// results in query order, dropping repeated movie ids.
///
/// Each genre is a discover query on its catalog ids, not a title search
/// for the genre's label.
pub async fn recommend_for_mood(
    provider: &dyn CatalogProvider,
    text: &str,
) -> AppResult<MoodRecommendation> {
    let classified = classify_mood(text);
    let mood = classified.unwrap_or(DEFAULT_MOOD);
    let genres: Vec<Genre> = mood_to_genres(mood)
        .iter()
        .copied()
        .take(GENRE_BUCKETS)
        .collect();

    let mut seen = HashSet::new();
    let mut movies = Vec::new();
    for genre in &genres {
        let batch = provider
            .search_multi(&SearchFilter::by_genre(*genre), PER_GENRE_LIMIT)
            .await?;
        movies.extend(batch.into_iter().filter(|m| seen.insert(m.id)));
    }

    tracing::info!(
        mood = mood.label(),
        detected = classified.is_some(),
        results = movies.len(),
        provider = provider.name(),
        "Mood recommendation completed"
    );

    Ok(MoodRecommendation {
        mood,
        detected: classified.is_some(),
        genres,
        movies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockCatalogProvider;

    fn movies(ids: &[u64]) -> Vec<MovieRecord> {
        ids.iter()
            .map(|id| MovieRecord::new(*id, format!("Movie {}", id)))
            .collect()
    }

    #[tokio::test]
    async fn test_merges_two_genres_without_duplicates() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_search_multi()
            .withf(|filter, limit| filter.genres == vec![Genre::Romance] && *limit == PER_GENRE_LIMIT)
            .times(1)
            .returning(|_, _| Ok(movies(&[1, 2, 3])));
        provider
            .expect_search_multi()
            .withf(|filter, _| filter.genres == vec![Genre::Drama])
            .times(1)
            .returning(|_, _| Ok(movies(&[3, 4, 1, 5])));

        let recommendation = recommend_for_mood(&provider, "好想哭").await.unwrap();

        assert_eq!(recommendation.mood, Mood::Tearful);
        assert!(recommendation.detected);
        assert_eq!(recommendation.genres, vec![Genre::Romance, Genre::Drama]);
        let ids: Vec<u64> = recommendation.movies.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_unclassified_text_falls_back_to_default_mood() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_search_multi()
            .times(GENRE_BUCKETS)
            .returning(|_, _| Ok(vec![]));

        let recommendation = recommend_for_mood(&provider, "").await.unwrap();

        assert_eq!(recommendation.mood, DEFAULT_MOOD);
        assert!(!recommendation.detected);
        assert_eq!(recommendation.genres, vec![Genre::Comedy, Genre::Animation]);
        assert!(recommendation.movies.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_no_partial_result() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_search_multi()
            .withf(|filter, _| filter.genres == vec![Genre::Action])
            .returning(|_, _| Ok(movies(&[1])));
        provider
            .expect_search_multi()
            .withf(|filter, _| filter.genres == vec![Genre::Adventure])
            .returning(|_, _| Err(AppError::ExternalApi("timeout".to_string())));

        let result = recommend_for_mood(&provider, "好無聊").await;
        assert!(result.is_err());
    }
}
