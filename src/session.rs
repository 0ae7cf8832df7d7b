use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    collections::{Favorites, ResultStaging},
    models::{MovieRecord, UserRating},
};

/// Everything one user works with: the staged results and their favorites
///
/// Sessions share nothing; the hosting shell keeps one per session id.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Last time the session was changed; drives idle expiry
    pub last_active: DateTime<Utc>,
    pub results: ResultStaging,
    pub favorites: Favorites,
}

/// Result of adding a staged movie to the favorites
#[derive(Debug, Clone, PartialEq)]
pub enum AddFavoriteOutcome {
    Added(MovieRecord),
    AlreadyPresent(MovieRecord),
    NoSuchPosition,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            last_active: now,
            results: ResultStaging::new(),
            favorites: Favorites::new(),
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_active = now;
    }

    pub fn is_idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_active < cutoff
    }

    /// Replaces the staged results with a freshly fetched batch
    pub fn stage_results(&mut self, movies: Vec<MovieRecord>) {
        self.results.replace_with(movies);
    }

    /// Copies the staged movie at `position` into the favorites
    pub fn add_favorite_at(
        &mut self,
        position: usize,
        user_rating: Option<UserRating>,
    ) -> AddFavoriteOutcome {
        let Some(movie) = self.results.at(position).cloned() else {
            return AddFavoriteOutcome::NoSuchPosition;
        };

        if self.favorites.add(movie.clone(), user_rating) {
            tracing::info!(session_id = %self.id, movie_id = %movie.id, "Added to favorites");
            AddFavoriteOutcome::Added(movie)
        } else {
            AddFavoriteOutcome::AlreadyPresent(movie)
        }
    }
}
