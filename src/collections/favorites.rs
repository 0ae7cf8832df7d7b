use crate::models::{FavoriteEntry, MovieId, MovieRecord, UserRating};

/// Ordered, duplicate-free list of the user's saved movies
///
/// Entries keep insertion order (oldest first). No two entries share a
/// `movie.id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    entries: Vec<FavoriteEntry>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a copy of `movie` unless an entry with the same id exists.
    /// Returns whether the collection changed.
    pub fn add(&mut self, movie: MovieRecord, user_rating: Option<UserRating>) -> bool {
        if self.contains(movie.id) {
            tracing::debug!(movie_id = %movie.id, "Favorite already present");
            return false;
        }

        tracing::debug!(movie_id = %movie.id, title = %movie.title, "Favorite added");
        self.entries.push(FavoriteEntry { movie, user_rating });
        true
    }

    /// Removes the first entry, scanning from the head, whose trimmed title
    /// matches `title` case-insensitively.
    pub fn remove_by_title(&mut self, title: &str) -> bool {
        let wanted = normalize_title(title);
        let position = self
            .entries
            .iter()
            .position(|entry| normalize_title(&entry.movie.title) == wanted);

        match position {
            Some(index) => {
                let removed = self.entries.remove(index);
                tracing::debug!(movie_id = %removed.movie.id, title = %removed.movie.title, "Favorite removed");
                true
            }
            None => false,
        }
    }

    /// Sets or clears the rating of the entry with `id`
    pub fn set_rating(&mut self, id: MovieId, user_rating: Option<UserRating>) -> bool {
        match self.entries.iter_mut().find(|entry| entry.movie.id == id) {
            Some(entry) => {
                entry.user_rating = user_rating;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.entries.iter().any(|entry| entry.movie.id == id)
    }

    /// Entries from head to tail
    pub fn traverse(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}
