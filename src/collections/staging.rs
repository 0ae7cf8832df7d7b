use crate::models::MovieRecord;

/// Ordered holder for the current search or recommendation result set
///
/// Only ever grows at the tail or is reset wholesale. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStaging {
    movies: Vec<MovieRecord>,
}

impl ResultStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the list to empty
    pub fn replace(&mut self) {
        self.movies.clear();
    }

    /// Appends at the tail, preserving fetch order
    pub fn append_in_order(&mut self, movie: MovieRecord) {
        self.movies.push(movie);
    }

    /// Resets the list and fills it with `movies` in order
    pub fn replace_with<I>(&mut self, movies: I)
    where
        I: IntoIterator<Item = MovieRecord>,
    {
        self.replace();
        for movie in movies {
            self.append_in_order(movie);
        }
    }

    pub fn to_sequence(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Movie at a zero-based position, `None` when out of range
    pub fn at(&self, position: usize) -> Option<&MovieRecord> {
        self.movies.get(position)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
