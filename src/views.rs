//! Table-shaped projections of the staged results and the favorites.

use serde::Serialize;

use crate::models::{FavoriteEntry, MovieId, MovieRecord};

/// Characters of synopsis shown before truncation
pub const SYNOPSIS_LIMIT: usize = 120;
pub const NO_SYNOPSIS: &str = "（無資料）";
pub const NO_TRAILER: &str = "N/A";
pub const UNRATED: &str = "未評分";

/// A display table; an empty collection yields [`Table::Empty`], never header-only rows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "rows", rename_all = "snake_case")]
pub enum Table<R> {
    Empty,
    Rows(Vec<R>),
}

impl<R> Table<R> {
    fn from_rows(rows: Vec<R>) -> Self {
        if rows.is_empty() {
            Table::Empty
        } else {
            Table::Rows(rows)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Table::Empty)
    }

    pub fn rows(&self) -> &[R] {
        match self {
            Table::Empty => &[],
            Table::Rows(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub position: usize,
    pub title: String,
    pub release_date: String,
    pub score: f64,
    pub synopsis: String,
    pub trailer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteRow {
    pub position: usize,
    pub title: String,
    pub movie_id: MovieId,
    pub rating: String,
    pub score: f64,
}

/// First [`SYNOPSIS_LIMIT`] characters plus an ellipsis when longer
pub fn synopsis(overview: &str) -> String {
    if overview.is_empty() {
        return NO_SYNOPSIS.to_string();
    }
    if overview.chars().count() > SYNOPSIS_LIMIT {
        let head: String = overview.chars().take(SYNOPSIS_LIMIT).collect();
        format!("{}...", head)
    } else {
        overview.to_string()
    }
}

pub fn result_table(movies: &[MovieRecord]) -> Table<ResultRow> {
    let rows = movies
        .iter()
        .enumerate()
        .map(|(position, movie)| ResultRow {
            position,
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            score: movie.vote_average,
            synopsis: synopsis(&movie.overview),
            trailer: movie
                .trailer_url
                .clone()
                .unwrap_or_else(|| NO_TRAILER.to_string()),
        })
        .collect();
    Table::from_rows(rows)
}

pub fn favorites_table(entries: &[FavoriteEntry]) -> Table<FavoriteRow> {
    let rows = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| FavoriteRow {
            position,
            title: entry.movie.title.clone(),
            movie_id: entry.movie.id,
            rating: entry
                .user_rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| UNRATED.to_string()),
            score: entry.movie.vote_average,
        })
        .collect();
    Table::from_rows(rows)
}
