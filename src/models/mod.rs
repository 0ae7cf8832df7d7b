use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod catalog;

pub use catalog::{Continent, Country, Genre, REGIONS};

/// Title used when the catalog returns no usable name at all
pub const UNTITLED: &str = "未命名電影";

/// Catalog-assigned movie identifier; the identity key for deduplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry as surfaced to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
}

impl MovieRecord {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: MovieId(id),
            title: title.into(),
            release_date: String::new(),
            vote_average: 0.0,
            overview: String::new(),
            genres: Vec::new(),
            trailer_url: None,
        }
    }

    pub fn with_release(mut self, release_date: impl Into<String>, vote_average: f64) -> Self {
        self.release_date = release_date.into();
        self.vote_average = vote_average;
        self
    }
}

/// Personal score a user attaches to a favorite (1 to 10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UserRating(u8);

impl UserRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for UserRating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        UserRating::new(value).ok_or_else(|| {
            format!(
                "rating must be between {} and {}, got {}",
                UserRating::MIN,
                UserRating::MAX,
                value
            )
        })
    }
}

impl From<UserRating> for u8 {
    fn from(rating: UserRating) -> Self {
        rating.0
    }
}

impl Display for UserRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie the user saved, with their optional rating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    pub movie: MovieRecord,
    pub user_rating: Option<UserRating>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Paged TMDB response (`/search/movie`, `/discover/movie`, `/search/person`, videos)
#[derive(Debug, Deserialize)]
pub struct TmdbPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Raw movie item from search, discover or person credits.
/// Every field except the id may be absent or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovieItem {
    pub id: u64,
    #[serde(default)]
    pub title_zh: Option<String>,
    #[serde(default)]
    pub name_zh: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

/// `/person/{id}/movie_credits` response
#[derive(Debug, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbMovieItem>,
}

/// `/search/person` result
#[derive(Debug, Deserialize)]
pub struct TmdbPerson {
    pub id: u64,
}

/// `/movie/{id}/videos` result
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TmdbVideo {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(rename = "type", default)]
    pub video_type: Option<String>,
    #[serde(default)]
    pub iso_639_1: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// True if any character falls in the CJK Unified Ideographs block
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

impl TmdbMovieItem {
    /// Localized title, else a CJK original title, else the default title, else [`UNTITLED`]
    pub fn resolved_title(&self) -> String {
        let original_cjk = non_empty(&self.original_title).filter(|t| contains_cjk(t));

        non_empty(&self.title_zh)
            .or_else(|| non_empty(&self.name_zh))
            .or(original_cjk)
            .or_else(|| non_empty(&self.title))
            .or_else(|| non_empty(&self.name))
            .unwrap_or(UNTITLED)
            .to_string()
    }

    /// Normalizes the raw item; the trailer is looked up separately by the caller
    pub fn into_record(self, trailer_url: Option<String>) -> MovieRecord {
        let title = self.resolved_title();
        let genres = self
            .genre_ids
            .unwrap_or_default()
            .into_iter()
            .filter_map(Genre::from_tmdb_id)
            .map(|g| g.label().to_string())
            .collect();

        MovieRecord {
            id: MovieId(self.id),
            title,
            release_date: self.release_date.unwrap_or_default(),
            vote_average: self.vote_average.unwrap_or(0.0),
            overview: self.overview.unwrap_or_default(),
            genres,
            trailer_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: &str) -> TmdbMovieItem {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_localized_title_wins() {
        let raw = item(r#"{"id": 1, "title_zh": "全面啟動", "original_title": "Inception", "title": "Inception"}"#);
        assert_eq!(raw.resolved_title(), "全面啟動");
    }

    #[test]
    fn test_cjk_original_title_beats_default_title() {
        let raw = item(r#"{"id": 2, "title_zh": null, "original_title": "新活日己", "title": "Jiu Jiu"}"#);
        assert_eq!(raw.resolved_title(), "新活日己");
    }

    #[test]
    fn test_latin_original_title_is_skipped() {
        let raw = item(r#"{"id": 3, "original_title": "Amélie", "title": "艾蜜莉的異想世界"}"#);
        assert_eq!(raw.resolved_title(), "艾蜜莉的異想世界");
    }

    #[test]
    fn test_empty_strings_fall_through_to_placeholder() {
        let raw = item(r#"{"id": 4, "title_zh": "", "title": "", "name": null}"#);
        assert_eq!(raw.resolved_title(), UNTITLED);
    }

    #[test]
    fn test_name_used_when_title_missing() {
        let raw = item(r#"{"id": 5, "name": "Some Show"}"#);
        assert_eq!(raw.resolved_title(), "Some Show");
    }

    #[test]
    fn test_into_record_defaults_missing_fields() {
        let raw = item(r#"{"id": 7, "title": "Bare", "release_date": null}"#);
        let record = raw.into_record(None);
        assert_eq!(record.id, MovieId(7));
        assert_eq!(record.release_date, "");
        assert_eq!(record.vote_average, 0.0);
        assert_eq!(record.overview, "");
        assert!(record.genres.is_empty());
        assert_eq!(record.trailer_url, None);
    }

    #[test]
    fn test_into_record_maps_genre_ids_to_labels() {
        let raw = item(r#"{"id": 8, "title": "Mix", "genre_ids": [35, 16, 99999], "vote_average": 7.5}"#);
        let record = raw.into_record(Some("https://www.youtube.com/watch?v=abc".to_string()));
        assert_eq!(record.genres, vec!["喜劇".to_string(), "動畫".to_string()]);
        assert_eq!(record.vote_average, 7.5);
        assert!(record.trailer_url.is_some());
    }

    #[test]
    fn test_null_genre_ids_yield_no_genres() {
        let raw = item(r#"{"id": 1, "title": "X", "genre_ids": null}"#);
        assert_eq!(raw.genre_ids, None);
        assert!(raw.into_record(None).genres.is_empty());
    }

    #[test]
    fn test_video_page_tolerates_keyless_entries() {
        let page: TmdbPage<TmdbVideo> = serde_json::from_str(
            r#"{"results": [{"site": "YouTube", "type": "Clip"}, {"key": "k", "site": "YouTube", "type": "Trailer"}]}"#,
        )
        .unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].key, None);
        assert_eq!(page.results[1].key.as_deref(), Some("k"));
    }

    #[test]
    fn test_user_rating_bounds() {
        assert!(UserRating::new(0).is_none());
        assert_eq!(UserRating::new(1).map(UserRating::value), Some(1));
        assert_eq!(UserRating::new(10).map(UserRating::value), Some(10));
        assert!(UserRating::new(11).is_none());
    }

    #[test]
    fn test_user_rating_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<UserRating>("11").is_err());
        let rating: UserRating = serde_json::from_str("8").unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "8");
    }

    #[test]
    fn test_movie_id_serializes_as_number() {
        let movie = MovieRecord::new(27205, "全面啟動");
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["id"], 27205);
    }
}
