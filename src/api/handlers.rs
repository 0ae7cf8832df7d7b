use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Continent, Genre, MovieId, UserRating, REGIONS},
    services::{
        mood::{mood_to_genres, Mood},
        recommendations,
        search::{self, SearchQuery},
    },
    session::{AddFavoriteOutcome, Session},
    views::{self, FavoriteRow, ResultRow, Table},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub results: usize,
    pub favorites: usize,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
            results: session.results.len(),
            favorites: session.favorites.len(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(flatten)]
    pub query: SearchQuery,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub mood: Mood,
    pub mood_label: &'static str,
    pub detected: bool,
    pub genres: Vec<&'static str>,
    pub results: Table<ResultRow>,
}

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub position: usize,
    #[serde(default)]
    pub rating: Option<UserRating>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddFavoriteStatus {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Serialize)]
pub struct AddFavoriteResponse {
    pub status: AddFavoriteStatus,
    pub movie_id: MovieId,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFavoriteQuery {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub rating: Option<UserRating>,
}

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    pub id: Genre,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MoodInfoResponse {
    pub id: Mood,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    pub genres: Vec<Genre>,
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "catalog": state.catalog.name() })),
    )
}

/// Start a new session with empty results and favorites
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.create_session().await;
    (StatusCode::CREATED, Json(SessionResponse::from(&session)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<SessionResponse>> {
    let response = state
        .read_session(session_id, |session| SessionResponse::from(session))
        .await?;
    Ok(Json(response))
}

pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.end_session(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Run a search and replace the session's staged results
///
/// The catalog is queried without holding the session lock; on failure the
/// previous results stay as they were.
pub async fn search(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SearchRequest>,
) -> AppResult<Json<Table<ResultRow>>> {
    state.ensure_session(session_id).await?;

    let limit = request.limit.unwrap_or(state.result_limit);
    let movies = search::run_search(state.catalog.as_ref(), &request.query, limit).await?;

    let table = state
        .write_session(session_id, |session| {
            session.stage_results(movies);
            views::result_table(session.results.to_sequence())
        })
        .await?;

    Ok(Json(table))
}

/// Recommend movies for a free-text mood description
pub async fn recommend(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<MoodRequest>,
) -> AppResult<Json<MoodResponse>> {
    state.ensure_session(session_id).await?;

    let recommendation =
        recommendations::recommend_for_mood(state.catalog.as_ref(), &request.text).await?;

    let results = state
        .write_session(session_id, |session| {
            session.stage_results(recommendation.movies);
            views::result_table(session.results.to_sequence())
        })
        .await?;

    Ok(Json(MoodResponse {
        mood: recommendation.mood,
        mood_label: recommendation.mood.label(),
        detected: recommendation.detected,
        genres: recommendation.genres.iter().map(|g| g.label()).collect(),
        results,
    }))
}

pub async fn get_results(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Table<ResultRow>>> {
    let table = state
        .read_session(session_id, |session| {
            views::result_table(session.results.to_sequence())
        })
        .await?;
    Ok(Json(table))
}

pub async fn get_favorites(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Table<FavoriteRow>>> {
    let table = state
        .read_session(session_id, |session| {
            views::favorites_table(session.favorites.traverse())
        })
        .await?;
    Ok(Json(table))
}

/// Copy the staged movie at `position` into the favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddFavoriteRequest>,
) -> AppResult<Json<AddFavoriteResponse>> {
    let outcome = state
        .write_session(session_id, |session| {
            session.add_favorite_at(request.position, request.rating)
        })
        .await?;

    let (status, movie) = match outcome {
        AddFavoriteOutcome::Added(movie) => (AddFavoriteStatus::Added, movie),
        AddFavoriteOutcome::AlreadyPresent(movie) => (AddFavoriteStatus::AlreadyPresent, movie),
        AddFavoriteOutcome::NoSuchPosition => {
            return Err(AppError::NotFound(format!(
                "No result at position {}",
                request.position
            )))
        }
    };

    Ok(Json(AddFavoriteResponse {
        status,
        movie_id: movie.id,
        title: movie.title,
    }))
}

/// Remove the first favorite whose title matches
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(params): Query<RemoveFavoriteQuery>,
) -> AppResult<StatusCode> {
    let removed = state
        .write_session(session_id, |session| {
            session.favorites.remove_by_title(&params.title)
        })
        .await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "No favorite titled {}",
            params.title.trim()
        )))
    }
}

pub async fn rate_favorite(
    State(state): State<AppState>,
    Path((session_id, movie_id)): Path<(Uuid, u64)>,
    Json(request): Json<RatingRequest>,
) -> AppResult<StatusCode> {
    let updated = state
        .write_session(session_id, |session| {
            session
                .favorites
                .set_rating(MovieId(movie_id), request.rating)
        })
        .await?;

    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Movie {} is not a favorite", movie_id)))
    }
}

pub async fn get_genres() -> Json<Vec<GenreResponse>> {
    let genres = Genre::ALL
        .into_iter()
        .map(|id| GenreResponse {
            id,
            label: id.label(),
        })
        .collect();
    Json(genres)
}

pub async fn get_regions() -> Json<&'static [Continent]> {
    Json(REGIONS)
}

pub async fn get_moods() -> Json<Vec<MoodInfoResponse>> {
    let moods = Mood::ALL
        .into_iter()
        .map(|id| MoodInfoResponse {
            id,
            label: id.label(),
            keywords: id.keywords(),
            genres: mood_to_genres(id).to_vec(),
        })
        .collect();
    Json(moods)
}
