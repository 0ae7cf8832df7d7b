use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/:session_id",
            get(handlers::get_session).delete(handlers::end_session),
        )
        // Search and recommendations
        .route("/sessions/:session_id/search", post(handlers::search))
        .route(
            "/sessions/:session_id/recommendations",
            post(handlers::recommend),
        )
        .route("/sessions/:session_id/results", get(handlers::get_results))
        // Favorites
        .route(
            "/sessions/:session_id/favorites",
            get(handlers::get_favorites)
                .post(handlers::add_favorite)
                .delete(handlers::remove_favorite),
        )
        .route(
            "/sessions/:session_id/favorites/:movie_id/rating",
            put(handlers::rate_favorite),
        )
        // Vocabularies
        .route("/catalog/genres", get(handlers::get_genres))
        .route("/catalog/regions", get(handlers::get_regions))
        .route("/catalog/moods", get(handlers::get_moods))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
