use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    services::{providers::SampleProvider, CatalogProvider},
    session::Session,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog chosen at startup (live or sample)
    pub catalog: Arc<dyn CatalogProvider>,
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    /// Limit used when a search request does not give one
    pub result_limit: usize,
    /// Sessions left unchanged for longer than this are dropped; `None` keeps them
    pub session_ttl: Option<Duration>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SampleProvider::new()), 10)
    }
}

impl AppState {
    /// Creates application state with no sessions
    pub fn new(catalog: Arc<dyn CatalogProvider>, result_limit: usize) -> Self {
        Self {
            catalog,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            result_limit,
            session_ttl: None,
        }
    }

    pub fn with_session_ttl(mut self, session_ttl: Option<Duration>) -> Self {
        self.session_ttl = session_ttl;
        self
    }

    /// Registers a fresh session and returns a copy of it.
    /// Idle sessions are swept first.
    pub async fn create_session(&self) -> Session {
        self.purge_idle_sessions(Utc::now()).await;

        let session = Session::new();
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        tracing::info!(session_id = %session.id, active = sessions.len(), "Session created");
        session
    }

    pub async fn ensure_session(&self, id: Uuid) -> AppResult<()> {
        if self.sessions.read().await.contains_key(&id) {
            Ok(())
        } else {
            Err(session_not_found(id))
        }
    }

    /// Runs `f` against the session under the read lock
    pub async fn read_session<T>(&self, id: Uuid, f: impl FnOnce(&Session) -> T) -> AppResult<T> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
        Ok(f(session))
    }

    /// Runs `f` against the session under the write lock
    pub async fn write_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> T,
    ) -> AppResult<T> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        session.touch(Utc::now());
        Ok(f(session))
    }

    /// Drops sessions idle for longer than the configured ttl, as of `now`.
    /// Returns how many were removed.
    pub async fn purge_idle_sessions(&self, now: DateTime<Utc>) -> usize {
        let Some(ttl) = self.session_ttl else {
            return 0;
        };
        let cutoff = now - ttl;

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle_since(cutoff));
        let purged = before - sessions.len();

        if purged > 0 {
            tracing::info!(purged, active = sessions.len(), "Idle sessions expired");
        }
        purged
    }

    pub async fn end_session(&self, id: Uuid) -> AppResult<()> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                tracing::info!(session_id = %id, "Session ended");
                Ok(())
            }
            None => Err(session_not_found(id)),
        }
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_end_session() {
        let state = AppState::default();
        let session = state.create_session().await;

        assert!(state.ensure_session(session.id).await.is_ok());
        state.end_session(session.id).await.unwrap();
        assert!(matches!(
            state.ensure_session(session.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_write_session_unknown_id() {
        let state = AppState::default();
        let result = state.write_session(Uuid::new_v4(), |s| s.favorites.len()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_idle_sessions_are_purged() {
        let state = AppState::default().with_session_ttl(Some(Duration::minutes(30)));
        let stale = state.create_session().await;
        let fresh = state.create_session().await;

        let now = Utc::now() + Duration::minutes(45);
        state
            .sessions
            .write()
            .await
            .get_mut(&fresh.id)
            .unwrap()
            .touch(now);

        assert_eq!(state.purge_idle_sessions(now).await, 1);
        assert!(matches!(
            state.ensure_session(stale.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(state.ensure_session(fresh.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_writes_keep_a_session_alive() {
        let state = AppState::default().with_session_ttl(Some(Duration::minutes(30)));
        let session = state.create_session().await;
        let an_hour_ago = Utc::now() - Duration::hours(1);
        state
            .sessions
            .write()
            .await
            .get_mut(&session.id)
            .unwrap()
            .touch(an_hour_ago);

        state.write_session(session.id, |_| ()).await.unwrap();

        assert_eq!(state.purge_idle_sessions(Utc::now()).await, 0);
        assert!(state.ensure_session(session.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_no_ttl_keeps_sessions() {
        let state = AppState::default();
        let session = state.create_session().await;

        let far_future = Utc::now() + Duration::days(365);
        assert_eq!(state.purge_idle_sessions(far_future).await, 0);
        assert!(state.ensure_session(session.id).await.is_ok());
    }
}
