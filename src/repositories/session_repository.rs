use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizSession,
};

/// In-place change applied by [`SessionRepository::modify`].
pub type SessionMutation = Box<dyn FnOnce(&mut QuizSession) -> AppResult<()> + Send>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>>;
    async fn insert(&self, session: QuizSession) -> AppResult<QuizSession>;
    async fn update(&self, session: QuizSession) -> AppResult<QuizSession>;
    /// Apply `mutation` to the stored session while holding it exclusively.
    /// Nothing is written when the mutation fails.
    async fn modify(&self, id: &Uuid, mutation: SessionMutation) -> AppResult<QuizSession>;
    async fn delete(&self, id: &Uuid) -> AppResult<bool>;
    async fn count(&self) -> AppResult<usize>;
}

/// Process-local session store. Sessions do not survive a restart.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn insert(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(AppError::Conflict(format!(
                "Session '{}' already exists",
                session.id
            )));
        }
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn update(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.id) {
            Some(existing) => {
                *existing = session.clone();
                Ok(session)
            }
            None => Err(AppError::NotFound(format!(
                "Session with id '{}' not found",
                session.id
            ))),
        }
    }

    async fn modify(&self, id: &Uuid, mutation: SessionMutation) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        let existing = sessions
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))?;

        let mut changed = existing.clone();
        mutation(&mut changed)?;
        *existing = changed.clone();
        Ok(changed)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id).is_some())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.sessions.read().await.len())
    }
}
