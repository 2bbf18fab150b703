#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use assessment_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{AssessmentSession, AssessmentType, Gender, NewSession},
    repositories::{AssessmentSessionRepository, SessionFilter},
    services::scoring_service::StaticScoringProvider,
};

/// Keeps sessions keyed by token; insertion order is kept for listing.
#[derive(Default)]
pub struct InMemoryAssessmentSessionRepository {
    sessions: RwLock<HashMap<String, AssessmentSession>>,
    order: RwLock<Vec<String>>,
}

impl InMemoryAssessmentSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a session as-is, bypassing the lifecycle.
    pub async fn seed(&self, session: AssessmentSession) {
        self.order.write().await.push(session.session_token.clone());
        self.sessions
            .write()
            .await
            .insert(session.session_token.clone(), session);
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl AssessmentSessionRepository for InMemoryAssessmentSessionRepository {
    async fn create(&self, session: AssessmentSession) -> AppResult<AssessmentSession> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.session_token) {
            return Err(AppError::AlreadyExists(format!(
                "Session with token '{}' already exists",
                session.session_token
            )));
        }
        sessions.insert(session.session_token.clone(), session.clone());
        self.order.write().await.push(session.session_token.clone());
        Ok(session)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<AssessmentSession>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn find_all(&self, filter: &SessionFilter) -> AppResult<Vec<AssessmentSession>> {
        let sessions = self.sessions.read().await;
        let order = self.order.read().await;
        Ok(order
            .iter()
            .filter_map(|token| sessions.get(token))
            .filter(|session| filter.matches(session))
            .cloned()
            .collect())
    }

    async fn save_if_active(
        &self,
        session: &AssessmentSession,
    ) -> AppResult<Option<AssessmentSession>> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(&session.session_token) {
            Some(stored) if !stored.is_terminal() => {
                // Only lifecycle fields are written; subject details stay as stored.
                let saved = AssessmentSession {
                    subject_name: stored.subject_name.clone(),
                    ..session.clone()
                };
                sessions.insert(saved.session_token.clone(), saved.clone());
                Ok(Some(saved))
            }
            _ => Ok(None),
        }
    }

    async fn update_subject_name(
        &self,
        id: &str,
        subject_name: &str,
    ) -> AppResult<Option<AssessmentSession>> {
        let mut sessions = self.sessions.write().await;
        let Some(session) = sessions.values_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        session.subject_name = subject_name.to_string();
        session.modified_at = Some(Utc::now());
        Ok(Some(session.clone()))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

pub fn test_state(repository: Arc<InMemoryAssessmentSessionRepository>) -> AppState {
    AppState::from_parts(
        repository,
        Arc::new(StaticScoringProvider),
        Config::test_config(),
    )
}

pub fn new_session(kind: AssessmentType) -> AssessmentSession {
    AssessmentSession::start(
        NewSession {
            subject_name: "Ann".to_string(),
            subject_age: 30,
            subject_gender: Gender::Female,
            assessment_type: kind,
        },
        Utc::now(),
    )
}
