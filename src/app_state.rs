use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{AssessmentSessionRepository, MongoAssessmentSessionRepository},
    services::{
        analytics_service::AnalyticsService,
        assessment_session_service::AssessmentSessionService,
        scoring_service::{ScoringProvider, StaticScoringProvider},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<AssessmentSessionService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let session_repository =
            MongoAssessmentSessionRepository::new(&db, &config.sessions_collection);
        session_repository.ensure_indexes().await?;

        Ok(Self::from_parts(
            Arc::new(session_repository),
            Arc::new(StaticScoringProvider),
            config,
        ))
    }

    /// Wires the services over an already constructed store.
    pub fn from_parts(
        repository: Arc<dyn AssessmentSessionRepository>,
        scoring: Arc<dyn ScoringProvider>,
        config: Config,
    ) -> Self {
        let session_service = Arc::new(AssessmentSessionService::new(
            repository.clone(),
            scoring,
        ));
        let analytics_service = Arc::new(AnalyticsService::new(repository));

        Self {
            session_service,
            analytics_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
