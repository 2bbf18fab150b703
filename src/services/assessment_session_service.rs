use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AssessmentResults, AssessmentSession, SessionStatus},
        dto::request::{
            AbandonSessionRequest, AdvanceSessionRequest, CompleteSessionRequest,
            StartSessionRequest, UpdateSubjectNameRequest,
        },
    },
    repositories::{AssessmentSessionRepository, SessionFilter},
    services::scoring_service::ScoringProvider,
};

/// Drives sessions through `started -> in_progress -> completed | abandoned`.
pub struct AssessmentSessionService {
    repository: Arc<dyn AssessmentSessionRepository>,
    scoring: Arc<dyn ScoringProvider>,
}

impl AssessmentSessionService {
    pub fn new(
        repository: Arc<dyn AssessmentSessionRepository>,
        scoring: Arc<dyn ScoringProvider>,
    ) -> Self {
        Self {
            repository,
            scoring,
        }
    }

    pub async fn start(&self, request: StartSessionRequest) -> AppResult<AssessmentSession> {
        let new_session = request.into_new_session()?;
        let session = AssessmentSession::start(new_session, Utc::now());

        let session = self.repository.create(session).await?;
        log::info!(
            "Started '{}' session {} ({} questions)",
            session.assessment_type,
            session.session_token,
            session.total_questions
        );
        Ok(session)
    }

    pub async fn get(&self, token: &str) -> AppResult<AssessmentSession> {
        self.repository
            .find_by_token(token)
            .await?
            .ok_or_else(|| not_found(token))
    }

    pub async fn list(&self, filter: &SessionFilter) -> AppResult<Vec<AssessmentSession>> {
        self.repository.find_all(filter).await
    }

    pub async fn advance(
        &self,
        token: &str,
        request: AdvanceSessionRequest,
    ) -> AppResult<AssessmentSession> {
        request.validate()?;
        let question_id = request.question_id.unwrap_or_default().trim().to_string();
        if question_id.is_empty() {
            return Err(AppError::ValidationError(
                "question_id must not be blank".to_string(),
            ));
        }
        let answer = request
            .answer
            .map(|answer| answer.0)
            .ok_or_else(|| AppError::ValidationError("answer is required".to_string()))?;
        let current_question = request.current_question.unwrap_or_default();

        let mut session = self.get(token).await?;
        if let Err(err) =
            session.record_progress(&question_id, answer, current_question, Utc::now())
        {
            log::warn!("Rejected progress on session {}: {}", token, err);
            return Err(err);
        }

        match self.repository.save_if_active(&session).await? {
            Some(saved) => {
                log::debug!(
                    "Session {} at question {}/{} ({}%)",
                    token,
                    saved.current_question,
                    saved.total_questions,
                    saved.percentage
                );
                Ok(saved)
            }
            None => Err(self.lost_race(token, "advance").await),
        }
    }

    pub async fn complete(
        &self,
        token: &str,
        request: CompleteSessionRequest,
    ) -> AppResult<AssessmentSession> {
        let results = request.into_results()?;
        let session = self.get(token).await?;
        self.complete_with(session, results).await
    }

    /// Scores the stored answers with the configured provider, then completes.
    pub async fn finish(&self, token: &str) -> AppResult<AssessmentSession> {
        let session = self.get(token).await?;
        if session.status == SessionStatus::Completed {
            log::info!("Session {} already completed; finish is a no-op", token);
            return Ok(session);
        }

        let results = self
            .scoring
            .score(
                session.assessment_type,
                session.total_questions,
                &session.answers,
            )
            .await?;
        results.validate()?;

        self.complete_with(session, results).await
    }

    async fn complete_with(
        &self,
        mut session: AssessmentSession,
        results: AssessmentResults,
    ) -> AppResult<AssessmentSession> {
        let token = session.session_token.clone();

        // A second completion keeps the original timing.
        if session.status == SessionStatus::Completed {
            log::info!("Session {} already completed; complete is a no-op", token);
            return Ok(session);
        }

        if let Err(err) = session.complete(results, Utc::now()) {
            log::warn!("Rejected completion of session {}: {}", token, err);
            return Err(err);
        }

        match self.repository.save_if_active(&session).await? {
            Some(saved) => {
                log::info!(
                    "Completed session {} in {}s",
                    token,
                    saved.total_duration.unwrap_or_default()
                );
                Ok(saved)
            }
            None => {
                let current = self.get(&token).await?;
                if current.status == SessionStatus::Completed {
                    Ok(current)
                } else {
                    Err(invalid_transition(&current, "complete"))
                }
            }
        }
    }

    pub async fn abandon(
        &self,
        token: &str,
        request: AbandonSessionRequest,
    ) -> AppResult<AssessmentSession> {
        request.validate()?;
        let reason = request
            .reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        let mut session = self.get(token).await?;
        if session.is_terminal() {
            log::info!(
                "Session {} already {}; abandon is a no-op",
                token,
                session.status
            );
            return Ok(session);
        }

        session.abandon(reason, Utc::now())?;

        match self.repository.save_if_active(&session).await? {
            Some(saved) => {
                log::info!("Abandoned session {}", token);
                Ok(saved)
            }
            // Whatever terminal state won the race is kept.
            None => self.get(token).await,
        }
    }

    /// Administrative correction of the subject's name, addressed by record id.
    pub async fn rename_subject(
        &self,
        id: &str,
        request: UpdateSubjectNameRequest,
    ) -> AppResult<AssessmentSession> {
        request.validate()?;
        let subject_name = request.subject_name.unwrap_or_default().trim().to_string();
        if subject_name.is_empty() {
            return Err(AppError::ValidationError(
                "subject_name must not be blank".to_string(),
            ));
        }

        let session = self
            .repository
            .update_subject_name(id, &subject_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session record '{}' not found", id)))?;

        log::info!("Corrected subject name on session record {}", id);
        Ok(session)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repository.health_check().await
    }

    async fn lost_race(&self, token: &str, action: &str) -> AppError {
        match self.get(token).await {
            Ok(current) => invalid_transition(&current, action),
            Err(err) => err,
        }
    }
}

fn not_found(token: &str) -> AppError {
    AppError::NotFound(format!("Session '{}' not found", token))
}

fn invalid_transition(session: &AssessmentSession, action: &str) -> AppError {
    log::warn!(
        "Cannot {} session {} in state '{}'",
        action,
        session.session_token,
        session.status
    );
    AppError::InvalidTransition(format!(
        "cannot {} session '{}' in state '{}'",
        action, session.session_token, session.status
    ))
}
