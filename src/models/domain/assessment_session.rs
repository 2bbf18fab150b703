use std::fmt;

use async_graphql::Enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::assessment_results::AssessmentResults;
use crate::models::domain::assessment_type::AssessmentType;
use crate::models::domain::session_answer::{upsert_answer, AnswerValue, SessionAnswer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Started,
    InProgress,
    Completed,
    Abandoned,
}

impl SessionStatus {
    pub const ACTIVE: [SessionStatus; 2] = [SessionStatus::Started, SessionStatus::InProgress];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Started => "started",
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
            SessionStatus::Abandoned => "abandoned",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Abandoned)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated input for a new session.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSession {
    pub subject_name: String,
    pub subject_age: u32,
    pub subject_gender: Gender,
    pub assessment_type: AssessmentType,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AssessmentSession {
    pub id: String,
    pub session_token: String,
    pub subject_name: String,
    pub subject_age: u32,
    pub subject_gender: Gender,
    pub assessment_type: AssessmentType,
    pub status: SessionStatus,
    pub current_question: u32,
    pub total_questions: u32,
    pub percentage: u8,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_duration: Option<i64>,
    pub answers: Vec<SessionAnswer>,
    pub results: Option<AssessmentResults>,
    pub abandon_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// Rounded share of `current` over `total`, capped at 100.
pub fn progress_percentage(current: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(current) / f64::from(total) * 100.0;
    ratio.round().min(100.0) as u8
}

impl AssessmentSession {
    pub fn start(new_session: NewSession, now: DateTime<Utc>) -> Self {
        AssessmentSession {
            id: Uuid::new_v4().to_string(),
            session_token: Uuid::new_v4().to_string(),
            subject_name: new_session.subject_name,
            subject_age: new_session.subject_age,
            subject_gender: new_session.subject_gender,
            assessment_type: new_session.assessment_type,
            status: SessionStatus::Started,
            current_question: 0,
            total_questions: new_session.assessment_type.total_questions(),
            percentage: 0,
            start_time: now,
            end_time: None,
            total_duration: None,
            answers: Vec::new(),
            results: None,
            abandon_reason: None,
            created_at: Some(now),
            modified_at: Some(now),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn ensure_active(&self, action: &str) -> AppResult<()> {
        if self.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "cannot {} session '{}' in state '{}'",
                action, self.session_token, self.status
            )));
        }
        Ok(())
    }

    /// Moves the session to `in_progress` and records one answer.
    ///
    /// `current_question` is taken as reported by the client.
    pub fn record_progress(
        &mut self,
        question_id: &str,
        answer: AnswerValue,
        current_question: u32,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        self.ensure_active("advance")?;

        if current_question > self.total_questions {
            return Err(AppError::ValidationError(format!(
                "current_question {} exceeds the {} questions of '{}'",
                current_question, self.total_questions, self.assessment_type
            )));
        }

        let is_new_question = !self.answers.iter().any(|a| a.question_id == question_id);
        if is_new_question && self.answers.len() as u32 >= self.total_questions {
            return Err(AppError::ValidationError(format!(
                "session already holds answers for all {} questions",
                self.total_questions
            )));
        }

        upsert_answer(&mut self.answers, question_id, answer, now);
        self.status = SessionStatus::InProgress;
        self.current_question = current_question;
        self.percentage = progress_percentage(current_question, self.total_questions);
        self.modified_at = Some(now);
        Ok(())
    }

    pub fn complete(&mut self, results: AssessmentResults, now: DateTime<Utc>) -> AppResult<()> {
        self.ensure_active("complete")?;

        self.status = SessionStatus::Completed;
        self.percentage = 100;
        self.current_question = self.total_questions;
        self.end_time = Some(now);
        self.total_duration = Some((now - self.start_time).num_seconds().max(0));
        self.results = Some(results);
        self.modified_at = Some(now);
        Ok(())
    }

    pub fn abandon(&mut self, reason: Option<String>, now: DateTime<Utc>) -> AppResult<()> {
        self.ensure_active("abandon")?;

        self.status = SessionStatus::Abandoned;
        self.abandon_reason = reason;
        self.modified_at = Some(now);
        Ok(())
    }
}
