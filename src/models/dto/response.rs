use async_graphql::{Json, SimpleObject};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    AnswerValue, AssessmentResults, AssessmentSession, AssessmentType, Gender, SessionAnswer,
    SessionStatus,
};

/// Client-facing view of a session; the internal record id is not exposed.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct AssessmentSessionDto {
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
    pub answers: Vec<SessionAnswerDto>,
    pub results: Option<Json<AssessmentResults>>,
    pub abandon_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct SessionAnswerDto {
    pub question_id: String,
    pub answer: Json<AnswerValue>,
    pub answered_at: DateTime<Utc>,
}

impl From<SessionAnswer> for SessionAnswerDto {
    fn from(answer: SessionAnswer) -> Self {
        SessionAnswerDto {
            question_id: answer.question_id,
            answer: Json(answer.answer),
            answered_at: answer.answered_at,
        }
    }
}

impl From<AssessmentSession> for AssessmentSessionDto {
    fn from(session: AssessmentSession) -> Self {
        AssessmentSessionDto {
            session_token: session.session_token,
            subject_name: session.subject_name,
            subject_age: session.subject_age,
            subject_gender: session.subject_gender,
            assessment_type: session.assessment_type,
            status: session.status,
            current_question: session.current_question,
            total_questions: session.total_questions,
            percentage: session.percentage,
            start_time: session.start_time,
            end_time: session.end_time,
            total_duration: session.total_duration,
            answers: session.answers.into_iter().map(SessionAnswerDto::from).collect(),
            results: session.results.map(Json),
            abandon_reason: session.abandon_reason,
        }
    }
}

/// Per-type figures produced by the analytics aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
pub struct AssessmentSummary {
    pub assessment_type: AssessmentType,
    pub total_sessions: u64,
    pub started_sessions: u64,
    pub in_progress_sessions: u64,
    pub completed_sessions: u64,
    pub abandoned_sessions: u64,
    pub completion_rate: f64,
    pub average_duration_seconds: Option<f64>,
    pub average_total_score: Option<f64>,
}
