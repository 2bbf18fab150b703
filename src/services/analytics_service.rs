use std::{collections::BTreeMap, sync::Arc};

use crate::{
    errors::AppResult,
    models::{
        domain::{AssessmentSession, AssessmentType, SessionStatus},
        dto::{request::SummaryFilterRequest, response::AssessmentSummary},
    },
    repositories::AssessmentSessionRepository,
};

/// Read-only cross-session statistics.
pub struct AnalyticsService {
    repository: Arc<dyn AssessmentSessionRepository>,
}

impl AnalyticsService {
    pub fn new(repository: Arc<dyn AssessmentSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn summarize(
        &self,
        request: SummaryFilterRequest,
    ) -> AppResult<Vec<AssessmentSummary>> {
        let filter = request.into_filter()?;
        let sessions = self.repository.find_all(&filter).await?;
        log::debug!("Summarizing {} sessions", sessions.len());
        Ok(summarize_sessions(&sessions))
    }
}

#[derive(Default)]
struct Accumulator {
    total: u64,
    started: u64,
    in_progress: u64,
    completed: u64,
    abandoned: u64,
    durations: Mean,
    scores: Mean,
}

#[derive(Default)]
struct Mean {
    sum: f64,
    count: u64,
}

impl Mean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Groups sessions by assessment type, ordered by type.
///
/// Means only count completed sessions that carry the value; a group with
/// no such session reports `None`.
pub fn summarize_sessions(sessions: &[AssessmentSession]) -> Vec<AssessmentSummary> {
    let mut groups: BTreeMap<AssessmentType, Accumulator> = BTreeMap::new();

    for session in sessions {
        let group = groups.entry(session.assessment_type).or_default();
        group.total += 1;
        match session.status {
            SessionStatus::Started => group.started += 1,
            SessionStatus::InProgress => group.in_progress += 1,
            SessionStatus::Abandoned => group.abandoned += 1,
            SessionStatus::Completed => {
                group.completed += 1;
                group
                    .durations
                    .push(session.total_duration.map(|d| d as f64));
                group.scores.push(
                    session
                        .results
                        .as_ref()
                        .and_then(|results| results.total_score),
                );
            }
        }
    }

    groups
        .into_iter()
        .map(|(assessment_type, group)| AssessmentSummary {
            assessment_type,
            total_sessions: group.total,
            started_sessions: group.started,
            in_progress_sessions: group.in_progress,
            completed_sessions: group.completed,
            abandoned_sessions: group.abandoned,
            completion_rate: group.completed as f64 / group.total as f64,
            average_duration_seconds: group.durations.value(),
            average_total_score: group.scores.value(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{AssessmentResults, Gender, NewSession};
    use chrono::{Duration, Utc};

    fn session(kind: AssessmentType) -> AssessmentSession {
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

    fn completed(kind: AssessmentType, seconds: i64, score: Option<f64>) -> AssessmentSession {
        let mut s = session(kind);
        let end = s.start_time + Duration::seconds(seconds);
        s.complete(
            AssessmentResults {
                total_score: score,
                ..Default::default()
            },
            end,
        )
        .unwrap();
        s
    }

    fn abandoned(kind: AssessmentType) -> AssessmentSession {
        let mut s = session(kind);
        s.abandon(None, Utc::now()).unwrap();
        s
    }

    #[test]
    fn counts_by_status() {
        let sessions = vec![
            completed(AssessmentType::BurnoutRisk, 60, Some(30.0)),
            completed(AssessmentType::BurnoutRisk, 120, Some(50.0)),
            completed(AssessmentType::BurnoutRisk, 180, Some(40.0)),
            abandoned(AssessmentType::BurnoutRisk),
        ];

        let summaries = summarize_sessions(&sessions);
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        assert_eq!(summary.total_sessions, 4);
        assert_eq!(summary.completed_sessions, 3);
        assert_eq!(summary.abandoned_sessions, 1);
        assert_eq!(summary.completion_rate, 0.75);
        assert_eq!(summary.average_duration_seconds, Some(120.0));
        assert_eq!(summary.average_total_score, Some(40.0));
    }

    #[test]
    fn missing_scores_are_excluded_from_mean() {
        let sessions = vec![
            completed(AssessmentType::LeadershipStyle, 10, Some(20.0)),
            completed(AssessmentType::LeadershipStyle, 10, None),
        ];

        let summary = &summarize_sessions(&sessions)[0];
        assert_eq!(summary.average_total_score, Some(20.0));
    }

    #[test]
    fn groups_without_completions_have_no_means() {
        let mut in_progress = session(AssessmentType::CareerAlignment);
        in_progress
            .record_progress(
                "q1",
                crate::models::domain::AnswerValue::Number(1.0),
                1,
                Utc::now(),
            )
            .unwrap();
        let sessions = vec![session(AssessmentType::CareerAlignment), in_progress];

        let summary = &summarize_sessions(&sessions)[0];
        assert_eq!(summary.started_sessions, 1);
        assert_eq!(summary.in_progress_sessions, 1);
        assert_eq!(summary.average_duration_seconds, None);
        assert_eq!(summary.average_total_score, None);
        assert_eq!(summary.completion_rate, 0.0);
    }

    #[test]
    fn groups_are_ordered_by_type() {
        let sessions = vec![
            session(AssessmentType::ConfidenceMindset),
            session(AssessmentType::BurnoutRisk),
            session(AssessmentType::WorkLifeBalance),
        ];

        let kinds: Vec<_> = summarize_sessions(&sessions)
            .into_iter()
            .map(|s| s.assessment_type)
            .collect();
        assert_eq!(
            kinds,
            vec![
                AssessmentType::BurnoutRisk,
                AssessmentType::WorkLifeBalance,
                AssessmentType::ConfidenceMindset,
            ]
        );
    }

    #[test]
    fn empty_store_yields_no_groups() {
        assert!(summarize_sessions(&[]).is_empty());
    }
}
