use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{AssessmentSession, AssessmentType, SessionStatus},
};

/// Selection over stored sessions. Date bounds are inclusive and apply to
/// `start_time`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionFilter {
    pub assessment_type: Option<AssessmentType>,
    pub started_from: Option<DateTime<Utc>>,
    pub started_to: Option<DateTime<Utc>>,
}

impl SessionFilter {
    pub fn for_type(assessment_type: AssessmentType) -> Self {
        Self {
            assessment_type: Some(assessment_type),
            ..Default::default()
        }
    }

    pub fn matches(&self, session: &AssessmentSession) -> bool {
        self.assessment_type
            .map_or(true, |kind| session.assessment_type == kind)
            && self
                .started_from
                .map_or(true, |from| session.start_time >= from)
            && self.started_to.map_or(true, |to| session.start_time <= to)
    }
}

/// Applies `filter` and orders by `start_time`.
///
/// Timestamps are stored as RFC 3339 strings whose fractional part varies in
/// width, so neither the date bounds nor the ordering can be left to the store.
fn select_by_start_time(
    sessions: Vec<AssessmentSession>,
    filter: &SessionFilter,
) -> Vec<AssessmentSession> {
    let mut selected: Vec<AssessmentSession> = sessions
        .into_iter()
        .filter(|session| filter.matches(session))
        .collect();
    selected.sort_by_key(|session| session.start_time);
    selected
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssessmentSessionRepository: Send + Sync {
    async fn create(&self, session: AssessmentSession) -> AppResult<AssessmentSession>;
    async fn find_by_token(&self, token: &str) -> AppResult<Option<AssessmentSession>>;
    async fn find_all(&self, filter: &SessionFilter) -> AppResult<Vec<AssessmentSession>>;
    /// Writes `session` only if the stored copy is still `started` or
    /// `in_progress`. Returns `None` when no active session matched.
    async fn save_if_active(
        &self,
        session: &AssessmentSession,
    ) -> AppResult<Option<AssessmentSession>>;
    async fn update_subject_name(
        &self,
        id: &str,
        subject_name: &str,
    ) -> AppResult<Option<AssessmentSession>>;
    async fn health_check(&self) -> AppResult<()>;
}

pub struct MongoAssessmentSessionRepository {
    db: Database,
    collection: Collection<AssessmentSession>,
}

impl MongoAssessmentSessionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for assessment sessions collection");

        let token_index = IndexModel::builder()
            .keys(doc! { "session_token": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("session_token_unique".to_string())
                    .build(),
            )
            .build();

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let type_status_index = IndexModel::builder()
            .keys(doc! { "assessment_type": 1, "status": 1 })
            .options(
                IndexOptions::builder()
                    .name("assessment_type_status".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(token_index).await?;
        self.collection.create_index(id_index).await?;
        self.collection.create_index(type_status_index).await?;

        log::info!("Successfully created indexes for assessment sessions collection");
        Ok(())
    }

    /// `$set` over the fields the lifecycle owns. Subject details are left
    /// alone so an administrative rename is not overwritten by a stale copy.
    fn lifecycle_update(session: &AssessmentSession) -> AppResult<Document> {
        Ok(doc! {
            "$set": {
                "status": session.status.as_str(),
                "current_question": to_bson(&session.current_question)?,
                "percentage": to_bson(&session.percentage)?,
                "end_time": to_bson(&session.end_time)?,
                "total_duration": to_bson(&session.total_duration)?,
                "answers": to_bson(&session.answers)?,
                "results": to_bson(&session.results)?,
                "abandon_reason": to_bson(&session.abandon_reason)?,
                "modified_at": to_bson(&session.modified_at)?,
            }
        })
    }

    fn active_filter(token: &str) -> Document {
        let active: Vec<&str> = SessionStatus::ACTIVE.iter().map(|s| s.as_str()).collect();
        doc! {
            "session_token": token,
            "status": { "$in": active },
        }
    }
}

#[async_trait]
impl AssessmentSessionRepository for MongoAssessmentSessionRepository {
    async fn create(&self, session: AssessmentSession) -> AppResult<AssessmentSession> {
        self.collection.insert_one(&session).await?;
        Ok(session)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<AssessmentSession>> {
        let session = self
            .collection
            .find_one(doc! { "session_token": token })
            .await?;
        Ok(session)
    }

    async fn find_all(&self, filter: &SessionFilter) -> AppResult<Vec<AssessmentSession>> {
        let mut query = doc! {};
        if let Some(kind) = filter.assessment_type {
            query.insert("assessment_type", kind.as_str());
        }

        let sessions: Vec<AssessmentSession> =
            self.collection.find(query).await?.try_collect().await?;

        Ok(select_by_start_time(sessions, filter))
    }

    async fn save_if_active(
        &self,
        session: &AssessmentSession,
    ) -> AppResult<Option<AssessmentSession>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let saved = self
            .collection
            .find_one_and_update(
                Self::active_filter(&session.session_token),
                Self::lifecycle_update(session)?,
            )
            .with_options(options)
            .await?;
        Ok(saved)
    }

    async fn update_subject_name(
        &self,
        id: &str,
        subject_name: &str,
    ) -> AppResult<Option<AssessmentSession>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "id": id },
                doc! {
                    "$set": {
                        "subject_name": subject_name,
                        "modified_at": to_bson(&Utc::now())?,
                    }
                },
            )
            .with_options(options)
            .await?;
        Ok(updated)
    }

    async fn health_check(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Gender, NewSession};
    use chrono::Duration;

    fn session_started_at(kind: AssessmentType, start: DateTime<Utc>) -> AssessmentSession {
        AssessmentSession::start(
            NewSession {
                subject_name: "Ann".to_string(),
                subject_age: 30,
                subject_gender: Gender::Female,
                assessment_type: kind,
            },
            start,
        )
    }

    #[test]
    fn empty_filter_matches_everything() {
        let session = session_started_at(AssessmentType::LeadershipStyle, Utc::now());
        assert!(SessionFilter::default().matches(&session));
    }

    #[test]
    fn filter_by_type() {
        let session = session_started_at(AssessmentType::BurnoutRisk, Utc::now());
        assert!(SessionFilter::for_type(AssessmentType::BurnoutRisk).matches(&session));
        assert!(!SessionFilter::for_type(AssessmentType::CareerAlignment).matches(&session));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let start = Utc::now();
        let session = session_started_at(AssessmentType::BurnoutRisk, start);

        let exact = SessionFilter {
            started_from: Some(start),
            started_to: Some(start),
            ..Default::default()
        };
        assert!(exact.matches(&session));

        let later = SessionFilter {
            started_from: Some(start + Duration::seconds(1)),
            ..Default::default()
        };
        assert!(!later.matches(&session));
    }

    #[test]
    fn selection_orders_by_instant_not_by_text() {
        // Stored as "09:00:00Z" and "09:00:00.100Z"; as text the later one sorts first.
        let whole_second = DateTime::parse_from_rfc3339("2026-03-01T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let earlier = session_started_at(AssessmentType::BurnoutRisk, whole_second);
        let later = session_started_at(
            AssessmentType::BurnoutRisk,
            whole_second + Duration::milliseconds(100),
        );

        let selected = select_by_start_time(
            vec![later.clone(), earlier.clone()],
            &SessionFilter::default(),
        );

        assert_eq!(selected[0].session_token, earlier.session_token);
        assert_eq!(selected[1].session_token, later.session_token);
    }

    #[test]
    fn lifecycle_update_leaves_subject_details_alone() {
        let mut session = session_started_at(AssessmentType::BurnoutRisk, Utc::now());
        session.abandon(Some("left".to_string()), Utc::now()).unwrap();

        let update = MongoAssessmentSessionRepository::lifecycle_update(&session).unwrap();
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.get_str("status").unwrap(), "abandoned");
        assert_eq!(set.get_str("abandon_reason").unwrap(), "left");
        for untouched in ["subject_name", "subject_age", "session_token", "id", "start_time"] {
            assert!(!set.contains_key(untouched), "{} must not be rewritten", untouched);
        }
    }

    #[test]
    fn active_filter_targets_non_terminal_states() {
        let filter = MongoAssessmentSessionRepository::active_filter("tok");
        assert_eq!(filter.get_str("session_token").unwrap(), "tok");

        let statuses = filter
            .get_document("status")
            .unwrap()
            .get_array("$in")
            .unwrap();
        assert_eq!(statuses.len(), 2);
    }
}
