use crate::models::domain::{AssessmentSession, AssessmentType, Gender, NewSession};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use chrono::Utc;

    /// A fresh 22-question burnout-risk session for Ann, 30.
    pub fn test_session() -> AssessmentSession {
        test_session_of(AssessmentType::BurnoutRisk)
    }

    pub fn test_session_of(assessment_type: AssessmentType) -> AssessmentSession {
        AssessmentSession::start(
            NewSession {
                subject_name: "Ann".to_string(),
                subject_age: 30,
                subject_gender: Gender::Female,
                assessment_type,
            },
            Utc::now(),
        )
    }

    /// One session of every assessment type.
    pub fn test_sessions() -> Vec<AssessmentSession> {
        AssessmentType::ALL
            .into_iter()
            .map(test_session_of)
            .collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::models::domain::{AssessmentType, SessionStatus};
    use actix_web::http::StatusCode;

    #[test]
    fn test_fixtures_test_session() {
        let session = test_session();
        assert_eq!(session.subject_name, "Ann");
        assert_eq!(session.status, SessionStatus::Started);
    }

    #[test]
    fn test_fixtures_test_sessions() {
        let sessions = test_sessions();
        assert_eq!(sessions.len(), 7);
        assert_eq!(sessions[0].assessment_type, AssessmentType::BurnoutRisk);
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(StatusCode::CONFLICT);
        assert_success_status(StatusCode::CREATED);
    }
}
