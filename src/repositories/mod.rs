pub mod assessment_session_repository;

pub use assessment_session_repository::{
    AssessmentSessionRepository, MongoAssessmentSessionRepository, SessionFilter,
};

#[cfg(test)]
pub use assessment_session_repository::MockAssessmentSessionRepository;
