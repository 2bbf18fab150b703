pub mod analytics_service;
pub mod assessment_session_service;
pub mod scoring_service;
