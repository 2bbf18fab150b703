pub mod assessment_results;
pub mod assessment_session;
pub mod assessment_type;
pub mod session_answer;
pub use assessment_results::{AssessmentResults, DimensionScore};
pub use assessment_session::{AssessmentSession, Gender, NewSession, SessionStatus};
pub use assessment_type::AssessmentType;
pub use session_answer::{AnswerValue, SessionAnswer};
