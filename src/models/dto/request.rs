use async_graphql::{InputObject, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerValue, AssessmentResults, AssessmentType, Gender, NewSession};
use crate::repositories::SessionFilter;

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct StartSessionRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub subject_name: Option<String>,

    #[validate(required, range(min = 1, max = 120))]
    pub subject_age: Option<u32>,

    #[validate(required, length(min = 1))]
    pub subject_gender: Option<String>,

    #[validate(required, length(min = 1))]
    pub assessment_type: Option<String>,
}

impl StartSessionRequest {
    /// Validates the request and resolves the enumerated fields.
    pub fn into_new_session(self) -> AppResult<NewSession> {
        self.validate()?;

        let subject_name = self.subject_name.unwrap_or_default().trim().to_string();
        if subject_name.is_empty() {
            return Err(AppError::ValidationError(
                "subject_name must not be blank".to_string(),
            ));
        }

        Ok(NewSession {
            subject_name,
            subject_age: self.subject_age.unwrap_or_default(),
            subject_gender: parse_gender(&self.subject_gender.unwrap_or_default())?,
            assessment_type: self.assessment_type.unwrap_or_default().parse()?,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct AdvanceSessionRequest {
    #[validate(required, length(min = 1, max = 64))]
    pub question_id: Option<String>,

    #[validate(required)]
    pub answer: Option<Json<AnswerValue>>,

    #[validate(required)]
    pub current_question: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct CompleteSessionRequest {
    #[validate(required(message = "results are required to complete a session"))]
    pub results: Option<Json<AssessmentResults>>,
}

impl CompleteSessionRequest {
    pub fn into_results(self) -> AppResult<AssessmentResults> {
        self.validate()?;
        let results = self
            .results
            .map(|Json(results)| results)
            .ok_or_else(|| {
                AppError::ValidationError("results are required to complete a session".to_string())
            })?;
        results.validate()?;
        Ok(results)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, InputObject)]
pub struct AbandonSessionRequest {
    #[validate(length(max = 500))]
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct UpdateSubjectNameRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub subject_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, InputObject)]
#[validate(schema(function = "validate_date_range"))]
pub struct SummaryFilterRequest {
    #[serde(default)]
    pub assessment_type: Option<String>,

    #[serde(default)]
    pub from: Option<DateTime<Utc>>,

    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

impl SummaryFilterRequest {
    pub fn into_filter(self) -> AppResult<SessionFilter> {
        self.validate()?;

        let assessment_type = self
            .assessment_type
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::parse::<AssessmentType>)
            .transpose()?;

        Ok(SessionFilter {
            assessment_type,
            started_from: self.from,
            started_to: self.to,
        })
    }
}

fn validate_date_range(filter: &SummaryFilterRequest) -> Result<(), ValidationError> {
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from > to {
            return Err(ValidationError::new("from_after_to"));
        }
    }
    Ok(())
}

fn parse_gender(value: &str) -> AppResult<Gender> {
    match value.trim().to_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        other => Err(AppError::ValidationError(format!(
            "Unknown subject_gender '{}'",
            other
        ))),
    }
}
