use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Outcome attached to a completed session by the scoring provider.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_score_bounds"))]
pub struct AssessmentResults {
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,

    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,

    #[validate(length(min = 1, max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[validate(length(max = 2000))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default)]
    pub recommendations: Vec<String>,

    #[validate(nested)]
    #[serde(default)]
    pub dimensions: Vec<DimensionScore>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
pub struct DimensionScore {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub score: f64,
}

fn validate_score_bounds(results: &AssessmentResults) -> Result<(), ValidationError> {
    if let (Some(total), Some(max)) = (results.total_score, results.max_score) {
        if total > max {
            return Err(ValidationError::new("total_score_exceeds_max_score"));
        }
    }
    Ok(())
}
