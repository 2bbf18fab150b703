use async_trait::async_trait;

use crate::{
    constants::result_templates::{result_template, ScoreBand, MAX_ANSWER_WEIGHT},
    errors::AppResult,
    models::domain::{AssessmentResults, AssessmentType, SessionAnswer},
};

/// Turns a session's final answers into a results payload.
#[async_trait]
pub trait ScoringProvider: Send + Sync {
    async fn score(
        &self,
        assessment_type: AssessmentType,
        total_questions: u32,
        answers: &[SessionAnswer],
    ) -> AppResult<AssessmentResults>;
}

/// Sums answer weights and looks up canned copy for the resulting band.
pub struct StaticScoringProvider;

impl StaticScoringProvider {
    pub fn total_score(answers: &[SessionAnswer]) -> f64 {
        answers.iter().filter_map(|a| a.answer.weight()).sum()
    }
}

#[async_trait]
impl ScoringProvider for StaticScoringProvider {
    async fn score(
        &self,
        assessment_type: AssessmentType,
        total_questions: u32,
        answers: &[SessionAnswer],
    ) -> AppResult<AssessmentResults> {
        let max_score = f64::from(total_questions) * MAX_ANSWER_WEIGHT;
        let total_score = Self::total_score(answers).clamp(0.0, max_score);
        let ratio = if max_score > 0.0 {
            total_score / max_score
        } else {
            0.0
        };

        let band = ScoreBand::from_ratio(ratio);
        let template = result_template(assessment_type, band);

        log::debug!(
            "Scored {} answers for '{}': {}/{} ({})",
            answers.len(),
            assessment_type,
            total_score,
            max_score,
            band.as_str()
        );

        Ok(AssessmentResults {
            total_score: Some(total_score),
            max_score: Some(max_score),
            category: Some(band.as_str().to_string()),
            summary: Some(template.summary.to_string()),
            recommendations: template
                .recommendations
                .iter()
                .map(|r| r.to_string())
                .collect(),
            dimensions: Vec::new(),
        })
    }
}
