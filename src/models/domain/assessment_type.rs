use std::{fmt, str::FromStr};

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The quiz kinds offered on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentType {
    BurnoutRisk,
    StressResilience,
    WorkLifeBalance,
    LeadershipStyle,
    EmotionalIntelligence,
    CareerAlignment,
    ConfidenceMindset,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 7] = [
        AssessmentType::BurnoutRisk,
        AssessmentType::StressResilience,
        AssessmentType::WorkLifeBalance,
        AssessmentType::LeadershipStyle,
        AssessmentType::EmotionalIntelligence,
        AssessmentType::CareerAlignment,
        AssessmentType::ConfidenceMindset,
    ];

    /// Number of questions in the published questionnaire.
    pub fn total_questions(&self) -> u32 {
        match self {
            AssessmentType::BurnoutRisk => 22,
            AssessmentType::StressResilience => 20,
            AssessmentType::WorkLifeBalance => 15,
            AssessmentType::LeadershipStyle => 18,
            AssessmentType::EmotionalIntelligence => 25,
            AssessmentType::CareerAlignment => 16,
            AssessmentType::ConfidenceMindset => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::BurnoutRisk => "burnout-risk",
            AssessmentType::StressResilience => "stress-resilience",
            AssessmentType::WorkLifeBalance => "work-life-balance",
            AssessmentType::LeadershipStyle => "leadership-style",
            AssessmentType::EmotionalIntelligence => "emotional-intelligence",
            AssessmentType::CareerAlignment => "career-alignment",
            AssessmentType::ConfidenceMindset => "confidence-mindset",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace('_', "-");
        AssessmentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                AppError::ValidationError(format!("Unknown assessment type '{}'", value.trim()))
            })
    }
}
