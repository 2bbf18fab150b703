use crate::models::domain::AssessmentType;

/// Highest value of a single scale answer (0..=4).
pub const MAX_ANSWER_WEIGHT: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Moderate,
    High,
}

impl ScoreBand {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 1.0 / 3.0 {
            ScoreBand::Low
        } else if ratio < 2.0 / 3.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Low => "low",
            ScoreBand::Moderate => "moderate",
            ScoreBand::High => "high",
        }
    }
}

pub struct ResultTemplate {
    pub summary: &'static str,
    pub recommendations: &'static [&'static str],
}

pub fn result_template(kind: AssessmentType, band: ScoreBand) -> ResultTemplate {
    use AssessmentType::*;
    use ScoreBand::*;

    match (kind, band) {
        (BurnoutRisk, Low) => ResultTemplate {
            summary: "Your answers show few signs of burnout.",
            recommendations: &["Keep protecting the routines that recharge you."],
        },
        (BurnoutRisk, Moderate) => ResultTemplate {
            summary: "Some early warning signs of burnout are present.",
            recommendations: &[
                "Schedule recovery time as deliberately as work time.",
                "Review which commitments you can delegate or drop.",
            ],
        },
        (BurnoutRisk, High) => ResultTemplate {
            summary: "Your answers point to a high risk of burnout.",
            recommendations: &[
                "Talk to someone you trust about your workload this week.",
                "Consider speaking with a health professional.",
            ],
        },
        (StressResilience, Low) => ResultTemplate {
            summary: "Pressure tends to knock you off balance for a while.",
            recommendations: &["Build one short daily practice that calms your body."],
        },
        (StressResilience, Moderate) => ResultTemplate {
            summary: "You recover from stress, though not always quickly.",
            recommendations: &["Notice what helps you bounce back and repeat it on purpose."],
        },
        (StressResilience, High) => ResultTemplate {
            summary: "You handle pressure with a strong, steady core.",
            recommendations: &["Share what works for you with your team."],
        },
        (WorkLifeBalance, Low) => ResultTemplate {
            summary: "Work is crowding out most of the rest of your life.",
            recommendations: &[
                "Set one clear boundary on working hours and keep it for a month.",
            ],
        },
        (WorkLifeBalance, Moderate) => ResultTemplate {
            summary: "Your balance holds most weeks but slips under deadline pressure.",
            recommendations: &["Plan personal time before the week fills up."],
        },
        (WorkLifeBalance, High) => ResultTemplate {
            summary: "You keep work and life in healthy proportion.",
            recommendations: &["Revisit your boundaries when your role changes."],
        },
        (LeadershipStyle, Low) => ResultTemplate {
            summary: "You lead mostly by example and prefer a hands-off style.",
            recommendations: &["Practise giving direct, specific feedback."],
        },
        (LeadershipStyle, Moderate) => ResultTemplate {
            summary: "You adapt your leadership style to the situation.",
            recommendations: &["Make your expectations explicit when switching styles."],
        },
        (LeadershipStyle, High) => ResultTemplate {
            summary: "You lead with a clear vision and strong direction.",
            recommendations: &["Create room for others to take the lead."],
        },
        (EmotionalIntelligence, Low) => ResultTemplate {
            summary: "Reading and naming emotions is an area to grow.",
            recommendations: &["Pause to label your feelings before responding."],
        },
        (EmotionalIntelligence, Moderate) => ResultTemplate {
            summary: "You are aware of emotions and usually manage them well.",
            recommendations: &["Ask for feedback on how you come across in tense moments."],
        },
        (EmotionalIntelligence, High) => ResultTemplate {
            summary: "You read people well and respond with empathy.",
            recommendations: &["Use your insight to support colleagues through change."],
        },
        (CareerAlignment, Low) => ResultTemplate {
            summary: "Your current work is out of step with what matters to you.",
            recommendations: &["List the values your ideal role would honour."],
        },
        (CareerAlignment, Moderate) => ResultTemplate {
            summary: "Parts of your work fit you well and parts do not.",
            recommendations: &["Look for projects that stretch the parts you enjoy."],
        },
        (CareerAlignment, High) => ResultTemplate {
            summary: "Your career is well aligned with your strengths and values.",
            recommendations: &["Set a long-term goal that builds on this alignment."],
        },
        (ConfidenceMindset, Low) => ResultTemplate {
            summary: "Self-doubt often holds you back.",
            recommendations: &["Keep a record of small wins and review it weekly."],
        },
        (ConfidenceMindset, Moderate) => ResultTemplate {
            summary: "Your confidence is solid in familiar situations.",
            recommendations: &["Take on one unfamiliar challenge this month."],
        },
        (ConfidenceMindset, High) => ResultTemplate {
            summary: "You approach challenges with a confident mindset.",
            recommendations: &["Mentor someone who is building their confidence."],
        },
    }
}
