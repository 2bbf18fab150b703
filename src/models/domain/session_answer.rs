use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single response as submitted by the quiz UI.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Choices(Vec<String>),
}

impl AnswerValue {
    /// Numeric weight of the answer; text answers carry none.
    pub fn weight(&self) -> Option<f64> {
        match self {
            AnswerValue::Flag(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            AnswerValue::Number(value) => Some(*value),
            AnswerValue::Text(_) => None,
            AnswerValue::Choices(choices) => Some(choices.len() as f64),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SessionAnswer {
    pub question_id: String,
    pub answer: AnswerValue,
    pub answered_at: DateTime<Utc>,
}

/// Inserts or overwrites the answer for `question_id`.
///
/// Existing entries keep their position. Returns `true` when an entry was
/// overwritten.
pub fn upsert_answer(
    answers: &mut Vec<SessionAnswer>,
    question_id: &str,
    answer: AnswerValue,
    answered_at: DateTime<Utc>,
) -> bool {
    if let Some(existing) = answers.iter_mut().find(|a| a.question_id == question_id) {
        existing.answer = answer;
        existing.answered_at = answered_at;
        return true;
    }

    answers.push(SessionAnswer {
        question_id: question_id.to_string(),
        answer,
        answered_at,
    });
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn appends_new_question_in_order() {
        let now = Utc::now();
        let mut answers = Vec::new();

        assert!(!upsert_answer(&mut answers, "q1", AnswerValue::Number(2.0), now));
        assert!(!upsert_answer(&mut answers, "q2", AnswerValue::Flag(true), now));

        let ids: Vec<_> = answers.iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2"]);
    }

    #[test]
    fn resubmission_overwrites_in_place() {
        let first = Utc::now();
        let later = first + Duration::seconds(30);
        let mut answers = Vec::new();

        upsert_answer(&mut answers, "q1", AnswerValue::Number(1.0), first);
        upsert_answer(&mut answers, "q2", AnswerValue::Number(3.0), first);
        let replaced = upsert_answer(&mut answers, "q1", AnswerValue::Number(4.0), later);

        assert!(replaced);
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].question_id, "q1");
        assert_eq!(answers[0].answer, AnswerValue::Number(4.0));
        assert_eq!(answers[0].answered_at, later);
    }

    #[test]
    fn untagged_values_deserialize_by_shape() {
        let values: Vec<AnswerValue> =
            serde_json::from_str(r#"[true, 3, "often", ["a", "b"]]"#).unwrap();

        assert_eq!(
            values,
            vec![
                AnswerValue::Flag(true),
                AnswerValue::Number(3.0),
                AnswerValue::Text("often".to_string()),
                AnswerValue::Choices(vec!["a".to_string(), "b".to_string()]),
            ]
        );
    }

    #[test]
    fn weights_follow_answer_shape() {
        assert_eq!(AnswerValue::Flag(false).weight(), Some(0.0));
        assert_eq!(AnswerValue::Number(2.5).weight(), Some(2.5));
        assert_eq!(AnswerValue::Text("n/a".into()).weight(), None);
        assert_eq!(
            AnswerValue::Choices(vec!["x".into(), "y".into()]).weight(),
            Some(2.0)
        );
    }
}
