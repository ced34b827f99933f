//! Wire format of a quiz document and its conversion into the `Quiz` tree.
//!
//! An entry under an activity is a round exactly when it carries a `round_title`
//! key (even a `null` one). That check happens once, in [`EntryDocument::is_round`];
//! everything downstream matches on [`Entry`].

use serde::{Deserialize, Deserializer};

use crate::error::{DocumentError, EntityKind};
use crate::model::{Activity, Entry, Question, Quiz, Round};

//
// ─── RAW DOCUMENT ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizDocument {
    pub name: String,
    pub heading: String,
    pub activities: Vec<ActivityDocument>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityDocument {
    pub activity_name: String,
    pub order: u32,
    pub questions: Vec<EntryDocument>,
}

/// A plain question or a round, not yet classified.
///
/// Fields of both shapes are optional here so a missing one is reported with its
/// document path instead of a bare serde message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntryDocument {
    pub order: u32,
    /// Outer `Some` means the key is present; inner `None` means it was `null`.
    #[serde(default, deserialize_with = "present")]
    pub round_title: Option<Option<String>>,
    #[serde(default)]
    pub questions: Option<Vec<QuestionDocument>>,
    #[serde(default)]
    pub stimulus: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionDocument {
    pub order: u32,
    #[serde(default)]
    pub stimulus: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub feedback: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl QuizDocument {
    /// Parse the JSON text of a quiz document.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Json` for invalid JSON or a wrongly typed/missing
    /// top-level field.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl EntryDocument {
    #[must_use]
    pub fn is_round(&self) -> bool {
        self.round_title.is_some()
    }
}

//
// ─── TREE CONSTRUCTION ─────────────────────────────────────────────────────────
//

impl Quiz {
    /// Parse and build a quiz in one step.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` for any malformed document.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Self::try_from(QuizDocument::from_json(json)?)
    }
}

impl TryFrom<QuizDocument> for Quiz {
    type Error = DocumentError;

    fn try_from(doc: QuizDocument) -> Result<Self, Self::Error> {
        let activities = doc
            .activities
            .into_iter()
            .enumerate()
            .map(|(idx, activity)| build_activity(activity, &format!("activities[{idx}]")))
            .collect::<Result<Vec<_>, _>>()?;

        Quiz::new(doc.name, doc.heading, activities)
            .map_err(|source| DocumentError::tree("activities", source))
    }
}

fn build_activity(doc: ActivityDocument, path: &str) -> Result<Activity, DocumentError> {
    let entries = doc
        .questions
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| build_entry(entry, &format!("{path}.questions[{idx}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Activity::new(doc.order, doc.activity_name, entries)
        .map_err(|source| DocumentError::tree(path, source))
}

fn build_entry(doc: EntryDocument, path: &str) -> Result<Entry, DocumentError> {
    if !doc.is_round() {
        let question = QuestionDocument {
            order: doc.order,
            stimulus: doc.stimulus,
            is_correct: doc.is_correct,
            feedback: doc.feedback,
        };
        return build_question(question, EntityKind::Entry, path).map(Entry::Question);
    }

    let title = doc
        .round_title
        .flatten()
        .ok_or_else(|| DocumentError::InvalidRoundTitle {
            path: path.to_string(),
        })?;
    let questions = doc
        .questions
        .ok_or_else(|| missing(path, "questions"))?
        .into_iter()
        .enumerate()
        .map(|(idx, question)| {
            build_question(
                question,
                EntityKind::RoundQuestion,
                &format!("{path}.questions[{idx}]"),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Round::new(doc.order, title, questions)
        .map(Entry::Round)
        .map_err(|source| DocumentError::tree(path, source))
}

fn build_question(
    doc: QuestionDocument,
    kind: EntityKind,
    path: &str,
) -> Result<Question, DocumentError> {
    let stimulus = doc.stimulus.ok_or_else(|| missing(path, "stimulus"))?;
    let correct_answer = doc.is_correct.ok_or_else(|| missing(path, "is_correct"))?;
    let question = Question::new(kind, doc.order, stimulus, correct_answer)
        .map_err(|source| DocumentError::tree(path, source))?;

    Ok(match doc.feedback {
        Some(feedback) => question.with_feedback(feedback),
        None => question,
    })
}

fn missing(path: &str, field: &'static str) -> DocumentError {
    DocumentError::MissingField {
        path: path.to_string(),
        field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;

    const MIXED: &str = r#"{
        "name": "Error Find",
        "heading": "Find the mistakes.",
        "activities": [
            {
                "activity_name": "Activity One",
                "order": 1,
                "questions": [
                    { "order": 2, "stimulus": "second", "is_correct": true, "feedback": "ok", "user_answers": [] },
                    { "order": 1, "round_title": "Round 1", "questions": [
                        { "order": 1, "stimulus": "r1", "is_correct": false, "feedback": "nope" },
                        { "order": 2, "stimulus": "r2", "is_correct": true }
                    ] }
                ]
            }
        ]
    }"#;

    fn wrap_entry(entry: &str) -> String {
        format!(
            r#"{{"name":"n","heading":"h","activities":[{{"activity_name":"A","order":1,"questions":[{entry}]}}]}}"#
        )
    }

    #[test]
    fn builds_mixed_activity_in_source_order() {
        let quiz = Quiz::from_json(MIXED).unwrap();
        assert_eq!(quiz.name(), "Error Find");
        assert_eq!(quiz.heading(), "Find the mistakes.");

        let activity = quiz.activity(1).unwrap();
        assert_eq!(activity.name(), "Activity One");
        assert_eq!(activity.entries()[0].order(), 2);
        assert!(!activity.entries()[0].is_round());
        assert!(activity.entries()[1].is_round());

        let round = activity.entry(1).and_then(Entry::as_round).unwrap();
        assert_eq!(round.title(), "Round 1");
        assert_eq!(round.question(1).and_then(Question::feedback), Some("nope"));
        assert_eq!(round.question(2).and_then(Question::feedback), None);
        assert_eq!(activity.question_count(), 3);
    }

    #[test]
    fn round_title_wins_over_question_fields() {
        let json = wrap_entry(
            r#"{"order":1,"stimulus":"s","is_correct":true,"round_title":"R","questions":[]}"#,
        );
        let quiz = Quiz::from_json(&json).unwrap();
        let entry = quiz.activity(1).unwrap().entry(1).unwrap();
        assert!(entry.is_round());
        assert_eq!(entry.as_round().unwrap().title(), "R");
    }

    #[test]
    fn round_without_questions_is_still_a_round() {
        let json = wrap_entry(r#"{"order":1,"stimulus":"s","is_correct":true,"round_title":"R"}"#);
        let err = Quiz::from_json(&json).unwrap_err();
        match err {
            DocumentError::MissingField { path, field } => {
                assert_eq!(path, "activities[0].questions[0]");
                assert_eq!(field, "questions");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn null_round_title_counts_as_present() {
        let json = wrap_entry(r#"{"order":1,"round_title":null,"questions":[]}"#);
        assert!(matches!(
            Quiz::from_json(&json),
            Err(DocumentError::InvalidRoundTitle { .. })
        ));
    }

    #[test]
    fn missing_question_fields_report_path() {
        let json = wrap_entry(
            r#"{"order":1,"round_title":"R","questions":[{"order":1,"stimulus":"x"}]}"#,
        );
        let err = Quiz::from_json(&json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "activities[0].questions[0].questions[0]: missing field `is_correct`"
        );
    }

    #[test]
    fn duplicate_orders_fail_construction() {
        let json = wrap_entry(
            r#"{"order":1,"stimulus":"a","is_correct":true},{"order":1,"stimulus":"b","is_correct":false}"#,
        );
        match Quiz::from_json(&json).unwrap_err() {
            DocumentError::InvalidTree { path, source } => {
                assert_eq!(path, "activities[0]");
                assert_eq!(
                    source,
                    OrderError::Duplicate {
                        kind: EntityKind::Entry,
                        order: 1
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_fatal() {
        assert!(matches!(
            Quiz::from_json(r#"{"name":"n","activities":[]}"#),
            Err(DocumentError::Json(_))
        ));
        assert!(matches!(
            Quiz::from_json("not json"),
            Err(DocumentError::Json(_))
        ));
    }
}
