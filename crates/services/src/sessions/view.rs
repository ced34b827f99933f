use serde::Serialize;

use quiz_core::{Cursor, Entry, QuestionPosition, Quiz, QuizSession};

//
// ─── OVERVIEW ──────────────────────────────────────────────────────────────────
//

/// Presentation-agnostic list item for one activity.
///
/// Not a UI view-model: no pre-formatted strings. The shell decides how to
/// show counts and completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityListItem {
    pub order: u32,
    pub name: String,
    pub question_count: usize,
    pub answered: usize,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOverview {
    pub name: String,
    pub heading: String,
    pub activities: Vec<ActivityListItem>,
}

impl QuizOverview {
    #[must_use]
    pub fn build(session: &QuizSession) -> Self {
        let quiz = session.quiz();
        let activities = quiz
            .activities()
            .iter()
            .map(|activity| ActivityListItem {
                order: activity.order(),
                name: activity.name().to_string(),
                question_count: activity.question_count(),
                answered: session.activity_results(activity.order()).answered_count(),
                is_complete: session.is_activity_complete(activity.order()),
            })
            .collect();

        Self {
            name: quiz.name().to_string(),
            heading: quiz.heading().to_string(),
            activities,
        }
    }
}

//
// ─── CURRENT QUESTION ──────────────────────────────────────────────────────────
//

/// The round a question belongs to, with its place in that round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundHeading {
    pub order: u32,
    pub title: String,
    pub question_number: usize,
    pub question_count: usize,
}

/// What to show for the question under the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub activity_name: String,
    pub position: QuestionPosition,
    pub round: Option<RoundHeading>,
    pub stimulus: String,
}

impl QuestionView {
    /// `None` when the cursor does not name a question.
    #[must_use]
    pub fn build(quiz: &Quiz, cursor: Cursor) -> Option<Self> {
        let activity = cursor.current_activity(quiz)?;
        let position = cursor.position(quiz)?;
        let question = quiz.question(&position)?;

        let round = cursor.current_round(quiz).map(|round| RoundHeading {
            order: round.order(),
            title: round.title().to_string(),
            question_number: round
                .questions()
                .iter()
                .filter(|q| q.order() <= question.order())
                .count(),
            question_count: round.questions().len(),
        });

        Some(Self {
            activity_name: activity.name().to_string(),
            position,
            round,
            stimulus: question.stimulus().to_string(),
        })
    }
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

/// One answered question in an activity report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub position: QuestionPosition,
    pub round_title: Option<String>,
    pub stimulus: String,
    pub was_correct: bool,
    pub feedback: Option<String>,
}

/// Judged answers of one activity, flattened in tree order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityReport {
    pub order: u32,
    pub name: String,
    pub lines: Vec<ReportLine>,
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl ActivityReport {
    /// Built from `activity_results`, so only answered questions appear.
    #[must_use]
    pub fn build(session: &QuizSession, order: u32) -> Option<Self> {
        let quiz = session.quiz();
        let activity = quiz.activity(order)?;
        let results = session.activity_results(order);

        let mut lines = Vec::with_capacity(results.answered_count());
        for entry_result in results.entries() {
            let round_title = activity
                .entry(entry_result.order())
                .and_then(Entry::as_round)
                .map(|round| round.title().to_string());

            for result in entry_result.question_results() {
                let position = QuestionPosition::new(
                    order,
                    entry_result.order(),
                    round_title.as_ref().map(|_| result.order),
                );
                let Some(question) = quiz.question(&position) else {
                    continue;
                };
                lines.push(ReportLine {
                    position,
                    round_title: round_title.clone(),
                    stimulus: question.stimulus().to_string(),
                    was_correct: result.was_correct,
                    feedback: question.feedback().map(str::to_string),
                });
            }
        }

        Some(Self {
            order,
            name: activity.name().to_string(),
            correct: results.correct_count(),
            answered: results.answered_count(),
            total: activity.question_count(),
            lines,
        })
    }
}
