use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{Entry, QuestionPosition, Quiz};
use crate::results::{ActivityResults, EntryResult, QuestionResult, RoundResult};

/// A user's answers over one shared `Quiz`.
///
/// The only place answers are recorded and judged. Answers are keyed by
/// position, so the tree stays untouched and any number of sessions can share it.
/// The answer map only grows or is cleared as a whole.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Arc<Quiz>,
    answers: HashMap<QuestionPosition, bool>,
}

impl QuizSession {
    #[must_use]
    pub fn new(quiz: Arc<Quiz>) -> Self {
        Self {
            quiz,
            answers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Arc<Quiz> {
        &self.quiz
    }

    /// Store `answer` for the question at the given coordinates.
    ///
    /// `round_question` is the in-round order when `entry` is a round. A later
    /// answer at the same coordinates replaces the earlier one.
    pub fn answer_question(
        &mut self,
        activity: u32,
        entry: u32,
        round_question: Option<u32>,
        answer: bool,
    ) {
        self.record(QuestionPosition::new(activity, entry, round_question), answer);
    }

    /// Position-keyed form of [`answer_question`](Self::answer_question).
    pub fn record(&mut self, position: QuestionPosition, answer: bool) {
        self.answers.insert(position, answer);
    }

    #[must_use]
    pub fn get_answer(
        &self,
        activity: u32,
        entry: u32,
        round_question: Option<u32>,
    ) -> Option<bool> {
        self.answer_at(&QuestionPosition::new(activity, entry, round_question))
    }

    #[must_use]
    pub fn answer_at(&self, position: &QuestionPosition) -> Option<bool> {
        self.answers.get(position).copied()
    }

    /// `None` when unanswered or when the coordinates do not resolve to a question.
    #[must_use]
    pub fn is_answered_correctly(
        &self,
        activity: u32,
        entry: u32,
        round_question: Option<u32>,
    ) -> Option<bool> {
        let position = QuestionPosition::new(activity, entry, round_question);
        let answer = self.answer_at(&position)?;
        let question = self.quiz.question(&position)?;
        Some(question.is_correct(answer))
    }

    /// True when every question of the activity, round members included, has an
    /// answer. An unknown activity, or one without questions, is never complete.
    #[must_use]
    pub fn is_activity_complete(&self, activity_order: u32) -> bool {
        let Some(activity) = self.quiz.activity(activity_order) else {
            return false;
        };
        if activity.question_count() == 0 {
            return false;
        }

        activity.entries().iter().all(|entry| match entry {
            Entry::Question(question) => self
                .get_answer(activity_order, question.order(), None)
                .is_some(),
            Entry::Round(round) => round.questions().iter().all(|question| {
                self.get_answer(activity_order, round.order(), Some(question.order()))
                    .is_some()
            }),
        })
    }

    /// Answered questions of the activity, judged, in tree order.
    ///
    /// Unanswered questions are left out. An unknown activity yields empty results.
    #[must_use]
    pub fn activity_results(&self, activity_order: u32) -> ActivityResults {
        let Some(activity) = self.quiz.activity(activity_order) else {
            return ActivityResults::default();
        };

        let mut entries = Vec::with_capacity(activity.entries().len());
        for entry in activity.entries() {
            match entry {
                Entry::Question(question) => {
                    if let Some(answer) = self.get_answer(activity_order, question.order(), None) {
                        entries.push(EntryResult::Question(QuestionResult {
                            order: question.order(),
                            was_correct: question.is_correct(answer),
                        }));
                    }
                }
                Entry::Round(round) => {
                    let results = round
                        .questions()
                        .iter()
                        .filter_map(|question| {
                            self.get_answer(activity_order, round.order(), Some(question.order()))
                                .map(|answer| QuestionResult {
                                    order: question.order(),
                                    was_correct: question.is_correct(answer),
                                })
                        })
                        .collect();
                    entries.push(EntryResult::Round(RoundResult {
                        order: round.order(),
                        results,
                    }));
                }
            }
        }

        ActivityResults::new(entries)
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    pub fn reset_answers(&mut self) {
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "name": "Scenario",
        "heading": "",
        "activities": [
            { "activity_name": "Mixed", "order": 1, "questions": [
                { "order": 1, "stimulus": "q1", "is_correct": true },
                { "order": 2, "round_title": "R", "questions": [
                    { "order": 1, "stimulus": "r1", "is_correct": false },
                    { "order": 2, "stimulus": "r2", "is_correct": true }
                ] }
            ] },
            { "activity_name": "Empty", "order": 2, "questions": [] }
        ]
    }"#;

    fn session() -> QuizSession {
        QuizSession::new(Arc::new(Quiz::from_json(SCENARIO).unwrap()))
    }

    #[test]
    fn last_answer_wins() {
        let mut session = session();
        session.answer_question(1, 1, None, true);
        assert_eq!(session.get_answer(1, 1, None), Some(true));

        session.answer_question(1, 1, None, false);
        assert_eq!(session.get_answer(1, 1, None), Some(false));
        assert_eq!(session.answer_count(), 1);
    }

    #[test]
    fn plain_and_round_keys_do_not_collide() {
        let mut session = session();
        session.answer_question(1, 2, Some(1), true);
        assert_eq!(session.get_answer(1, 2, None), None);
        assert_eq!(session.get_answer(1, 2, Some(1)), Some(true));
    }

    #[test]
    fn correctness_is_lenient_about_bad_coordinates() {
        let mut session = session();
        assert_eq!(session.is_answered_correctly(1, 1, None), None);

        session.answer_question(1, 1, None, true);
        session.answer_question(1, 2, Some(1), true);
        session.answer_question(9, 9, None, true);

        assert_eq!(session.is_answered_correctly(1, 1, None), Some(true));
        assert_eq!(session.is_answered_correctly(1, 2, Some(1)), Some(false));
        assert_eq!(session.is_answered_correctly(9, 9, None), None);
    }

    #[test]
    fn completion_needs_every_round_question() {
        let mut session = session();
        assert!(!session.is_activity_complete(1));

        session.answer_question(1, 1, None, true);
        session.answer_question(1, 2, Some(1), true);
        assert!(!session.is_activity_complete(1));

        session.answer_question(1, 2, Some(2), true);
        assert!(session.is_activity_complete(1));
        assert!(!session.is_activity_complete(42));
    }

    #[test]
    fn activity_without_questions_is_never_complete() {
        let session = session();
        assert!(!session.is_activity_complete(2));
        assert!(session.activity_results(2).is_empty());
    }

    #[test]
    fn results_skip_unanswered_questions() {
        let mut session = session();
        session.answer_question(1, 2, Some(2), true);

        let results = session.activity_results(1);
        assert_eq!(
            results.entries(),
            &[EntryResult::Round(RoundResult {
                order: 2,
                results: vec![QuestionResult {
                    order: 2,
                    was_correct: true
                }],
            })]
        );
        assert!(session.activity_results(42).is_empty());
    }

    #[test]
    fn full_results_match_question_count() {
        let mut session = session();
        session.answer_question(1, 1, None, true);
        session.answer_question(1, 2, Some(1), true);
        session.answer_question(1, 2, Some(2), true);

        let results = session.activity_results(1);
        let total = session.quiz().activity(1).unwrap().question_count();
        assert_eq!(results.answered_count(), total);
        assert_eq!(
            results.entries(),
            &[
                EntryResult::Question(QuestionResult {
                    order: 1,
                    was_correct: true
                }),
                EntryResult::Round(RoundResult {
                    order: 2,
                    results: vec![
                        QuestionResult {
                            order: 1,
                            was_correct: false
                        },
                        QuestionResult {
                            order: 2,
                            was_correct: true
                        },
                    ],
                }),
            ]
        );
    }

    #[test]
    fn reset_clears_answers_only() {
        let mut session = session();
        session.answer_question(1, 1, None, true);
        session.reset_answers();

        assert_eq!(session.answer_count(), 0);
        assert_eq!(session.get_answer(1, 1, None), None);
        assert_eq!(session.quiz().activities().len(), 2);
    }

    #[test]
    fn sessions_over_one_quiz_are_independent() {
        let quiz = Arc::new(Quiz::from_json(SCENARIO).unwrap());
        let mut first = QuizSession::new(Arc::clone(&quiz));
        let second = QuizSession::new(quiz);

        first.answer_question(1, 1, None, true);
        assert_eq!(second.get_answer(1, 1, None), None);
    }
}
