use std::sync::Arc;

use serde::Serialize;

use quiz_core::{
    Activity, ActivityResults, Cursor, Entry, Question, QuestionPosition, Quiz, QuizSession,
};

use crate::error::PlayError;
use super::progress::ActivityProgress;
use super::view::{ActivityReport, QuestionView, QuizOverview};

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// What happened when the current question was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    /// Where the answer was stored (the cursor position before advancing).
    pub position: QuestionPosition,
    pub was_correct: bool,
    pub activity_complete: bool,
}

//
// ─── PLAY SERVICE ──────────────────────────────────────────────────────────────
//

/// One user's run through a quiz: answers plus the navigation cursor.
///
/// Answers are always recorded at the cursor before it moves. Restart clears
/// answers and cursor together.
#[derive(Debug, Clone)]
pub struct QuizPlayService {
    session: QuizSession,
    cursor: Cursor,
}

impl QuizPlayService {
    #[must_use]
    pub fn new(quiz: Arc<Quiz>) -> Self {
        Self {
            session: QuizSession::new(quiz),
            cursor: Cursor::unset(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        self.session.quiz()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn current_activity(&self) -> Option<&Activity> {
        self.cursor.current_activity(self.quiz())
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&Entry> {
        self.cursor.current_entry(self.quiz())
    }

    #[must_use]
    pub fn current_round_question(&self) -> Option<&Question> {
        self.cursor.current_round_question(self.quiz())
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.cursor.current_question(self.quiz())
    }

    #[must_use]
    pub fn is_current_activity_complete(&self) -> bool {
        self.session.is_activity_complete(self.cursor.activity())
    }

    /// Point the cursor at the first question of an activity.
    ///
    /// # Errors
    ///
    /// Returns `PlayError::UnknownActivity` if the quiz has no such activity; the
    /// cursor is left where it was.
    pub fn set_activity(&mut self, order: u32) -> Result<(), PlayError> {
        if self.quiz().activity(order).is_none() {
            return Err(PlayError::UnknownActivity(order));
        }
        self.cursor.set_activity(order);
        self.settle();
        tracing::debug!(activity = order, "activity selected");
        Ok(())
    }

    /// Record `answer` for the current question, then advance.
    ///
    /// The last question of a round moves on to the next entry; any other round
    /// question moves within the round; a plain question moves to the next entry.
    /// Entries wrap, so completion is reported separately in the outcome.
    ///
    /// # Errors
    ///
    /// Returns `PlayError::NoCurrentQuestion` if the cursor names no question.
    pub fn answer_current(&mut self, answer: bool) -> Result<AnswerOutcome, PlayError> {
        let quiz = Arc::clone(self.session.quiz());
        let position = self
            .cursor
            .position(&quiz)
            .ok_or(PlayError::NoCurrentQuestion)?;
        let was_correct = quiz
            .question(&position)
            .is_some_and(|question| question.is_correct(answer));

        self.session.record(position, answer);

        match self.cursor.current_entry(&quiz) {
            Some(Entry::Round(round))
                if self.cursor.round_question() >= round.max_question_order() =>
            {
                self.cursor.advance_entry(&quiz);
                self.cursor.reset_round_question();
            }
            Some(Entry::Round(_)) => {
                self.cursor.advance_round_question(&quiz);
            }
            _ => {
                self.cursor.advance_entry(&quiz);
            }
        }
        self.settle();

        let activity_complete = self.session.is_activity_complete(position.activity());
        tracing::debug!(%position, answer, was_correct, activity_complete, "answer recorded");

        Ok(AnswerOutcome {
            position,
            was_correct,
            activity_complete,
        })
    }

    /// Clear every answer and reset the cursor to the unset sentinel.
    pub fn restart(&mut self) {
        self.session.reset_answers();
        self.cursor.reset_all();
        tracing::info!("quiz restarted");
    }

    #[must_use]
    pub fn activity_results(&self, order: u32) -> ActivityResults {
        self.session.activity_results(order)
    }

    #[must_use]
    pub fn progress(&self, order: u32) -> Option<ActivityProgress> {
        let activity = self.quiz().activity(order)?;
        Some(ActivityProgress::new(
            activity.question_count(),
            self.session.activity_results(order).answered_count(),
            self.session.is_activity_complete(order),
        ))
    }

    #[must_use]
    pub fn overview(&self) -> QuizOverview {
        QuizOverview::build(&self.session)
    }

    #[must_use]
    pub fn question_view(&self) -> Option<QuestionView> {
        QuestionView::build(self.quiz(), self.cursor)
    }

    #[must_use]
    pub fn report(&self, order: u32) -> Option<ActivityReport> {
        ActivityReport::build(&self.session, order)
    }

    /// Move the cursor onto the next existing question when it names a gap.
    ///
    /// Orders need not be contiguous, so a literal `+1` advance can land on a
    /// missing entry or round question. Each step jumps straight to the next
    /// existing order, so the walk visits every entry at most once.
    fn settle(&mut self) {
        let quiz = Arc::clone(self.session.quiz());
        let Some(activity) = self.cursor.current_activity(&quiz) else {
            return;
        };
        let mut entry_order = self.cursor.entry();
        let mut round_question = self.cursor.round_question();

        for _ in 0..=activity.entries().len() {
            match activity.entry(entry_order) {
                Some(Entry::Question(_)) => break,
                Some(Entry::Round(round)) => {
                    let next = round
                        .questions()
                        .iter()
                        .map(Question::order)
                        .filter(|order| *order >= round_question)
                        .min();
                    if let Some(order) = next {
                        round_question = order;
                        break;
                    }
                }
                None => {}
            }
            let Some(next) = next_entry_order(activity, entry_order) else {
                return;
            };
            entry_order = next;
            round_question = 1;
        }

        self.cursor = Cursor::at(activity.order(), entry_order, round_question);
    }
}

/// Smallest entry order after `after`, wrapping to the lowest one.
fn next_entry_order(activity: &Activity, after: u32) -> Option<u32> {
    let orders = activity.entries().iter().map(Entry::order);
    orders
        .clone()
        .filter(|order| *order > after)
        .min()
        .or_else(|| orders.min())
}
