use crate::model::{Activity, Entry, Question, QuestionPosition, Quiz, Round};

/// Coordinate value used by every field right after a full reset.
pub const UNSET: u32 = 0;

/// Cursor into the quiz tree: `(activity, entry, round question)` orders.
///
/// Only the transition methods below mutate it. Everything shown to the user is
/// derived from it against a `Quiz` on demand; nothing is cached. Entry and round
/// question advances wrap to 1 instead of signalling the end of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    activity: u32,
    entry: u32,
    round_question: u32,
}

impl Cursor {
    /// Cursor with all coordinates at [`UNSET`].
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            activity: UNSET,
            entry: UNSET,
            round_question: UNSET,
        }
    }

    #[must_use]
    pub const fn at(activity: u32, entry: u32, round_question: u32) -> Self {
        Self {
            activity,
            entry,
            round_question,
        }
    }

    #[must_use]
    pub fn activity(&self) -> u32 {
        self.activity
    }

    #[must_use]
    pub fn entry(&self) -> u32 {
        self.entry
    }

    #[must_use]
    pub fn round_question(&self) -> u32 {
        self.round_question
    }

    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self == Self::unset()
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    pub fn set_activity(&mut self, order: u32) {
        self.activity = order;
        self.entry = 1;
        self.round_question = 1;
    }

    /// Move to the next entry, wrapping to 1 after the activity's highest order.
    ///
    /// Always resets the round question. No-op (returns false) when the current
    /// activity does not exist.
    pub fn advance_entry(&mut self, quiz: &Quiz) -> bool {
        let Some(max) = self.current_activity(quiz).map(Activity::max_entry_order) else {
            return false;
        };
        self.entry = if self.entry >= max { 1 } else { self.entry + 1 };
        self.round_question = 1;
        true
    }

    /// Move to the next question of the current round, wrapping after the round's
    /// highest order.
    ///
    /// No-op (returns false) when the current entry is not a round.
    pub fn advance_round_question(&mut self, quiz: &Quiz) -> bool {
        let Some(max) = self.current_round(quiz).map(Round::max_question_order) else {
            return false;
        };
        self.round_question = if self.round_question >= max {
            1
        } else {
            self.round_question + 1
        };
        true
    }

    pub fn reset_round_question(&mut self) {
        self.round_question = 1;
    }

    /// Back to [`UNSET`]. Pair with `QuizSession::reset_answers` to restart a quiz.
    pub fn reset_all(&mut self) {
        *self = Self::unset();
    }

    //
    // ─── DERIVED VIEWS ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn current_activity<'q>(&self, quiz: &'q Quiz) -> Option<&'q Activity> {
        quiz.activity(self.activity)
    }

    #[must_use]
    pub fn current_entry<'q>(&self, quiz: &'q Quiz) -> Option<&'q Entry> {
        self.current_activity(quiz)?.entry(self.entry)
    }

    #[must_use]
    pub fn current_round<'q>(&self, quiz: &'q Quiz) -> Option<&'q Round> {
        self.current_entry(quiz)?.as_round()
    }

    /// The in-round question; `None` when the current entry is a plain question.
    #[must_use]
    pub fn current_round_question<'q>(&self, quiz: &'q Quiz) -> Option<&'q Question> {
        self.current_round(quiz)?.question(self.round_question)
    }

    /// The question the user would answer next, plain or in-round.
    #[must_use]
    pub fn current_question<'q>(&self, quiz: &'q Quiz) -> Option<&'q Question> {
        match self.current_entry(quiz)? {
            Entry::Question(question) => Some(question),
            Entry::Round(round) => round.question(self.round_question),
        }
    }

    /// Answer key for the current question, if the cursor names one.
    #[must_use]
    pub fn position(&self, quiz: &Quiz) -> Option<QuestionPosition> {
        let round_question = match self.current_entry(quiz)? {
            Entry::Question(_) => None,
            Entry::Round(round) => Some(round.question(self.round_question)?.order()),
        };
        Some(QuestionPosition::new(
            self.activity,
            self.entry,
            round_question,
        ))
    }
}
