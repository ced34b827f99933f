use crate::error::{EntityKind, OrderError};

/// A single true/false question.
///
/// Immutable once built; the user's answer lives in `QuizSession`, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    order: u32,
    stimulus: String,
    correct_answer: bool,
    feedback: Option<String>,
}

impl Question {
    /// Creates a question.
    ///
    /// `kind` records where the question sits (directly in an activity or inside a round)
    /// so order errors name the right container.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Zero` if `order` is 0.
    pub fn new(
        kind: EntityKind,
        order: u32,
        stimulus: impl Into<String>,
        correct_answer: bool,
    ) -> Result<Self, OrderError> {
        if order == 0 {
            return Err(OrderError::Zero { kind });
        }
        Ok(Self {
            order,
            stimulus: stimulus.into(),
            correct_answer,
            feedback: None,
        })
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[must_use]
    pub fn stimulus(&self) -> &str {
        &self.stimulus
    }

    #[must_use]
    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Strict equality against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: bool) -> bool {
        answer == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judges_by_equality() {
        let q = Question::new(EntityKind::Entry, 1, "Sky is green", false).unwrap();
        assert!(q.is_correct(false));
        assert!(!q.is_correct(true));
        assert_eq!(q.feedback(), None);
    }

    #[test]
    fn zero_order_is_rejected() {
        let err = Question::new(EntityKind::RoundQuestion, 0, "x", true).unwrap_err();
        assert_eq!(
            err,
            OrderError::Zero {
                kind: EntityKind::RoundQuestion
            }
        );
    }
}
