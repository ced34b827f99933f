use crate::error::{EntityKind, OrderError};
use crate::model::order::validate_orders;
use crate::model::Question;

/// A titled group of questions inside an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    order: u32,
    title: String,
    questions: Vec<Question>,
    max_question_order: u32,
}

impl Round {
    /// Creates a round, keeping `questions` in source order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError` if the round order is 0 or two questions share an order.
    pub fn new(
        order: u32,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, OrderError> {
        if order == 0 {
            return Err(OrderError::Zero {
                kind: EntityKind::Entry,
            });
        }
        let max_question_order =
            validate_orders(questions.iter().map(Question::order), EntityKind::RoundQuestion)?;

        Ok(Self {
            order,
            title: title.into(),
            questions,
            max_question_order,
        })
    }

    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks a question up by its `order` field, not its position.
    #[must_use]
    pub fn question(&self, order: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.order() == order)
    }

    /// Highest question order in the round, 0 when empty.
    #[must_use]
    pub fn max_question_order(&self) -> u32 {
        self.max_question_order
    }
}
