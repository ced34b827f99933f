use crate::error::{EntityKind, OrderError};
use crate::model::order::validate_orders;
use crate::model::{Activity, Entry, Question, QuestionPosition};

/// Root of the quiz tree.
///
/// Built once per loaded document and shared read-only (usually behind an `Arc`)
/// by every session over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    name: String,
    heading: String,
    activities: Vec<Activity>,
    max_activity_order: u32,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `OrderError::Duplicate` if two activities share an order.
    pub fn new(
        name: impl Into<String>,
        heading: impl Into<String>,
        activities: Vec<Activity>,
    ) -> Result<Self, OrderError> {
        let max_activity_order =
            validate_orders(activities.iter().map(Activity::order), EntityKind::Activity)?;

        Ok(Self {
            name: name.into(),
            heading: heading.into(),
            activities,
            max_activity_order,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    #[must_use]
    pub fn activity(&self, order: u32) -> Option<&Activity> {
        self.activities.iter().find(|a| a.order() == order)
    }

    /// Highest activity order, 0 when the quiz has no activities.
    #[must_use]
    pub fn max_activity_order(&self) -> u32 {
        self.max_activity_order
    }

    /// Resolves a position to its question.
    ///
    /// `None` when any coordinate is missing, or when the position shape does not
    /// match the entry (a plain key pointing at a round, or the reverse).
    #[must_use]
    pub fn question(&self, position: &QuestionPosition) -> Option<&Question> {
        let entry = self.activity(position.activity())?.entry(position.entry())?;
        match (entry, position.round_question()) {
            (Entry::Question(question), None) => Some(question),
            (Entry::Round(round), Some(order)) => round.question(order),
            _ => None,
        }
    }
}
