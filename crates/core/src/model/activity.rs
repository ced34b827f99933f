use crate::error::{EntityKind, OrderError};
use crate::model::order::validate_orders;
use crate::model::{Question, Round};

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

/// A direct child of an activity: either a plain question or a round.
///
/// The variant is fixed when the tree is built; consumers match on it instead of
/// re-inspecting document shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Question(Question),
    Round(Round),
}

impl Entry {
    #[must_use]
    pub fn order(&self) -> u32 {
        match self {
            Entry::Question(question) => question.order(),
            Entry::Round(round) => round.order(),
        }
    }

    #[must_use]
    pub fn is_round(&self) -> bool {
        matches!(self, Entry::Round(_))
    }

    #[must_use]
    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Entry::Question(question) => Some(question),
            Entry::Round(_) => None,
        }
    }

    #[must_use]
    pub fn as_round(&self) -> Option<&Round> {
        match self {
            Entry::Round(round) => Some(round),
            Entry::Question(_) => None,
        }
    }

    /// Number of answerable questions under this entry.
    #[must_use]
    pub fn question_count(&self) -> usize {
        match self {
            Entry::Question(_) => 1,
            Entry::Round(round) => round.questions().len(),
        }
    }
}

//
// ─── ACTIVITY ──────────────────────────────────────────────────────────────────
//

/// A named section of the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    order: u32,
    name: String,
    entries: Vec<Entry>,
    max_entry_order: u32,
}

impl Activity {
    /// Creates an activity, keeping `entries` in source order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError` if the activity order is 0 or two entries share an order.
    pub fn new(
        order: u32,
        name: impl Into<String>,
        entries: Vec<Entry>,
    ) -> Result<Self, OrderError> {
        if order == 0 {
            return Err(OrderError::Zero {
                kind: EntityKind::Activity,
            });
        }
        let max_entry_order = validate_orders(entries.iter().map(Entry::order), EntityKind::Entry)?;

        Ok(Self {
            order,
            name: name.into(),
            entries,
            max_entry_order,
        })
    }

    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, order: u32) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.order() == order)
    }

    /// Highest entry order in the activity, 0 when empty.
    #[must_use]
    pub fn max_entry_order(&self) -> u32 {
        self.max_entry_order
    }

    /// Total answerable questions, counting round members individually.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.entries.iter().map(Entry::question_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(order: u32) -> Entry {
        Entry::Question(Question::new(EntityKind::Entry, order, "stimulus", true).unwrap())
    }

    fn round(order: u32, questions: &[u32]) -> Entry {
        let questions = questions
            .iter()
            .map(|o| Question::new(EntityKind::RoundQuestion, *o, "in round", false).unwrap())
            .collect();
        Entry::Round(Round::new(order, format!("Round {order}"), questions).unwrap())
    }

    #[test]
    fn entry_lookup_and_counts() {
        let activity = Activity::new(1, "One", vec![round(3, &[1, 2]), question(1)]).unwrap();

        assert_eq!(activity.max_entry_order(), 3);
        assert_eq!(activity.question_count(), 3);
        assert!(activity.entry(3).is_some_and(Entry::is_round));
        assert!(activity.entry(1).and_then(Entry::as_question).is_some());
        assert!(activity.entry(2).is_none());
    }

    #[test]
    fn empty_activity() {
        let activity = Activity::new(4, "Empty", Vec::new()).unwrap();
        assert_eq!(activity.max_entry_order(), 0);
        assert_eq!(activity.question_count(), 0);
    }

    #[test]
    fn question_and_round_share_one_order_space() {
        let err = Activity::new(1, "Clash", vec![question(2), round(2, &[1])]).unwrap_err();
        assert_eq!(
            err,
            OrderError::Duplicate {
                kind: EntityKind::Entry,
                order: 2
            }
        );
    }
}
