use std::fmt;

use serde::Serialize;

/// Composite key an answer is stored under.
///
/// Built from cursor coordinates alone, so lookups never need object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionPosition {
    /// A question directly under an activity.
    Entry { activity: u32, entry: u32 },
    /// A question inside the round whose entry order is `round`.
    InRound {
        activity: u32,
        round: u32,
        question: u32,
    },
}

impl QuestionPosition {
    /// `round_question` is `Some` exactly when `entry` names a round.
    #[must_use]
    pub fn new(activity: u32, entry: u32, round_question: Option<u32>) -> Self {
        match round_question {
            Some(question) => Self::InRound {
                activity,
                round: entry,
                question,
            },
            None => Self::Entry { activity, entry },
        }
    }

    #[must_use]
    pub fn activity(&self) -> u32 {
        match self {
            Self::Entry { activity, .. } | Self::InRound { activity, .. } => *activity,
        }
    }

    /// Order of the activity entry: the question itself, or its round.
    #[must_use]
    pub fn entry(&self) -> u32 {
        match self {
            Self::Entry { entry, .. } => *entry,
            Self::InRound { round, .. } => *round,
        }
    }

    #[must_use]
    pub fn round_question(&self) -> Option<u32> {
        match self {
            Self::Entry { .. } => None,
            Self::InRound { question, .. } => Some(*question),
        }
    }
}

impl fmt::Display for QuestionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry { activity, entry } => write!(f, "{activity}-{entry}"),
            Self::InRound {
                activity,
                round,
                question,
            } => write!(f, "{activity}-{round}-{question}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_question_selects_variant() {
        let plain = QuestionPosition::new(1, 2, None);
        let nested = QuestionPosition::new(1, 2, Some(3));

        assert_eq!(plain, QuestionPosition::Entry { activity: 1, entry: 2 });
        assert_eq!(nested.entry(), 2);
        assert_eq!(nested.round_question(), Some(3));
        assert_ne!(plain, nested);
    }

    #[test]
    fn display_joins_coordinates() {
        assert_eq!(QuestionPosition::new(2, 1, None).to_string(), "2-1");
        assert_eq!(QuestionPosition::new(2, 1, Some(4)).to_string(), "2-1-4");
    }
}
