use serde::Serialize;

/// Correctness of one answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub order: u32,
    pub was_correct: bool,
}

/// Answered questions of one round, in round order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub order: u32,
    pub results: Vec<QuestionResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryResult {
    Question(QuestionResult),
    Round(RoundResult),
}

impl EntryResult {
    #[must_use]
    pub fn order(&self) -> u32 {
        match self {
            EntryResult::Question(result) => result.order,
            EntryResult::Round(round) => round.order,
        }
    }

    /// Question-level results under this entry (one for a plain question).
    #[must_use]
    pub fn question_results(&self) -> &[QuestionResult] {
        match self {
            EntryResult::Question(result) => std::slice::from_ref(result),
            EntryResult::Round(round) => &round.results,
        }
    }
}

/// Results of an activity in tree order.
///
/// Only answered questions appear, so a partially answered activity yields a
/// partial list. Rounds are always listed, possibly with no results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivityResults {
    entries: Vec<EntryResult>,
}

impl ActivityResults {
    #[must_use]
    pub fn new(entries: Vec<EntryResult>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[EntryResult] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn question_results(&self) -> impl Iterator<Item = &QuestionResult> {
        self.entries.iter().flat_map(EntryResult::question_results)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.question_results().count()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.question_results().filter(|r| r.was_correct).count()
    }
}
