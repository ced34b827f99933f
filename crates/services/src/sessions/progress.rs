use serde::Serialize;

/// Aggregated answer progress of one activity, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl ActivityProgress {
    #[must_use]
    pub fn new(total: usize, answered: usize, is_complete: bool) -> Self {
        Self {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete,
        }
    }
}
