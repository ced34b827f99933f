use std::sync::Arc;

use quiz_core::Quiz;

use crate::error::SourceError;
use crate::loading::{LoadState, LoadTicket, QuizLoader};
use crate::source::QuizSource;
use super::service::QuizPlayService;

/// Orchestrates loading a quiz and the play service bound to it.
///
/// Beginning a load drops the current play service; only the newest successful
/// load builds a fresh one. Answers never carry over between loads.
#[derive(Debug, Default)]
pub struct QuizWorkflow {
    loader: QuizLoader,
    play: Option<QuizPlayService>,
}

impl QuizWorkflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> &LoadState {
        self.loader.state()
    }

    #[must_use]
    pub fn play(&self) -> Option<&QuizPlayService> {
        self.play.as_ref()
    }

    pub fn play_mut(&mut self) -> Option<&mut QuizPlayService> {
        self.play.as_mut()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.play = None;
        self.loader.begin()
    }

    /// Apply a load result; returns false when `ticket` was superseded.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<Quiz, SourceError>) -> bool {
        if !self.loader.complete(ticket, result) {
            return false;
        }
        self.play = self
            .loader
            .state()
            .quiz()
            .map(|quiz| QuizPlayService::new(Arc::clone(quiz)));
        true
    }

    /// Begin, fetch and complete one load from `source`.
    pub async fn load(&mut self, source: &dyn QuizSource) -> &LoadState {
        let ticket = self.begin_load();
        let result = QuizLoader::fetch(source).await;
        self.complete_load(ticket, result);
        self.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    const TINY: &str = r#"{
        "name": "Tiny",
        "heading": "",
        "activities": [
            { "activity_name": "Only", "order": 1, "questions": [
                { "order": 1, "stimulus": "x", "is_correct": true }
            ] }
        ]
    }"#;

    #[tokio::test]
    async fn load_builds_play_service() {
        let mut workflow = QuizWorkflow::new();
        assert_eq!(workflow.status(), &LoadState::Idle);
        assert!(workflow.play().is_none());

        let state = workflow.load(&StaticSource::sample()).await;
        assert!(state.quiz().is_some());

        let play = workflow.play().unwrap();
        assert_eq!(play.quiz().name(), "Error Find");
        assert!(play.cursor().is_unset());
    }

    #[tokio::test]
    async fn reload_discards_answers() {
        let mut workflow = QuizWorkflow::new();
        workflow.load(&StaticSource::new("tiny", TINY)).await;

        let play = workflow.play_mut().unwrap();
        play.set_activity(1).unwrap();
        play.answer_current(true).unwrap();
        assert_eq!(play.session().answer_count(), 1);

        workflow.load(&StaticSource::new("tiny", TINY)).await;
        assert_eq!(workflow.play().unwrap().session().answer_count(), 0);
    }

    #[tokio::test]
    async fn failed_load_leaves_no_play_service() {
        let mut workflow = QuizWorkflow::new();
        workflow.load(&StaticSource::sample()).await;

        let state = workflow.load(&StaticSource::new("broken", "{")).await;
        assert!(state.failure().is_some());
        assert!(workflow.play().is_none());
    }

    #[tokio::test]
    async fn stale_completion_does_not_build_play_service() {
        let mut workflow = QuizWorkflow::new();
        let first = workflow.begin_load();
        let second = workflow.begin_load();

        let stale = QuizLoader::fetch(&StaticSource::sample()).await;
        assert!(!workflow.complete_load(first, stale));
        assert!(workflow.status().is_loading());
        assert!(workflow.play().is_none());

        let fresh = QuizLoader::fetch(&StaticSource::new("tiny", TINY)).await;
        assert!(workflow.complete_load(second, fresh));
        assert_eq!(workflow.play().unwrap().quiz().name(), "Tiny");
    }
}
