use std::fmt;
use std::sync::Arc;

use quiz_core::Quiz;

use crate::error::SourceError;
use crate::source::QuizSource;

/// Why the latest load did not produce a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    message: String,
}

impl LoadFailure {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&SourceError> for LoadFailure {
    fn from(err: &SourceError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loading failed: {}", self.message)
    }
}

impl std::error::Error for LoadFailure {}

/// Lifecycle of the quiz document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(Arc<Quiz>),
    Failed(LoadFailure),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Arc<Quiz>> {
        match self {
            LoadState::Ready(quiz) => Some(quiz),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Identifies one load; only the newest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Tracks the load lifecycle with last-load-wins semantics.
///
/// `begin` and `complete` are split so a caller can keep several fetches in
/// flight; results of any load superseded by a later `begin` are dropped.
#[derive(Debug, Default)]
pub struct QuizLoader {
    generation: u64,
    state: LoadState,
}

impl QuizLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Start a load, superseding any load still outstanding.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        tracing::debug!(generation = self.generation, "quiz load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a load result. Returns false, leaving state untouched, when the
    /// ticket has been superseded.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<Quiz, SourceError>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded quiz load"
            );
            return false;
        }

        self.state = match result {
            Ok(quiz) => {
                tracing::info!(
                    name = quiz.name(),
                    activities = quiz.activities().len(),
                    "quiz loaded"
                );
                LoadState::Ready(Arc::new(quiz))
            }
            Err(err) => {
                tracing::warn!(error = %err, "quiz load failed");
                LoadState::Failed(LoadFailure::from(&err))
            }
        };
        true
    }

    /// Fetch a document from `source` and build the quiz tree.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when fetching fails or the document is malformed.
    pub async fn fetch(source: &dyn QuizSource) -> Result<Quiz, SourceError> {
        tracing::debug!(source = %source.describe(), "fetching quiz document");
        let document = source.fetch().await?;
        Ok(Quiz::try_from(document)?)
    }
}
