mod progress;
mod service;
mod view;
mod workflow;

// Public API of the play subsystem.
pub use crate::error::PlayError;
pub use progress::ActivityProgress;
pub use service::{AnswerOutcome, QuizPlayService};
pub use view::{
    ActivityListItem, ActivityReport, QuestionView, QuizOverview, ReportLine, RoundHeading,
};
pub use workflow::QuizWorkflow;
