#![forbid(unsafe_code)]

pub mod error;
pub mod loading;
pub mod sample;
pub mod sessions;
pub mod source;

pub use error::{PlayError, SourceError};
pub use loading::{LoadFailure, LoadState, LoadTicket, QuizLoader};
pub use sample::SAMPLE_QUIZ_JSON;
pub use source::{FileSource, HttpSource, QuizSource, SourceConfig, StaticSource};

pub use sessions::{
    ActivityListItem, ActivityProgress, ActivityReport, AnswerOutcome, QuestionView,
    QuizOverview, QuizPlayService, QuizWorkflow, ReportLine, RoundHeading,
};
