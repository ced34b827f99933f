#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod model;
pub mod navigation;
pub mod results;
pub mod session;

pub use document::{ActivityDocument, EntryDocument, QuestionDocument, QuizDocument};
pub use error::{DocumentError, EntityKind, OrderError};
pub use model::{Activity, Entry, Question, QuestionPosition, Quiz, Round};
pub use navigation::Cursor;
pub use results::{ActivityResults, EntryResult, QuestionResult, RoundResult};
pub use session::QuizSession;
