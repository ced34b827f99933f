mod activity;
mod order;
mod position;
mod question;
mod quiz;
mod round;

pub use activity::{Activity, Entry};
pub use position::QuestionPosition;
pub use question::Question;
pub use quiz::Quiz;
pub use round::Round;
