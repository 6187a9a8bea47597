//! Study sessions over a scene's vocabulary

mod session;

pub use session::{AnswerOutcome, LearningSession, QuizRound};
