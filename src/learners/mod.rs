//! Learners and their per-word progress

mod models;
mod progress;
mod storage;

pub use models::{Learner, DEFAULT_AVATAR, POINTS_PER_LEVEL};
pub use progress::{LearningProgress, MASTERY_ACCURACY_THRESHOLD, MAX_MASTERY_LEVEL};
pub use storage::LearnerStorage;
