//! Vocabulary entries and their storage
//!
//! Entries are reference data: they are seeded once from the bundled
//! sample set and read by scenes, quizzes and learning sessions.

mod models;
pub mod sample_data;
mod storage;

pub use models::*;
pub use storage::VocabularyStorage;
