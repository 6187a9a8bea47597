//! Learning scenes: school-life situations that group vocabulary

pub mod defaults;
mod models;
mod storage;

pub use models::{SceneCategory, SceneDefinition};
pub use storage::SceneStorage;
