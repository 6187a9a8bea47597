pub mod config;
pub mod learners;
pub mod quiz;
pub mod ruby;
pub mod scenes;
pub mod storage;
pub mod stores;
pub mod study;
pub mod vocabulary;

pub use config::{AppConfig, ConfigError};
pub use storage::{FileStorage, StorageError};
