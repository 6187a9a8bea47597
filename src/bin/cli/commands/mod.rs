pub mod init;
pub mod learner;
pub mod progress;
pub mod ruby;
pub mod scenes;
pub mod study;
pub mod words;
