mod file_storage;

pub use file_storage::{FileStorage, Result, SeedReport, StorageError};
pub(crate) use file_storage::{read_json_list, write_json};
