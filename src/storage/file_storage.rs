use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::learners::LearnerStorage;
use crate::scenes::{defaults::default_scenes, SceneStorage};
use crate::vocabulary::{sample_data::sample_vocabulary, VocabularyStorage};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Vocabulary entry not found: {0}")]
    VocabularyNotFound(Uuid),

    #[error("Scene not found: {0}")]
    SceneNotFound(Uuid),

    #[error("Learner not found: {0}")]
    LearnerNotFound(Uuid),

    #[error(
        "Several learners are named '{name}', use an id instead: {}",
        .ids.iter().map(Uuid::to_string).collect::<Vec<_>>().join(", ")
    )]
    AmbiguousLearnerName { name: String, ids: Vec<Uuid> },

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// What `seed_if_empty` inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub vocabulary_added: usize,
    pub scenes_added: usize,
}

/// Root of the on-disk data directory
///
/// ```text
/// {data_dir}/
/// ├── config.toml
/// ├── vocabulary.json      # Array of all vocabulary entries
/// ├── scenes.json          # Array of all scenes
/// └── learners/
///     └── {learner-id}.json  # Learner with embedded progress records
/// ```
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("vocab-quest"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Initialize storage directories
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        fs::create_dir_all(self.learners_dir())?;
        Ok(())
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn learners_dir(&self) -> PathBuf {
        self.base_path.join("learners")
    }

    pub fn vocabulary(&self) -> VocabularyStorage {
        VocabularyStorage::new(self.base_path.join("vocabulary.json"))
    }

    pub fn scenes(&self) -> SceneStorage {
        SceneStorage::new(self.base_path.join("scenes.json"))
    }

    pub fn learners(&self) -> LearnerStorage {
        LearnerStorage::new(self.learners_dir())
    }

    /// Insert the bundled vocabulary and default scenes when the store is empty
    ///
    /// Scenes are linked to vocabulary by category, so vocabulary goes first.
    pub fn seed_if_empty(&self) -> Result<SeedReport> {
        self.init()?;
        let mut report = SeedReport::default();

        let vocabulary = self.vocabulary();
        if vocabulary.fetch_all()?.is_empty() {
            let entries = sample_vocabulary();
            report.vocabulary_added = entries.len();
            vocabulary.save_all(&entries)?;
            log::info!("Seeded {} vocabulary entries", entries.len());
        }

        let scenes = self.scenes();
        if scenes.fetch_all()?.is_empty() {
            let mut ids_by_category: HashMap<String, Vec<Uuid>> = HashMap::new();
            for entry in vocabulary.fetch_all()? {
                ids_by_category
                    .entry(entry.category.clone())
                    .or_default()
                    .push(entry.id);
            }

            let defaults = default_scenes(&ids_by_category);
            report.scenes_added = defaults.len();
            scenes.save_all(&defaults)?;
            log::info!("Seeded {} scenes", defaults.len());
        } else {
            log::debug!("Scenes already present, skipping seed");
        }

        Ok(report)
    }
}

/// Read a JSON array file, treating a missing file as empty
pub(crate) fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let items: Vec<T> = serde_json::from_str(&content)?;
    Ok(items)
}

pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
