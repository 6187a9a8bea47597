use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use vocab_quest_lib::learners::Learner;
use vocab_quest_lib::scenes::SceneDefinition;
use vocab_quest_lib::{AppConfig, FileStorage, StorageError};

/// Shared application state for CLI commands
pub struct App {
    pub storage: FileStorage,
    pub config: AppConfig,
}

impl App {
    /// Open the data directory, seeding it on first use
    ///
    /// `config.toml` is read from the given or default directory and may
    /// point the data somewhere else.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let config_dir = match data_dir {
            Some(dir) => dir,
            None => FileStorage::default_data_dir().context("Failed to get data directory")?,
        };

        let config = AppConfig::load(&config_dir)
            .with_context(|| format!("Failed to read config in {}", config_dir.display()))?;
        let storage = FileStorage::new(config.resolve_data_dir(&config_dir));

        storage.init().context("Failed to initialize storage")?;
        if config.seed_sample_data {
            storage.seed_if_empty().context("Failed to seed sample data")?;
        }

        Ok(Self { storage, config })
    }

    /// Find a scene by title or id, then by case-insensitive prefix
    pub fn find_scene(&self, name: &str) -> Result<SceneDefinition> {
        let scenes = self.storage.scenes().fetch_all()
            .context("Failed to list scenes")?;

        if let Some(scene) = scenes.iter().find(|s| s.matches_name(name)) {
            return Ok(scene.clone());
        }

        let name_lower = name.to_lowercase();
        let matches: Vec<&SceneDefinition> = scenes.iter()
            .filter(|s| {
                s.title.starts_with(name)
                    || s.title_en.as_deref().is_some_and(|en| en.to_lowercase().starts_with(&name_lower))
            })
            .collect();

        match matches.len() {
            0 => bail!("No scene matching '{}'. Available scenes:\n{}", name,
                scenes.iter().map(|s| format!("  - {}", s.title)).collect::<Vec<_>>().join("\n")),
            1 => Ok(matches[0].clone()),
            _ => bail!("Ambiguous scene name '{}'. Matches:\n{}", name,
                matches.iter().map(|s| format!("  - {}", s.title)).collect::<Vec<_>>().join("\n")),
        }
    }

    /// Find a learner by name or id; a shared name must be given as an id
    pub fn find_learner(&self, name: &str) -> Result<Learner> {
        let found = match self.storage.learners().find_by_name(name) {
            Err(e @ StorageError::AmbiguousLearnerName { .. }) => bail!("{}", e),
            other => other.context("Failed to list learners")?,
        };
        found.with_context(|| format!("No learner named '{}'", name))
    }

    /// The named learner, or the most recently created one
    pub fn learner_or_current(&self, name: Option<&str>) -> Result<Option<Learner>> {
        match name {
            Some(name) => self.find_learner(name).map(Some),
            None => self.storage.learners().current().context("Failed to load learner"),
        }
    }
}
