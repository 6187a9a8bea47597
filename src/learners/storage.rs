//! Learner storage, one `learners/{id}.json` file per learner
//!
//! Progress records live inside the learner file, so deleting the
//! learner removes them too.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::models::Learner;
use super::progress::LearningProgress;
use crate::storage::{write_json, Result, StorageError};

pub struct LearnerStorage {
    dir: PathBuf,
}

impl LearnerStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn learner_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    fn load_from_path(path: &Path) -> Result<Learner> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// All learners, oldest first; unreadable files are skipped
    pub fn fetch_all(&self) -> Result<Vec<Learner>> {
        let mut learners = Vec::new();
        if !self.dir.exists() {
            return Ok(learners);
        }

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                match Self::load_from_path(&path) {
                    Ok(learner) => learners.push(learner),
                    Err(e) => log::warn!("Skipping learner file {:?}: {}", path, e),
                }
            }
        }

        learners.sort_by_key(|l| l.created_at);
        Ok(learners)
    }

    pub fn fetch_by_id(&self, id: Uuid) -> Result<Learner> {
        let path = self.learner_path(id);
        if !path.exists() {
            return Err(StorageError::LearnerNotFound(id));
        }
        Self::load_from_path(&path)
    }

    /// Learner matched by id or exact name
    ///
    /// A name shared by several learners is an error listing their ids.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Learner>> {
        if let Ok(id) = Uuid::parse_str(name) {
            if let Ok(learner) = self.fetch_by_id(id) {
                return Ok(Some(learner));
            }
        }

        let mut matches: Vec<Learner> = self
            .fetch_all()?
            .into_iter()
            .filter(|l| l.name == name)
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            _ => Err(StorageError::AmbiguousLearnerName {
                name: name.to_string(),
                ids: matches.iter().map(|l| l.id).collect(),
            }),
        }
    }

    /// The most recently created learner
    pub fn current(&self) -> Result<Option<Learner>> {
        Ok(self.fetch_all()?.pop())
    }

    pub fn create(&self, name: String) -> Result<Learner> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(StorageError::InvalidOperation(
                "learner name must not be empty".to_string(),
            ));
        }

        let learner = Learner::new(name);
        self.save(&learner)?;
        log::info!("Created learner '{}' ({})", learner.name, learner.id);
        Ok(learner)
    }

    pub fn save(&self, learner: &Learner) -> Result<()> {
        write_json(&self.learner_path(learner.id), learner)
    }

    /// Delete a learner together with all of its progress
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let path = self.learner_path(id);
        if !path.exists() {
            return Err(StorageError::LearnerNotFound(id));
        }
        fs::remove_file(path)?;
        log::info!("Deleted learner {}", id);
        Ok(())
    }

    /// Replace a stored progress record, adding it if missing
    pub fn update_progress(&self, learner_id: Uuid, progress: &LearningProgress) -> Result<()> {
        let mut learner = self.fetch_by_id(learner_id)?;
        *learner.progress_entry(progress.vocabulary_id) = progress.clone();
        self.save(&learner)
    }

    /// Record an answer for a learner and persist the result
    ///
    /// Returns the learner as saved, with the word's updated progress.
    pub fn record_answer(
        &self,
        learner_id: Uuid,
        vocabulary_id: Uuid,
        correct: bool,
    ) -> Result<Learner> {
        let mut learner = self.fetch_by_id(learner_id)?;
        let progress = learner.record_answer(vocabulary_id, correct);
        self.save(&learner)?;
        log::debug!(
            "Recorded {} answer for {} (mastery {})",
            if correct { "correct" } else { "incorrect" },
            vocabulary_id,
            progress.mastery_level
        );
        Ok(learner)
    }
}
