//! State holders between the repositories and the front end
//!
//! Each store keeps the records of its last fetch plus the message of the
//! last failure. A failed fetch never propagates: the records are reset and
//! `last_error` is set instead, so a caller can always render something.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::learners::{Learner, LearnerStorage, LearningProgress};
use crate::scenes::{defaults::default_scenes, SceneCategory, SceneDefinition, SceneStorage};
use crate::storage::Result;
use crate::vocabulary::{VocabularyEntry, VocabularyStorage};

/// Store `result` into `records`, or clear them and remember the error
fn settle<T>(records: &mut Vec<T>, last_error: &mut Option<String>, result: Result<Vec<T>>) {
    match result {
        Ok(fetched) => *records = fetched,
        Err(e) => {
            log::warn!("Fetch failed: {}", e);
            *last_error = Some(e.to_string());
            records.clear();
        }
    }
}

pub struct VocabularyStore {
    storage: VocabularyStorage,
    fallback_sample_size: usize,
    entries: Vec<VocabularyEntry>,
    last_error: Option<String>,
}

impl VocabularyStore {
    pub fn new(storage: VocabularyStorage, fallback_sample_size: usize) -> Self {
        Self {
            storage,
            fallback_sample_size,
            entries: Vec::new(),
            last_error: None,
        }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn fetch_all(&mut self) {
        self.last_error = None;
        let result = self.storage.fetch_all();
        settle(&mut self.entries, &mut self.last_error, result);
    }

    pub fn fetch_by_category(&mut self, category: &str) {
        self.last_error = None;
        let result = self.storage.fetch_by_category(category);
        settle(&mut self.entries, &mut self.last_error, result);
    }

    pub fn fetch_for_scene(&mut self, scene: &SceneDefinition) {
        self.fetch_for_scene_with(scene, &mut rand::thread_rng());
    }

    /// Words of a scene, falling back to its category and then to a random sample
    pub fn fetch_for_scene_with<R: Rng + ?Sized>(&mut self, scene: &SceneDefinition, rng: &mut R) {
        self.last_error = None;
        let result = self.scene_entries(scene, rng);
        settle(&mut self.entries, &mut self.last_error, result);
    }

    fn scene_entries<R: Rng + ?Sized>(
        &self,
        scene: &SceneDefinition,
        rng: &mut R,
    ) -> Result<Vec<VocabularyEntry>> {
        let linked = self.storage.fetch_by_scene(scene)?;
        if !linked.is_empty() {
            return Ok(linked);
        }

        let by_category = self
            .storage
            .fetch_by_category(scene.category.vocabulary_category())?;
        if !by_category.is_empty() {
            log::debug!("Scene '{}' has no linked words, using its category", scene.title);
            return Ok(by_category);
        }

        let mut all = self.storage.fetch_all()?;
        all.shuffle(rng);
        all.truncate(self.fallback_sample_size);
        log::debug!(
            "Scene '{}' has no category words, sampled {}",
            scene.title,
            all.len()
        );
        Ok(all)
    }
}

pub struct SceneStore {
    storage: SceneStorage,
    scenes: Vec<SceneDefinition>,
    last_error: Option<String>,
}

impl SceneStore {
    pub fn new(storage: SceneStorage) -> Self {
        Self {
            storage,
            scenes: Vec::new(),
            last_error: None,
        }
    }

    pub fn scenes(&self) -> &[SceneDefinition] {
        &self.scenes
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// All scenes; the built-in scenes stand in when none are stored or the read fails
    pub fn fetch_all(&mut self) {
        self.last_error = None;
        match self.storage.fetch_all() {
            Ok(scenes) if !scenes.is_empty() => self.scenes = scenes,
            Ok(_) => {
                log::debug!("No stored scenes, showing built-in scenes");
                self.scenes = default_scenes(&HashMap::new());
            }
            Err(e) => {
                log::warn!("Failed to load scenes: {}", e);
                self.last_error = Some(e.to_string());
                self.scenes = default_scenes(&HashMap::new());
            }
        }
    }

    pub fn fetch_by_category(&mut self, category: SceneCategory) {
        self.last_error = None;
        let result = self.storage.fetch_by_category(category);
        settle(&mut self.scenes, &mut self.last_error, result);
    }

    pub fn find(&self, name: &str) -> Option<&SceneDefinition> {
        self.scenes.iter().find(|s| s.matches_name(name))
    }
}

pub struct LearnerStore {
    storage: LearnerStorage,
    current: Option<Learner>,
    last_error: Option<String>,
}

impl LearnerStore {
    pub fn new(storage: LearnerStorage) -> Self {
        Self {
            storage,
            current: None,
            last_error: None,
        }
    }

    pub fn current(&self) -> Option<&Learner> {
        self.current.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn fail(&mut self, message: String) {
        log::warn!("{}", message);
        self.last_error = Some(message);
    }

    /// Load the most recently created learner
    pub fn fetch_current(&mut self) {
        self.last_error = None;
        match self.storage.current() {
            Ok(learner) => self.current = learner,
            Err(e) => {
                self.current = None;
                self.fail(e.to_string());
            }
        }
    }

    /// Make the learner with this name or id current
    pub fn select(&mut self, name: &str) -> bool {
        self.last_error = None;
        match self.storage.find_by_name(name) {
            Ok(Some(learner)) => {
                self.current = Some(learner);
                true
            }
            Ok(None) => {
                self.fail(format!("No learner named '{}'", name));
                false
            }
            Err(e) => {
                self.fail(e.to_string());
                false
            }
        }
    }

    /// Create a learner and make it current
    pub fn create(&mut self, name: &str) {
        self.last_error = None;
        match self.storage.create(name.to_string()) {
            Ok(learner) => self.current = Some(learner),
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Record an answer for the current learner
    ///
    /// Does nothing without a current learner.
    pub fn record_answer(&mut self, vocabulary_id: Uuid, correct: bool) -> Option<LearningProgress> {
        let learner_id = self.current.as_ref()?.id;
        self.last_error = None;

        match self.storage.record_answer(learner_id, vocabulary_id, correct) {
            Ok(learner) => {
                let progress = learner.progress_for(vocabulary_id).cloned();
                self.current = Some(learner);
                progress
            }
            Err(e) => {
                self.fail(e.to_string());
                None
            }
        }
    }
}
