//! Vocabulary storage, kept in a single `vocabulary.json` array

use std::collections::BTreeMap;
use std::path::PathBuf;

use uuid::Uuid;

use super::models::VocabularyEntry;
use crate::scenes::SceneDefinition;
use crate::storage::{read_json_list, write_json, Result, StorageError};

pub struct VocabularyStorage {
    path: PathBuf,
}

impl VocabularyStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<Vec<VocabularyEntry>> {
        read_json_list(&self.path)
    }

    fn sorted_by_word(mut entries: Vec<VocabularyEntry>) -> Vec<VocabularyEntry> {
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        entries
    }

    /// All entries, sorted by word
    pub fn fetch_all(&self) -> Result<Vec<VocabularyEntry>> {
        Ok(Self::sorted_by_word(self.load()?))
    }

    pub fn fetch_by_id(&self, id: Uuid) -> Result<VocabularyEntry> {
        self.load()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(StorageError::VocabularyNotFound(id))
    }

    /// Entries with the given category tag, sorted by word
    pub fn fetch_by_category(&self, category: &str) -> Result<Vec<VocabularyEntry>> {
        let entries = self
            .load()?
            .into_iter()
            .filter(|e| e.category == category)
            .collect();
        Ok(Self::sorted_by_word(entries))
    }

    /// Entries at the given difficulty, sorted by word
    pub fn fetch_by_difficulty(&self, difficulty: u8) -> Result<Vec<VocabularyEntry>> {
        let entries = self
            .load()?
            .into_iter()
            .filter(|e| e.difficulty == difficulty)
            .collect();
        Ok(Self::sorted_by_word(entries))
    }

    /// Entries linked to a scene, easiest first
    pub fn fetch_by_scene(&self, scene: &SceneDefinition) -> Result<Vec<VocabularyEntry>> {
        let mut entries: Vec<VocabularyEntry> = self
            .load()?
            .into_iter()
            .filter(|e| scene.vocabulary_ids.contains(&e.id))
            .collect();

        // Stable sort keeps word order within a difficulty
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        entries.sort_by_key(|e| e.difficulty);

        log::debug!("Fetched {} entries for scene '{}'", entries.len(), scene.title);
        Ok(entries)
    }

    /// Insert an entry, replacing any entry with the same id
    pub fn save(&self, entry: &VocabularyEntry) -> Result<()> {
        let mut entries = self.load()?;
        match entries.iter().position(|e| e.id == entry.id) {
            Some(pos) => entries[pos] = entry.clone(),
            None => entries.push(entry.clone()),
        }
        write_json(&self.path, &entries)
    }

    /// Replace the whole collection
    pub fn save_all(&self, entries: &[VocabularyEntry]) -> Result<()> {
        write_json(&self.path, entries)
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Err(StorageError::VocabularyNotFound(id));
        }

        write_json(&self.path, &entries)
    }

    /// Number of entries per category tag
    pub fn count_by_category(&self) -> Result<BTreeMap<String, usize>> {
        let mut counts = BTreeMap::new();
        for entry in self.load()? {
            *counts.entry(entry.category).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
