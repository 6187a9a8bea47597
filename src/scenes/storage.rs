//! Scene storage, kept in a single `scenes.json` array

use std::path::PathBuf;

use uuid::Uuid;

use super::models::{SceneCategory, SceneDefinition};
use crate::storage::{read_json_list, write_json, Result, StorageError};

pub struct SceneStorage {
    path: PathBuf,
}

impl SceneStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<Vec<SceneDefinition>> {
        read_json_list(&self.path)
    }

    /// All scenes in display order
    pub fn fetch_all(&self) -> Result<Vec<SceneDefinition>> {
        let mut scenes = self.load()?;
        scenes.sort_by_key(|s| s.order);
        Ok(scenes)
    }

    pub fn fetch_by_id(&self, id: Uuid) -> Result<SceneDefinition> {
        self.load()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(StorageError::SceneNotFound(id))
    }

    pub fn fetch_by_category(&self, category: SceneCategory) -> Result<Vec<SceneDefinition>> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .filter(|s| s.category == category)
            .collect())
    }

    /// First scene matching an id, title or English title
    pub fn find_by_name(&self, name: &str) -> Result<Option<SceneDefinition>> {
        Ok(self.fetch_all()?.into_iter().find(|s| s.matches_name(name)))
    }

    pub fn save(&self, scene: &SceneDefinition) -> Result<()> {
        let mut scenes = self.load()?;
        match scenes.iter().position(|s| s.id == scene.id) {
            Some(pos) => scenes[pos] = scene.clone(),
            None => scenes.push(scene.clone()),
        }
        write_json(&self.path, &scenes)
    }

    pub fn save_all(&self, scenes: &[SceneDefinition]) -> Result<()> {
        write_json(&self.path, scenes)
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut scenes = self.load()?;
        let before = scenes.len();
        scenes.retain(|s| s.id != id);

        if scenes.len() == before {
            return Err(StorageError::SceneNotFound(id));
        }

        write_json(&self.path, &scenes)
    }
}
