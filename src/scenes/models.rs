//! Scene data models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ruby::{self, RubySegment};

/// School-life situation a scene belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SceneCategory {
    MorningAssembly,
    ClassTime,
    LunchTime,
    CleaningTime,
    BreakTime,
    HomeLife,
    Shopping,
    Park,
    Lessons,
}

impl SceneCategory {
    pub fn all() -> &'static [SceneCategory] {
        &[
            SceneCategory::MorningAssembly,
            SceneCategory::ClassTime,
            SceneCategory::LunchTime,
            SceneCategory::CleaningTime,
            SceneCategory::BreakTime,
            SceneCategory::HomeLife,
            SceneCategory::Shopping,
            SceneCategory::Park,
            SceneCategory::Lessons,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SceneCategory::MorningAssembly => "朝の会",
            SceneCategory::ClassTime => "授業時間",
            SceneCategory::LunchTime => "給食時間",
            SceneCategory::CleaningTime => "掃除時間",
            SceneCategory::BreakTime => "休み時間",
            SceneCategory::HomeLife => "家での生活",
            SceneCategory::Shopping => "買い物",
            SceneCategory::Park => "公園・遊び場",
            SceneCategory::Lessons => "習い事",
        }
    }

    /// Display name written in kana only
    pub fn kana_display_name(&self) -> &'static str {
        match self {
            SceneCategory::MorningAssembly => "あさのかい",
            SceneCategory::ClassTime => "じゅぎょうじかん",
            SceneCategory::LunchTime => "きゅうしょくじかん",
            SceneCategory::CleaningTime => "そうじじかん",
            SceneCategory::BreakTime => "やすみじかん",
            SceneCategory::HomeLife => "いえでのせいかつ",
            SceneCategory::Shopping => "かいもの",
            SceneCategory::Park => "こうえん・あそびば",
            SceneCategory::Lessons => "ならいごと",
        }
    }

    /// Category tag carried by the vocabulary entries of this scene
    pub fn vocabulary_category(&self) -> &'static str {
        match self {
            SceneCategory::MorningAssembly => "朝の会・帰りの会",
            SceneCategory::ClassTime => "教室",
            SceneCategory::LunchTime => "給食",
            SceneCategory::CleaningTime => "掃除の時間",
            SceneCategory::BreakTime => "休み時間",
            SceneCategory::HomeLife => "家での生活",
            SceneCategory::Shopping => "買い物",
            SceneCategory::Park => "公園・遊び場",
            SceneCategory::Lessons => "習い事",
        }
    }

    /// Parse the serialized snake_case name
    pub fn from_key(key: &str) -> Option<SceneCategory> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            SceneCategory::MorningAssembly => "morning_assembly",
            SceneCategory::ClassTime => "class_time",
            SceneCategory::LunchTime => "lunch_time",
            SceneCategory::CleaningTime => "cleaning_time",
            SceneCategory::BreakTime => "break_time",
            SceneCategory::HomeLife => "home_life",
            SceneCategory::Shopping => "shopping",
            SceneCategory::Park => "park",
            SceneCategory::Lessons => "lessons",
        }
    }
}

/// A themed group of vocabulary with a short story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDefinition {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    pub ruby_title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    /// Story text in ruby markup
    pub story_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_note: Option<String>,
    /// Display position, ascending
    pub order: i32,
    pub category: SceneCategory,
    #[serde(default)]
    pub vocabulary_ids: Vec<Uuid>,
}

impl SceneDefinition {
    pub fn new(
        title: String,
        ruby_title: String,
        description: String,
        story_content: String,
        order: i32,
        category: SceneCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            title_en: None,
            ruby_title,
            description,
            description_en: None,
            story_content,
            cultural_note: None,
            order,
            category,
            vocabulary_ids: Vec::new(),
        }
    }

    pub fn title_segments(&self) -> Vec<RubySegment> {
        ruby::parse(&self.ruby_title)
    }

    pub fn story_segments(&self) -> Vec<RubySegment> {
        ruby::parse(&self.story_content)
    }

    /// Match a scene by id, title or English title, ignoring case
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if self.id.to_string() == name || self.title == name {
            return true;
        }
        self.title_en
            .as_deref()
            .is_some_and(|en| en.eq_ignore_ascii_case(name))
    }
}
