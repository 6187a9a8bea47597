//! Data models for vocabulary entries

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wana_kana::ConvertJapanese;

use crate::ruby::{self, RubySegment};

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

/// A single word to study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub id: Uuid,
    /// Written form, usually with kanji
    pub word: String,
    /// Reading in kana
    pub reading: String,
    /// Display text in ruby markup, e.g. `｜黒板《こくばん》`
    pub ruby_text: String,
    /// Meaning explained in simple Japanese
    pub meaning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_en: Option<String>,
    /// Category tag shared with the scene the word belongs to
    pub category: String,
    /// 1 (easiest) to 10
    pub difficulty: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jlpt_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romaji: Option<String>,
    #[serde(default)]
    pub example_sentences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl VocabularyEntry {
    pub fn new(
        word: String,
        reading: String,
        ruby_text: String,
        meaning: String,
        category: String,
        difficulty: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            word,
            reading,
            ruby_text,
            meaning,
            meaning_en: None,
            category,
            difficulty: difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY),
            jlpt_level: None,
            romaji: None,
            example_sentences: Vec::new(),
            image_url: None,
            audio_url: None,
        }
    }

    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.example_sentences = examples;
        self
    }

    pub fn with_meaning_en(mut self, meaning_en: String) -> Self {
        self.meaning_en = Some(meaning_en);
        self
    }

    /// Display segments for the ruby text
    pub fn segments(&self) -> Vec<RubySegment> {
        ruby::parse(&self.ruby_text)
    }

    /// Stored romaji, or one derived from the reading
    pub fn romaji(&self) -> String {
        match &self.romaji {
            Some(romaji) => romaji.clone(),
            None => self.reading.to_romaji(),
        }
    }

    /// Whether a typed answer names this entry by word, reading or meaning
    ///
    /// Surrounding whitespace and letter case are ignored. The reading also
    /// matches when typed in katakana or romaji.
    pub fn matches_answer(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        if answer.is_empty() {
            return false;
        }

        let exact = [&self.word, &self.reading, &self.meaning]
            .iter()
            .any(|candidate| candidate.to_lowercase() == answer);

        exact || reading_key(&answer) == reading_key(&self.reading)
    }
}

/// Script-independent spelling of a reading
///
/// Going through katakana first makes `ー` expand the same way for
/// hiragana, katakana and romaji input: `のーと`, `ノート` and `nooto` all
/// give `nooto`.
fn reading_key(text: &str) -> String {
    text.to_katakana().to_romaji()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk() -> VocabularyEntry {
        VocabularyEntry::new(
            "机".to_string(),
            "つくえ".to_string(),
            "｜机《つくえ》".to_string(),
            "勉強するときに使う台".to_string(),
            "教室".to_string(),
            1,
        )
        .with_meaning_en("Desk".to_string())
    }

    #[test]
    fn test_matches_answer() {
        let entry = desk();
        assert!(entry.matches_answer("机"));
        assert!(entry.matches_answer("  つくえ\n"));
        assert!(entry.matches_answer("勉強するときに使う台"));
        assert!(!entry.matches_answer("いす"));
        assert!(!entry.matches_answer("   "));
    }

    #[test]
    fn test_matches_reading_in_other_scripts() {
        let entry = desk();
        assert!(entry.matches_answer("ツクエ"));
        assert!(entry.matches_answer("Tsukue"));
        assert!(!entry.matches_answer("isu"));
    }

    #[test]
    fn test_matches_long_vowel_reading() {
        let notebook = VocabularyEntry::new(
            "ノート".to_string(),
            "ノート".to_string(),
            "ノート".to_string(),
            "字を書くための本".to_string(),
            "教室".to_string(),
            1,
        );
        assert!(notebook.matches_answer("ノート"));
        assert!(notebook.matches_answer("のーと"));
        assert!(notebook.matches_answer("nooto"));
        assert!(notebook.matches_answer(&notebook.romaji()));
        assert!(!notebook.matches_answer("のと"));
    }

    #[test]
    fn test_romaji() {
        let mut entry = desk();
        assert_eq!(entry.romaji(), "tsukue");
        entry.romaji = Some("tsukue (desk)".to_string());
        assert_eq!(entry.romaji(), "tsukue (desk)");
    }

    #[test]
    fn test_difficulty_is_clamped() {
        let mut entry = desk();
        assert_eq!(entry.difficulty, 1);

        entry = VocabularyEntry::new(
            "献立".to_string(),
            "こんだて".to_string(),
            "｜献立《こんだて》".to_string(),
            "食事のメニュー".to_string(),
            "給食".to_string(),
            42,
        );
        assert_eq!(entry.difficulty, MAX_DIFFICULTY);
    }

    #[test]
    fn test_segments() {
        let segments = desk().segments();
        assert_eq!(segments, vec![RubySegment::annotated("机", "つくえ")]);
    }

    #[test]
    fn test_serde_skips_missing_optionals() {
        let json = serde_json::to_value(desk()).unwrap();
        assert_eq!(json["rubyText"], "｜机《つくえ》");
        assert_eq!(json["meaningEn"], "Desk");
        assert!(json.get("romaji").is_none());
    }
}
