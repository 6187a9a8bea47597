use anyhow::{Context, Result};

use vocab_quest_lib::vocabulary::VocabularyEntry;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub struct WordFilter<'a> {
    pub scene: Option<&'a str>,
    pub category: Option<&'a str>,
    pub difficulty: Option<u8>,
}

pub fn run(app: &App, filter: WordFilter, format: &OutputFormat, use_color: bool) -> Result<()> {
    let vocabulary = app.storage.vocabulary();

    let mut words: Vec<VocabularyEntry> = if let Some(name) = filter.scene {
        let scene = app.find_scene(name)?;
        vocabulary.fetch_by_scene(&scene).context("Failed to list scene words")?
    } else if let Some(category) = filter.category {
        vocabulary.fetch_by_category(category).context("Failed to list words")?
    } else {
        vocabulary.fetch_all().context("Failed to list words")?
    };

    if let Some(category) = filter.category {
        words.retain(|w| w.category == category);
    }
    if let Some(difficulty) = filter.difficulty {
        words.retain(|w| w.difficulty == difficulty);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("No words found.");
                return Ok(());
            }

            let width = words.iter()
                .map(|w| terminal::display_width(&w.word))
                .max()
                .unwrap_or(4)
                .max(4);

            for word in &words {
                println!(
                    "{} {} {} {}",
                    terminal::pad(&word.word, width),
                    terminal::paint(&terminal::pad(&word.reading, 12), Color::CYAN, use_color),
                    terminal::paint(&terminal::pad(&word.romaji(), 14), Color::GRAY, use_color),
                    word.meaning
                );
            }

            println!("\n{} words", words.len());
        }
    }

    Ok(())
}
