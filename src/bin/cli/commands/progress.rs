use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use vocab_quest_lib::learners::MAX_MASTERY_LEVEL;
use vocab_quest_lib::vocabulary::VocabularyEntry;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, learner_name: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let Some(learner) = app.learner_or_current(learner_name)? else {
        bail!("No learners yet. Create one with `vocab-quest-cli learner create NAME`.");
    };

    let words: HashMap<Uuid, VocabularyEntry> = app.storage.vocabulary().fetch_all()
        .context("Failed to list words")?
        .into_iter()
        .map(|w| (w.id, w))
        .collect();

    let mut progress = learner.progress.clone();
    progress.sort_by(|a, b| b.mastery_level.cmp(&a.mastery_level).then(b.last_review_date.cmp(&a.last_review_date)));

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = progress.iter().map(|p| {
                serde_json::json!({
                    "vocabularyId": p.vocabulary_id.to_string(),
                    "word": words.get(&p.vocabulary_id).map(|w| w.word.as_str()),
                    "masteryLevel": p.mastery_level,
                    "accuracy": p.accuracy(),
                    "mastered": p.is_mastered(),
                    "reviewCount": p.review_count,
                    "lastReviewDate": p.last_review_date.to_rfc3339(),
                })
            }).collect();
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                "learner": learner.name,
                "level": learner.level,
                "totalPoints": learner.total_points,
                "progress": output,
            }))?);
        }
        OutputFormat::Plain => {
            println!(
                "{}  Lv.{}  {}pt",
                terminal::paint(&learner.name, Color::BOLD, use_color),
                learner.level,
                learner.total_points
            );

            if progress.is_empty() {
                println!("No words studied yet.");
                return Ok(());
            }

            for p in &progress {
                let word = words.get(&p.vocabulary_id)
                    .map(|w| w.word.as_str())
                    .unwrap_or("(removed)");
                let meter = terminal::mastery_meter(p.mastery_level, MAX_MASTERY_LEVEL);
                let meter = if p.is_mastered() {
                    terminal::paint(&meter, Color::GREEN, use_color)
                } else {
                    meter
                };
                println!(
                    "{} {} {:>3.0}% ({}/{})",
                    terminal::pad(word, 10),
                    meter,
                    p.accuracy() * 100.0,
                    p.correct_count,
                    p.total_attempts
                );
            }

            println!("\n{} of {} words mastered", learner.mastered_count(), progress.len());
        }
    }

    Ok(())
}
