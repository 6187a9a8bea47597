use anyhow::{Context, Result};

use vocab_quest_lib::learners::Learner;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

fn summary_json(learner: &Learner) -> serde_json::Value {
    serde_json::json!({
        "id": learner.id.to_string(),
        "name": learner.name,
        "level": learner.level,
        "totalPoints": learner.total_points,
        "pointsToNextLevel": learner.points_to_next_level(),
        "wordsStudied": learner.progress.len(),
        "wordsMastered": learner.mastered_count(),
        "createdAt": learner.created_at.to_rfc3339(),
    })
}

pub fn run_create(app: &App, name: &str, format: &OutputFormat) -> Result<()> {
    let learner = app.storage.learners().create(name.to_string())
        .context("Failed to create learner")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary_json(&learner))?),
        OutputFormat::Plain => println!("Created learner {} ({})", learner.name, learner.id),
    }
    Ok(())
}

pub fn run_list(app: &App, format: &OutputFormat) -> Result<()> {
    let learners = app.storage.learners().fetch_all().context("Failed to list learners")?;

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = learners.iter().map(summary_json).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if learners.is_empty() {
                println!("No learners yet. Create one with `vocab-quest-cli learner create NAME`.");
                return Ok(());
            }

            let current = learners.last().map(|l| l.id);
            for learner in &learners {
                let marker = if Some(learner.id) == current { "* " } else { "  " };
                println!(
                    "{}{}  Lv.{} {}pt",
                    marker,
                    terminal::pad(&learner.name, 12),
                    learner.level,
                    learner.total_points
                );
            }
        }
    }
    Ok(())
}

pub fn run_show(app: &App, name: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let learner = app.find_learner(name)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&learner)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::paint(&learner.name, Color::BOLD, use_color));
            println!(
                "Level {} {} {} points to next level",
                learner.level,
                terminal::progress_bar(learner.level_progress(), 20),
                learner.points_to_next_level()
            );
            println!("Points: {}", learner.total_points);
            println!(
                "Words studied: {}  mastered: {}",
                learner.progress.len(),
                learner.mastered_count()
            );
        }
    }
    Ok(())
}

pub fn run_delete(app: &App, name: &str, format: &OutputFormat) -> Result<()> {
    let learner = app.find_learner(name)?;
    app.storage.learners().delete(learner.id).context("Failed to delete learner")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "deleted": learner.id.to_string() })),
        OutputFormat::Plain => println!("Deleted learner {}", learner.name),
    }
    Ok(())
}
