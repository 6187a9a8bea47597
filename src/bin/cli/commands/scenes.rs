use anyhow::{Context, Result};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let scenes = app.storage.scenes().fetch_all().context("Failed to list scenes")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scenes)?);
        }
        OutputFormat::Plain => {
            if scenes.is_empty() {
                println!("No scenes found. Run `vocab-quest-cli init`.");
                return Ok(());
            }

            for scene in &scenes {
                let title = terminal::render_ruby(&scene.title_segments(), use_color);
                let english = scene.title_en.as_deref().unwrap_or("");
                println!(
                    "{}. {} {} ({} words)",
                    scene.order,
                    terminal::paint(&title, Color::BOLD, use_color),
                    terminal::paint(english, Color::GRAY, use_color),
                    scene.vocabulary_ids.len()
                );
                println!("   {}", scene.description);
            }
        }
    }

    Ok(())
}
