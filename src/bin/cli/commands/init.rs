use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    // Seeds even when seed_sample_data is off in config.toml
    let report = app.storage.seed_if_empty().context("Failed to seed sample data")?;
    let vocabulary = app.storage.vocabulary().count_by_category()
        .context("Failed to count vocabulary")?;
    let scene_count = app.storage.scenes().fetch_all()
        .context("Failed to list scenes")?
        .len();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "dataDir": app.storage.base_path().to_string_lossy(),
                "vocabularyAdded": report.vocabulary_added,
                "scenesAdded": report.scenes_added,
                "vocabularyByCategory": vocabulary,
                "sceneCount": scene_count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Data directory: {}", app.storage.base_path().display());
            println!("{} scenes", scene_count);
            for (category, count) in &vocabulary {
                println!("  {} ({} words)", category, count);
            }
        }
    }

    Ok(())
}
