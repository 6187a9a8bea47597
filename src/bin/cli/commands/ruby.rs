use anyhow::Result;

use vocab_quest_lib::ruby;

use crate::render::terminal;
use crate::OutputFormat;

pub fn run(text: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let segments = ruby::parse(text);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&segments)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::render_ruby(&segments, use_color));
            println!("{}", ruby::plain_text(&segments));
        }
    }

    Ok(())
}
