mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vocab-quest-cli", about = "Study Japanese school-life vocabulary", version)]
struct Cli {
    /// Data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Create the data directory and insert the bundled words and scenes
    Init,

    /// List scenes
    Scenes,

    /// List vocabulary
    Words {
        /// Scene title, English title or id
        #[arg(long)]
        scene: Option<String>,
        /// Category tag, e.g. 教室
        #[arg(long)]
        category: Option<String>,
        /// Difficulty from 1 to 10
        #[arg(long)]
        difficulty: Option<u8>,
    },

    /// Split ruby markup into segments
    Ruby {
        /// Text such as "｜今日《きょう》は晴れ"
        text: String,
    },

    /// Manage learners
    #[command(subcommand)]
    Learner(LearnerCommand),

    /// Study a scene interactively
    Study {
        /// Scene title, English title or id
        scene: String,
        /// Multiple-choice questions instead of typed answers
        #[arg(long)]
        quiz: bool,
        /// Learner name or id (default: most recent learner)
        #[arg(long)]
        learner: Option<String>,
    },

    /// Show a learner's progress
    Progress {
        /// Learner name or id (default: most recent learner)
        #[arg(long)]
        learner: Option<String>,
    },
}

#[derive(Subcommand)]
enum LearnerCommand {
    /// Create a learner
    Create {
        name: String,
    },

    /// List learners
    List,

    /// Show one learner
    Show {
        /// Learner name or id
        name: String,
    },

    /// Delete a learner and all of its progress
    Delete {
        /// Learner name or id
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    // Ruby parsing needs no data directory
    if let Command::Ruby { text } = &cli.command {
        return commands::ruby::run(text, &cli.format, use_color);
    }

    let app = app::App::new(cli.data_dir)?;

    match cli.command {
        Command::Init => commands::init::run(&app, &cli.format)?,
        Command::Scenes => commands::scenes::run(&app, &cli.format, use_color)?,
        Command::Words { scene, category, difficulty } => {
            let filter = commands::words::WordFilter {
                scene: scene.as_deref(),
                category: category.as_deref(),
                difficulty,
            };
            commands::words::run(&app, filter, &cli.format, use_color)?;
        }
        Command::Ruby { .. } => {}
        Command::Learner(subcmd) => match subcmd {
            LearnerCommand::Create { name } => {
                commands::learner::run_create(&app, &name, &cli.format)?;
            }
            LearnerCommand::List => commands::learner::run_list(&app, &cli.format)?,
            LearnerCommand::Show { name } => {
                commands::learner::run_show(&app, &name, &cli.format, use_color)?;
            }
            LearnerCommand::Delete { name } => {
                commands::learner::run_delete(&app, &name, &cli.format)?;
            }
        },
        Command::Study { scene, quiz, learner } => {
            let mode = if quiz {
                commands::study::Mode::Quiz
            } else {
                commands::study::Mode::Flashcard
            };
            commands::study::run(&app, &scene, mode, learner.as_deref(), &cli.format, use_color)?;
        }
        Command::Progress { learner } => {
            commands::progress::run(&app, learner.as_deref(), &cli.format, use_color)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
