use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use vocab_quest_lib::stores::{LearnerStore, VocabularyStore};
use vocab_quest_lib::study::{AnswerOutcome, LearningSession};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Flashcard,
    Quiz,
}

pub fn run(
    app: &App,
    scene_name: &str,
    mode: Mode,
    learner_name: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let scene = app.find_scene(scene_name)?;

    let mut vocabulary = VocabularyStore::new(app.storage.vocabulary(), app.config.fallback_sample_size);
    vocabulary.fetch_for_scene(&scene);
    if let Some(err) = vocabulary.last_error() {
        anyhow::bail!("Failed to load words for '{}': {}", scene.title, err);
    }
    let entries = vocabulary.entries().to_vec();

    vocabulary.fetch_all();
    let pool = vocabulary.entries().to_vec();

    let mut learners = LearnerStore::new(app.storage.learners());
    match learner_name {
        Some(name) => {
            if !learners.select(name) {
                anyhow::bail!(learners.last_error().unwrap_or("Learner not found").to_string());
            }
        }
        None => learners.fetch_current(),
    }

    println!("{}", terminal::paint(&terminal::render_ruby(&scene.title_segments(), use_color), Color::BOLD, use_color));
    println!("{}\n", terminal::render_ruby(&scene.story_segments(), use_color));
    if learners.current().is_none() {
        println!("{}", terminal::paint("(no learner: progress is not saved)", Color::GRAY, use_color));
    }

    let mut session = LearningSession::new(entries, pool);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(entry) = session.current().cloned() {
        println!(
            "[{}/{}] {}",
            session.index() + 1,
            session.len(),
            terminal::progress_bar(session.progress(), 20)
        );

        let outcome = match mode {
            Mode::Flashcard => {
                println!("{}", terminal::paint(&terminal::render_ruby(&entry.segments(), use_color), Color::BOLD, use_color));
                let Some(answer) = prompt(&mut lines, "よみ・いみ> ")? else { break };
                session.submit_answer(&answer, &mut learners)
            }
            Mode::Quiz => {
                println!("{}", entry.meaning);
                let Some(round) = session.quiz_round(&mut rand::thread_rng()) else { break };
                for (i, choice) in round.choices.iter().enumerate() {
                    println!("  {}. {}", i + 1, terminal::render_ruby(&choice.segments(), use_color));
                }
                let Some(answer) = prompt(&mut lines, "1-4> ")? else { break };
                match answer.trim().parse::<usize>() {
                    Ok(n) if n >= 1 => session.choose(n - 1, &mut learners),
                    _ => None,
                }
            }
        };

        match outcome {
            Some(outcome) => report(&outcome, &entry.word, &entry.reading, &entry.meaning, use_color),
            None => {
                println!("{}", terminal::paint("Please answer again.", Color::YELLOW, use_color));
                continue;
            }
        }
        if let Some(err) = learners.last_error() {
            eprintln!("warning: progress not saved: {}", err);
        }
        session.next();
    }

    let summary = serde_json::json!({
        "scene": scene.title,
        "answered": session.total_count(),
        "correct": session.correct_count(),
        "accuracy": session.accuracy(),
        "completed": session.is_completed(),
        "learner": learners.current().map(|l| l.name.clone()),
    });

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Plain => {
            println!(
                "\n{} / {} correct ({:.0}%)",
                session.correct_count(),
                session.total_count(),
                session.accuracy() * 100.0
            );
            if let Some(learner) = learners.current() {
                println!(
                    "{}: Lv.{} {}pt, {} points to next level",
                    learner.name,
                    learner.level,
                    learner.total_points,
                    learner.points_to_next_level()
                );
            }
        }
    }

    Ok(())
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().context("Failed to write prompt")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("Failed to read answer")?)),
        None => Ok(None),
    }
}

fn report(outcome: &AnswerOutcome, word: &str, reading: &str, meaning: &str, use_color: bool) {
    if outcome.correct {
        println!("{}", terminal::paint("せいかい!", Color::GREEN, use_color));
    } else {
        println!(
            "{} {}（{}）: {}",
            terminal::paint("ざんねん…", Color::RED, use_color),
            word,
            reading,
            meaning
        );
    }
    if let Some(level) = outcome.mastery_level {
        println!("  {}", terminal::mastery_meter(level, vocab_quest_lib::learners::MAX_MASTERY_LEVEL));
    }
    println!();
}
