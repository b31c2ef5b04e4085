// repl.rs

use std::io;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor, Editor};

use crate::cli::ReplArgs;
use crate::split;
use crate::util::write_lines;

/// Bracket each word so empty words and edge whitespace stay visible.
pub fn render_words(words: &[String]) -> Vec<String> {
    words.iter().map(|word| format!("«{}»", word)).collect()
}

pub fn start_repl(args: &ReplArgs) -> Result<()> {
    let options = args.parse.options();
    let config = Config::builder()
        .auto_add_history(false)
        .history_ignore_space(true)
        .build();
    let mut rl: DefaultEditor = Editor::with_config(config)?;
    if let Some(path) = &args.history {
        // a missing history file just means a fresh start
        if let Err(err) = rl.load_history(path) {
            tracing::debug!(path = %path.display(), error = %err, "no history loaded");
        }
    }

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                match split(&line, options) {
                    Ok(words) => write_lines(io::stdout().lock(), render_words(&words))?,
                    Err(err) => eprintln!("error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &args.history {
        rl.save_history(path)
            .with_context(|| format!("failed to save history to {}", path.display()))?;
    }
    Ok(())
}
