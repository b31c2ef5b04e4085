// cli.rs

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Once;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::repl::start_repl;
use crate::util::write_lines;
use crate::{join, split, Runtime, SplitOptions};

#[derive(Parser, Debug)]
#[command(
    name = "winsplit",
    version,
    about = "Split a file into words using Windows-style quoting",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub split: SplitArgs,

    /// Log parsing decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// File to split (reads standard input when omitted)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub parse: ParseArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ParseArgs {
    /// Interpret cmd.exe caret escaping before splitting
    #[arg(long)]
    pub cmd: bool,

    /// Accept unquoted cmd metacharacters instead of failing
    #[arg(long)]
    pub no_check: bool,

    /// C runtime to emulate: legacy (msvcrt) or modern (ucrt). When unset
    /// both are run and must agree.
    #[arg(long, env = "WINSPLIT_RUNTIME")]
    pub runtime: Option<Runtime>,
}

impl ParseArgs {
    pub fn options(&self) -> SplitOptions {
        SplitOptions::default()
            .shell_aware(self.cmd)
            .check(!self.no_check)
            .runtime(self.runtime)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quote words into one command line
    Quote(QuoteArgs),
    /// Split lines as you type them
    Repl(ReplArgs),
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Quote for CommandLineToArgvW only, not for cmd.exe
    #[arg(long)]
    pub argv_only: bool,

    /// Words to quote
    #[arg(allow_hyphen_values = true)]
    pub words: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ReplArgs {
    #[command(flatten)]
    pub parse: ParseArgs,

    /// Load and save line history here
    #[arg(long, env = "HISTFILE")]
    pub history: Option<PathBuf>,
}

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// Only does anything when `RUST_LOG` is set or `verbose` is on.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if verbose {
            EnvFilter::new("winsplit=debug")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => split_input(&cli.split),
        Some(Commands::Quote(args)) => {
            let line = join(&args.words, !args.argv_only);
            write_lines(io::stdout().lock(), [line])?;
            Ok(())
        }
        Some(Commands::Repl(args)) => start_repl(&args),
    }
}

fn split_input(args: &SplitArgs) -> Result<()> {
    let input = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            buf
        }
    };
    tracing::debug!(bytes = input.len(), cmd = args.parse.cmd, "splitting input");
    let words = split(&input, args.parse.options())?;
    write_lines(io::stdout().lock(), &words)?;
    Ok(())
}
