// lib.rs

//! Reproduce how a Windows command line becomes `argv`, and back.
//!
//! A line typed at cmd.exe first loses its caret escapes ([`normalize_carets`])
//! and is then cut into words by the C runtime. Two runtimes are in the wild
//! ([`Runtime::Legacy`] and [`Runtime::Modern`]) and they disagree on some
//! quote sequences, so [`split`] refuses to pick one unless told to.
//! [`quote`] and [`join`] go the other way.

pub mod caret;
pub mod cli;
pub mod error;
pub mod quote;
pub mod repl;
pub mod scanner;
pub mod splitter;
pub mod util;

pub use caret::{is_cmd_meta, normalize_carets};
pub use error::{Error, Result};
pub use quote::{escape_quotes, join, quote, wrap_in_quotes};
pub use scanner::{is_arg_space, Run, Runs};
pub use splitter::{split_legacy, split_modern, split_with, Runtime};

/// How [`split`] should read a command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SplitOptions {
    /// Apply cmd.exe caret escaping first.
    pub shell_aware: bool,
    /// Fail on metacharacters cmd.exe would act on.
    pub check: bool,
    /// Pin a runtime; `None` requires both runtimes to agree.
    pub runtime: Option<Runtime>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            shell_aware: true,
            check: true,
            runtime: None,
        }
    }
}

impl SplitOptions {
    pub fn shell_aware(mut self, shell_aware: bool) -> Self {
        self.shell_aware = shell_aware;
        self
    }

    pub fn check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    pub fn runtime(mut self, runtime: impl Into<Option<Runtime>>) -> Self {
        self.runtime = runtime.into();
        self
    }
}

/// Split a command line into words like cmd.exe and the C runtime would.
///
/// Strings cmd would not treat as a quoted literal (command chaining such
/// as `&whoami`, substitutions like `%PATH%`) are rejected when
/// `options.check` is set. With no pinned runtime, a string the two
/// runtimes read differently is rejected with [`Error::Ambiguous`].
pub fn split(s: &str, options: SplitOptions) -> Result<Vec<String>> {
    let normalized;
    let line = if options.shell_aware && s.contains(is_cmd_meta) {
        normalized = normalize_carets(s, options.check)?;
        tracing::debug!(input = s, normalized = %normalized, "applied cmd caret escaping");
        normalized.as_str()
    } else {
        s
    };

    let words = match options.runtime {
        Some(runtime) => split_with(line, runtime),
        None => {
            let modern = split_modern(line);
            if modern != split_legacy(line) {
                tracing::debug!(input = s, "legacy and modern runtimes disagree");
                return Err(Error::Ambiguous {
                    input: s.to_string(),
                });
            }
            modern
        }
    };
    tracing::trace!(words = words.len(), runtime = ?options.runtime, "split command line");
    Ok(words)
}
