// splitter.rs

use std::fmt;
use std::iter;
use std::str::FromStr;

use itertools::repeat_n;

use crate::scanner::{Run, Runs};

/// Which C runtime's argv parser to reproduce.
///
/// The two agree on every string without quote characters and only differ
/// in how a run of quotes is consumed while inside a quoted region.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Runtime {
    /// `msvcrt.dll` / `CommandLineToArgvW`.
    Legacy,
    /// The universal CRT linked by modern toolchains.
    Modern,
}

impl Runtime {
    /// Consume one backslash+quote run, appending its literal text to `arg`.
    fn slash_quote(self, slashes: usize, quotes: usize, quote_mode: &mut bool, arg: &mut String) {
        // n backslashes before a quote always yield n/2 literal backslashes
        arg.extend(repeat_n('\\', slashes / 2));
        let escaped = slashes % 2 == 1;

        match self {
            Runtime::Legacy => {
                let magic = quotes + usize::from(*quote_mode) + 2 * usize::from(escaped);
                arg.extend(repeat_n('"', magic / 3));
                *quote_mode = magic % 3 == 1;
            }
            Runtime::Modern => {
                let mut remaining = quotes;
                if escaped {
                    arg.push('"');
                    remaining -= 1;
                }
                while remaining > 0 {
                    if *quote_mode && remaining >= 2 {
                        arg.push('"');
                        remaining -= 2;
                    } else {
                        *quote_mode = !*quote_mode;
                        remaining -= 1;
                    }
                }
            }
        }
    }

    /// Scan one argument, starting from `first` and pulling from `runs`
    /// until an unquoted whitespace run (which is consumed) or the end.
    fn scan_arg<'a>(self, first: Run<'a>, runs: &mut Runs<'a>) -> String {
        let mut arg = String::new();
        let mut quote_mode = false;
        for run in iter::once(first).chain(runs.by_ref()) {
            match run {
                Run::Whitespace(space) => {
                    if !quote_mode {
                        break;
                    }
                    arg.push_str(space);
                }
                Run::SlashQuote { slashes, quotes } => {
                    self.slash_quote(slashes, quotes, &mut quote_mode, &mut arg)
                }
                Run::Plain(text) => arg.push_str(text),
            }
        }
        arg
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Runtime::Legacy => "legacy",
            Runtime::Modern => "modern",
        })
    }
}

impl FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" | "msvcrt" => Ok(Runtime::Legacy),
            "modern" | "ucrt" => Ok(Runtime::Modern),
            other => Err(format!(
                "unknown runtime '{}', expected one of: legacy, msvcrt, modern, ucrt",
                other
            )),
        }
    }
}

/// Split `s` into words the way `runtime` would.
///
/// The first word gets no program-name treatment; prepend a dummy word if
/// that behavior is needed.
pub fn split_with(s: &str, runtime: Runtime) -> Vec<String> {
    let mut runs = Runs::new(s);
    let mut words = Vec::new();
    while let Some(first) = runs.next() {
        words.push(runtime.scan_arg(first, &mut runs));
    }
    words
}

/// Split like `msvcrt.dll` / `CommandLineToArgvW`.
pub fn split_legacy(s: &str) -> Vec<String> {
    split_with(s, Runtime::Legacy)
}

/// Split like the universal CRT.
pub fn split_modern(s: &str) -> Vec<String> {
    split_with(s, Runtime::Modern)
}
