// scanner.rs

use itertools::repeat_n;

/// Whitespace that separates arguments: Unicode whitespace plus the
/// information separators U+001C..=U+001F, which the runtimes also skip.
pub fn is_arg_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// One classified, maximal slice of a command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Run<'a> {
    Whitespace(&'a str),
    /// Zero or more backslashes immediately followed by one or more quotes.
    SlashQuote { slashes: usize, quotes: usize },
    /// Any one character, then everything up to the next whitespace,
    /// backslash or quote.
    Plain(&'a str),
}

impl Run<'_> {
    /// Append the exact text this run was scanned from.
    pub fn write_source(&self, out: &mut String) {
        match *self {
            Run::Whitespace(text) | Run::Plain(text) => out.push_str(text),
            Run::SlashQuote { slashes, quotes } => {
                out.extend(repeat_n('\\', slashes));
                out.extend(repeat_n('"', quotes));
            }
        }
    }
}

/// Cursor over the runs of a string, leading whitespace skipped.
///
/// The splitters share one `Runs` between the per-argument loop and the
/// per-run loop, so a run pulled by one is never seen again by the other.
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            rest: s.trim_start_matches(is_arg_space),
        }
    }

    fn take(&mut self, len: usize) -> &'a str {
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        head
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        if is_arg_space(first) {
            let len = self
                .rest
                .find(|c: char| !is_arg_space(c))
                .unwrap_or(self.rest.len());
            return Some(Run::Whitespace(self.take(len)));
        }

        let slashes = self.rest.bytes().take_while(|&b| b == b'\\').count();
        let quotes = self.rest[slashes..].bytes().take_while(|&b| b == b'"').count();
        if quotes > 0 {
            self.take(slashes + quotes);
            return Some(Run::SlashQuote { slashes, quotes });
        }

        // a backslash not followed by quotes is ordinary text
        let tail = &self.rest[first.len_utf8()..];
        let len = first.len_utf8()
            + tail
                .find(|c: char| is_arg_space(c) || c == '\\' || c == '"')
                .unwrap_or(tail.len());
        Some(Run::Plain(self.take(len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn runs(s: &str) -> Vec<Run<'_>> {
        Runs::new(s).collect()
    }

    #[test]
    fn empty_and_blank_inputs_have_no_runs() {
        assert!(runs("").is_empty());
        assert!(runs(" \t\n ").is_empty());
    }

    #[test]
    fn leading_whitespace_is_dropped_once() {
        assert_eq!(
            runs("  foo  bar "),
            vec![
                Run::Plain("foo"),
                Run::Whitespace("  "),
                Run::Plain("bar"),
                Run::Whitespace(" "),
            ]
        );
    }

    #[test]
    fn backslashes_bind_to_following_quotes() {
        assert_eq!(
            runs(r#"a\\\""b"#),
            vec![
                Run::Plain("a"),
                Run::SlashQuote { slashes: 3, quotes: 2 },
                Run::Plain("b"),
            ]
        );
        assert_eq!(runs(r#"""#), vec![Run::SlashQuote { slashes: 0, quotes: 1 }]);
    }

    #[test]
    fn lone_backslashes_are_plain_text() {
        assert_eq!(
            runs(r"a\\b\ c"),
            vec![
                Run::Plain("a"),
                Run::Plain(r"\"),
                Run::Plain(r"\b"),
                Run::Plain(r"\"),
                Run::Whitespace(" "),
                Run::Plain("c"),
            ]
        );
    }

    #[test]
    fn plain_run_stops_at_quote() {
        assert_eq!(
            runs(r#"x\y"z"#),
            vec![
                Run::Plain("x"),
                Run::Plain(r"\y"),
                Run::SlashQuote { slashes: 0, quotes: 1 },
                Run::Plain("z"),
            ]
        );
    }

    #[test]
    fn information_separators_split_runs() {
        assert_eq!(
            runs("\u{1f}a\u{1c}\u{1d}b"),
            vec![
                Run::Plain("a"),
                Run::Whitespace("\u{1c}\u{1d}"),
                Run::Plain("b"),
            ]
        );
        assert!(is_arg_space('\u{1e}'));
        assert!(!is_arg_space('\u{1b}'));
    }

    #[test]
    fn runs_reproduce_trimmed_input() {
        for s in [
            r#" a\\"b  "" \ c"#,
            "üñí\u{3000}cödé \"x\"",
            r#"\\\\"""" x"#,
            "tab\tsep\r\nline",
        ] {
            let mut rebuilt = String::new();
            for run in Runs::new(s) {
                run.write_source(&mut rebuilt);
            }
            assert_eq!(rebuilt, s.trim_start_matches(is_arg_space));
        }
    }
}
