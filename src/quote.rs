// quote.rs

use itertools::{repeat_n, Itertools};

use crate::caret::is_cmd_meta;
use crate::scanner::is_arg_space;

fn is_meta_or_space(c: char) -> bool {
    is_arg_space(c) || is_cmd_meta(c)
}

/// Backslash-escape every quote, doubling any backslashes right before it.
///
/// Backslashes that are not followed by a quote are left alone.
pub fn escape_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut slashes = 0;
    for c in s.chars() {
        match c {
            '\\' => slashes += 1,
            '"' => {
                out.extend(repeat_n('\\', 2 * slashes + 1));
                out.push('"');
                slashes = 0;
            }
            _ => {
                out.extend(repeat_n('\\', slashes));
                out.push(c);
                slashes = 0;
            }
        }
    }
    out.extend(repeat_n('\\', slashes));
    out
}

/// Surround `s` (whose quotes are already escaped) with quotes.
///
/// A trailing backslash run is doubled so it cannot escape the closing quote.
pub fn wrap_in_quotes(s: &str) -> String {
    let trailing = s.len() - s.trim_end_matches('\\').len();
    let mut out = String::with_capacity(s.len() + trailing + 2);
    out.push('"');
    out.push_str(s);
    out.extend(repeat_n('\\', trailing));
    out.push('"');
    out
}

// Quotable stretches are quoted (or left bare), `%` and `!` get a caret since
// quotes do not stop cmd from expanding them, and a literal quote becomes
// `\^"`: the backslash for the runtime, the caret for cmd.
fn quote_for_cmd(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        match c {
            '%' | '!' => {
                out.push('^');
                out.push(c);
                rest = &rest[1..];
            }
            '"' => {
                out.push_str(r#"\^""#);
                rest = &rest[1..];
            }
            _ => {
                let len = rest.find(['%', '!', '"']).unwrap_or(rest.len());
                let (quotable, tail) = rest.split_at(len);
                // a bare trailing backslash could pair up with a following `\^"`
                if quotable.contains(is_meta_or_space) || quotable.ends_with('\\') {
                    out.push_str(&wrap_in_quotes(quotable));
                } else {
                    out.push_str(quotable);
                }
                rest = tail;
            }
        }
    }
    out
}

fn caret_escape(s: &str) -> String {
    let mut out = String::with_capacity(2 * s.len());
    for c in s.chars() {
        if is_cmd_meta(c) {
            out.push('^');
        }
        out.push(c);
    }
    out
}

/// Quote one word so that splitting the result gives back exactly `s`.
///
/// With `for_cmd` the result survives cmd.exe followed by the C runtime;
/// otherwise it is meant to reach the C runtime directly.
pub fn quote(s: &str, for_cmd: bool) -> String {
    if s.is_empty() {
        return r#""""#.to_string();
    }

    if !for_cmd {
        return if s.contains(is_arg_space) {
            wrap_in_quotes(&escape_quotes(s))
        } else {
            escape_quotes(s)
        };
    }

    if !s.contains(is_meta_or_space) {
        return s.to_string();
    }
    let quoted = quote_for_cmd(s);
    // carets alone are enough when there is no whitespace or quote to protect
    if !s.contains(|c: char| is_arg_space(c) || c == '"') {
        let alt = caret_escape(s);
        if alt.len() < quoted.len() {
            return alt;
        }
    }
    quoted
}

/// Quote every word and join them with single spaces.
pub fn join<I, S>(words: I, for_cmd: bool) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| quote(word.as_ref(), for_cmd))
        .join(" ")
}
