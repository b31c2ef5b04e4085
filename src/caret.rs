// caret.rs

use crate::error::{Error, Result};

/// Characters cmd.exe treats specially outside quotes.
pub fn is_cmd_meta(c: char) -> bool {
    matches!(c, '"' | '^' | '&' | '|' | '<' | '>' | '(' | ')' | '%' | '!')
}

/// Characters cmd.exe still acts on inside a quoted region.
fn is_meta_inside_quotes(c: char) -> bool {
    matches!(c, '"' | '%' | '!')
}

/// Interpret caret escapes the way cmd.exe does before handing the line
/// to the program.
///
/// Outside quotes `^x` becomes `x`. Inside quotes the caret is inert and
/// kept, although `^"` still ends the quoted region. With `check` set,
/// any metacharacter cmd would act on (and `%`/`!` even inside quotes)
/// makes this fail with [`Error::Metacharacter`]; without it the same
/// transformation is applied silently.
pub fn normalize_carets(s: &str, check: bool) -> Result<String> {
    let unquoted_meta = |meta: char| {
        tracing::debug!(input = s, meta = ?meta, "rejected cmd metacharacter");
        Error::Metacharacter {
            input: s.to_string(),
        }
    };

    let mut out = String::with_capacity(s.len());
    let mut quote_mode = false;
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        match c {
            '^' => {
                // a caret never swallows a line feed
                let escaped = rest[1..].chars().next().filter(|&e| e != '\n');
                rest = &rest[1 + escaped.map_or(0, char::len_utf8)..];
                match (quote_mode, escaped) {
                    (true, Some(e)) => {
                        out.push('^');
                        out.push(e);
                        if e == '"' {
                            quote_mode = false;
                        } else if check && matches!(e, '%' | '!') {
                            return Err(unquoted_meta(e));
                        }
                    }
                    (true, None) => out.push('^'),
                    (false, Some(e)) => out.push(e),
                    (false, None) => {}
                }
            }
            '"' => {
                out.push('"');
                quote_mode = !quote_mode;
                rest = &rest[1..];
            }
            _ => {
                let len = rest.find(['^', '"']).unwrap_or(rest.len());
                let (text, tail) = rest.split_at(len);
                if check {
                    let forbidden: fn(char) -> bool = if quote_mode {
                        is_meta_inside_quotes
                    } else {
                        is_cmd_meta
                    };
                    if let Some(meta) = text.chars().find(|&c| forbidden(c)) {
                        return Err(unquoted_meta(meta));
                    }
                }
                out.push_str(text);
                rest = tail;
            }
        }
    }

    Ok(out)
}
