// util.rs

use std::io::{self, Write};

/// Write each item on its own line and flush.
///
/// A closed pipe on the other end (`winsplit file | head -1`) is not an error.
pub fn write_lines<W, I, S>(mut w: W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let result = lines
        .into_iter()
        .try_for_each(|line| writeln!(w, "{}", line.as_ref()))
        .and_then(|()| w.flush());
    match result {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
