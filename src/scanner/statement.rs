use super::types::{Balance, Chunk, Delimiters, Statement};
use std::borrow::Cow;

/// Split text into lines, keeping each line's `\n` so that any range of
/// lines concatenates back to the exact source slice.
pub fn line_sequence(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Scan a statement starting at `start`, counting braces and parens.
pub fn scan<'a, F>(lines: &[&'a str], start: usize, terminator: F) -> Option<Statement<'a>>
where
    F: FnMut(&str) -> bool,
{
    scan_with(lines, start, Delimiters::Both, terminator)
}

/// Accumulate lines from `start` until no counter is open and `terminator`
/// accepts the text so far, or until input runs out.
///
/// The terminator is consulted only while the balance is closed. Running
/// out of lines is not an error: the rest of the input becomes the
/// statement. Returns `None` only when `start` is past the end.
pub fn scan_with<'a, F>(
    lines: &[&'a str],
    start: usize,
    delimiters: Delimiters,
    mut terminator: F,
) -> Option<Statement<'a>>
where
    F: FnMut(&str) -> bool,
{
    let first = *lines.get(start)?;
    let mut balance = Balance::of(first, delimiters);
    let mut text = Cow::Borrowed(first);
    let mut end = start;

    while (balance.is_open() || !terminator(&text)) && end + 1 < lines.len() {
        end += 1;
        let next = lines[end];
        text.to_mut().push_str(next);
        balance.absorb(next, delimiters);
    }

    Some(Statement { start, end, text })
}

/// Walks a line sequence, scanning a statement wherever `trigger` fires and
/// passing every other line through. The cursor always lands just past the
/// last consumed line.
pub struct Statements<'s, 'a, T, P> {
    lines: &'s [&'a str],
    cursor: usize,
    delimiters: Delimiters,
    trigger: T,
    terminator: P,
}

impl<'s, 'a, T, P> Statements<'s, 'a, T, P>
where
    T: FnMut(&[&'a str], usize) -> bool,
    P: FnMut(&str) -> bool,
{
    pub fn new(lines: &'s [&'a str], delimiters: Delimiters, trigger: T, terminator: P) -> Self {
        Self {
            lines,
            cursor: 0,
            delimiters,
            trigger,
            terminator,
        }
    }
}

impl<'s, 'a, T, P> Iterator for Statements<'s, 'a, T, P>
where
    T: FnMut(&[&'a str], usize) -> bool,
    P: FnMut(&str) -> bool,
{
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = *self.lines.get(self.cursor)?;

        if (self.trigger)(self.lines, self.cursor) {
            let statement =
                scan_with(self.lines, self.cursor, self.delimiters, &mut self.terminator)?;
            self.cursor = statement.end + 1;
            Some(Chunk::Statement(statement))
        } else {
            self.cursor += 1;
            Some(Chunk::Line(line))
        }
    }
}

/// Ready-made terminator predicates.
pub mod terminator {
    /// Complete as soon as the balance closes.
    pub fn always(_: &str) -> bool {
        true
    }

    /// Never complete; the scan runs to end of input.
    pub fn never(_: &str) -> bool {
        false
    }

    /// Complete once the text, ignoring trailing whitespace, ends in `);`.
    pub fn closes_call(text: &str) -> bool {
        text.trim_end().ends_with(");")
    }
}
