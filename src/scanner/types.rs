use std::borrow::Cow;

/// Which delimiter kinds a scan keeps count of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiters {
    Both,
    Braces,
    Parens,
}

/// Running brace / paren depth over the consumed lines.
///
/// Counts are raw character counts: a `{` inside a string literal or a
/// comment moves the depth exactly like a real one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    pub braces: i32,
    pub parens: i32,
}

impl Balance {
    /// Net depth contributed by a single line.
    pub fn of(line: &str, delimiters: Delimiters) -> Self {
        let mut balance = Self::default();
        balance.absorb(line, delimiters);
        balance
    }

    pub fn absorb(&mut self, line: &str, delimiters: Delimiters) {
        for ch in line.chars() {
            match (ch, delimiters) {
                ('{', Delimiters::Both | Delimiters::Braces) => self.braces += 1,
                ('}', Delimiters::Both | Delimiters::Braces) => self.braces -= 1,
                ('(', Delimiters::Both | Delimiters::Parens) => self.parens += 1,
                (')', Delimiters::Both | Delimiters::Parens) => self.parens -= 1,
                _ => {}
            }
        }
    }

    /// True while either counter still has unmatched openers.
    pub fn is_open(&self) -> bool {
        self.braces > 0 || self.parens > 0
    }
}

/// One scanned logical statement: lines `start..=end` concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    pub start: usize,
    pub end: usize,
    pub text: Cow<'a, str>,
}

impl Statement<'_> {
    /// Number of physical lines consumed.
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Item produced by [`super::Statements`]: either a statement the trigger
/// accepted, or a line passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk<'a> {
    Statement(Statement<'a>),
    Line(&'a str),
}
