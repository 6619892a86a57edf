//! Splitting puzzle input into lines and fields

use std::fmt;

/// Puzzle input broken into tokens
///
/// `Flat` when every line holds exactly one field, `Nested` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokens<'a> {
    /// One entry per line
    Flat(Vec<&'a str>),
    /// One entry per line, each holding that line's fields
    Nested(Vec<Vec<&'a str>>),
}

impl<'a> Tokens<'a> {
    /// Number of lines
    pub fn len(&self) -> usize {
        match self {
            Tokens::Flat(lines) => lines.len(),
            Tokens::Nested(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, Tokens::Flat(_))
    }

    /// Every line as a list of fields, regardless of shape
    pub fn rows(&self) -> Vec<Vec<&'a str>> {
        match self {
            Tokens::Flat(lines) => lines.iter().map(|line| vec![*line]).collect(),
            Tokens::Nested(rows) => rows.clone(),
        }
    }
}

impl fmt::Display for Tokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tokens::Flat(lines) => write!(f, "{:?}", lines),
            Tokens::Nested(rows) => write!(f, "{:?}", rows),
        }
    }
}

/// Split `text` into lines, then each line into whitespace-separated fields
///
/// A final line terminator does not produce an extra line. A blank line
/// counts as a single empty field, so inputs made of single values separated
/// by blank lines still flatten.
pub fn tokenize(text: &str) -> Tokens<'_> {
    let rows: Vec<Vec<&str>> = text.lines().map(fields).collect();

    if rows.iter().all(|row| row.len() == 1) {
        Tokens::Flat(rows.into_iter().flatten().collect())
    } else {
        Tokens::Nested(rows)
    }
}

fn fields(line: &str) -> Vec<&str> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() { vec![""] } else { fields }
}
