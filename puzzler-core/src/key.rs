use std::fmt;

/// First year the puzzle event ran
pub const FIRST_EVENT_YEAR: u16 = 2015;

/// Highest day-of-month the release window ever reports
pub const LAST_PUZZLE_DAY: u8 = 24;

/// Identifies one puzzle's input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleKey {
    pub year: u16,
    pub day: u8,
}

impl PuzzleKey {
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day{:02}", self.year, self.day)
    }
}
