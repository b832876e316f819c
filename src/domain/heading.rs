use std::fmt;

/// The nesting depth of a heading.
///
/// Markdown supports six heading levels, so a `Level` is always within
/// `1..=6`; level 1 is the top of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// The shallowest heading level.
    pub const MIN: u8 = 1;

    /// The deepest heading level.
    pub const MAX: u8 = 6;

    /// Returns the level as an integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Level {
    type Error = InvalidLevel;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|level| (Self::MIN..=Self::MAX).contains(level))
            .map(Self)
            .ok_or(InvalidLevel(value))
    }
}

impl TryFrom<usize> for Level {
    type Error = InvalidLevel;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let value = i64::try_from(value).unwrap_or(i64::MAX);
        Self::try_from(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when an integer is not a valid heading level.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid heading level {0}: must be between 1 and 6")]
pub struct InvalidLevel(i64);

/// A section heading, either extracted from a document or required by an
/// outline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Heading {
    title: String,
    level: Level,
}

impl Heading {
    /// Creates a heading, trimming surrounding whitespace from the title.
    #[must_use]
    pub fn new(title: impl AsRef<str>, level: Level) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
            level,
        }
    }

    /// Returns the heading title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the heading level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}
