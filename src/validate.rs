use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use serde::Serialize;
use tracing::instrument;

use crate::domain::{Heading, Level, Outline};

/// A single problem found while validating a document against an outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A required heading does not appear anywhere in the document.
    Missing {
        /// Title of the required heading.
        title: String,
    },

    /// A required heading appears before a required heading that the outline
    /// places ahead of it.
    OutOfOrder {
        /// Title of the misplaced heading.
        title: String,
    },

    /// A required heading appears at a different level than the outline
    /// requires.
    LevelMismatch {
        /// Title of the heading.
        title: String,
        /// Level required by the outline.
        expected: Level,
        /// Level found in the document.
        actual: Level,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Missing { title } => write!(f, "Missing header: '{title}'"),
            Self::OutOfOrder { title } => write!(f, "Header '{title}' is out of order"),
            Self::LevelMismatch {
                title,
                expected,
                actual,
            } => write!(
                f,
                "Header level mismatch for '{title}': expected level {expected}, got level {actual}"
            ),
        }
    }
}

/// The outcome of validating a document.
///
/// `messages` lists every diagnostic in check order (existence, then order,
/// then level). A successful report carries exactly one message,
/// [`Report::SUCCESS_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    success: bool,
    messages: Vec<String>,
}

impl Report {
    /// The sole message of a successful report.
    pub const SUCCESS_MESSAGE: &'static str = "All headers validated successfully";

    /// Whether the document satisfies the outline.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Human-readable diagnostics, or the success message.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// A failed report with a single message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            messages: vec![message.into()],
        }
    }

    fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        if diagnostics.is_empty() {
            return Self {
                success: true,
                messages: vec![Self::SUCCESS_MESSAGE.to_string()],
            };
        }

        Self {
            success: false,
            messages: diagnostics.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Validates extracted headings against a required [`Outline`].
///
/// Headings whose titles are not in the outline are ignored by every check,
/// so documents may interleave any number of extra sections.
#[derive(Debug, Clone)]
pub struct Validator {
    outline: Outline,
}

/// Outline position and level of each required title.
type Requirements<'a> = HashMap<&'a str, (usize, Level)>;

impl Validator {
    /// Creates a validator for the given outline.
    #[must_use]
    pub const fn new(outline: Outline) -> Self {
        Self { outline }
    }

    /// Returns the outline this validator checks against.
    #[must_use]
    pub const fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Validates `headings`, given in document order, and summarises the
    /// result as a [`Report`].
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(headings = headings.len()))]
    pub fn validate(&self, headings: &[Heading]) -> Report {
        let diagnostics = self.diagnostics(headings);
        tracing::debug!("Validation found {} problems", diagnostics.len());
        Report::from_diagnostics(&diagnostics)
    }

    /// Runs the existence, order and level checks in that order and returns
    /// every problem found.
    #[must_use]
    pub fn diagnostics(&self, headings: &[Heading]) -> Vec<Diagnostic> {
        let requirements: Requirements = self
            .outline
            .iter()
            .enumerate()
            .map(|(index, heading)| (heading.title(), (index, heading.level())))
            .collect();

        let mut diagnostics = Vec::new();
        self.check_existence(headings, &mut diagnostics);
        Self::check_order(headings, &requirements, &mut diagnostics);
        Self::check_levels(headings, &requirements, &mut diagnostics);
        diagnostics
    }

    fn check_existence(&self, headings: &[Heading], diagnostics: &mut Vec<Diagnostic>) {
        let present: HashSet<&str> = headings.iter().map(Heading::title).collect();

        diagnostics.extend(
            self.outline
                .iter()
                .filter(|required| !present.contains(required.title()))
                .map(|required| Diagnostic::Missing {
                    title: required.title().to_string(),
                }),
        );
    }

    /// Walks the required headings in document order. A heading is out of
    /// order when its outline position is behind the furthest position
    /// reached so far; out-of-order headings do not move that position.
    fn check_order(
        headings: &[Heading],
        requirements: &Requirements,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let mut furthest: Option<usize> = None;

        for heading in headings {
            let Some(&(index, _)) = requirements.get(heading.title()) else {
                continue;
            };

            if furthest.is_some_and(|furthest| index < furthest) {
                diagnostics.push(Diagnostic::OutOfOrder {
                    title: heading.title().to_string(),
                });
            } else {
                furthest = Some(index);
            }
        }
    }

    fn check_levels(
        headings: &[Heading],
        requirements: &Requirements,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for heading in headings {
            let Some(&(_, expected)) = requirements.get(heading.title()) else {
                continue;
            };

            if heading.level() != expected {
                diagnostics.push(Diagnostic::LevelMismatch {
                    title: heading.title().to_string(),
                    expected,
                    actual: heading.level(),
                });
            }
        }
    }
}
