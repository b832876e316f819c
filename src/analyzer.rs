use std::{fs, io, path::Path};

use tracing::instrument;

use crate::{
    domain::{LoadError, Outline},
    extract::extract_headings,
    validate::{Report, Validator},
};

/// Checks markdown documents against a required outline.
///
/// An `Analyzer` holds no mutable state, so one instance can check any
/// number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    validator: Validator,
}

impl Analyzer {
    /// Creates an analyzer for an in-memory outline.
    #[must_use]
    pub const fn new(outline: Outline) -> Self {
        Self {
            validator: Validator::new(outline),
        }
    }

    /// Creates an analyzer from an outline specification file.
    ///
    /// # Errors
    ///
    /// Returns an error if the specification cannot be loaded.
    pub fn from_path(config: &Path) -> Result<Self, LoadError> {
        Outline::load(config).map(Self::new)
    }

    /// Returns the outline documents are checked against.
    #[must_use]
    pub const fn outline(&self) -> &Outline {
        self.validator.outline()
    }

    /// Checks the headings of a markdown document.
    #[must_use]
    pub fn analyze_str(&self, markdown: &str) -> Report {
        let headings = extract_headings(markdown);
        tracing::debug!("Extracted {} headings", headings.len());
        self.validator.validate(&headings)
    }

    /// Checks the headings of a markdown file.
    ///
    /// A missing file is reported as a failed [`Report`] rather than as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    #[instrument(level = "debug", skip(self))]
    pub fn analyze_file(&self, markdown: &Path) -> io::Result<Report> {
        let content = match fs::read_to_string(markdown) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::info!("Markdown file not found: {}", markdown.display());
                return Ok(Report::failure(format!(
                    "Markdown file not found: {}",
                    markdown.display()
                )));
            }
            Err(error) => return Err(error),
        };

        Ok(self.analyze_str(&content))
    }
}
