use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::instrument;

use super::heading::{Heading, InvalidLevel, Level};

/// The ordered list of headings a document must contain.
///
/// The order of the headings is the order in which they must appear in the
/// document. Titles are unique within an outline; this is enforced when the
/// outline is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outline {
    headings: Vec<Heading>,
}

impl Outline {
    /// Creates an outline from headings in their required order.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::EmptyTitle`] if a title is blank, or
    /// [`LoadError::DuplicateTitle`] if a title is required more than once.
    pub fn new(headings: impl IntoIterator<Item = Heading>) -> Result<Self, LoadError> {
        let headings: Vec<Heading> = headings.into_iter().collect();

        let mut seen = HashSet::with_capacity(headings.len());
        for (position, heading) in headings.iter().enumerate() {
            // The extractor drops blank titles.
            if heading.title().is_empty() {
                return Err(LoadError::EmptyTitle { position });
            }
            if !seen.insert(heading.title()) {
                return Err(LoadError::DuplicateTitle(heading.title().to_string()));
            }
        }

        Ok(Self { headings })
    }

    /// Loads an outline specification from a file.
    ///
    /// The format is chosen by file extension: `.yaml`/`.yml` and `.toml` are
    /// parsed as YAML and TOML respectively, anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, lacks a
    /// `headings` list, or contains invalid headings.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|io_error| match io_error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(io_error),
        })?;

        let raw: RawOutline = match Format::from_path(path) {
            Format::Json => serde_json::from_str(&content)?,
            Format::Yaml => serde_yaml::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        let outline = Self::try_from(raw)?;
        tracing::debug!("Loaded outline with {} required headings", outline.len());
        Ok(outline)
    }

    /// Parses an outline specification from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON, lacks a `headings` list,
    /// or contains invalid headings.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: RawOutline = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Returns the required headings in order.
    #[must_use]
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Returns an iterator over the required headings in order.
    pub fn iter(&self) -> impl Iterator<Item = &Heading> {
        self.headings.iter()
    }

    /// Returns the number of required headings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    /// Returns `true` if no headings are required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Returns the required heading with the given title, if any.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Heading> {
        self.headings.iter().find(|heading| heading.title() == title)
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a Heading;
    type IntoIter = std::slice::Iter<'a, Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.headings.iter()
    }
}

/// Errors that can occur when loading an outline specification.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The specification file was not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An I/O error occurred.
    #[error("failed to read configuration file")]
    Io(#[source] io::Error),

    /// The specification is not valid JSON, or has the wrong shape.
    #[error("invalid JSON in configuration file")]
    Json(#[from] serde_json::Error),

    /// The specification is not valid YAML, or has the wrong shape.
    #[error("invalid YAML in configuration file")]
    Yaml(#[from] serde_yaml::Error),

    /// The specification is not valid TOML, or has the wrong shape.
    #[error("invalid TOML in configuration file")]
    Toml(#[from] toml::de::Error),

    /// The specification has no `headings` field.
    #[error("Configuration file does not contain 'headings' key")]
    MissingHeadings,

    /// A required heading has a level outside `1..=6`.
    #[error("invalid level for heading '{title}'")]
    InvalidLevel {
        /// The title of the offending heading.
        title: String,
        /// The underlying level error.
        #[source]
        source: InvalidLevel,
    },

    /// A required heading has a blank title.
    #[error("heading {position} has an empty title")]
    EmptyTitle {
        /// Zero-based position of the heading in the outline.
        position: usize,
    },

    /// The same title is required more than once.
    #[error("heading '{0}' is required more than once")]
    DuplicateTitle(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// The serialized shape of an outline specification.
///
/// Levels are read as wide integers so that out-of-range values are reported
/// as [`LoadError::InvalidLevel`] rather than as a parse error.
#[derive(Debug, Deserialize)]
struct RawOutline {
    headings: Option<Vec<RawHeading>>,
}

#[derive(Debug, Deserialize)]
struct RawHeading {
    title: String,
    level: i64,
}

impl TryFrom<RawOutline> for Outline {
    type Error = LoadError;

    fn try_from(raw: RawOutline) -> Result<Self, Self::Error> {
        let headings = raw
            .headings
            .ok_or(LoadError::MissingHeadings)?
            .into_iter()
            .map(|RawHeading { title, level }| {
                let level = Level::try_from(level).map_err(|source| LoadError::InvalidLevel {
                    title: title.clone(),
                    source,
                })?;
                Ok(Heading::new(title, level))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        Self::new(headings)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use test_case::test_case;

    use super::*;

    fn write_spec(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn titles(outline: &Outline) -> Vec<&str> {
        outline.iter().map(Heading::title).collect()
    }

    #[test]
    fn load_reads_valid_json() {
        let file = write_spec(
            ".json",
            r#"{"headings": [{"title": "Test Header", "level": 1}, {"title": "Another Header", "level": 2}]}"#,
        );

        let outline = Outline::load(file.path()).unwrap();

        assert_eq!(titles(&outline), ["Test Header", "Another Header"]);
        assert_eq!(outline.headings()[1].level().get(), 2);
    }

    #[test]
    fn load_reads_valid_yaml() {
        let file = write_spec(
            ".yaml",
            "headings:\n  - title: Introduction\n    level: 1\n  - title: Scope\n    level: 2\n",
        );

        let outline = Outline::load(file.path()).unwrap();

        assert_eq!(titles(&outline), ["Introduction", "Scope"]);
    }

    #[test]
    fn load_reads_valid_toml() {
        let file = write_spec(
            ".toml",
            "[[headings]]\ntitle = \"Introduction\"\nlevel = 1\n\n[[headings]]\ntitle = \"Scope\"\nlevel = 2\n",
        );

        let outline = Outline::load(file.path()).unwrap();

        assert_eq!(titles(&outline), ["Introduction", "Scope"]);
    }

    #[test]
    fn unknown_extension_is_parsed_as_json() {
        let file = write_spec(".spec", r#"{"headings": [{"title": "Only", "level": 3}]}"#);

        let outline = Outline::load(file.path()).unwrap();

        assert_eq!(titles(&outline), ["Only"]);
    }

    #[test]
    fn load_missing_file_returns_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.json");

        let error = Outline::load(&missing).unwrap_err();

        assert!(matches!(error, LoadError::NotFound(ref path) if path == &missing));
        assert!(error.to_string().starts_with("Configuration file not found:"));
    }

    #[test]
    fn load_invalid_json_returns_error() {
        let file = write_spec(".json", "{invalid json}");

        let error = Outline::load(file.path()).unwrap_err();

        assert!(matches!(error, LoadError::Json(_)));
    }

    #[test_case("{}"; "empty object")]
    #[test_case(r#"{"wrong_key": []}"#; "wrong key")]
    #[test_case(r#"{"headings": null}"#; "null headings")]
    fn missing_headings_key(json: &str) {
        let error = Outline::from_json_str(json).unwrap_err();

        assert!(matches!(error, LoadError::MissingHeadings));
        assert_eq!(
            error.to_string(),
            "Configuration file does not contain 'headings' key"
        );
    }

    #[test_case(r#"{"headings": "not a list"}"#; "string")]
    #[test_case(r#"{"headings": {"title": "A", "level": 1}}"#; "object")]
    #[test_case(r#"{"headings": [{"title": "A"}]}"#; "element without level")]
    #[test_case(r#"{"headings": [{"level": 1}]}"#; "element without title")]
    fn malformed_headings(json: &str) {
        let error = Outline::from_json_str(json).unwrap_err();

        assert!(matches!(error, LoadError::Json(_)));
    }

    #[test_case(0; "zero")]
    #[test_case(7; "seven")]
    #[test_case(-3; "negative")]
    fn out_of_range_level(level: i64) {
        let json = format!(r#"{{"headings": [{{"title": "Intro", "level": {level}}}]}}"#);

        let error = Outline::from_json_str(&json).unwrap_err();

        assert!(matches!(error, LoadError::InvalidLevel { ref title, .. } if title == "Intro"));
    }

    #[test]
    fn duplicate_titles_are_rejected() {
        let json = r#"{"headings": [
            {"title": "Summary", "level": 1},
            {"title": "Details", "level": 2},
            {"title": "Summary", "level": 2}
        ]}"#;

        let error = Outline::from_json_str(json).unwrap_err();

        assert!(matches!(error, LoadError::DuplicateTitle(ref title) if title == "Summary"));
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace only")]
    fn blank_titles_are_rejected(title: &str) {
        let json = format!(
            r#"{{"headings": [{{"title": "Intro", "level": 1}}, {{"title": "{title}", "level": 2}}]}}"#
        );

        let error = Outline::from_json_str(&json).unwrap_err();

        assert!(matches!(error, LoadError::EmptyTitle { position: 1 }));
    }

    #[test]
    fn titles_are_trimmed() {
        let outline =
            Outline::from_json_str(r#"{"headings": [{"title": "  Padded  ", "level": 1}]}"#)
                .unwrap();

        assert_eq!(titles(&outline), ["Padded"]);
        assert!(outline.get("Padded").is_some());
    }

    #[test]
    fn empty_headings_list_is_valid() {
        let outline = Outline::from_json_str(r#"{"headings": []}"#).unwrap();

        assert!(outline.is_empty());
        assert_eq!(outline, Outline::default());
    }

    #[test]
    fn extra_top_level_fields_are_ignored() {
        let outline = Outline::from_json_str(
            r#"{"name": "PRD", "headings": [{"title": "Goals", "level": 2}]}"#,
        )
        .unwrap();

        assert_eq!(outline.len(), 1);
    }
}
