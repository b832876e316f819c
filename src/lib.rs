//! Markdown outline inspection
//!
//! Checks that a document's headings match a required outline: the expected
//! titles, their nesting levels, and their relative order.
//!
//! ```
//! use markdown_inspector::{Analyzer, Outline};
//!
//! let outline = Outline::from_json_str(
//!     r#"{"headings": [{"title": "Intro", "level": 1}, {"title": "Usage", "level": 2}]}"#,
//! )
//! .unwrap();
//!
//! let report = Analyzer::new(outline).analyze_str("# Intro\n\n## Install\n\n## Usage\n");
//! assert!(report.success());
//! ```

pub mod domain;
pub use domain::{Heading, InvalidLevel, Level, LoadError, Outline};

/// Heading extraction from raw document text.
pub mod extract;
pub use extract::extract_headings;

/// Outline validation.
pub mod validate;
pub use validate::{Diagnostic, Report, Validator};

mod analyzer;
pub use analyzer::Analyzer;
