//! Domain models for outline inspection.
//!
//! This module contains the heading and outline types shared by the
//! extractor, the validator and the outline loader.

/// Headings and their nesting levels.
pub mod heading;
pub use heading::{Heading, InvalidLevel, Level};

mod outline;
pub use outline::{LoadError, Outline};
