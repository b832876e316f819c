use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Heading, Level};

/// Matches an ATX heading line: 1 to 6 `#` markers at the start of the line,
/// whitespace, then the title. A trailing run of `#` preceded by whitespace is
/// treated as a closing marker and excluded from the title.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+?)(?:\s+#+)?\s*$").expect("heading pattern is valid")
});

/// Extracts every heading from `text`, in document order.
///
/// This is a per-line scan, not a markdown parser. The marker must be in the
/// first column, and lines inside fenced code blocks are not treated
/// specially, so a `#`-led line in a code fence is reported as a heading.
///
/// A leading UTF-8 byte-order mark is ignored. Text without headings yields
/// an empty vector.
#[must_use]
pub fn extract_headings(text: &str) -> Vec<Heading> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines().filter_map(parse_heading).collect()
}

fn parse_heading(line: &str) -> Option<Heading> {
    let captures = HEADING.captures(line)?;
    let level = Level::try_from(captures[1].len()).ok()?;
    let title = captures[2].trim();

    if title.is_empty() {
        return None;
    }

    Some(Heading::new(title, level))
}
