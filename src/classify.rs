// src/classify.rs

//! Per-line routing of compiler output to the error or info stream.

use std::sync::LazyLock;

use regex::Regex;

/// Which log stream a line of tool output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Error,
    Info,
}

/// Whitespace, the word "error", whitespace. Matches tsc diagnostics such as
/// `src/a.ts(3,1): error TS1005: ';' expected.`
static ERROR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\serror\s").expect("error line pattern is valid")
});

/// Classify a single (already trimmed) line.
///
/// Anything that does not look like an error is `Info`; there is no failure
/// mode. "error" at the very start or end of the line has no surrounding
/// whitespace and is therefore `Info` too.
pub fn classify(line: &str) -> Classification {
    if ERROR_LINE.is_match(line) {
        Classification::Error
    } else {
        Classification::Info
    }
}
