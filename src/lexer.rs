//! # Line Classifier
//!
//! First stage of the pipeline: splits raw chart text into non-blank
//! lines and tags each one.
//!
//! ## Line forms
//! - `# text` — comment (document header if first, bar comment otherwise)
//! - `||:` — start-repeat marker (applies to the next bar produced)
//! - `:||` — end-repeat marker (applies to the last bar produced)
//! - `LBL: content` — section header: 1-4 alphanumerics, one or more
//!   colons, optional inline bar content
//! - anything else — bar content for the current section
//!
//! Classification is purely lexical; the section assembler in `parser`
//! decides what each tagged line means in context.

use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9]{1,4}):+\s*(.*)$").unwrap());

/// A tagged, trimmed, non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `#` line; text after the marker, trimmed.
    Comment(String),
    /// `||:`
    StartRepeat,
    /// `:||`
    EndRepeat,
    /// `LBL:` with whatever followed the colon(s) on the same line.
    SectionHeader { label: String, content: String },
    /// A line of beat tokens.
    BarContent(String),
}

/// Classify one trimmed, non-blank line.
pub fn classify(trimmed: &str) -> Line {
    if let Some(text) = trimmed.strip_prefix('#') {
        return Line::Comment(text.trim().to_string());
    }
    if trimmed == "||:" {
        return Line::StartRepeat;
    }
    if trimmed == ":||" {
        return Line::EndRepeat;
    }
    if let Some(caps) = SECTION_HEADER.captures(trimmed) {
        return Line::SectionHeader {
            label: caps[1].to_string(),
            content: caps[2].to_string(),
        };
    }
    Line::BarContent(trimmed.to_string())
}

/// Split chart text into classified non-blank lines, in order.
pub fn classify_lines(source: &str) -> Vec<Line> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify)
        .collect()
}
