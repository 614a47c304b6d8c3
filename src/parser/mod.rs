//! # Parser Module
//!
//! Turns classified chart lines into a [`ChartDocument`].
//!
//! ## Purpose
//! This is the assembly stage of the pipeline. The line classifier
//! (`lexer`) tags each non-blank line; this module walks those tags in
//! order, maintains the current section, and packs each content line's
//! beats into 4-slot bars.
//!
//! ## Assembly rules
//! - A section header always opens a new section, even when the label
//!   repeats and even when the header carries no inline content.
//! - Bar content before any header goes into an implicit unlabeled
//!   section.
//! - A comment that is the very first non-blank line becomes the
//!   document header comment; every later comment attaches to the last
//!   bar of the current section, or is dropped when no bar exists yet.
//! - `:||` sets the end-repeat flag on the last bar of the current
//!   section; `||:` arms a pending flag consumed by the next bar
//!   produced, wherever that bar lands.
//!
//! The builder tracks the current section and bar by position in the
//! tree and does a lookup-and-append per event; it never holds a live
//! reference into the document between events.
//!
//! ## Bar grouping
//! All beats parsed from one content line form a flat sequence which is
//! then partitioned into consecutive groups of [`BEATS_PER_BAR`], the
//! last group right-padded with empty beats. The tied-group tick budget
//! is enforced per beat before grouping (see `parser::beat`).
//!
//! ## Entry Point
//! `parse(source: &str) -> ChartDocument`
//!
//! Parsing never fails: malformed tokens degrade to literal plain beats
//! and stray markers are absorbed, so any text yields a document.
//!
//! ## Related Modules
//! - `lexer` - Tags raw lines before assembly
//! - `parser::beat` / `parser::chord` - The per-token notation grammar
//! - `labels` - Section label casing and expansion

pub mod beat;
pub mod chord;

use crate::ast::{Bar, Beat, ChartDocument, Section, SectionLabel, BEATS_PER_BAR};
use crate::labels::section_label;
use crate::lexer::{classify_lines, Line};

/// Incremental document builder used by [`parse`].
struct ChartBuilder {
    doc: ChartDocument,
    /// Set by `||:`, consumed by the next bar produced.
    pending_start_repeat: bool,
}

impl ChartBuilder {
    fn new() -> Self {
        Self {
            doc: ChartDocument::default(),
            pending_start_repeat: false,
        }
    }

    fn last_bar_mut(&mut self) -> Option<&mut Bar> {
        self.doc.sections.last_mut().and_then(|s| s.bars.last_mut())
    }

    fn open_section(&mut self, label: SectionLabel) {
        self.doc.sections.push(Section {
            label,
            bars: Vec::new(),
        });
    }

    /// Append the bars of one content line to the current section,
    /// opening the implicit unlabeled section if none exists yet.
    fn push_content(&mut self, content: &str) {
        let mut bars = parse_bars(content);
        if bars.is_empty() {
            return;
        }
        if self.pending_start_repeat {
            bars[0].start_repeat = true;
            self.pending_start_repeat = false;
        }
        if self.doc.sections.is_empty() {
            self.open_section(SectionLabel::default());
        }
        // lookup-and-append; the section was just ensured above
        if let Some(section) = self.doc.sections.last_mut() {
            section.bars.extend(bars);
        }
    }

    fn attach_comment(&mut self, text: String) {
        if let Some(bar) = self.last_bar_mut() {
            bar.comment = Some(text);
        }
        // no bar yet: the comment is silently dropped
    }

    fn mark_end_repeat(&mut self) {
        if let Some(bar) = self.last_bar_mut() {
            bar.end_repeat = true;
        }
    }
}

/// Split one content line into beats and pack them into 4-slot bars.
fn parse_bars(content: &str) -> Vec<Bar> {
    let beats: Vec<Beat> = content
        .split_whitespace()
        .map(beat::parse_beat)
        .collect();

    beats
        .chunks(BEATS_PER_BAR)
        .map(|chunk| {
            let mut slots = chunk.to_vec();
            slots.resize(BEATS_PER_BAR, Beat::empty());
            Bar::new(slots)
        })
        .collect()
}

/// Parse chart text into a fresh document tree.
///
/// A pure function of the input: the same text always yields the same
/// tree, and nothing is carried over between invocations.
pub fn parse(source: &str) -> ChartDocument {
    let mut builder = ChartBuilder::new();

    for (index, line) in classify_lines(source).into_iter().enumerate() {
        match line {
            Line::Comment(text) => {
                if index == 0 {
                    builder.doc.header_comment = Some(text);
                } else {
                    builder.attach_comment(text);
                }
            }
            Line::StartRepeat => builder.pending_start_repeat = true,
            Line::EndRepeat => builder.mark_end_repeat(),
            Line::SectionHeader { label, content } => {
                builder.open_section(section_label(&label));
                builder.push_content(&content);
            }
            Line::BarContent(content) => builder.push_content(&content),
        }
    }

    builder.doc
}
