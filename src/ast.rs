//! # Chart Data Model
//!
//! This module defines the structured chart tree built by the parser and
//! consumed by the renderer.
//!
//! ## Type Hierarchy
//! ```text
//! ChartDocument
//!   ├── header_comment: Option<String>
//!   └── Vec<Section>
//!         ├── label: SectionLabel (raw, display, full name)
//!         └── Vec<Bar>
//!               ├── beats: Vec<Beat> (always exactly 4)
//!               ├── start_repeat / end_repeat: bool
//!               └── comment: Option<String>
//!
//! Beat (enum)
//!   ├── Held(Chord)            <1>, <1<>, <1>>  — diamond notation
//!   ├── Tied(Vec<TiedPart>)    1_4_5            — shared underline
//!   └── Plain(Chord)           1, 4sus, 5/1, or an empty slot
//!
//! Chord
//!   ├── base: String           scale degree or literal token remainder
//!   ├── seventh: bool          trailing 7
//!   ├── suspension: Suspension s / sus / sus2 / sus4
//!   ├── diminished: bool       trailing o
//!   ├── inversion: Option<String>   slash chord bass ("5/1")
//!   ├── push: Push             < early, > late
//!   ├── staccato_accent: bool  trailing ^
//!   ├── staccato_dot: bool     trailing *
//!   └── ticks: u8              trailing run of ' marks
//! ```
//!
//! ## Key Concepts
//!
//! ### Bars and beats
//! A bar is a fixed 4-beat grouping. The parser pads short lines with
//! empty plain beats so every emitted bar has exactly [`BEATS_PER_BAR`]
//! slots; renderers and consumers may rely on that.
//!
//! ### Tied beats
//! A tied beat packs several sub-chords into one beat slot. Each part may
//! itself be held (diamond inside the tie). Tick marks distribute the
//! slot's duration across the parts; their sum is capped at
//! [`MAX_TIED_TICKS`] with the leftmost parts keeping priority.
//!
//! ### Purity
//! The whole tree is rebuilt from scratch on every parse and never
//! mutated afterwards, so parse and render stay deterministic functions
//! of the input text.
//!
//! ## Related Modules
//! - `parser` - Creates these types from chart source
//! - `labels` - Computes `SectionLabel` display and full forms
//! - `html` - Generates presentational markup from these types

use serde::{Deserialize, Serialize};

/// Number of beat slots in every bar.
pub const BEATS_PER_BAR: usize = 4;

/// Maximum total tick marks across the parts of one tied beat.
pub const MAX_TIED_TICKS: u8 = 4;

/// Suspension variants, as written: `1s`, `4sus`, `4sus2`, `5sus4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suspension {
    #[default]
    None,
    S,
    Sus,
    Sus2,
    Sus4,
}

impl Suspension {
    /// The literal text rendered as the superscript.
    pub fn as_str(&self) -> &'static str {
        match self {
            Suspension::None => "",
            Suspension::S => "s",
            Suspension::Sus => "sus",
            Suspension::Sus2 => "sus2",
            Suspension::Sus4 => "sus4",
        }
    }
}

/// Rhythmic push: anticipate (`<`) or delay (`>`) the chord's attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Push {
    #[default]
    None,
    Early,
    Late,
}

/// A single chord with all its notation modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chord {
    pub base: String,
    pub seventh: bool,
    pub suspension: Suspension,
    pub diminished: bool,
    pub inversion: Option<String>,
    pub push: Push,
    pub staccato_accent: bool,
    pub staccato_dot: bool,
    pub ticks: u8,
}

impl Chord {
    /// A chord carrying only a base symbol, no modifiers.
    pub fn plain(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    /// True for the padding chord of an unused beat slot.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One sub-chord of a tied beat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiedPart {
    /// Diamond-within-tie: the part was written with `<...>` brackets.
    pub held: bool,
    pub chord: Chord,
}

/// One of the 4 slots in a bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Beat {
    /// Sustained chord, rendered inside a diamond.
    Held(Chord),
    /// Several chords in one slot, joined by a continuous underline.
    Tied(Vec<TiedPart>),
    /// A struck chord, or an empty padding slot.
    Plain(Chord),
}

impl Beat {
    /// The padding value for unused slots at the end of a line.
    pub fn empty() -> Self {
        Beat::Plain(Chord::default())
    }

    /// True when this slot carries no chord at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Beat::Plain(chord) => chord.is_empty(),
            Beat::Held(_) | Beat::Tied(_) => false,
        }
    }
}

/// A 4-beat bar plus its attached markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Always exactly [`BEATS_PER_BAR`] entries.
    pub beats: Vec<Beat>,
    /// `||:` before this bar.
    pub start_repeat: bool,
    /// `:||` after this bar.
    pub end_repeat: bool,
    /// `#` comment line following this bar.
    pub comment: Option<String>,
}

impl Bar {
    pub fn new(beats: Vec<Beat>) -> Self {
        debug_assert_eq!(beats.len(), BEATS_PER_BAR);
        Self {
            beats,
            start_repeat: false,
            end_repeat: false,
            comment: None,
        }
    }
}

/// A section label in its three forms.
///
/// `raw` is the token as typed, `display` applies the short-label case
/// rule, and `full` is the expanded human name ("V2" -> "Verse 2").
/// Unknown labels display as typed and expand to themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionLabel {
    pub raw: String,
    pub display: String,
    pub full: String,
}

impl SectionLabel {
    /// The empty label of the implicit default section.
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

/// A labeled run of bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: SectionLabel,
    pub bars: Vec<Bar>,
}

/// A fully parsed chart, rebuilt from scratch on every parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartDocument {
    /// A `#` comment that was the very first non-blank line.
    pub header_comment: Option<String>,
    pub sections: Vec<Section>,
}

/// Song metadata shown in the chart header and footer.
///
/// All fields are free-form and optional; the renderer omits whatever is
/// missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SongMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songwriter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charted_by: Option<String>,
}
