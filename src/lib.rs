//! # Nashville
//!
//! A compiler for Nashville Number System chord charts: a compact
//! plain-text notation (scale-degree numbers plus modifiers) is parsed
//! into a structured chart model and rendered into presentational HTML.
//!
//! ## Pipeline
//! 1. Line classification (`lexer`) — comments, repeat markers, section
//!    headers, bar content
//! 2. Section assembly and bar grouping (`parser`) — ordered sections of
//!    fixed 4-beat bars
//! 3. Beat notation (`parser::beat`, `parser::chord`) — held diamonds,
//!    tied groups, pushes, staccato and tick marks, slash chords
//! 4. Rendering (`html`) — deterministic markup with semantic classes
//!
//! Parsing and rendering are pure functions and never fail; anything the
//! grammar does not recognize degrades to a literal chord token.
//!
//! ## Example
//! ```rust
//! use nashville::{compile, SongMeta};
//!
//! let meta = SongMeta {
//!     title: Some("My Song".to_string()),
//!     key: Some("C".to_string()),
//!     ..SongMeta::default()
//! };
//!
//! let html = compile("C: 1 5 6- 4", &meta, false);
//! assert!(html.contains(r#"<span class="section-box" title="Chorus">C</span>"#));
//! ```

pub mod ast;
pub mod error;
pub mod html;
pub mod labels;
pub mod lexer;
pub mod parser;
pub mod record;

pub use ast::*;
pub use error::ChartError;
pub use html::{render_chart, render_views, ChartViews, RenderOptions};
pub use parser::parse;
pub use record::{ChartRecord, ChartStore};

/// Compile chart text straight to the inner HTML markup.
/// This is the main entry point for the library.
pub fn compile(chart: &str, meta: &SongMeta, two_column: bool) -> String {
    render_chart(&parse(chart), meta, two_column)
}

/// Compile chart text to both the preview and the print copy.
pub fn compile_views(chart: &str, meta: &SongMeta, options: &RenderOptions) -> ChartViews {
    render_views(&parse(chart), meta, options)
}

/// A built-in demo chart exercising the whole notation grammar.
pub const DEMO_CHART: &str = "\
I: 1 5 6- 4
I: 1 5 6- 4

V: 1 4 5 1
#Diamond on the one!
<1> 4 5 1
2- 5 1 1
#Tied chords below
1_4_5_1 2- 5 1

C: 17 5 6- 4
#Seventh chord above
1 5 6- 4
||:
C: 1 5 6- 4 1 5 6- 4
:||

B: 4sus 5 6- 1
#Suspended and diminished
4sus2 5sus4 7o 1
2- 5/1 <1>
#Inversion above

V2: 1 4 57 1
17 4-7 5 1
1< 5* 6-^ 4
#Push, staccato, accent
1'_4''_5' <5<> 1 <1>>

TA: 5 5 4 4 1
";

/// Metadata matching [`DEMO_CHART`].
pub fn demo_meta() -> SongMeta {
    SongMeta {
        title: Some("My Demo Song".to_string()),
        key: Some("C".to_string()),
        tempo: Some("120".to_string()),
        time: Some("4/4".to_string()),
        songwriter: Some("Larry Laffer".to_string()),
        charted_by: Some("John Hayden".to_string()),
    }
}
