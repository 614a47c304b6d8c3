//! # Chart Renderer
//!
//! Walks the parsed chart tree and the song metadata and emits
//! presentational HTML with semantic class names. The output is a pure
//! function of its inputs: rendering the same document twice yields
//! byte-identical markup, and nothing in here can fail — missing fields
//! are omitted rather than reported.
//!
//! Layout produced:
//! - header row: key badge and time signature on the left, centered
//!   title, tempo on the right; optional header comment line below
//! - one block per section: label badge (or a blank placeholder that
//!   keeps the column grid aligned) followed by the section's beats
//! - per beat: superscript modifiers in the fixed order diminished,
//!   seventh, suspension; slash chords as two-line fractions; held
//!   chords inside a diamond; tied groups under one shared underline;
//!   push glyphs outside the diamond/underline; tick and staccato marks
//!   above the chord
//! - repeat flags as composite bracket glyphs attached to the first or
//!   last beat of the flagged bar
//! - footer credit lines, omitted when empty

use crate::ast::{
    Bar, Beat, ChartDocument, Chord, Push, Section, SongMeta, Suspension, TiedPart,
};

/// Wrapper-level knobs for the two output copies.
///
/// Defaults to a two-column layout in the handwriting font at medium
/// size.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub two_column: bool,
    pub font: String,
    pub font_size: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            two_column: true,
            font: "handwriting".to_string(),
            font_size: "medium".to_string(),
        }
    }
}

/// The two copies of the rendered chart.
///
/// Both come from the same renderer call and differ only in the class
/// of the outer wrapper element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartViews {
    /// On-screen copy, wrapped in `chart-preview`.
    pub preview: String,
    /// Print copy, wrapped in `print-only`.
    pub print: String,
}

/// Render the inner chart markup shared by both views.
pub fn render_chart(doc: &ChartDocument, meta: &SongMeta, two_column: bool) -> String {
    let mut html = String::new();

    render_header(&mut html, doc, meta);

    if two_column {
        html.push_str(r#"<div class="chart-content two-column">"#);
    } else {
        html.push_str(r#"<div class="chart-content">"#);
    }
    for section in &doc.sections {
        render_section(&mut html, section);
    }
    html.push_str("</div>");

    render_footer(&mut html, meta);

    html
}

/// Render both the preview and the print copy from one call.
pub fn render_views(doc: &ChartDocument, meta: &SongMeta, options: &RenderOptions) -> ChartViews {
    let inner = render_chart(doc, meta, options.two_column);
    let suffix = format!(
        "font-{} size-{}",
        escape_html(&options.font),
        escape_html(&options.font_size)
    );
    ChartViews {
        preview: format!(r#"<div class="chart-preview {}">{}</div>"#, suffix, inner),
        print: format!(r#"<div class="print-only {}">{}</div>"#, suffix, inner),
    }
}

fn render_header(html: &mut String, doc: &ChartDocument, meta: &SongMeta) {
    html.push_str(r#"<div class="chart-header">"#);

    html.push_str(r#"<div class="header-left">"#);
    if let Some(key) = non_empty(&meta.key) {
        html.push_str(&format!(
            r#"<span class="key-display">key: {}</span>"#,
            escape_html(key)
        ));
    }
    if let Some(time) = non_empty(&meta.time) {
        html.push_str(&format!(
            r#"<span class="time-display">time: {}</span>"#,
            render_time_signature(time)
        ));
    }
    html.push_str("</div>");

    // title div is always present so the grid stays centered
    match non_empty(&meta.title) {
        Some(title) => html.push_str(&format!(
            r#"<div class="chart-title">{}</div>"#,
            escape_html(title)
        )),
        None => html.push_str(r#"<div class="chart-title"></div>"#),
    }

    html.push_str(r#"<div class="header-right">"#);
    if let Some(tempo) = non_empty(&meta.tempo) {
        html.push_str(&format!(
            r#"<span class="tempo-display">bpm: {}</span>"#,
            escape_html(tempo)
        ));
    }
    html.push_str("</div>");

    html.push_str("</div>");

    if let Some(comment) = &doc.header_comment {
        html.push_str(&format!(
            r#"<div class="header-comment">{}</div>"#,
            escape_html(comment)
        ));
    }
}

/// Render a time signature as a stacked fraction when it contains `/`.
fn render_time_signature(time: &str) -> String {
    match time.split_once('/') {
        Some((top, bottom)) => format!(
            r#"<span class="time-sig-fraction"><span class="time-top">{}</span><span class="time-slash">/</span><span class="time-bottom">{}</span></span>"#,
            escape_html(top),
            escape_html(bottom)
        ),
        None => escape_html(time),
    }
}

fn render_section(html: &mut String, section: &Section) {
    html.push_str(r#"<div class="chart-section"><div class="section-wrapper">"#);

    if section.label.is_empty() {
        // blank placeholder keeps the bars aligned with labeled sections
        html.push_str(r#"<div class="section-label"></div>"#);
    } else {
        html.push_str(&format!(
            r#"<div class="section-label"><span class="section-box" title="{}">{}</span></div>"#,
            escape_html(&section.label.full),
            escape_html(&section.label.display)
        ));
    }

    html.push_str(r#"<div class="chart-bars">"#);
    for bar in &section.bars {
        render_bar(html, bar);
    }
    html.push_str("</div>");

    html.push_str("</div></div>");
}

fn render_bar(html: &mut String, bar: &Bar) {
    let last = bar.beats.len().saturating_sub(1);
    for (index, beat) in bar.beats.iter().enumerate() {
        let start_repeat = bar.start_repeat && index == 0;
        let end_repeat = bar.end_repeat && index == last;
        render_beat(html, beat, start_repeat, end_repeat);
    }
    if let Some(comment) = &bar.comment {
        html.push_str(&format!(
            r#"<div class="bar-comment">{}</div>"#,
            escape_html(comment)
        ));
    }
}

fn render_beat(html: &mut String, beat: &Beat, start_repeat: bool, end_repeat: bool) {
    let mut classes = String::from("beat");
    match beat {
        Beat::Held(_) => classes.push_str(" held-chord"),
        Beat::Tied(_) => classes.push_str(" tied-chord"),
        Beat::Plain(_) => {}
    }
    if start_repeat || end_repeat {
        classes.push_str(" beat-with-repeat");
    }

    html.push_str(&format!(r#"<span class="{}">"#, classes));
    if start_repeat {
        html.push_str(REPEAT_START);
    }

    match beat {
        Beat::Held(chord) => html.push_str(&render_held(chord)),
        Beat::Tied(parts) => html.push_str(&render_tied(parts)),
        Beat::Plain(chord) => {
            if !chord.is_empty() {
                html.push_str(&render_pushed(chord, render_struck(chord)));
            }
        }
    }

    if end_repeat {
        html.push_str(REPEAT_END);
    }
    html.push_str("</span>");
}

/// A held chord: marks above, chord inside the diamond, push outside.
fn render_held(chord: &Chord) -> String {
    let diamond = format!(
        r#"<span class="diamond"><span class="diamond-text">{}</span></span>"#,
        render_chord_body(chord)
    );
    let with_marks = format!("{}{}", render_marks(chord), diamond);
    render_pushed(chord, with_marks)
}

/// A plain struck chord: marks above the chord body.
fn render_struck(chord: &Chord) -> String {
    format!("{}{}", render_marks(chord), render_chord_body(chord))
}

/// A tied group: one wrapper carries the shared underline; push glyphs
/// from the parts are hoisted outside the wrapper so they never break
/// the line.
fn render_tied(parts: &[TiedPart]) -> String {
    let mut leading = String::new();
    let mut trailing = String::new();
    let mut group = String::from(r#"<span class="tied-group">"#);

    for part in parts {
        match part.chord.push {
            Push::Early => leading.push_str(PUSH_EARLY),
            Push::Late => trailing.push_str(PUSH_LATE),
            Push::None => {}
        }
        if part.held {
            group.push_str(&format!(
                r#"<span class="tied-part tied-held">{}<span class="diamond"><span class="diamond-text">{}</span></span></span>"#,
                render_marks(&part.chord),
                render_chord_body(&part.chord)
            ));
        } else {
            group.push_str(&format!(
                r#"<span class="tied-part">{}{}</span>"#,
                render_marks(&part.chord),
                render_chord_body(&part.chord)
            ));
        }
    }

    group.push_str("</span>");
    format!("{}{}{}", leading, group, trailing)
}

/// Wrap rendered chord content with this chord's push glyphs.
fn render_pushed(chord: &Chord, content: String) -> String {
    match chord.push {
        Push::Early => format!("{}{}", PUSH_EARLY, content),
        Push::Late => format!("{}{}", content, PUSH_LATE),
        Push::None => content,
    }
}

const PUSH_EARLY: &str = r#"<span class="push push-early">&lt;</span>"#;
const PUSH_LATE: &str = r#"<span class="push push-late">&gt;</span>"#;

/// Tick and staccato annotations, rendered above the chord.
fn render_marks(chord: &Chord) -> String {
    if chord.ticks == 0 && !chord.staccato_dot && !chord.staccato_accent {
        return String::new();
    }
    let mut marks = String::from(r#"<span class="beat-marks">"#);
    if chord.staccato_accent {
        marks.push_str(r#"<span class="staccato-accent">^</span>"#);
    }
    if chord.staccato_dot {
        marks.push_str(r#"<span class="staccato-dot">.</span>"#);
    }
    if chord.ticks > 0 {
        marks.push_str(&format!(
            r#"<span class="tick-marks">{}</span>"#,
            "'".repeat(chord.ticks as usize)
        ));
    }
    marks.push_str("</span>");
    marks
}

/// The chord itself: base (or inversion fraction) plus superscripts in
/// the fixed order diminished, seventh, suspension.
fn render_chord_body(chord: &Chord) -> String {
    let mut html = String::new();

    match &chord.inversion {
        Some(bass) => html.push_str(&format!(
            r#"<span class="chord-inversion"><span class="inversion-top">{}</span><span class="inversion-slash">/</span><span class="inversion-bottom">{}</span></span>"#,
            escape_html(&chord.base),
            escape_html(bass)
        )),
        None => html.push_str(&escape_html(&chord.base)),
    }

    if chord.diminished {
        html.push_str(r#"<sup class="chord-diminished">o</sup>"#);
    }
    if chord.seventh {
        html.push_str(r#"<sup class="chord-seventh">7</sup>"#);
    }
    if chord.suspension != Suspension::None {
        html.push_str(&format!(
            r#"<sup class="chord-suspended">{}</sup>"#,
            chord.suspension.as_str()
        ));
    }

    html
}

/// Start repeat: thick bar, thin bar, two dots, reading left to right.
const REPEAT_START: &str = r#"<span class="repeat-start repeat-symbol"><span class="repeat-bars"><span class="repeat-bar-thick"></span><span class="repeat-bar-thin"></span></span><span class="repeat-dots"><span class="repeat-dot"></span><span class="repeat-dot"></span></span></span>"#;

/// End repeat: mirrored, dots first.
const REPEAT_END: &str = r#"<span class="repeat-end repeat-symbol"><span class="repeat-dots"><span class="repeat-dot"></span><span class="repeat-dot"></span></span><span class="repeat-bars"><span class="repeat-bar-thin"></span><span class="repeat-bar-thick"></span></span></span>"#;

fn render_footer(html: &mut String, meta: &SongMeta) {
    let songwriter = non_empty(&meta.songwriter);
    let charted_by = non_empty(&meta.charted_by);
    if songwriter.is_none() && charted_by.is_none() {
        return;
    }

    html.push_str(r#"<div class="chart-footer">"#);
    if let Some(songwriter) = songwriter {
        html.push_str(&format!(
            r#"<div class="songwriter-credit">artist: {}</div>"#,
            escape_html(songwriter)
        ));
    }
    if let Some(charted_by) = charted_by {
        html.push_str(&format!(
            r#"<div class="charted-by-credit">chart by: {}</div>"#,
            escape_html(charted_by)
        ));
    }
    html.push_str("</div>");
}

/// Treat missing and blank metadata fields the same way.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn meta() -> SongMeta {
        SongMeta {
            title: Some("Test Song".into()),
            key: Some("C".into()),
            tempo: Some("120".into()),
            time: Some("4/4".into()),
            songwriter: Some("Larry Laffer".into()),
            charted_by: Some("John Hayden".into()),
        }
    }

    #[test]
    fn header_has_title_key_and_tempo() {
        let html = render_chart(&parse("1 4 5 1"), &meta(), false);
        assert!(html.contains(r#"<div class="chart-title">Test Song</div>"#));
        assert!(html.contains(r#"<span class="key-display">key: C</span>"#));
        assert!(html.contains(r#"<span class="tempo-display">bpm: 120</span>"#));
    }

    #[test]
    fn time_signature_renders_as_fraction() {
        let html = render_chart(&parse(""), &meta(), false);
        assert!(html.contains(r#"<span class="time-top">4</span>"#));
        assert!(html.contains(r#"<span class="time-bottom">4</span>"#));
    }

    #[test]
    fn time_signature_without_slash_is_plain_text() {
        let mut meta = meta();
        meta.time = Some("free".into());
        let html = render_chart(&parse(""), &meta, false);
        assert!(html.contains("time: free"));
        assert!(!html.contains("time-sig-fraction"));
    }

    #[test]
    fn missing_fields_are_omitted() {
        let html = render_chart(&parse("1"), &SongMeta::default(), false);
        assert!(html.contains(r#"<div class="chart-title"></div>"#));
        assert!(!html.contains("key-display"));
        assert!(!html.contains("tempo-display"));
        assert!(!html.contains("chart-footer"));
    }

    #[test]
    fn section_label_renders_in_a_box() {
        let html = render_chart(&parse("C: 1 5 6- 4"), &meta(), false);
        assert!(html.contains(r#"<span class="section-box" title="Chorus">C</span>"#));
    }

    #[test]
    fn unlabeled_section_keeps_placeholder() {
        let html = render_chart(&parse("1 4 5 1"), &meta(), false);
        assert!(html.contains(r#"<div class="section-label"></div>"#));
    }

    #[test]
    fn superscripts_in_fixed_order() {
        let html = render_chart(&parse("7o"), &meta(), false);
        assert!(html.contains(r#"<sup class="chord-diminished">o</sup>"#));

        // diminished sup must come before seventh, seventh before suspension
        let html = render_chart(&parse("1o7sus"), &meta(), false);
        let dim = html.find("chord-diminished");
        let seventh = html.find("chord-seventh");
        let sus = html.find("chord-suspended");
        // "1o7sus": sus stripped, then 7, then o
        assert!(dim.is_some() && seventh.is_some() && sus.is_some());
        assert!(dim < seventh && seventh < sus);
    }

    #[test]
    fn inversion_renders_as_fraction() {
        let html = render_chart(&parse("5/1"), &meta(), false);
        assert!(html.contains(r#"<span class="inversion-top">5</span>"#));
        assert!(html.contains(r#"<span class="inversion-bottom">1</span>"#));
    }

    #[test]
    fn held_chord_renders_in_diamond() {
        let html = render_chart(&parse("<1>"), &meta(), false);
        assert!(html.contains(r#"<span class="diamond"><span class="diamond-text">1"#));
        assert!(html.contains("held-chord"));
    }

    #[test]
    fn push_glyph_stays_outside_the_diamond() {
        let html = render_chart(&parse("<5<>"), &meta(), false);
        let push = html.find(r#"class="push push-early""#).unwrap();
        let diamond = html.find(r#"class="diamond""#).unwrap();
        assert!(push < diamond);
    }

    #[test]
    fn tied_group_shares_one_wrapper() {
        let html = render_chart(&parse("1_4_5"), &meta(), false);
        assert_eq!(html.matches("tied-group").count(), 1);
        assert_eq!(html.matches(r#"<span class="tied-part">"#).count(), 3);
    }

    #[test]
    fn held_part_inside_tie_keeps_the_underline() {
        let html = render_chart(&parse("<1>_4"), &meta(), false);
        assert!(html.contains("tied-held"));
        // the diamond lives inside the tied group wrapper
        let group = html.find("tied-group").unwrap();
        let diamond = html.find(r#"class="diamond""#).unwrap();
        assert!(group < diamond);
    }

    #[test]
    fn tied_part_push_is_hoisted_outside_the_group() {
        let html = render_chart(&parse("1<_4"), &meta(), false);
        let push = html.find("push-early").unwrap();
        let group = html.find("tied-group").unwrap();
        assert!(push < group);
    }

    #[test]
    fn ticks_and_staccato_render_above_the_chord() {
        let html = render_chart(&parse("1''*"), &meta(), false);
        assert!(html.contains(r#"<span class="tick-marks">''</span>"#));
        assert!(html.contains(r#"<span class="staccato-dot">.</span>"#));
    }

    #[test]
    fn repeat_symbols_attach_to_edge_beats() {
        let html = render_chart(&parse("||:\n1 5 6- 4\n:||"), &meta(), false);
        assert!(html.contains("repeat-start"));
        assert!(html.contains("repeat-end"));
        // never rendered as a separate bar: exactly 4 beat spans
        assert_eq!(html.matches(r#"<span class="beat"#).count(), 4);
    }

    #[test]
    fn bar_comment_renders_after_the_beats() {
        let html = render_chart(&parse("C: 1 5 6- 4\n#nice"), &meta(), false);
        assert!(html.contains(r#"<div class="bar-comment">nice</div>"#));
    }

    #[test]
    fn header_comment_renders_under_the_header() {
        let html = render_chart(&parse("# capo 2\n1 4 5 1"), &meta(), false);
        assert!(html.contains(r#"<div class="header-comment">capo 2</div>"#));
    }

    #[test]
    fn footer_credits() {
        let html = render_chart(&parse("1"), &meta(), false);
        assert!(html.contains("artist: Larry Laffer"));
        assert!(html.contains("chart by: John Hayden"));
    }

    #[test]
    fn two_column_flag_changes_content_class() {
        let doc = parse("1 4 5 1");
        let one = render_chart(&doc, &meta(), false);
        let two = render_chart(&doc, &meta(), true);
        assert!(one.contains(r#"<div class="chart-content">"#));
        assert!(two.contains(r#"<div class="chart-content two-column">"#));
    }

    #[test]
    fn free_text_is_escaped() {
        let mut meta = meta();
        meta.title = Some("Rock & <Roll>".into());
        let html = render_chart(&parse("# a & b"), &meta, false);
        assert!(html.contains("Rock &amp; &lt;Roll&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let doc = parse("V: 1 <5<> 1_4_5 4sus2\n#swing\n||:\n17 4-7 5/1 <1>\n:||");
        let first = render_chart(&doc, &meta(), true);
        let second = render_chart(&doc, &meta(), true);
        assert_eq!(first, second);
    }

    #[test]
    fn views_differ_only_in_wrapper_class() {
        let doc = parse("C: 1 5 6- 4");
        let views = render_views(&doc, &meta(), &RenderOptions::default());
        let preview_inner = views
            .preview
            .strip_prefix(r#"<div class="chart-preview font-handwriting size-medium">"#)
            .and_then(|s| s.strip_suffix("</div>"))
            .unwrap();
        let print_inner = views
            .print
            .strip_prefix(r#"<div class="print-only font-handwriting size-medium">"#)
            .and_then(|s| s.strip_suffix("</div>"))
            .unwrap();
        assert_eq!(preview_inner, print_inner);
    }
}
