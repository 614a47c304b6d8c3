//! Integration tests for the Nashville chart compiler
//!
//! Tests the full pipeline from chart text to rendered HTML markup.

use nashville::{
    compile, compile_views, demo_meta, parse, Beat, ChartRecord, RenderOptions, SongMeta,
    DEMO_CHART, BEATS_PER_BAR,
};

#[test]
fn compile_demo_chart() {
    let html = compile(DEMO_CHART, &demo_meta(), true);
    assert!(html.contains("My Demo Song"));
    assert!(html.contains("diamond"));
    assert!(html.contains("tied-group"));
    assert!(html.contains("repeat-start"));
    assert!(html.contains("repeat-end"));
    assert!(html.contains("chord-inversion"));
    assert!(html.contains("chart-footer"));
}

#[test]
fn every_bar_always_has_four_beats() {
    // property holds regardless of how ragged the input is
    let sources = [
        DEMO_CHART,
        "1",
        "1 2 3 4 5",
        "V: 1 4 5 1 1\nC: 1\n\n5 5 5 5 5 5 5",
        "||:\n1\n:||",
    ];
    for source in sources {
        let doc = parse(source);
        for section in &doc.sections {
            for bar in &section.bars {
                assert_eq!(bar.beats.len(), BEATS_PER_BAR, "source: {:?}", source);
            }
        }
    }
}

#[test]
fn rendering_is_idempotent() {
    let meta = demo_meta();
    let first = compile(DEMO_CHART, &meta, true);
    let second = compile(DEMO_CHART, &meta, true);
    assert_eq!(first, second);
}

#[test]
fn chorus_line_end_to_end() {
    let doc = parse("C: 1 5 6- 4");
    assert_eq!(doc.sections.len(), 1);
    let section = &doc.sections[0];
    assert_eq!(section.label.display, "C");
    assert_eq!(section.label.full, "Chorus");
    assert_eq!(section.bars.len(), 1);

    let bases: Vec<String> = section.bars[0]
        .beats
        .iter()
        .map(|beat| match beat {
            Beat::Plain(chord) => chord.base.clone(),
            other => panic!("expected plain beat, got {:?}", other),
        })
        .collect();
    assert_eq!(bases, ["1", "5", "6-", "4"]);
}

#[test]
fn comment_attaches_to_the_bar_above() {
    let doc = parse("C: 1 5 6- 4\n#nice\n");
    assert_eq!(doc.sections[0].bars[0].comment.as_deref(), Some("nice"));

    let html = compile("C: 1 5 6- 4\n#nice\n", &SongMeta::default(), false);
    assert!(html.contains(r#"<div class="bar-comment">nice</div>"#));
}

#[test]
fn held_chord_with_early_push() {
    let doc = parse("<5<>");
    match &doc.sections[0].bars[0].beats[0] {
        Beat::Held(chord) => {
            assert_eq!(chord.base, "5");
            assert_eq!(chord.push, nashville::Push::Early);
        }
        other => panic!("expected held beat, got {:?}", other),
    }
}

#[test]
fn tied_tick_budget_is_clamped() {
    let doc = parse("1''_4''_5''");
    match &doc.sections[0].bars[0].beats[0] {
        Beat::Tied(parts) => {
            let ticks: Vec<u8> = parts.iter().map(|p| p.chord.ticks).collect();
            assert_eq!(ticks, [2, 2, 0]);
        }
        other => panic!("expected tied beat, got {:?}", other),
    }
}

#[test]
fn verse_two_label_expands() {
    let doc = parse("V2: 1 4 5 1");
    assert_eq!(doc.sections[0].label.display, "V2");
    assert_eq!(doc.sections[0].label.full, "Verse 2");
}

#[test]
fn malformed_tokens_never_abort_the_parse() {
    let html = compile("??? <<>> ___ :|| extra\n#still here", &SongMeta::default(), false);
    assert!(html.contains("chart-content"));
}

#[test]
fn preview_and_print_views_share_the_same_body() {
    let views = compile_views(DEMO_CHART, &demo_meta(), &RenderOptions::default());
    let strip =
        |s: &str| s.trim_start_matches(|c| c != '>').trim_end_matches("</div>").to_string();
    // drop each view's opening wrapper tag; the remainder must match
    assert_eq!(strip(&views.preview), strip(&views.print));
    assert!(views.preview.starts_with(r#"<div class="chart-preview "#));
    assert!(views.print.starts_with(r#"<div class="print-only "#));
}

#[test]
fn saved_record_round_trips_through_the_pipeline() {
    let record = ChartRecord {
        id: "42".to_string(),
        meta: demo_meta(),
        saved_at: "2026-08-30T12:00:00Z".to_string(),
        chart: DEMO_CHART.to_string(),
    };

    let decoded = ChartRecord::decode(&record.encode().unwrap()).unwrap();
    assert_eq!(decoded, record);

    let before = compile(&record.chart, &record.meta, true);
    let after = compile(&decoded.chart, &decoded.meta, true);
    assert_eq!(before, after);
}
