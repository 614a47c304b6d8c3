//! # Chord Modifier Grammar
//!
//! Parses the inner text of a single beat token into a [`Chord`].
//!
//! ## Strip order
//! Modifiers are recognized by peeling suffixes off the token in a fixed
//! order; the order matters because the patterns collide (a trailing `7`
//! means "seventh" only once tick, staccato, push, inversion, and
//! suspension marks have been removed):
//!
//! 1. trailing marks, repeatedly: `'` runs (ticks), `*` (staccato dot),
//!    `^` (staccato accent), `<` / `>` (push, at most one)
//! 2. `/` splits base from inversion bass
//! 3. `sus2` / `sus4` / `sus` / `s` suspension, longest match first
//! 4. trailing `7` (seventh)
//! 5. trailing `o` (diminished)
//! 6. the remainder is the base symbol
//!
//! Each step is an independent stripper returning the revised remainder
//! plus the extracted field, so the steps unit-test in isolation.
//!
//! There is no failure path: whatever survives the strippers is the base,
//! so `6-` keeps its `-` and an unrecognized token comes through as a
//! literal. This is deliberate; the sample charts rely on it.

use crate::ast::{Chord, Push, Suspension};

/// Strip a trailing run of `'` tick marks.
fn strip_ticks(s: &str) -> (&str, u8) {
    let trimmed = s.trim_end_matches('\'');
    let count = u8::try_from(s.len() - trimmed.len()).unwrap_or(u8::MAX);
    (trimmed, count)
}

/// Strip one trailing marker character.
fn strip_char(s: &str, mark: char) -> (&str, bool) {
    match s.strip_suffix(mark) {
        Some(rest) => (rest, true),
        None => (s, false),
    }
}

/// Strip one trailing push glyph.
fn strip_push(s: &str) -> (&str, Push) {
    if let Some(rest) = s.strip_suffix('<') {
        (rest, Push::Early)
    } else if let Some(rest) = s.strip_suffix('>') {
        (rest, Push::Late)
    } else {
        (s, Push::None)
    }
}

/// Split off the inversion bass at the first `/`.
fn split_inversion(s: &str) -> (&str, Option<String>) {
    match s.split_once('/') {
        Some((base, bass)) => (base, Some(bass.to_string())),
        None => (s, None),
    }
}

/// Strip a trailing suspension, longest spelling first.
fn strip_suspension(s: &str) -> (&str, Suspension) {
    for (suffix, sus) in [
        ("sus2", Suspension::Sus2),
        ("sus4", Suspension::Sus4),
        ("sus", Suspension::Sus),
        ("s", Suspension::S),
    ] {
        if let Some(rest) = s.strip_suffix(suffix) {
            return (rest, sus);
        }
    }
    (s, Suspension::None)
}

/// Parse one chord token (the inner text of a beat) into a [`Chord`].
pub fn parse_chord(token: &str) -> Chord {
    let mut chord = Chord::default();
    let mut rest = token;

    // Trailing marks can stack in any written order (1'^, 1^', 1*<);
    // keep stripping until none of them matches. Push is single-shot.
    loop {
        let (after_ticks, ticks) = strip_ticks(rest);
        if ticks > 0 {
            chord.ticks = chord.ticks.saturating_add(ticks);
            rest = after_ticks;
            continue;
        }
        if !chord.staccato_dot {
            let (after, hit) = strip_char(rest, '*');
            if hit {
                chord.staccato_dot = true;
                rest = after;
                continue;
            }
        }
        if !chord.staccato_accent {
            let (after, hit) = strip_char(rest, '^');
            if hit {
                chord.staccato_accent = true;
                rest = after;
                continue;
            }
        }
        if chord.push == Push::None {
            let (after, push) = strip_push(rest);
            if push != Push::None {
                chord.push = push;
                rest = after;
                continue;
            }
        }
        break;
    }

    let (rest, inversion) = split_inversion(rest);
    chord.inversion = inversion;

    let (rest, suspension) = strip_suspension(rest);
    chord.suspension = suspension;

    let (rest, seventh) = strip_char(rest, '7');
    chord.seventh = seventh;

    let (rest, diminished) = strip_char(rest, 'o');
    chord.diminished = diminished;

    chord.base = rest.to_string();
    chord
}
