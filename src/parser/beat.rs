//! # Beat Token Shapes
//!
//! Second stage of the notation grammar: decides whether one
//! whitespace-delimited token is a held beat, a tied group, or a plain
//! chord, then hands the inner text to the chord grammar.
//!
//! Shapes are tested in priority order; first match wins:
//!
//! 1. `<text<>` — held, pushed early
//! 2. `<text>>` — held, pushed late
//! 3. `<text>`  — held
//! 4. contains `_` — tied group; each part is tested for the held
//!    shapes (diamond inside the tie) and otherwise parsed plain
//! 5. anything else — plain chord
//!
//! Tied groups have a tick budget: the parts' tick marks may not sum past
//! [`MAX_TIED_TICKS`]; the excess is trimmed from the rightmost parts so
//! the earliest parts keep their written durations.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Beat, Push, TiedPart, MAX_TIED_TICKS};
use crate::parser::chord::parse_chord;

static HELD_EARLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<(.+)<>$").unwrap());
static HELD_LATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<(.+)>>$").unwrap());
static HELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<(.+)>$").unwrap());

/// Match a token against the held shapes, returning the inner text and
/// the push carried by the brackets themselves.
fn match_held(token: &str) -> Option<(&str, Push)> {
    if let Some(caps) = HELD_EARLY.captures(token) {
        return Some((caps.get(1).unwrap().as_str(), Push::Early));
    }
    if let Some(caps) = HELD_LATE.captures(token) {
        return Some((caps.get(1).unwrap().as_str(), Push::Late));
    }
    if let Some(caps) = HELD.captures(token) {
        return Some((caps.get(1).unwrap().as_str(), Push::None));
    }
    None
}

/// Trim tied-part ticks to the shared budget, leftmost parts first.
fn cap_tied_ticks(parts: &mut [TiedPart]) {
    let mut remaining = MAX_TIED_TICKS;
    for part in parts.iter_mut() {
        let allowed = part.chord.ticks.min(remaining);
        part.chord.ticks = allowed;
        remaining -= allowed;
    }
}

/// Parse one whitespace-delimited token into a beat.
///
/// Never fails: a token that matches no shape degrades to a plain beat
/// whose base is whatever the chord grammar leaves over.
pub fn parse_beat(token: &str) -> Beat {
    if let Some((inner, push)) = match_held(token) {
        let mut chord = parse_chord(inner);
        if push != Push::None {
            chord.push = push;
        }
        return Beat::Held(chord);
    }

    if token.contains('_') {
        let mut parts: Vec<TiedPart> = token
            .split('_')
            .map(|part| match match_held(part) {
                Some((inner, push)) => {
                    let mut chord = parse_chord(inner);
                    if push != Push::None {
                        chord.push = push;
                    }
                    TiedPart { held: true, chord }
                }
                None => TiedPart {
                    held: false,
                    chord: parse_chord(part),
                },
            })
            .collect();
        cap_tied_ticks(&mut parts);
        return Beat::Tied(parts);
    }

    Beat::Plain(parse_chord(token))
}
