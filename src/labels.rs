//! # Section Labels
//!
//! Display-casing and full-name expansion for section label tokens.
//!
//! Canonical short tags map to full names through a fixed table: `V2`
//! expands to "Verse 2", `TA` to "Turn Around". Anything the table does
//! not know displays as typed and expands to itself.

use crate::ast::SectionLabel;

/// Canonical short tags and their full names.
const KNOWN_LABELS: &[(&str, &str)] = &[
    ("V", "Verse"),
    ("C", "Chorus"),
    ("B", "Bridge"),
    ("I", "Intro"),
    ("O", "Outro"),
    ("TA", "Turn Around"),
    ("PC", "Pre-Chorus"),
    ("S", "Solo"),
    ("T", "Tag"),
    ("INT", "Interlude"),
];

fn full_name_for(tag: &str) -> Option<&'static str> {
    KNOWN_LABELS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(tag))
        .map(|(_, full)| *full)
}

/// Apply the short-label case rule.
///
/// Labels of 3+ characters keep their casing verbatim ("Solo", "iNt").
/// Shorter labels uppercase unless they already mix upper and lower case,
/// so `v` becomes `V` but a deliberate `aB` stays `aB`.
fn display_case(raw: &str) -> String {
    if raw.chars().count() >= 3 {
        return raw.to_string();
    }
    let has_upper = raw.chars().any(|c| c.is_uppercase());
    let has_lower = raw.chars().any(|c| c.is_lowercase());
    if has_upper && has_lower {
        raw.to_string()
    } else {
        raw.to_uppercase()
    }
}

/// Expand a label to its full human name.
///
/// Matches either a bare canonical tag (`v` -> "Verse") or a canonical
/// tag followed by digits (`V2` -> "Verse 2"), case-insensitively.
/// Unknown labels expand to their display form unchanged.
fn expand(raw: &str, display: &str) -> String {
    if let Some(full) = full_name_for(raw) {
        return full.to_string();
    }

    let digits_at = raw
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i);
    if let Some(split) = digits_at {
        let (prefix, digits) = raw.split_at(split);
        if !prefix.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            if let Some(full) = full_name_for(prefix) {
                return format!("{} {}", full, digits);
            }
        }
    }

    display.to_string()
}

/// Build the three forms of a section label from the raw header token.
pub fn section_label(raw: &str) -> SectionLabel {
    let display = display_case(raw);
    let full = expand(raw, &display);
    SectionLabel {
        raw: raw.to_string(),
        display,
        full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_uppercases() {
        assert_eq!(section_label("v").display, "V");
        assert_eq!(section_label("ta").display, "TA");
    }

    #[test]
    fn short_mixed_case_is_preserved() {
        assert_eq!(section_label("aB").display, "aB");
    }

    #[test]
    fn long_label_keeps_casing_verbatim() {
        assert_eq!(section_label("Tag").display, "Tag");
        assert_eq!(section_label("iNt").display, "iNt");
        assert_eq!(section_label("Solo").display, "Solo");
    }

    #[test]
    fn canonical_tags_expand() {
        assert_eq!(section_label("v").full, "Verse");
        assert_eq!(section_label("C").full, "Chorus");
        assert_eq!(section_label("TA").full, "Turn Around");
        assert_eq!(section_label("int").full, "Interlude");
    }

    #[test]
    fn tag_with_digits_expands() {
        assert_eq!(section_label("V2").full, "Verse 2");
        assert_eq!(section_label("c3").full, "Chorus 3");
        assert_eq!(section_label("pc12").full, "Pre-Chorus 12");
    }

    #[test]
    fn unknown_label_expands_to_itself() {
        let label = section_label("Zz");
        assert_eq!(label.display, "Zz");
        assert_eq!(label.full, "Zz");
    }

    #[test]
    fn unknown_prefix_with_digits_is_not_expanded() {
        let label = section_label("Zz2");
        assert_eq!(label.full, "Zz2");
    }
}
