//! Word-boundary acceptance and CJK/Latin spacing decisions.
//!
//! A raw match is widened in both directions while the neighbouring character
//! is an ASCII word character (`[A-Za-z0-9_-]`). If the widened span is a pure
//! ASCII word, the match is only accepted when it already covered the whole
//! word, so `gre` is not found inside `3d-gregory`. Spans containing anything
//! else (CJK, punctuation, spaces) are accepted as-is since CJK has no
//! word-internal boundaries to protect.

use crate::analysis::script::{is_ascii_alpha, is_word, is_word_char};
use crate::replace::Occurrence;
use crate::replace::scanner::{RawMatch, ScanUnit};

/// Widen `start..end` over adjacent word characters.
fn containing_word(folded: &[char], start: usize, end: usize) -> (usize, usize) {
    let mut w_start = start;
    while w_start > 0 && is_word_char(folded[w_start - 1]) {
        w_start -= 1;
    }
    let mut w_end = end;
    while w_end < folded.len() && is_word_char(folded[w_end]) {
        w_end += 1;
    }
    (w_start, w_end)
}

/// Accept or reject a raw match; accepted matches become [`Occurrence`]s
/// carrying their boundary spacing flags.
pub fn accept(unit: &ScanUnit, raw: &RawMatch<'_>) -> Option<Occurrence> {
    let folded = unit.folded_chars();
    let (w_start, w_end) = containing_word(folded, raw.start, raw.end);

    if is_word(&folded[w_start..w_end]) && (w_end - w_start) != (raw.end - raw.start) {
        return None;
    }

    let chars = unit.chars();
    let canonical = &raw.entry.canonical;
    let first_is_alpha = canonical.chars().next().is_some_and(is_ascii_alpha);
    let last_is_alpha = canonical.chars().next_back().is_some_and(is_ascii_alpha);

    let pad_before = raw.start > 0 && is_ascii_alpha(chars[raw.start - 1]) && first_is_alpha;
    let pad_after = raw.end < chars.len() && is_ascii_alpha(chars[raw.end]) && last_is_alpha;

    Some(Occurrence {
        start: raw.start,
        end: raw.end,
        matched: unit.slice(raw.start..raw.end),
        canonical: canonical.clone(),
        label: raw.entry.label.clone(),
        pad_before,
        pad_after,
    })
}

/// Apply [`accept`] to every raw match.
pub fn filter(unit: &ScanUnit, raw: &[RawMatch<'_>]) -> Vec<Occurrence> {
    raw.iter().filter_map(|m| accept(unit, m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{SynonymDictionary, SynonymDictionaryBuilder};
    use crate::replace::scanner::scan;

    fn dictionary() -> SynonymDictionary {
        let mut builder = SynonymDictionaryBuilder::new("名词");
        builder.add_synonym("gre", "格雷", "别名");
        builder.add_synonym("探头", "Probe", "别名");
        builder.add_synonym("mr?scanner", "磁共振", "别名");
        builder.build().unwrap()
    }

    fn accepted(text: &str) -> Vec<Occurrence> {
        let dict = dictionary();
        let unit = ScanUnit::new(text);
        filter(&unit, &scan(&dict, &unit))
    }

    #[test]
    fn test_partial_word_rejected() {
        assert!(accepted("3d-gregory").is_empty());
        assert!(accepted("agre").is_empty());
        assert!(accepted("gre2").is_empty());
    }

    #[test]
    fn test_whole_word_accepted() {
        let found = accepted("the gre test");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span(), 4..7);
        assert!(accepted("GRE").len() == 1);
        assert!(accepted("用gre做").len() == 1);
    }

    #[test]
    fn test_mixed_script_word_accepted() {
        // The widened span "ct探头" is not a pure ASCII word.
        let found = accepted("CT探头");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].matched, "探头");
    }

    #[test]
    fn test_connector_variants_accepted() {
        for text in ["use mr-scanner now", "use mr^scanner now", "use mr scanner now"] {
            let found = accepted(text);
            assert_eq!(found.len(), 1, "{text}");
            assert_eq!(found[0].span(), 4..14);
        }
    }

    #[test]
    fn test_spacing_flags() {
        let found = accepted("CT探头ok");
        assert!(found[0].pad_before);
        assert!(found[0].pad_after);
        assert_eq!(found[0].replacement(), " Probe ");

        let found = accepted("用探头做");
        assert!(!found[0].pad_before);
        assert!(!found[0].pad_after);

        // A CJK canonical term never needs padding.
        let found = accepted("用gre做");
        assert!(!found[0].pad_before);
        assert!(!found[0].pad_after);
    }
}
