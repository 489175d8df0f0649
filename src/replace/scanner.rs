//! Raw variant occurrences within one scan unit.

use std::ops::Range;

use crate::analysis::script::fold_char;
use crate::dictionary::{PatternEntry, SynonymDictionary};

/// One content run prepared for scanning.
///
/// Holds the original characters, their case-folded counterparts (same
/// length), the folded text handed to the automaton and a byte-to-char map
/// for translating automaton offsets.
#[derive(Debug, Clone)]
pub struct ScanUnit {
    chars: Vec<char>,
    folded_chars: Vec<char>,
    folded: String,
    char_at_byte: Vec<usize>,
}

impl ScanUnit {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let folded_chars: Vec<char> = chars.iter().map(|&c| fold_char(c)).collect();
        let folded: String = folded_chars.iter().collect();

        let mut char_at_byte = vec![0; folded.len() + 1];
        for (ci, (bi, _)) in folded.char_indices().enumerate() {
            char_at_byte[bi] = ci;
        }
        char_at_byte[folded.len()] = chars.len();

        ScanUnit {
            chars,
            folded_chars,
            folded,
            char_at_byte,
        }
    }

    /// Original characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Case-folded characters, index-aligned with [`chars`](Self::chars).
    pub fn folded_chars(&self) -> &[char] {
        &self.folded_chars
    }

    /// Case-folded text.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Original text of a character range.
    pub fn slice(&self, range: Range<usize>) -> String {
        self.chars[range].iter().collect()
    }

    fn char_index(&self, byte: usize) -> usize {
        self.char_at_byte[byte]
    }
}

/// A variant found by the automaton, before boundary checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'d> {
    pub start: usize,
    pub end: usize,
    pub entry: &'d PatternEntry,
}

/// Find every variant occurrence in `unit`.
///
/// Matches touching an underscore on either outer side are dropped: `_` joins
/// identifiers and must never be crossed.
pub fn scan<'d>(dictionary: &'d SynonymDictionary, unit: &ScanUnit) -> Vec<RawMatch<'d>> {
    let folded = unit.folded_chars();

    dictionary
        .find_overlapping(unit.folded())
        .filter_map(|(entry, bytes)| {
            let start = unit.char_index(bytes.start);
            let end = unit.char_index(bytes.end);

            let underscore_before = start > 0 && folded[start - 1] == '_';
            let underscore_after = end < folded.len() && folded[end] == '_';
            if underscore_before || underscore_after {
                return None;
            }
            Some(RawMatch { start, end, entry })
        })
        .collect()
}
