//! Compiled synonym dictionary.
//!
//! Variants are staged in a [`SynonymDictionaryBuilder`] and sealed into an
//! immutable [`SynonymDictionary`], which owns a multi-pattern automaton plus
//! side tables mapping every pattern to its canonical term and source label.
//! Scanning is a single linear pass over the text regardless of how many
//! variants are registered, and reports overlapping occurrences of different
//! variants so that overlap resolution sees every candidate.
//!
//! # Examples
//!
//! ```
//! use tongyi::dictionary::SynonymDictionaryBuilder;
//! use tongyi::vocabulary::VocabularyRow;
//!
//! let mut builder = SynonymDictionaryBuilder::new("名词");
//! builder.add_row(&VocabularyRow::new("磁共振").with_variant("别名", "MRI"));
//! let dict = builder.build().unwrap();
//!
//! assert_eq!(dict.lookup("mri").unwrap().canonical.as_ref(), "磁共振");
//! assert_eq!(dict.label_of("磁共振"), Some("名词"));
//! ```

pub mod builder;

use std::ops::Range;
use std::sync::Arc;

use ahash::AHashMap;
use aho_corasick::AhoCorasick;

pub use builder::SynonymDictionaryBuilder;

/// A registered variant and what it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    /// Case-folded variant text.
    pub variant: String,
    /// Canonical term the variant is replaced with.
    pub canonical: Arc<str>,
    /// Source column of the variant.
    pub label: Arc<str>,
}

/// Immutable, shareable dictionary of variants.
#[derive(Debug, Clone)]
pub struct SynonymDictionary {
    automaton: AhoCorasick,
    entries: Vec<PatternEntry>,
    index: AHashMap<String, usize>,
    canonical_terms: usize,
    canonical_label: Arc<str>,
}

impl SynonymDictionary {
    /// Look up a case-folded variant.
    pub fn lookup(&self, variant: &str) -> Option<&PatternEntry> {
        self.index.get(variant).map(|&idx| &self.entries[idx])
    }

    /// Label of a case-folded variant.
    pub fn label_of(&self, variant: &str) -> Option<&str> {
        self.lookup(variant).map(|entry| entry.label.as_ref())
    }

    /// All registered patterns, in pattern-id order.
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct canonical terms.
    pub fn canonical_terms(&self) -> usize {
        self.canonical_terms
    }

    /// Label recorded for canonical self-registrations.
    pub fn canonical_label(&self) -> &str {
        &self.canonical_label
    }

    /// Report every occurrence of every variant in `haystack`, including
    /// overlapping ones, as byte ranges ordered by end offset.
    pub fn find_overlapping<'a, 'h>(
        &'a self,
        haystack: &'h str,
    ) -> impl Iterator<Item = (&'a PatternEntry, Range<usize>)> + use<'a, 'h> {
        self.automaton
            .find_overlapping_iter(haystack)
            .map(move |m| (&self.entries[m.pattern().as_usize()], m.start()..m.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::VocabularyRow;

    fn dictionary() -> SynonymDictionary {
        let mut builder = SynonymDictionaryBuilder::new("名词");
        builder.add_row(
            &VocabularyRow::new("磁共振")
                .with_variant("别名", "MRI")
                .with_variant("别名2", "核磁共振"),
        );
        builder.add_row(&VocabularyRow::new("共振").with_variant("别名", "resonance"));
        builder.build().unwrap()
    }

    #[test]
    fn test_overlapping_matches_reported() {
        let dict = dictionary();
        let found: Vec<_> = dict
            .find_overlapping("核磁共振")
            .map(|(entry, span)| (entry.variant.clone(), span))
            .collect();

        // Nested variants ending at the same byte are all reported.
        assert!(found.contains(&("核磁共振".to_string(), 0..12)));
        assert!(found.contains(&("磁共振".to_string(), 3..12)));
        assert!(found.contains(&("共振".to_string(), 6..12)));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_entries_outlive_haystack() {
        let dict = dictionary();
        let entries: Vec<&PatternEntry> = {
            let haystack = String::from("做mri检查");
            dict.find_overlapping(&haystack).map(|(entry, _)| entry).collect()
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].canonical.as_ref(), "磁共振");
    }

    #[test]
    fn test_counts() {
        let dict = dictionary();
        assert_eq!(dict.len(), 5);
        assert_eq!(dict.canonical_terms(), 2);
        assert!(!dict.is_empty());
        assert_eq!(dict.canonical_label(), "名词");
    }

    #[test]
    fn test_lookup_is_case_folded() {
        let dict = dictionary();
        assert!(dict.lookup("MRI").is_none());
        let entry = dict.lookup("mri").unwrap();
        assert_eq!(entry.label.as_ref(), "别名");
        assert_eq!(dict.label_of("核磁共振"), Some("别名2"));
    }
}
