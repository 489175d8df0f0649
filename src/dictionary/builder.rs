//! Staging area for dictionary compilation.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use aho_corasick::{AhoCorasick, MatchKind};
use log::{info, trace, warn};

use crate::dictionary::{PatternEntry, SynonymDictionary};
use crate::error::{Result, TongyiError};
use crate::vocabulary::VocabularyRow;
use crate::vocabulary::expander::{SkipReason, VariantExpander};

/// Collects variants and seals them into a [`SynonymDictionary`].
///
/// Registering a variant that is already present overwrites its canonical
/// term and label (last registration wins) while keeping its pattern slot.
#[derive(Debug)]
pub struct SynonymDictionaryBuilder {
    canonical_label: Arc<str>,
    expander: VariantExpander,
    entries: Vec<PatternEntry>,
    index: AHashMap<String, usize>,
    interned: AHashSet<Arc<str>>,
}

impl SynonymDictionaryBuilder {
    /// Create a builder; canonical terms are registered under `canonical_label`.
    pub fn new<S: AsRef<str>>(canonical_label: S) -> Self {
        SynonymDictionaryBuilder {
            canonical_label: Arc::from(canonical_label.as_ref()),
            expander: VariantExpander::default(),
            entries: Vec::new(),
            index: AHashMap::new(),
            interned: AHashSet::new(),
        }
    }

    /// Use a custom variant expander.
    pub fn with_expander(mut self, expander: VariantExpander) -> Self {
        self.expander = expander;
        self
    }

    /// Number of variants staged so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn intern(&mut self, s: &str) -> Arc<str> {
        if let Some(existing) = self.interned.get(s) {
            return Arc::clone(existing);
        }
        let arc: Arc<str> = Arc::from(s);
        self.interned.insert(Arc::clone(&arc));
        arc
    }

    /// Register a row: the canonical term itself first, then every cell.
    ///
    /// Returns the number of variant strings registered.
    pub fn add_row(&mut self, row: &VocabularyRow) -> usize {
        let canonical = row.canonical.trim();
        if canonical.is_empty() {
            return 0;
        }

        let label = Arc::clone(&self.canonical_label);
        let mut registered = self.add_synonym(canonical, canonical, &label);
        for cell in &row.cells {
            registered += self.add_synonym(&cell.raw, canonical, &cell.label);
        }
        registered
    }

    /// Register `raw` (possibly a wildcard template) as resolving to `canonical`.
    ///
    /// Returns the number of variant strings registered.
    pub fn add_synonym(&mut self, raw: &str, canonical: &str, label: &str) -> usize {
        let variants = match self.expander.expand(raw) {
            Ok(variants) => variants,
            Err(SkipReason::Empty) => {
                trace!("empty variant for '{canonical}' skipped");
                return 0;
            }
            Err(SkipReason::TooManyWildcards(n)) => {
                warn!(
                    "variant '{raw}' for '{canonical}' has {n} wildcards (max {}), skipped",
                    self.expander.max_wildcards()
                );
                return 0;
            }
        };

        let canonical = self.intern(canonical.trim());
        let label = self.intern(label);
        let count = variants.len();

        for variant in variants {
            let existing = self.index.get(&variant).copied();
            match existing {
                Some(idx) => {
                    let entry = &mut self.entries[idx];
                    entry.canonical = Arc::clone(&canonical);
                    entry.label = Arc::clone(&label);
                }
                None => {
                    self.index.insert(variant.clone(), self.entries.len());
                    self.entries.push(PatternEntry {
                        variant,
                        canonical: Arc::clone(&canonical),
                        label: Arc::clone(&label),
                    });
                }
            }
        }

        count
    }

    /// Compile the automaton and seal the dictionary.
    pub fn build(self) -> Result<SynonymDictionary> {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(self.entries.iter().map(|entry| entry.variant.as_str()))
            .map_err(|e| TongyiError::pattern(format!("failed to build automaton: {e}")))?;

        let canonical_terms = self
            .entries
            .iter()
            .map(|entry| entry.canonical.as_ref())
            .collect::<AHashSet<_>>()
            .len();

        info!(
            "compiled {} variant mappings for {} canonical terms",
            self.entries.len(),
            canonical_terms
        );

        Ok(SynonymDictionary {
            automaton,
            entries: self.entries,
            index: self.index,
            canonical_terms,
            canonical_label: self.canonical_label,
        })
    }
}
