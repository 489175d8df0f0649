//! The synonym replacer: compiled dictionary plus per-call pipeline.

use std::path::Path;
use std::sync::Arc;

use log::trace;
use rayon::prelude::*;

use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::analysis::char_filter::space_normalize::SpaceNormalizeCharFilter;
use crate::analysis::segmenter::{Segment, Segmenter};
use crate::config::ReplacerConfig;
use crate::dictionary::{SynonymDictionary, SynonymDictionaryBuilder};
use crate::error::Result;
use crate::replace::ReplaceOutput;
use crate::replace::boundary;
use crate::replace::renderer::{RenderedRun, ReplacementPlan, render};
use crate::replace::resolver::resolve;
use crate::replace::scanner::{ScanUnit, scan};
use crate::replace::tagger::{BrandSet, RunSignals, Tagger};
use crate::vocabulary::VocabularyRow;
use crate::vocabulary::expander::VariantExpander;
use crate::vocabulary::table::VocabularyTable;

/// Detects variants in text and rewrites them to their canonical terms.
///
/// The dictionary is immutable once built and shared behind an [`Arc`], so a
/// replacer can serve any number of threads; every call keeps its working
/// state on its own stack.
#[derive(Debug, Clone)]
pub struct SynonymReplacer {
    dictionary: Arc<SynonymDictionary>,
    normalizer: SpaceNormalizeCharFilter,
    segmenter: Segmenter,
    tagger: Tagger,
    config: ReplacerConfig,
}

impl SynonymReplacer {
    /// Create a replacer over an already compiled dictionary.
    pub fn new(dictionary: Arc<SynonymDictionary>, config: ReplacerConfig) -> Result<Self> {
        config.validate()?;
        Ok(SynonymReplacer {
            dictionary,
            normalizer: SpaceNormalizeCharFilter::new(),
            segmenter: Segmenter::new()?,
            tagger: Tagger::new(BrandSet::new(config.brand_names.iter().cloned())),
            config,
        })
    }

    /// Compile `rows` and create a replacer.
    pub fn from_rows(rows: &[VocabularyRow], config: ReplacerConfig) -> Result<Self> {
        let mut builder = SynonymDictionaryBuilder::new(config.canonical_label())
            .with_expander(VariantExpander::new(config.max_wildcards));
        for row in rows {
            builder.add_row(row);
        }
        let dictionary = builder.build()?;
        Self::new(Arc::new(dictionary), config)
    }

    /// Compile a vocabulary table and create a replacer.
    pub fn from_table(table: &VocabularyTable, config: ReplacerConfig) -> Result<Self> {
        let rows = table.rows(&config)?;
        Self::from_rows(&rows, config)
    }

    /// Load a vocabulary file (`.csv` or JSON records) and create a replacer.
    pub fn from_path<P: AsRef<Path>>(path: P, config: ReplacerConfig) -> Result<Self> {
        let table = VocabularyTable::from_path(path)?;
        Self::from_table(&table, config)
    }

    pub fn dictionary(&self) -> &Arc<SynonymDictionary> {
        &self.dictionary
    }

    pub fn config(&self) -> &ReplacerConfig {
        &self.config
    }

    /// Replace every variant in `text` with its canonical term.
    ///
    /// Empty or whitespace-only input is returned untouched with unset flags.
    pub fn replace(&self, text: &str) -> ReplaceOutput {
        if text.trim().is_empty() {
            return ReplaceOutput::unchanged(text);
        }

        let (normalized, transformations) = self.normalizer.filter(text);
        if !transformations.is_empty() {
            trace!(
                "{}: {} edits, {:+} bytes",
                self.normalizer.name(),
                transformations.len(),
                transformations.iter().map(Transformation::delta).sum::<isize>()
            );
        }

        let mut output = ReplaceOutput::unchanged("");
        let mut signals = RunSignals::default();

        for segment in self.segmenter.segments(&normalized) {
            match segment {
                Segment::Delimiter(delimiter) => {
                    output.text.push_str(delimiter);
                    output.annotated.push_str(delimiter);
                }
                Segment::Content(content) => {
                    let (run, run_signals) = self.replace_run(content);
                    output.text.push_str(&run.text);
                    output.annotated.push_str(&run.annotated);
                    output.replacements.extend(run.substitutions);
                    signals = signals.merge(run_signals);
                }
            }
        }

        output.flags = signals.flags();
        output
    }

    /// Replace a batch of texts in parallel, preserving input order.
    pub fn replace_batch<S>(&self, texts: &[S]) -> Vec<ReplaceOutput>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.replace(text.as_ref())).collect()
    }

    fn replace_run(&self, content: &str) -> (RenderedRun, RunSignals) {
        let unit = ScanUnit::new(content);
        let raw = scan(&self.dictionary, &unit);
        let accepted = boundary::filter(&unit, &raw);
        let resolved = resolve(&unit, accepted);
        trace!(
            "run of {} chars: {} raw, {} resolved",
            unit.len(),
            raw.len(),
            resolved.len()
        );

        let signals = self.tagger.tag(&self.dictionary, &resolved);
        let plan = ReplacementPlan::new(&resolved, self.tagger.brands());
        (render(&unit, &plan), signals)
    }
}
