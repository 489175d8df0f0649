//! Competitor classification signals.
//!
//! Tagging looks at every occurrence that survived overlap resolution, even
//! ones that end up not being rewritten, so the flags describe what was
//! detected rather than what was replaced.

use ahash::AHashSet;

use crate::analysis::script::fold_case;
use crate::dictionary::SynonymDictionary;
use crate::replace::{ClassificationFlags, Occurrence};

/// The configured brand names, with exact and case-folded lookups.
#[derive(Debug, Clone, Default)]
pub struct BrandSet {
    exact: AHashSet<String>,
    folded: AHashSet<String>,
}

impl BrandSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let folded = names.iter().map(|n| fold_case(n)).collect();
        let exact = names.into_iter().collect();
        BrandSet { exact, folded }
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, text: &str) -> bool {
        self.exact.contains(text)
    }

    /// Case-insensitive membership.
    pub fn contains_folded(&self, text: &str) -> bool {
        self.folded.contains(&fold_case(text))
    }

    /// True when `label` mentions any brand name.
    pub fn mentioned_in(&self, label: &str) -> bool {
        self.exact.iter().any(|name| label.contains(name.as_str()))
    }
}

/// Signals gathered from one run, OR-combined across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSignals {
    /// At least one occurrence survived resolution.
    pub detected: bool,
    /// A brand appeared as a canonical-name mention.
    pub competitor_name: bool,
    /// A product labelled with a brand was detected.
    pub competitor_product: bool,
    /// A product labelled without any brand was detected.
    pub own_product: bool,
}

impl RunSignals {
    pub fn merge(self, other: RunSignals) -> RunSignals {
        RunSignals {
            detected: self.detected || other.detected,
            competitor_name: self.competitor_name || other.competitor_name,
            competitor_product: self.competitor_product || other.competitor_product,
            own_product: self.own_product || other.own_product,
        }
    }

    /// Final flags; unset when nothing was detected.
    pub fn flags(&self) -> ClassificationFlags {
        if !self.detected {
            return ClassificationFlags::default();
        }
        ClassificationFlags {
            competitor_name_appear: Some(self.competitor_name),
            only_competitor_product_appear: Some(self.competitor_product && !self.own_product),
        }
    }
}

/// Derives [`RunSignals`] from resolved occurrences.
#[derive(Debug, Clone)]
pub struct Tagger {
    brands: BrandSet,
}

impl Tagger {
    pub fn new(brands: BrandSet) -> Self {
        Tagger { brands }
    }

    pub fn brands(&self) -> &BrandSet {
        &self.brands
    }

    /// A brand canonical term whose own dictionary entry carries the
    /// canonical-name label.
    fn is_competitor_name(&self, dictionary: &SynonymDictionary, occurrence: &Occurrence) -> bool {
        self.brands.contains(&occurrence.canonical)
            && dictionary
                .label_of(&fold_case(&occurrence.canonical))
                .is_some_and(|label| label.contains(dictionary.canonical_label()))
    }

    pub fn tag(&self, dictionary: &SynonymDictionary, occurrences: &[Occurrence]) -> RunSignals {
        let mut signals = RunSignals {
            detected: !occurrences.is_empty(),
            ..RunSignals::default()
        };

        for occurrence in occurrences {
            signals.competitor_name |= self.is_competitor_name(dictionary, occurrence);

            // A brand mention itself is not a product.
            if self.brands.contains_folded(&occurrence.matched) {
                continue;
            }
            if self.brands.mentioned_in(&occurrence.label) {
                signals.competitor_product = true;
            } else {
                signals.own_product = true;
            }
        }

        signals
    }
}
