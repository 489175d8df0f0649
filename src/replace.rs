//! Synonym detection and replacement.
//!
//! ## Pipeline
//!
//! ```text
//! text ── SpaceNormalizeCharFilter ── Segmenter ──┬── delimiter ───────────────┐
//!                                                 │                            │
//!                                                 └── content run              │
//!                                                      scanner::scan           │
//!                                                      boundary::accept        │
//!                                                      resolver::resolve       │
//!                                                      tagger::Tagger::tag     │
//!                                                      renderer::plan/render   │
//!                                                           │                  │
//!                                                           v                  v
//!                                                 concatenated ReplaceOutput
//! ```
//!
//! Offsets inside a run are character indices into that run, half-open
//! (`start..end`).
//!
//! # Examples
//!
//! ```
//! use tongyi::config::ReplacerConfig;
//! use tongyi::replace::SynonymReplacer;
//! use tongyi::vocabulary::VocabularyRow;
//!
//! let rows = vec![VocabularyRow::new("磁共振").with_variant("别名", "MRI")];
//! let replacer = SynonymReplacer::from_rows(&rows, ReplacerConfig::default()).unwrap();
//!
//! let output = replacer.replace("我们用MRI检查");
//! assert_eq!(output.text, "我们用磁共振检查");
//! assert_eq!(output.annotated, "我们用MRI(磁共振)检查");
//! assert_eq!(output.replacements[0].original, "MRI");
//! ```

pub mod boundary;
pub mod renderer;
pub mod replacer;
pub mod resolver;
pub mod scanner;
pub mod tagger;

use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use replacer::SynonymReplacer;

/// A located variant occurrence inside one scan unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// First character of the match.
    pub start: usize,
    /// One past the last character of the match.
    pub end: usize,
    /// Matched text as it appears in the (normalized) input.
    pub matched: String,
    /// Canonical term the match resolves to.
    pub canonical: Arc<str>,
    /// Source label of the matched variant.
    pub label: Arc<str>,
    /// Insert a space before the canonical term.
    pub pad_before: bool,
    /// Insert a space after the canonical term.
    pub pad_after: bool,
}

impl Occurrence {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn overlaps(&self, other: &Occurrence) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Canonical term padded with the boundary spaces this match needs.
    pub fn replacement(&self) -> String {
        let mut out = String::with_capacity(self.canonical.len() + 2);
        if self.pad_before {
            out.push(' ');
        }
        out.push_str(&self.canonical);
        if self.pad_after {
            out.push(' ');
        }
        out
    }
}

/// One substitution made in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Text that was replaced.
    pub original: String,
    /// Text it was replaced with (canonical term plus boundary spaces).
    pub replacement: String,
}

/// Competitor signals for one input text.
///
/// Both flags are `None` when nothing was detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationFlags {
    /// A competitor brand name appears as a canonical-name mention.
    pub competitor_name_appear: Option<bool>,
    /// Every detected product traces back to a competitor brand.
    pub only_competitor_product_appear: Option<bool>,
}

impl ClassificationFlags {
    pub fn is_unset(&self) -> bool {
        self.competitor_name_appear.is_none() && self.only_competitor_product_appear.is_none()
    }

    pub fn competitor_name(&self) -> bool {
        self.competitor_name_appear.unwrap_or(false)
    }

    pub fn only_competitor_product(&self) -> bool {
        self.only_competitor_product_appear.unwrap_or(false)
    }
}

/// Result of replacing one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceOutput {
    /// Input with every planned occurrence replaced by its canonical term.
    pub text: String,
    /// Input with every planned occurrence written as `matched(canonical)`.
    pub annotated: String,
    /// Substitutions in output order.
    pub replacements: Vec<Substitution>,
    pub flags: ClassificationFlags,
}

impl ReplaceOutput {
    /// Output for input that needs no processing.
    pub fn unchanged(text: &str) -> Self {
        ReplaceOutput {
            text: text.to_string(),
            annotated: text.to_string(),
            replacements: Vec::new(),
            flags: ClassificationFlags::default(),
        }
    }

    pub fn is_changed(&self) -> bool {
        !self.replacements.is_empty()
    }
}
