//! # Tongyi
//!
//! Multi-pattern synonym detection and replacement for mixed Chinese/English
//! text.
//!
//! A vocabulary table maps every canonical term to its variants: aliases,
//! abbreviations, translations and templates with `?` connector placeholders.
//! The table is compiled once into a [`SynonymDictionary`] backed by an
//! Aho-Corasick automaton; a [`SynonymReplacer`] then rewrites every variant
//! it finds to the canonical term, respecting ASCII word boundaries and
//! CJK/Latin spacing, and reports competitor-brand classification flags.
//!
//! ## Features
//!
//! - Case-insensitive overlapping matching with longest-match resolution
//! - Wildcard expansion over common connector characters
//! - Line-delimiter aware processing (real and escaped `\n`, `\r`, `\t`)
//! - Shared, immutable dictionaries for parallel batch replacement

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod replace;
pub mod vocabulary;

pub use config::ReplacerConfig;
pub use dictionary::{SynonymDictionary, SynonymDictionaryBuilder};
pub use error::{Result, TongyiError};
pub use replace::{ClassificationFlags, ReplaceOutput, Substitution, SynonymReplacer};
pub use vocabulary::table::VocabularyTable;
pub use vocabulary::{VariantCell, VocabularyRow};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
