//! Vocabulary rows and the tabular sources they are read from.
//!
//! A vocabulary is a table where one column holds the canonical term and the
//! remaining (selected) columns hold raw variant strings. Each selected cell
//! becomes a [`VariantCell`] labelled with its column name; the label later
//! drives competitor classification.
//!
//! # Examples
//!
//! ```
//! use tongyi::config::ReplacerConfig;
//! use tongyi::vocabulary::table::VocabularyTable;
//!
//! let json = r#"[{"名词": "磁共振", "别名": "MRI", "备注不作参考": "x"}]"#;
//! let table = VocabularyTable::from_json_records_str(json).unwrap();
//! let rows = table.rows(&ReplacerConfig::default()).unwrap();
//!
//! assert_eq!(rows[0].canonical, "磁共振");
//! assert_eq!(rows[0].cells.len(), 1);
//! assert_eq!(rows[0].cells[0].raw, "MRI");
//! ```

pub mod expander;
pub mod table;

use serde::{Deserialize, Serialize};

/// One raw variant string together with the column it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantCell {
    pub label: String,
    pub raw: String,
}

impl VariantCell {
    pub fn new<L: Into<String>, R: Into<String>>(label: L, raw: R) -> Self {
        VariantCell {
            label: label.into(),
            raw: raw.into(),
        }
    }
}

/// A canonical term and the raw variants that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRow {
    pub canonical: String,
    pub cells: Vec<VariantCell>,
}

impl VocabularyRow {
    pub fn new<S: Into<String>>(canonical: S) -> Self {
        VocabularyRow {
            canonical: canonical.into(),
            cells: Vec::new(),
        }
    }

    /// Add a raw variant under `label`.
    pub fn with_variant<L: Into<String>, R: Into<String>>(mut self, label: L, raw: R) -> Self {
        self.cells.push(VariantCell::new(label, raw));
        self
    }
}

/// Clean a raw cell: trim it and drop the markers used for missing data
/// (`""`, `"/"`, `none`, `nan`, case-insensitive).
pub fn clean_cell(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed == "/"
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nan")
    {
        None
    } else {
        Some(trimmed)
    }
}
