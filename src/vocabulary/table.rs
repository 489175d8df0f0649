//! Tabular vocabulary sources (JSON records and CSV).
//!
//! JSON input is an array of objects, one object per row:
//!
//! ```json
//! [
//!   {"名词": "磁共振", "别名": "MRI", "别名2": "核磁共振"},
//!   {"名词": "超声", "GE商品名1": "LOGIQ?E10"}
//! ]
//! ```
//!
//! Column order is the order in which keys first appear, which matters for the
//! skip-region rules applied by [`ColumnSelector`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ahash::AHashMap;
use csv::ReaderBuilder;
use log::{debug, trace};
use serde_json::Value;

use crate::config::ReplacerConfig;
use crate::error::{Result, TongyiError};
use crate::vocabulary::{VariantCell, VocabularyRow, clean_cell};

/// Decides which columns supply variants.
///
/// The canonical column and reference-only columns never do. Starting at the
/// phonetic-transcription column every column is skipped until the
/// always-include column is reached; from there on all columns count again.
#[derive(Debug, Clone)]
pub struct ColumnSelector<'a> {
    config: &'a ReplacerConfig,
}

impl<'a> ColumnSelector<'a> {
    pub fn new(config: &'a ReplacerConfig) -> Self {
        ColumnSelector { config }
    }

    fn is_reference_only(&self, column: &str) -> bool {
        column == self.config.canonical_column
            || self
                .config
                .excluded_column_markers
                .iter()
                .any(|marker| !marker.is_empty() && column.contains(marker.as_str()))
    }

    /// Indices of the columns that supply variants, in column order.
    pub fn select(&self, columns: &[String]) -> Vec<usize> {
        let mut selected = Vec::new();
        let mut in_skip_region = false;
        let mut include_rest = false;

        for (idx, column) in columns.iter().enumerate() {
            if column.contains(self.config.phonetic_column_marker.as_str()) {
                in_skip_region = true;
            }
            if self.is_reference_only(column) {
                continue;
            }
            if column.contains(self.config.always_include_column_marker.as_str()) {
                include_rest = true;
            }
            if in_skip_region && !include_rest {
                continue;
            }
            selected.push(idx);
        }

        selected
    }
}

/// A rectangular table of optional string cells with named columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyTable {
    columns: Vec<String>,
    records: Vec<Vec<Option<String>>>,
}

impl VocabularyTable {
    /// Build a table from columns and records. Short records are padded with
    /// missing cells.
    pub fn new(columns: Vec<String>, mut records: Vec<Vec<Option<String>>>) -> Self {
        for record in &mut records {
            record.resize(columns.len(), None);
        }
        VocabularyTable { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load an array of JSON records from a file.
    pub fn from_json_records_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TongyiError::vocabulary(format!(
                "Failed to read vocabulary file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_records_str(&content)
    }

    /// Parse an array of JSON records.
    pub fn from_json_records_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Array(items) = value else {
            return Err(TongyiError::vocabulary(
                "vocabulary JSON must be an array of records",
            ));
        };

        let mut columns: Vec<String> = Vec::new();
        let mut column_index: AHashMap<String, usize> = AHashMap::new();
        let mut records = Vec::with_capacity(items.len());

        for (line, item) in items.into_iter().enumerate() {
            let Value::Object(map) = item else {
                return Err(TongyiError::vocabulary(format!(
                    "vocabulary record {line} is not a JSON object"
                )));
            };

            let mut record = vec![None; columns.len()];
            for (key, cell) in map {
                let idx = *column_index.entry(key.clone()).or_insert_with(|| {
                    columns.push(key);
                    columns.len() - 1
                });
                if idx >= record.len() {
                    record.resize(idx + 1, None);
                }
                record[idx] = json_cell(cell);
            }
            records.push(record);
        }

        Ok(Self::new(columns, records))
    }

    /// Load a CSV file whose header row names the columns.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Read CSV data whose header row names the columns.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            records.push(record.iter().map(|cell| Some(cell.to_string())).collect());
        }

        Ok(Self::new(columns, records))
    }

    /// Load a table, choosing the format from the file extension
    /// (`.csv` for CSV, anything else is read as JSON records).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            Self::from_csv_file(path)
        } else {
            Self::from_json_records_file(path)
        }
    }

    /// Convert the table into vocabulary rows according to `config`.
    ///
    /// Fails when the canonical column is missing. Rows without a usable
    /// canonical term and cells holding missing-data markers are skipped.
    pub fn rows(&self, config: &ReplacerConfig) -> Result<Vec<VocabularyRow>> {
        let canonical_idx = self
            .columns
            .iter()
            .position(|c| *c == config.canonical_column)
            .ok_or_else(|| {
                TongyiError::vocabulary(format!(
                    "required canonical column '{}' not found",
                    config.canonical_column
                ))
            })?;

        let selected = ColumnSelector::new(config).select(&self.columns);
        debug!(
            "selected {} of {} columns: {:?}",
            selected.len(),
            self.columns.len(),
            selected.iter().map(|&i| self.columns[i].as_str()).collect::<Vec<_>>()
        );

        let mut rows = Vec::with_capacity(self.records.len());
        let mut skipped = 0;

        for (line, record) in self.records.iter().enumerate() {
            let Some(canonical) = record[canonical_idx].as_deref().and_then(clean_cell) else {
                trace!("row {line}: no canonical term, skipped");
                skipped += 1;
                continue;
            };

            let mut row = VocabularyRow::new(canonical);
            for &idx in &selected {
                match record[idx].as_deref().and_then(clean_cell) {
                    Some(raw) => row.cells.push(VariantCell::new(self.columns[idx].as_str(), raw)),
                    None => trace!("row {line}: empty cell in column '{}'", self.columns[idx]),
                }
            }
            rows.push(row);
        }

        debug!("read {} vocabulary rows ({} skipped)", rows.len(), skipped);
        Ok(rows)
    }
}

fn json_cell(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
