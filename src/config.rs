//! Configuration for vocabulary loading and replacement.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TongyiError};

/// Brand names tracked by the competitor classification flags.
pub const DEFAULT_BRAND_NAMES: [&str; 6] =
    ["GE", "西门子", "飞利浦", "Siemens", "通用电气", "Philips"];

/// Upper bound accepted for `max_wildcards`.
pub const MAX_WILDCARDS_LIMIT: usize = 8;

/// Configuration shared by the vocabulary loader and the replacer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplacerConfig {
    /// Column holding the canonical term. Also the label recorded for
    /// canonical self-registrations.
    pub canonical_column: String,

    /// Columns whose name contains any of these markers never supply variants.
    pub excluded_column_markers: Vec<String>,

    /// The first column containing this marker starts the skipped region.
    pub phonetic_column_marker: String,

    /// The first column containing this marker ends the skipped region.
    pub always_include_column_marker: String,

    /// Brand names used for competitor classification and excluded from rewriting.
    pub brand_names: Vec<String>,

    /// Maximum number of `?` placeholders accepted in one variant template.
    pub max_wildcards: usize,
}

impl Default for ReplacerConfig {
    fn default() -> Self {
        Self {
            canonical_column: "名词".to_string(),
            excluded_column_markers: vec!["不作参考".to_string(), "文本 35".to_string()],
            phonetic_column_marker: "读音音标".to_string(),
            always_include_column_marker: "GE商品名1".to_string(),
            brand_names: DEFAULT_BRAND_NAMES.iter().map(|s| s.to_string()).collect(),
            max_wildcards: 6,
        }
    }
}

impl ReplacerConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TongyiError::config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: ReplacerConfig = serde_json::from_str(content)
            .map_err(|e| TongyiError::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.canonical_column.trim().is_empty() {
            return Err(TongyiError::config("canonical_column must not be empty"));
        }
        if self.brand_names.iter().any(|b| b.trim().is_empty()) {
            return Err(TongyiError::config("brand_names must not contain empty names"));
        }
        if self.max_wildcards > MAX_WILDCARDS_LIMIT {
            return Err(TongyiError::config(format!(
                "max_wildcards must be at most {MAX_WILDCARDS_LIMIT}, got {}",
                self.max_wildcards
            )));
        }
        Ok(())
    }

    /// Label under which canonical self-registrations are recorded.
    pub fn canonical_label(&self) -> &str {
        &self.canonical_column
    }
}
