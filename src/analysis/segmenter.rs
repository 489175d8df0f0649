//! Splits text into scan units on line/tab breaks.
//!
//! A delimiter is one or more consecutive `\n`, `\r`, `\t` characters or their
//! two-character escaped spellings (`\\n`, `\\r`, `\\t`). Delimiters are kept
//! verbatim so the pieces can be re-joined losslessly, but only the content
//! between them is ever scanned for variants.

use std::sync::Arc;

use regex::Regex;

use crate::error::{Result, TongyiError};

const DELIMITER_PATTERN: &str = r"(?:\n|\r|\t|\\[nrt])+";

/// One piece of segmented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text that is scanned for variants.
    Content(&'a str),
    /// A break that passes through untouched.
    Delimiter(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Content(s) | Segment::Delimiter(s) => s,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self, Segment::Content(_))
    }
}

/// Regex-driven splitter producing alternating content and delimiter runs.
#[derive(Clone, Debug)]
pub struct Segmenter {
    pattern: Arc<Regex>,
}

impl Segmenter {
    /// Create a segmenter with the standard line/tab delimiter pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DELIMITER_PATTERN)
    }

    /// Create a segmenter with a custom delimiter pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| TongyiError::invalid_argument(format!("Invalid delimiter pattern: {e}")))?;
        Ok(Segmenter {
            pattern: Arc::new(regex),
        })
    }

    /// Get the delimiter pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Split `text` into segments. Empty pieces are never produced.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                segments.push(Segment::Content(&text[last_end..mat.start()]));
            }
            if !mat.as_str().is_empty() {
                segments.push(Segment::Delimiter(mat.as_str()));
            }
            last_end = mat.end();
        }

        if last_end < text.len() {
            segments.push(Segment::Content(&text[last_end..]));
        }

        segments
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new().expect("Default delimiter pattern should be valid")
    }
}
