//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text before it is segmented and scanned,
//! so that incidental formatting noise does not defeat exact variant matching.
//!
//! # Available Filters
//!
//! - [`space_normalize::SpaceNormalizeCharFilter`] - Script-aware space collapsing
//!
//! # Examples
//!
//! ```
//! use tongyi::analysis::char_filter::CharFilter;
//! use tongyi::analysis::char_filter::space_normalize::SpaceNormalizeCharFilter;
//!
//! let filter = SpaceNormalizeCharFilter::new();
//! let (output, _) = filter.filter("核磁  共振 and   CT");
//! assert_eq!(output, "核磁共振 and CT");
//! ```

/// Represents a change in the text, mapping a byte range in the original text
/// to a byte range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }

    /// Signed change in length introduced by this transformation.
    pub fn delta(&self) -> isize {
        let original_len = (self.original_end - self.original_start) as isize;
        (self.new_end - self.new_start) as isize - original_len
    }
}

/// Trait for character filters that transform text before scanning.
///
/// Implementations return the modified text along with the list of
/// transformations that occurred, ordered by position.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod space_normalize;
