//! Script-aware space normalization.
//!
//! Every run of ASCII spaces is rewritten according to its neighbours:
//!
//! | before | after | result |
//! |---|---|---|
//! | CJK ideograph | CJK ideograph | removed |
//! | ASCII letter | ASCII letter | one space |
//! | anything else | anything else | one space |
//!
//! Only the space character is touched; tabs and newlines are left for the
//! segmenter.

use crate::analysis::script::is_cjk;

use super::{CharFilter, Transformation};

/// Collapses space runs, deleting those that sit between two CJK ideographs.
#[derive(Clone, Debug, Default)]
pub struct SpaceNormalizeCharFilter;

impl SpaceNormalizeCharFilter {
    pub fn new() -> Self {
        SpaceNormalizeCharFilter
    }

    fn replacement(prev: Option<char>, next: Option<char>) -> &'static str {
        match (prev, next) {
            (Some(p), Some(n)) if is_cjk(p) && is_cjk(n) => "",
            // Latin-Latin and mixed runs both keep a single separator.
            _ => " ",
        }
    }
}

impl CharFilter for SpaceNormalizeCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();

        let mut prev: Option<char> = None;
        let mut chars = input.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c != ' ' {
                output.push(c);
                prev = Some(c);
                continue;
            }

            let mut end = start + 1;
            while let Some(&(i, ' ')) = chars.peek() {
                end = i + 1;
                chars.next();
            }
            let next = chars.peek().map(|&(_, n)| n);

            let replacement = Self::replacement(prev, next);
            let new_start = output.len();
            output.push_str(replacement);

            if end - start != replacement.len() {
                transformations.push(Transformation::new(start, end, new_start, output.len()));
            }
            prev = Some(' ');
        }

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "space_normalize"
    }
}
