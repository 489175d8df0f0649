//! Overlap resolution: turns accepted occurrences into a non-overlapping set.
//!
//! Candidates are visited once, ordered by `(start ascending, end descending)`
//! so the longest match at a position is seen first. A candidate is either
//!
//! 1. merged into an earlier accepted occurrence of the *same* canonical term
//!    that it overlaps and extends, provided no whitespace touches the overlap;
//! 2. accepted when it starts at or after the end of everything accepted so far;
//! 3. dropped otherwise.
//!
//! Overlaps between different canonical terms are never merged: the earlier
//! (or longer) occurrence wins.

use std::cmp::Reverse;
use std::sync::Arc;

use ahash::AHashMap;

use crate::replace::Occurrence;
use crate::replace::scanner::ScanUnit;

/// Accumulator threaded through one resolution pass.
#[derive(Debug, Default)]
pub struct Resolution {
    accepted: Vec<Occurrence>,
    by_canonical: AHashMap<Arc<str>, Vec<usize>>,
    last_end: usize,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer the next candidate in sorted order.
    pub fn offer(&mut self, unit: &ScanUnit, candidate: Occurrence) {
        if self.try_extend(unit, &candidate) {
            return;
        }
        if candidate.start >= self.last_end {
            self.last_end = candidate.end;
            self.by_canonical
                .entry(Arc::clone(&candidate.canonical))
                .or_default()
                .push(self.accepted.len());
            self.accepted.push(candidate);
        }
    }

    fn try_extend(&mut self, unit: &ScanUnit, candidate: &Occurrence) -> bool {
        let Some(slots) = self.by_canonical.get(&candidate.canonical) else {
            return false;
        };
        let chars = unit.chars();

        for &slot in slots {
            let existing = &self.accepted[slot];
            let (es, ee) = (existing.start, existing.end);
            let (s, e) = (candidate.start, candidate.end);

            // Strict partial overlap: es < s < last char of existing < e - 1.
            if !(es < s && s + 1 < ee && e > ee) {
                continue;
            }

            let before_overlap = chars[s - 1];
            let after_overlap = chars[ee];
            let gap_has_space = ee < s && chars[ee..s].iter().any(|c| c.is_whitespace());
            if before_overlap.is_whitespace() || after_overlap.is_whitespace() || gap_has_space {
                continue;
            }

            let merged = Occurrence {
                start: es,
                end: e,
                matched: unit.slice(es..e),
                canonical: Arc::clone(&existing.canonical),
                label: Arc::clone(&existing.label),
                pad_before: existing.pad_before,
                pad_after: candidate.pad_after,
            };
            self.accepted[slot] = merged;
            self.last_end = e;
            return true;
        }

        false
    }

    /// Accepted occurrences, ordered by start.
    pub fn finish(self) -> Vec<Occurrence> {
        self.accepted
    }
}

/// Resolve `occurrences` into a non-overlapping list ordered by start.
pub fn resolve(unit: &ScanUnit, mut occurrences: Vec<Occurrence>) -> Vec<Occurrence> {
    occurrences.sort_by_key(|o| (o.start, Reverse(o.end)));

    let mut resolution = Resolution::new();
    for candidate in occurrences {
        resolution.offer(unit, candidate);
    }
    resolution.finish()
}
