//! Replacement planning and output assembly for one scan unit.

use ahash::AHashMap;

use crate::analysis::script::fold_case;
use crate::replace::scanner::ScanUnit;
use crate::replace::tagger::BrandSet;
use crate::replace::{Occurrence, Substitution};

/// Occurrences chosen for substitution, non-overlapping and ordered by start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementPlan {
    occurrences: Vec<Occurrence>,
}

impl ReplacementPlan {
    /// Select the resolved occurrences that are actually rewritten.
    ///
    /// Skipped are:
    /// - occurrences whose text already equals the canonical term;
    /// - aliases of a canonical term that was resolved more than once in the
    ///   run (only the canonical spelling itself may repeat);
    /// - brand-name mentions.
    pub fn new(resolved: &[Occurrence], brands: &BrandSet) -> Self {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for occurrence in resolved {
            *counts.entry(occurrence.canonical.as_ref()).or_default() += 1;
        }

        let occurrences = resolved
            .iter()
            .filter(|o| {
                let repeated = counts[o.canonical.as_ref()] > 1;
                if repeated && fold_case(&o.matched) != fold_case(&o.canonical) {
                    return false;
                }
                o.matched != o.canonical.as_ref() && !brands.contains_folded(&o.matched)
            })
            .cloned()
            .collect();

        ReplacementPlan { occurrences }
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

/// Output of one scan unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedRun {
    pub text: String,
    pub annotated: String,
    pub substitutions: Vec<Substitution>,
}

/// Splice the plan into the unit's text.
pub fn render(unit: &ScanUnit, plan: &ReplacementPlan) -> RenderedRun {
    let mut rendered = RenderedRun::default();
    let mut last = 0;

    for occurrence in plan.occurrences() {
        let gap = unit.slice(last..occurrence.start);
        let replacement = occurrence.replacement();

        rendered.text.push_str(&gap);
        rendered.text.push_str(&replacement);

        rendered.annotated.push_str(&gap);
        rendered.annotated.push_str(&occurrence.matched);
        rendered.annotated.push('(');
        rendered.annotated.push_str(&occurrence.canonical);
        rendered.annotated.push(')');

        rendered.substitutions.push(Substitution {
            original: occurrence.matched.clone(),
            replacement,
        });
        last = occurrence.end;
    }

    let tail = unit.slice(last..unit.len());
    rendered.text.push_str(&tail);
    rendered.annotated.push_str(&tail);
    rendered
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn occ(unit: &ScanUnit, start: usize, end: usize, canonical: &str) -> Occurrence {
        Occurrence {
            start,
            end,
            matched: unit.slice(start..end),
            canonical: Arc::from(canonical),
            label: Arc::from("别名"),
            pad_before: false,
            pad_after: false,
        }
    }

    fn brands() -> BrandSet {
        BrandSet::new(["GE", "西门子"])
    }

    #[test]
    fn test_render_single() {
        let unit = ScanUnit::new("做MRI检查");
        let plan = ReplacementPlan::new(&[occ(&unit, 1, 4, "磁共振")], &brands());
        let run = render(&unit, &plan);
        assert_eq!(run.text, "做磁共振检查");
        assert_eq!(run.annotated, "做MRI(磁共振)检查");
        assert_eq!(
            run.substitutions,
            vec![Substitution {
                original: "MRI".to_string(),
                replacement: "磁共振".to_string()
            }]
        );
    }

    #[test]
    fn test_canonical_self_match_is_noop() {
        let unit = ScanUnit::new("磁共振检查");
        let plan = ReplacementPlan::new(&[occ(&unit, 0, 3, "磁共振")], &brands());
        assert!(plan.is_empty());
        let run = render(&unit, &plan);
        assert_eq!(run.text, "磁共振检查");
        assert_eq!(run.annotated, "磁共振检查");
    }

    #[test]
    fn test_repeated_term_suppresses_aliases() {
        let unit = ScanUnit::new("MRI和mri");
        let resolved = [occ(&unit, 0, 3, "磁共振"), occ(&unit, 4, 7, "磁共振")];
        assert!(ReplacementPlan::new(&resolved, &brands()).is_empty());
    }

    #[test]
    fn test_repeated_term_keeps_case_variant_of_canonical() {
        // "ct" folds to the canonical "CT", so it still gets normalized.
        let unit = ScanUnit::new("ct和CT");
        let resolved = [occ(&unit, 0, 2, "CT"), occ(&unit, 3, 5, "CT")];
        let plan = ReplacementPlan::new(&resolved, &brands());
        assert_eq!(plan.occurrences().len(), 1);
        assert_eq!(render(&unit, &plan).text, "CT和CT");
    }

    #[test]
    fn test_brand_mentions_not_rendered() {
        let unit = ScanUnit::new("用ge设备");
        let plan = ReplacementPlan::new(&[occ(&unit, 1, 3, "通用电气")], &brands());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_render_with_padding_and_tail() {
        let unit = ScanUnit::new("CT探头ok");
        let mut probe = occ(&unit, 2, 4, "Probe");
        probe.pad_before = true;
        probe.pad_after = true;
        let run = render(&unit, &ReplacementPlan::new(&[probe], &brands()));
        assert_eq!(run.text, "CT Probe ok");
        assert_eq!(run.annotated, "CT探头(Probe)ok");
        assert_eq!(run.substitutions[0].replacement, " Probe ");
    }
}
