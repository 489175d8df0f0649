//! Expansion of raw vocabulary cells into concrete variant strings.
//!
//! A raw variant may be a wildcard template: every `?` stands for one entry of
//! [`WILDCARD_ALPHABET`] and the template expands to the Cartesian product over
//! all placeholder positions. Strings produced from a template that contain
//! connector punctuation also register two punctuation-insensitive siblings:
//! one with the connectors deleted and one with each connector turned into a
//! single space.
//!
//! # Examples
//!
//! ```
//! use tongyi::vocabulary::expander::expand_wildcards;
//!
//! let variants = expand_wildcards("ab?cd");
//! assert_eq!(variants.len(), 6);
//! assert!(variants.contains(&"ab cd".to_string()));
//! assert!(variants.contains(&"abcd".to_string()));
//! ```

use std::collections::BTreeSet;

use crate::analysis::script::fold_case;

/// Placeholder marker in a variant template.
pub const WILDCARD: char = '?';

/// Substitutions for one placeholder, in expansion order.
pub const WILDCARD_ALPHABET: [&str; 6] = ["-", "_", "^", "", " ", "—"];

/// Connector punctuation stripped or spaced out when deriving siblings.
#[inline]
pub fn is_connector(c: char) -> bool {
    matches!(
        c,
        '-' | '_' | '`' | '!' | '@' | '#' | '$' | '%' | '^' | '&' | '=' | '~' | '—'
    )
}

/// Expand every placeholder of `template` over [`WILDCARD_ALPHABET`].
///
/// The product is built iteratively, one placeholder at a time. A template
/// without placeholders expands to itself.
pub fn expand_wildcards(template: &str) -> Vec<String> {
    let mut expansions = vec![String::with_capacity(template.len())];

    for c in template.chars() {
        if c == WILDCARD {
            expansions = expansions
                .iter()
                .flat_map(|prefix| {
                    WILDCARD_ALPHABET.iter().map(move |repl| {
                        let mut next = prefix.clone();
                        next.push_str(repl);
                        next
                    })
                })
                .collect();
        } else {
            for prefix in &mut expansions {
                prefix.push(c);
            }
        }
    }

    expansions
}

/// Delete all connector characters.
fn strip_connectors(word: &str) -> String {
    word.chars().filter(|&c| !is_connector(c)).collect::<String>().trim().to_string()
}

/// Replace connectors with spaces and collapse whitespace runs.
fn space_connectors(word: &str) -> String {
    let spaced: String = word.chars().map(|c| if is_connector(c) { ' ' } else { c }).collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Why a raw cell produced no variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    TooManyWildcards(usize),
}

/// Turns one raw cell into the set of folded variants registered for it.
#[derive(Debug, Clone, Copy)]
pub struct VariantExpander {
    max_wildcards: usize,
}

impl VariantExpander {
    pub fn new(max_wildcards: usize) -> Self {
        VariantExpander { max_wildcards }
    }

    pub fn max_wildcards(&self) -> usize {
        self.max_wildcards
    }

    /// Expand `raw` into sorted, de-duplicated, case-folded variants.
    pub fn expand(&self, raw: &str) -> Result<Vec<String>, SkipReason> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SkipReason::Empty);
        }

        let wildcards = raw.chars().filter(|&c| c == WILDCARD).count();
        if wildcards > self.max_wildcards {
            return Err(SkipReason::TooManyWildcards(wildcards));
        }

        let mut variants = BTreeSet::new();
        if wildcards == 0 {
            variants.insert(raw.to_string());
        } else {
            for word in expand_wildcards(raw) {
                if word.chars().any(is_connector) {
                    variants.insert(strip_connectors(&word));
                    variants.insert(space_connectors(&word));
                }
                variants.insert(word);
            }
        }

        let folded: BTreeSet<String> = variants
            .into_iter()
            .filter(|v| !v.trim().is_empty())
            .map(|v| fold_case(&v))
            .collect();

        if folded.is_empty() {
            return Err(SkipReason::Empty);
        }
        Ok(folded.into_iter().collect())
    }
}

impl Default for VariantExpander {
    fn default() -> Self {
        Self::new(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_single_placeholder() {
        let variants = expand_wildcards("ab?cd");
        assert_eq!(
            variants,
            vec!["ab-cd", "ab_cd", "ab^cd", "abcd", "ab cd", "ab—cd"]
        );
    }

    #[test]
    fn test_expand_two_placeholders_is_product() {
        let variants = expand_wildcards("a?b?c");
        assert_eq!(variants.len(), 36);
        assert_eq!(variants[0], "a-b-c");
        assert!(variants.contains(&"abc".to_string()));
        assert!(variants.contains(&"a_b c".to_string()));
    }

    #[test]
    fn test_expand_without_placeholder() {
        assert_eq!(expand_wildcards("MRI"), vec!["MRI"]);
    }

    #[test]
    fn test_plain_variant_is_literal() {
        let expander = VariantExpander::default();
        // Connector siblings are derived only for templates.
        assert_eq!(expander.expand("  X-Ray  ").unwrap(), vec!["x-ray"]);
    }

    #[test]
    fn test_template_registers_siblings() {
        let expander = VariantExpander::default();
        let variants = expander.expand("Logiq?E10").unwrap();
        let expected = [
            "logiq-e10",
            "logiq_e10",
            "logiq^e10",
            "logiqe10",
            "logiq e10",
            "logiq—e10",
        ];
        assert_eq!(variants.len(), expected.len());
        for v in expected {
            assert!(variants.contains(&v.to_string()), "missing {v}");
        }
    }

    #[test]
    fn test_siblings_of_existing_connectors() {
        let expander = VariantExpander::default();
        let variants = expander.expand("a#b?c").unwrap();
        assert!(variants.contains(&"a#b-c".to_string()));
        assert!(variants.contains(&"abc".to_string()));
        assert!(variants.contains(&"a b c".to_string()));
        assert!(!variants.contains(&"a b".to_string()));
    }

    #[test]
    fn test_skip_reasons() {
        let expander = VariantExpander::new(2);
        assert_eq!(expander.expand("   "), Err(SkipReason::Empty));
        assert_eq!(expander.expand("a?b?c?d"), Err(SkipReason::TooManyWildcards(3)));
        assert!(expander.expand("a?b?c").is_ok());
    }

    #[test]
    fn test_whitespace_only_expansions_dropped() {
        let variants = VariantExpander::default().expand("?").unwrap();
        assert_eq!(variants, vec!["-", "^", "_", "—"]);
    }
}
