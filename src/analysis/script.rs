//! Character classes used to decide match boundaries in mixed CJK/Latin text.
//!
//! Only three classes matter here: CJK unified ideographs (U+4E00..=U+9FFF),
//! ASCII letters, and ASCII "word" characters (letters, digits, `-` and `_`).
//! Everything else is treated as neutral punctuation.

/// Returns true for characters in the CJK Unified Ideographs block.
#[inline]
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Returns true for `a-z` and `A-Z`.
#[inline]
pub fn is_ascii_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true for characters that glue an ASCII word together.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Returns true when every character of `chars` is a word character.
pub fn is_word(chars: &[char]) -> bool {
    !chars.is_empty() && chars.iter().all(|&c| is_word_char(c))
}

/// Lowercase a single character, keeping it unchanged when its lowercase
/// form expands to several characters.
///
/// Folding one char into exactly one char keeps character offsets of the
/// folded text aligned with the original.
#[inline]
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Case-fold a string character by character (see [`fold_char`]).
pub fn fold_case(s: &str) -> String {
    s.chars().map(fold_char).collect()
}
