// Whole-word case conversion
//
// Every helper maps one char to one char through the simple case mapping,
// so a recased word always has the same char count as its source.

use crate::character::{simple_lower, simple_upper};

/// Lowercase every letter of `word`.
pub fn to_lower(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

/// Uppercase every letter of `word`.
pub fn to_upper(word: &str) -> String {
    word.chars().map(simple_upper).collect()
}

/// Uppercase the first character and lowercase the rest.
///
/// A leading non-letter is left as is and does not shift the capital:
/// "1st" stays "1st" and "rEX" becomes "Rex".
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(simple_upper(first))
            .chain(chars.map(simple_lower))
            .collect(),
        None => String::new(),
    }
}
