// Transform primitives: pure functions producing variant sets
//
// Every primitive keeps its input. A primitive only ever adds words, so
// stacking them can never drop a base word or an earlier variant.

use hashbrown::HashSet;

use pwforge_core::case::{capitalize, to_lower, to_upper};
use pwforge_core::character::simple_lower;
use pwforge_core::config::{LeetMap, YearRange};

/// A set of words derived from one or more source words.
pub type VariantSet = HashSet<String>;

/// The word itself plus its lowercase, uppercase and capitalized forms.
pub fn case_variants(word: &str) -> VariantSet {
    let mut out = VariantSet::with_capacity(4);
    out.insert(word.to_string());
    out.insert(to_lower(word));
    out.insert(to_upper(word));
    out.insert(capitalize(word));
    out
}

/// The word plus one variant per leet map entry whose letter occurs in it.
///
/// Each variant substitutes *every* occurrence of one letter class,
/// case-insensitively, and leaves all other characters untouched. Entries are
/// applied independently, never combined, so the output has at most
/// `1 + leet_map.len()` words.
pub fn leet_transform(word: &str, leet_map: &LeetMap) -> VariantSet {
    let mut out = VariantSet::with_capacity(1 + leet_map.len());
    out.insert(word.to_string());
    for (letter, substitute) in leet_map.iter() {
        if !word.chars().any(|c| simple_lower(c) == letter) {
            continue;
        }
        let replaced: String = word
            .chars()
            .map(|c| if simple_lower(c) == letter { substitute } else { c })
            .collect();
        out.insert(replaced);
    }
    out
}

/// Two-digit form of a year: the last two characters of its decimal form.
///
/// Years below 10 have a single digit and are returned whole.
pub fn short_year(year: u32) -> String {
    let full = year.to_string();
    full[full.len().saturating_sub(2)..].to_string()
}

/// Every word suffixed with every year of `range`, full and two-digit.
///
/// Lazy, so a caller enforcing a size limit can stop after any item without
/// the whole stage having been built.
pub fn year_suffixed<'a, I>(words: I, range: YearRange) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = &'a String>,
    I::IntoIter: 'a,
{
    words.into_iter().flat_map(move |word| {
        range.years().flat_map(move |y| {
            let full = y.to_string();
            let short = short_year(y);
            [format!("{word}{full}"), format!("{word}{short}")]
        })
    })
}

/// Every word with every symbol as prefix and as suffix. Lazy like
/// [`year_suffixed`].
pub fn symbol_affixed<'a, I, S>(words: I, symbols: &'a [S]) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = &'a String>,
    I::IntoIter: 'a,
    S: AsRef<str>,
{
    words.into_iter().flat_map(move |word| {
        symbols.iter().flat_map(move |symbol| {
            let symbol = symbol.as_ref();
            [format!("{symbol}{word}"), format!("{word}{symbol}")]
        })
    })
}

/// The input words plus, for every year in `range`, each word suffixed with
/// the full year and with its two-digit form.
pub fn append_years(words: &VariantSet, range: YearRange) -> VariantSet {
    let mut out = words.clone();
    out.extend(year_suffixed(words, range));
    out
}

/// The input words plus every `symbol + word` and `word + symbol`.
pub fn affix_symbols<S: AsRef<str>>(words: &VariantSet, symbols: &[S]) -> VariantSet {
    let mut out = words.clone();
    out.extend(symbol_affixed(words, symbols));
    out
}
