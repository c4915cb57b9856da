// Wordlist assembler: final dedupe and lexicographic sort

/// Merge candidates and combinations into a sorted list without duplicates.
///
/// Sorting is by `str` ordering, i.e. by Unicode scalar value, which for
/// ASCII puts symbols and digits before uppercase before lowercase.
pub fn assemble<A, B>(candidates: A, combinations: B) -> Vec<String>
where
    A: IntoIterator<Item = String>,
    B: IntoIterator<Item = String>,
{
    let mut words: Vec<String> = candidates.into_iter().chain(combinations).collect();
    words.sort_unstable();
    words.dedup();
    words
}
