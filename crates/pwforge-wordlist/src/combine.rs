// Pairwise combiner: two-word concatenations over the candidate set
//
// Candidates arrive as a sorted, duplicate-free slice. Walking index pairs
// `i < j` visits each unordered pair exactly once, so mirror suppression
// needs no bookkeeping and the surviving direction is always the one whose
// left word sorts first. The result does not depend on hash iteration order.

use hashbrown::HashSet;

use pwforge_core::config::Pairing;

/// Concatenate every pair of distinct candidates according to `pairing`.
///
/// `candidates` must be sorted and free of duplicates.
pub fn combine(candidates: &[String], pairing: Pairing) -> HashSet<String> {
    debug_assert!(candidates.windows(2).all(|w| w[0] < w[1]));

    let n = candidates.len();
    let capacity = pair_count(n, pairing);
    let mut out = HashSet::with_capacity(capacity);
    if capacity == 0 {
        return out;
    }

    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            out.insert(concat(a, b));
            if pairing == Pairing::Directional {
                out.insert(concat(b, a));
            }
        }
    }
    out
}

/// Number of concatenations produced for `n` distinct candidates, before
/// collisions between different pairs are collapsed.
pub fn pair_count(n: usize, pairing: Pairing) -> usize {
    let unordered = n.saturating_mul(n.saturating_sub(1)) / 2;
    match pairing {
        Pairing::Mirrored => unordered,
        Pairing::Directional => unordered.saturating_mul(2),
        Pairing::Disabled => 0,
    }
}

fn concat(a: &str, b: &str) -> String {
    let mut s = String::with_capacity(a.len() + b.len());
    s.push_str(a);
    s.push_str(b);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    fn sorted(set: HashSet<String>) -> Vec<String> {
        let mut v: Vec<String> = set.into_iter().collect();
        v.sort();
        v
    }

    #[test]
    fn mirrored_emits_one_direction() {
        let out = combine(&words(&["a", "b"]), Pairing::Mirrored);
        assert_eq!(sorted(out), vec!["ab"]);
    }

    #[test]
    fn mirrored_three_words() {
        let out = combine(&words(&["a", "b", "c"]), Pairing::Mirrored);
        assert_eq!(sorted(out), vec!["ab", "ac", "bc"]);
    }

    #[test]
    fn directional_emits_both() {
        let out = combine(&words(&["a", "b"]), Pairing::Directional);
        assert_eq!(sorted(out), vec!["ab", "ba"]);
    }

    #[test]
    fn disabled_emits_nothing() {
        assert!(combine(&words(&["a", "b"]), Pairing::Disabled).is_empty());
    }

    #[test]
    fn never_pairs_a_word_with_itself() {
        let out = combine(&words(&["x"]), Pairing::Directional);
        assert!(out.is_empty());
        assert!(combine(&[], Pairing::Mirrored).is_empty());
    }

    #[test]
    fn colliding_pairs_collapse() {
        // "a" + "bc" and "ab" + "c" both give "abc"
        let out = combine(&words(&["a", "ab", "bc", "c"]), Pairing::Mirrored);
        assert_eq!(pair_count(4, Pairing::Mirrored), 6);
        assert_eq!(out.len(), 5);
        assert!(out.contains("abc"));
    }

    #[test]
    fn pair_counts() {
        assert_eq!(pair_count(0, Pairing::Mirrored), 0);
        assert_eq!(pair_count(1, Pairing::Mirrored), 0);
        assert_eq!(pair_count(10, Pairing::Mirrored), 45);
        assert_eq!(pair_count(10, Pairing::Directional), 90);
        assert_eq!(pair_count(10, Pairing::Disabled), 0);
    }
}
