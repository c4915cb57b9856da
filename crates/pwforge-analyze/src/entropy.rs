// Character-pool entropy estimation

use pwforge_core::character::{CharClass, char_class};

/// Pool size contributed by lowercase letters.
pub const LOWER_POOL: usize = 26;
/// Pool size contributed by uppercase letters.
pub const UPPER_POOL: usize = 26;
/// Pool size contributed by digits.
pub const DIGIT_POOL: usize = 10;
/// Pool size contributed by symbols (printable ASCII punctuation).
pub const SYMBOL_POOL: usize = 32;

/// Size of the guessing pool implied by the character classes present in
/// `password`.
///
/// Each class counts once, however many of its characters appear. Caseless
/// letters (`CharClass::Other`) add nothing.
pub fn pool_size(password: &str) -> usize {
    let (mut lower, mut upper, mut digit, mut symbol) = (false, false, false, false);
    for c in password.chars() {
        match char_class(c) {
            CharClass::Lower => lower = true,
            CharClass::Upper => upper = true,
            CharClass::Digit => digit = true,
            CharClass::Symbol => symbol = true,
            CharClass::Other => {}
        }
    }
    [
        (lower, LOWER_POOL),
        (upper, UPPER_POOL),
        (digit, DIGIT_POOL),
        (symbol, SYMBOL_POOL),
    ]
    .into_iter()
    .filter_map(|(present, size)| present.then_some(size))
    .sum()
}

/// `length * log2(pool_size)`; 0.0 for an empty pool.
pub fn pool_entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Estimate the entropy of `password` in bits.
///
/// Assumes every character was drawn uniformly from the union of the classes
/// seen in the password. Dictionary words and patterns are not detected, so
/// this is an upper bound for human-chosen passwords.
pub fn estimate_entropy_bits(password: &str) -> f64 {
    pool_entropy_bits(password.chars().count(), pool_size(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_password() {
        assert_eq!(pool_size(""), 0);
        assert_eq!(estimate_entropy_bits(""), 0.0);
    }

    #[test]
    fn pool_sizes() {
        assert_eq!(pool_size("password"), 26);
        assert_eq!(pool_size("Password"), 52);
        assert_eq!(pool_size("abc123"), 36);
        assert_eq!(pool_size("Pa55w0rd!"), 94);
        assert_eq!(pool_size("1234"), 10);
        assert_eq!(pool_size("!!"), 32);
    }

    #[test]
    fn caseless_letters_add_nothing() {
        assert_eq!(pool_size("\u{6F22}\u{5B57}"), 0);
        assert_eq!(estimate_entropy_bits("\u{6F22}\u{5B57}"), 0.0);
    }

    #[test]
    fn entropy_values() {
        assert!(close(estimate_entropy_bits("abc123"), 6.0 * 36f64.log2()));
        assert!(close(estimate_entropy_bits("password"), 8.0 * 26f64.log2()));
        // length counts characters, not bytes
        assert!(close(estimate_entropy_bits("\u{00E4}\u{00E4}"), 2.0 * 26f64.log2()));
    }

    #[test]
    fn pool_entropy() {
        assert!(close(pool_entropy_bits(16, 94), 16.0 * 94f64.log2()));
        assert!(close(pool_entropy_bits(10, 2), 10.0));
        assert_eq!(pool_entropy_bits(10, 0), 0.0);
        assert_eq!(pool_entropy_bits(0, 94), 0.0);
    }

    #[test]
    fn entropy_is_non_negative() {
        for pw in ["", "a", "A", "1", "!", "aA1!", "correcthorsebatterystaple"] {
            assert!(estimate_entropy_bits(pw) >= 0.0);
        }
    }
}
