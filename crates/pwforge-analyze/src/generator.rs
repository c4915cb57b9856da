// Secure random password generation

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::entropy::pool_entropy_bits;

/// Length used when the caller does not choose one.
pub const DEFAULT_LENGTH: usize = 16;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
/// Printable ASCII punctuation.
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Error type for password generation requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error("password length must be >= {min}, got {length}")]
    TooShort { length: usize, min: usize },
    #[error("at least one character class must be enabled")]
    NoCharacterClasses,
    #[error("minimum class counts require {required} characters, but length is {length}")]
    MinimumsExceedLength { required: usize, length: usize },
}

/// Which character classes to draw from and how many of each to guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_digits: usize,
    pub min_symbols: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            min_lowercase: 1,
            min_uppercase: 1,
            min_digits: 1,
            min_symbols: 1,
        }
    }
}

impl GeneratorOptions {
    /// Enabled classes paired with their guaranteed minimum count.
    fn classes(&self) -> Vec<(&'static [u8], usize)> {
        [
            (self.lowercase, LOWERCASE, self.min_lowercase),
            (self.uppercase, UPPERCASE, self.min_uppercase),
            (self.digits, DIGITS, self.min_digits),
            (self.symbols, SYMBOLS, self.min_symbols),
        ]
        .into_iter()
        .filter_map(|(enabled, chars, min)| enabled.then_some((chars, min)))
        .collect()
    }
}

/// A generated password and the entropy of the process that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    /// `length * log2(pool)` over the union of enabled classes.
    pub entropy_bits: f64,
}

/// Generate a password using the thread-local CSPRNG.
pub fn generate_password(options: &GeneratorOptions) -> Result<GeneratedPassword, GeneratorError> {
    generate_password_with(options, &mut rand::rng())
}

/// Generate a password drawing randomness from `rng`.
///
/// Guaranteed minimums for each enabled class are drawn first, the rest of
/// the length is filled from the union of enabled classes, and the result is
/// shuffled so class positions are not predictable.
pub fn generate_password_with<R: Rng + ?Sized>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> Result<GeneratedPassword, GeneratorError> {
    if options.length < MIN_LENGTH {
        return Err(GeneratorError::TooShort {
            length: options.length,
            min: MIN_LENGTH,
        });
    }

    let classes = options.classes();
    if classes.is_empty() {
        return Err(GeneratorError::NoCharacterClasses);
    }

    let required: usize = classes.iter().map(|&(_, min)| min).sum();
    if required > options.length {
        return Err(GeneratorError::MinimumsExceedLength {
            required,
            length: options.length,
        });
    }

    let mut chars: Vec<u8> = Vec::with_capacity(options.length);
    for &(pool, min) in &classes {
        for _ in 0..min {
            chars.push(pick(pool, rng));
        }
    }

    let full_pool: Vec<u8> = classes.iter().flat_map(|&(pool, _)| pool.iter().copied()).collect();
    while chars.len() < options.length {
        chars.push(pick(&full_pool, rng));
    }
    chars.shuffle(rng);

    Ok(GeneratedPassword {
        password: chars.into_iter().map(char::from).collect(),
        entropy_bits: pool_entropy_bits(options.length, full_pool.len()),
    })
}

/// Uniformly pick one byte from a non-empty pool.
fn pick<R: Rng + ?Sized>(pool: &[u8], rng: &mut R) -> u8 {
    pool[rng.random_range(0..pool.len())]
}
