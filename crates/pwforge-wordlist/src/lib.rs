//! Wordlist mutation engine.
//!
//! Turns a handful of base words (names, pets, places) into a targeted
//! password-guessing wordlist by layering case variants, leet substitution,
//! year suffixes, symbol affixes and two-word concatenations.
//!
//! # Architecture
//!
//! - [`transform`] -- Pure primitives producing variant sets from words
//! - [`pipeline`] -- Chooses and orders the primitives; builds the candidate set
//! - [`combine`] -- Pairwise concatenation with mirror suppression
//! - [`assemble`] -- Final dedupe and sort
//! - [`fanout`] -- Upper bounds on output size for a configuration
//!
//! # Example
//!
//! ```
//! use pwforge_core::WordlistConfig;
//!
//! let config = WordlistConfig {
//!     casing: true,
//!     ..WordlistConfig::default()
//! };
//! let words = pwforge_wordlist::generate_wordlist(["apple"], &config).unwrap();
//! assert!(words.contains(&"Apple".to_string()));
//! ```

pub mod assemble;
pub mod combine;
pub mod fanout;
pub mod pipeline;
pub mod transform;

use pwforge_core::config::{ConfigError, Pairing, WordlistConfig};
use tracing::debug;

pub use fanout::FanOut;

/// Error type for wordlist generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordlistError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(
        "candidate set reached {candidates} words before combination, exceeding the limit of {limit}"
    )]
    CapacityExceeded { candidates: usize, limit: usize },
}

/// A validated configuration ready to generate wordlists.
///
/// The generator holds no state between calls; each `generate` works on its
/// own inputs and returns an independent list.
#[derive(Debug, Clone)]
pub struct WordlistGenerator {
    config: WordlistConfig,
}

impl WordlistGenerator {
    /// Validate `config` and build a generator from it.
    pub fn new(config: WordlistConfig) -> Result<Self, WordlistError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WordlistConfig {
        &self.config
    }

    pub fn fan_out(&self) -> FanOut {
        FanOut::from_config(&self.config)
    }

    /// Pairing actually used. With no transform enabled the combiner is
    /// skipped so the output is exactly the cleaned input set.
    fn effective_pairing(&self) -> Pairing {
        if self.config.is_identity() {
            Pairing::Disabled
        } else {
            self.config.pairing
        }
    }

    /// Generate the sorted, deduplicated wordlist for `inputs`.
    pub fn generate<I, S>(&self, inputs: I) -> Result<Vec<String>, WordlistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = tracing::debug_span!("generate_wordlist").entered();

        let pairing = self.effective_pairing();
        let limit = match pairing {
            Pairing::Disabled => None,
            _ => self.config.max_candidates,
        };
        let candidates = pipeline::mutate_within(inputs, &self.config, limit)?;

        let mut ordered: Vec<String> = candidates.into_iter().collect();
        ordered.sort_unstable();

        let combinations = combine::combine(&ordered, pairing);
        debug!(
            candidates = ordered.len(),
            combinations = combinations.len(),
            %pairing,
            "pairwise combination done"
        );

        let words = assemble::assemble(ordered, combinations);
        debug!(words = words.len(), "wordlist assembled");
        Ok(words)
    }
}

/// Generate a wordlist from `inputs` using `config`.
///
/// Blank and whitespace-only inputs are dropped. The result is sorted,
/// contains no duplicates, and is empty when every input is blank.
pub fn generate_wordlist<I, S>(inputs: I, config: &WordlistConfig) -> Result<Vec<String>, WordlistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    WordlistGenerator::new(config.clone())?.generate(inputs)
}
