// Fan-out estimation
//
// Upper bounds on how many words a configuration can produce, computed from
// the configuration alone. Real counts are lower whenever variants collide
// (a word that is already lowercase, a letter missing from the leet map).

use pwforge_core::config::{Pairing, WordlistConfig};

use crate::combine::pair_count;

/// Multiplicative growth factors of a configuration.
///
/// Every factor is an upper bound, deterministic in the configuration. The
/// year factor counts two suffixes per year, but years below 100 have
/// identical full and two-digit forms ("7" and "7", "42" and "42"), so
/// ranges reaching into them produce fewer distinct words than the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOut {
    /// Variants per base word after casing and leet.
    pub per_word: usize,
    /// Factor applied by the year stage: `1 + 2 * years`.
    pub years: usize,
    /// Factor applied by the symbol stage.
    pub symbols: usize,
    pub pairing: Pairing,
}

impl FanOut {
    pub fn from_config(config: &WordlistConfig) -> Self {
        let casing = if config.casing { 4 } else { 1 };
        let leet = if config.leet {
            1 + config.leet_map.len()
        } else {
            1
        };
        let years = if config.years {
            1 + 2 * config.year_range.len()
        } else {
            1
        };
        let pairing = if config.is_identity() {
            Pairing::Disabled
        } else {
            config.pairing
        };
        Self {
            per_word: casing * leet,
            years,
            symbols: 1 + 2 * config.symbols.len(),
            pairing,
        }
    }

    /// Growth of one base word through every per-word and set-wide stage.
    pub fn multiplier(&self) -> usize {
        self.per_word
            .saturating_mul(self.years)
            .saturating_mul(self.symbols)
    }

    /// Largest possible candidate set for `base_words` distinct inputs.
    pub fn candidate_bound(&self, base_words: usize) -> usize {
        base_words.saturating_mul(self.multiplier())
    }

    /// Largest possible number of concatenations for `candidates` words.
    pub fn pair_bound(&self, candidates: usize) -> usize {
        pair_count(candidates, self.pairing)
    }

    /// Largest possible final wordlist for `base_words` distinct inputs.
    pub fn total_bound(&self, base_words: usize) -> usize {
        let candidates = self.candidate_bound(base_words);
        candidates.saturating_add(self.pair_bound(candidates))
    }
}
