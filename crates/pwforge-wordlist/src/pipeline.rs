// Mutation pipeline: decides which primitives run, in what order
//
// Stages:
//   1. trim, drop blanks, dedupe -> base words
//   2. per word: casing, then leet on top of every accumulated variant
//   3. union of all per-word sets -> candidate set
//   4. years (augment)
//   5. symbols (augment)

use hashbrown::HashSet;
use tracing::debug;

use pwforge_core::character::trim_word;
use pwforge_core::config::WordlistConfig;

use crate::WordlistError;
use crate::transform::{VariantSet, case_variants, leet_transform, symbol_affixed, year_suffixed};

/// Trim inputs, drop the ones left empty, and dedupe.
///
/// Order of first appearance is kept so that logs and errors refer to words
/// in the order the caller supplied them.
pub fn base_words<I, S>(inputs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for input in inputs {
        let word = trim_word(input.as_ref());
        if word.is_empty() || !seen.insert(word.to_string()) {
            continue;
        }
        words.push(word.to_string());
    }
    words
}

/// Variants of a single base word: casing first, then leet over the result.
///
/// With both enabled, leet substitution is applied to each case variant as
/// well as to the word itself, so "Easy" also yields "E4sy" and "EASY" yields
/// "E4SY".
pub fn word_variants(word: &str, config: &WordlistConfig) -> VariantSet {
    let mut variants = VariantSet::new();
    variants.insert(word.to_string());

    if config.casing {
        variants.extend(case_variants(word));
    }
    if config.leet {
        let leeted: Vec<String> = variants
            .iter()
            .flat_map(|v| leet_transform(v, &config.leet_map))
            .collect();
        variants.extend(leeted);
    }
    variants
}

/// Run every enabled stage over `inputs` and return the candidate set.
pub fn mutate<I, S>(inputs: I, config: &WordlistConfig) -> VariantSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates = VariantSet::new();
    // no limit, so the stages cannot fail
    let _ = run_stages(inputs, config, &mut Budget(None), &mut candidates);
    candidates
}

/// Like [`mutate`], but stop with `CapacityExceeded` as soon as the
/// candidate set grows past `limit`.
///
/// The check runs after every insertion, so a stage that would produce
/// millions of words (a very wide year range) is abandoned after at most
/// `limit + 1` of them.
pub fn mutate_within<I, S>(
    inputs: I,
    config: &WordlistConfig,
    limit: Option<usize>,
) -> Result<VariantSet, WordlistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates = VariantSet::new();
    run_stages(inputs, config, &mut Budget(limit), &mut candidates)?;
    Ok(candidates)
}

/// Optional cap on the candidate set size.
struct Budget(Option<usize>);

impl Budget {
    fn extend<T>(&mut self, set: &mut VariantSet, words: T) -> Result<(), WordlistError>
    where
        T: IntoIterator<Item = String>,
    {
        let Some(limit) = self.0 else {
            set.extend(words);
            return Ok(());
        };
        for word in words {
            set.insert(word);
            if set.len() > limit {
                return Err(WordlistError::CapacityExceeded {
                    candidates: set.len(),
                    limit,
                });
            }
        }
        Ok(())
    }
}

fn run_stages<I, S>(
    inputs: I,
    config: &WordlistConfig,
    budget: &mut Budget,
    candidates: &mut VariantSet,
) -> Result<(), WordlistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let base = base_words(inputs);
    debug!(base_words = base.len(), "collected base words");

    for word in &base {
        budget.extend(candidates, word_variants(word, config))?;
    }
    debug!(candidates = candidates.len(), "per-word variants merged");

    if config.years {
        let before: Vec<String> = candidates.iter().cloned().collect();
        budget.extend(candidates, year_suffixed(&before, config.year_range))?;
        debug!(
            candidates = candidates.len(),
            start = config.year_range.start,
            end = config.year_range.end,
            "years appended"
        );
    }

    if !config.symbols.is_empty() {
        let before: Vec<String> = candidates.iter().cloned().collect();
        budget.extend(candidates, symbol_affixed(&before, &config.symbols))?;
        debug!(
            candidates = candidates.len(),
            symbols = config.symbols.len(),
            "symbols affixed"
        );
    }
    Ok(())
}
