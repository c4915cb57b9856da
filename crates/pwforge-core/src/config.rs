// Wordlist configuration value type
//
// A `WordlistConfig` is built once per invocation (from defaults, a preset,
// a JSON file, or CLI flags) and never mutated by the engine. Every field has
// a serde default so partial JSON documents are accepted, and unknown keys
// are ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// First year of the default year range.
pub const DEFAULT_START_YEAR: u32 = 2000;

/// Default hard cap on the candidate set size before pairwise combination.
///
/// Mirrored pairing of 2000 candidates yields about two million
/// concatenations, which still fits comfortably in memory.
pub const DEFAULT_MAX_CANDIDATES: usize = 2000;

/// Default leet substitution table.
pub const DEFAULT_LEET: [(char, char); 6] = [
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Error type for invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("leet map key {0:?} is not a lowercase letter")]
    InvalidLeetKey(char),
    #[error("symbol at index {index} is empty")]
    EmptySymbol { index: usize },
    #[error("max_candidates must be greater than zero")]
    ZeroCapacity,
    #[error("invalid year range {0:?}: expected START-END")]
    InvalidYearRange(String),
    #[error("unknown pairing mode {0:?}: expected mirrored, directional or disabled")]
    UnknownPairing(String),
}

// ---------------------------------------------------------------------------
// YearRange
// ---------------------------------------------------------------------------

/// Inclusive range of years appended as suffixes.
///
/// A range with `start > end` is empty; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct YearRange {
    pub start: u32,
    pub end: u32,
}

impl YearRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Range from `DEFAULT_START_YEAR` to the current UTC year.
    pub fn until_current_year() -> Self {
        let now = u32::try_from(chrono::Utc::now().year()).unwrap_or(DEFAULT_START_YEAR);
        Self::new(DEFAULT_START_YEAR, now.max(DEFAULT_START_YEAR))
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of years in the range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn years(self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::until_current_year()
    }
}

impl From<(u32, u32)> for YearRange {
    fn from((start, end): (u32, u32)) -> Self {
        Self::new(start, end)
    }
}

impl From<YearRange> for (u32, u32) {
    fn from(range: YearRange) -> Self {
        (range.start, range.end)
    }
}

impl FromStr for YearRange {
    type Err = ConfigError;

    /// Parse `START-END`, or a single year `YYYY` meaning `YYYY-YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidYearRange(s.to_string());
        let s_trim = s.trim();
        match s_trim.split_once('-') {
            Some((start, end)) => {
                let start = start.trim().parse().map_err(|_| invalid())?;
                let end = end.trim().parse().map_err(|_| invalid())?;
                Ok(Self::new(start, end))
            }
            None => {
                let year = s_trim.parse().map_err(|_| invalid())?;
                Ok(Self::new(year, year))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// LeetMap
// ---------------------------------------------------------------------------

/// Mapping from a lowercase letter to its leet substitute.
///
/// Ordered so that variant generation and serialization are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeetMap(BTreeMap<char, char>);

impl LeetMap {
    /// An empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, letter: char, substitute: char) -> Option<char> {
        self.0.insert(letter, substitute)
    }

    pub fn get(&self, letter: char) -> Option<char> {
        self.0.get(&letter).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.0.keys().find(|k| !k.is_lowercase()) {
            Some(&key) => Err(ConfigError::InvalidLeetKey(key)),
            None => Ok(()),
        }
    }
}

impl Default for LeetMap {
    fn default() -> Self {
        DEFAULT_LEET.into_iter().collect()
    }
}

impl FromIterator<(char, char)> for LeetMap {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Pairing
// ---------------------------------------------------------------------------

/// How the pairwise combiner treats the two directions of a word pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pairing {
    /// One concatenation per unordered pair; the mirror is suppressed.
    #[default]
    Mirrored,
    /// Both `a + b` and `b + a` for every unordered pair.
    Directional,
    /// No pairwise combination.
    Disabled,
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pairing::Mirrored => "mirrored",
            Pairing::Directional => "directional",
            Pairing::Disabled => "disabled",
        })
    }
}

impl FromStr for Pairing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mirrored" => Ok(Pairing::Mirrored),
            "directional" => Ok(Pairing::Directional),
            "disabled" | "off" | "none" => Ok(Pairing::Disabled),
            _ => Err(ConfigError::UnknownPairing(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// WordlistConfig
// ---------------------------------------------------------------------------

/// Options controlling wordlist mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordlistConfig {
    /// Apply leet substitution to every accumulated variant.
    pub leet: bool,
    /// Generate lowercase, uppercase and capitalized forms.
    pub casing: bool,
    /// Append full and two-digit years from `year_range`.
    pub years: bool,
    pub year_range: YearRange,
    /// Strings affixed as both prefix and suffix.
    pub symbols: Vec<String>,
    pub leet_map: LeetMap,
    pub pairing: Pairing,
    /// Hard cap on the candidate set before combination. `None` disables it.
    pub max_candidates: Option<usize>,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            leet: false,
            casing: false,
            years: false,
            year_range: YearRange::default(),
            symbols: Vec::new(),
            leet_map: LeetMap::default(),
            pairing: Pairing::default(),
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
        }
    }
}

impl WordlistConfig {
    /// Every transform enabled, years 2000-2025 and the symbols `! @ #`.
    pub fn full() -> Self {
        Self {
            leet: true,
            casing: true,
            years: true,
            year_range: YearRange::new(2000, 2025),
            symbols: vec!["!".to_string(), "@".to_string(), "#".to_string()],
            ..Self::default()
        }
    }

    /// True when no per-word transform is enabled.
    pub fn is_identity(&self) -> bool {
        !self.leet && !self.casing && !self.years && self.symbols.is_empty()
    }

    /// Check the values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.leet_map.validate()?;
        if let Some(index) = self.symbols.iter().position(|s| s.is_empty()) {
            return Err(ConfigError::EmptySymbol { index });
        }
        if self.max_candidates == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_identity() {
        let cfg = WordlistConfig::default();
        assert!(cfg.is_identity());
        assert_eq!(cfg.year_range.start, DEFAULT_START_YEAR);
        assert!(cfg.year_range.end >= DEFAULT_START_YEAR);
        assert_eq!(cfg.pairing, Pairing::Mirrored);
        assert_eq!(cfg.max_candidates, Some(DEFAULT_MAX_CANDIDATES));
        assert_eq!(cfg.leet_map.len(), 6);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn full_preset() {
        let cfg = WordlistConfig::full();
        assert!(!cfg.is_identity());
        assert_eq!(cfg.year_range, YearRange::new(2000, 2025));
        assert_eq!(cfg.symbols, vec!["!", "@", "#"]);
    }

    #[test]
    fn year_range_len_and_empty() {
        assert_eq!(YearRange::new(2020, 2021).len(), 2);
        assert_eq!(YearRange::new(2021, 2021).len(), 1);
        let empty = YearRange::new(2025, 2000);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.years().count(), 0);
    }

    #[test]
    fn year_range_parse() {
        assert_eq!("2000-2025".parse::<YearRange>().unwrap(), YearRange::new(2000, 2025));
        assert_eq!(" 1999 - 2001 ".parse::<YearRange>().unwrap(), YearRange::new(1999, 2001));
        assert_eq!("2021".parse::<YearRange>().unwrap(), YearRange::new(2021, 2021));
        assert!(matches!(
            "20x0-2021".parse::<YearRange>(),
            Err(ConfigError::InvalidYearRange(_))
        ));
    }

    #[test]
    fn pairing_parse_and_display() {
        assert_eq!("mirrored".parse::<Pairing>().unwrap(), Pairing::Mirrored);
        assert_eq!("Directional".parse::<Pairing>().unwrap(), Pairing::Directional);
        assert_eq!("off".parse::<Pairing>().unwrap(), Pairing::Disabled);
        assert!("both".parse::<Pairing>().is_err());
        assert_eq!(Pairing::Directional.to_string(), "directional");
    }

    #[test]
    fn validate_rejects_bad_leet_key() {
        let mut cfg = WordlistConfig::default();
        cfg.leet_map.insert('A', '4');
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidLeetKey('A')));

        let mut cfg = WordlistConfig::default();
        cfg.leet_map.insert('1', 'i');
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidLeetKey('1')));
    }

    #[test]
    fn validate_rejects_empty_symbol_and_zero_cap() {
        let cfg = WordlistConfig {
            symbols: vec!["!".into(), String::new()],
            ..WordlistConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptySymbol { index: 1 }));

        let cfg = WordlistConfig {
            max_candidates: Some(0),
            ..WordlistConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn json_partial_document_uses_defaults() {
        let cfg: WordlistConfig =
            serde_json::from_str(r#"{"casing": true, "year_range": [2020, 2021], "theme": "dark"}"#)
                .unwrap();
        assert!(cfg.casing);
        assert!(!cfg.leet);
        assert_eq!(cfg.year_range, YearRange::new(2020, 2021));
        assert_eq!(cfg.leet_map, LeetMap::default());
        assert_eq!(cfg.max_candidates, Some(DEFAULT_MAX_CANDIDATES));
    }

    #[test]
    fn json_null_cap_is_unbounded() {
        let cfg: WordlistConfig = serde_json::from_str(r#"{"max_candidates": null}"#).unwrap();
        assert_eq!(cfg.max_candidates, None);
    }

    #[test]
    fn json_non_integer_year_is_rejected() {
        let res = serde_json::from_str::<WordlistConfig>(r#"{"year_range": ["x", 2021]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn json_custom_leet_map_and_pairing() {
        let cfg: WordlistConfig =
            serde_json::from_str(r#"{"leet_map": {"e": "3", "a": "@"}, "pairing": "directional"}"#)
                .unwrap();
        assert_eq!(cfg.leet_map.get('a'), Some('@'));
        assert_eq!(cfg.leet_map.get('o'), None);
        assert_eq!(cfg.pairing, Pairing::Directional);
    }
}
