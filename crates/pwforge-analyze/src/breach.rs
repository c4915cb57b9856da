// k-anonymity breach lookup
//
// The password is hashed with SHA-1 and only the first five hex digits of the
// hash leave this module. A range source answers with every known suffix for
// that prefix, one `SUFFIX:COUNT` per line, and the match is done locally.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha1::{Digest, Sha1};
use tracing::{debug, warn};

/// Hex digits of the hash sent to the range source.
pub const PREFIX_LEN: usize = 5;

/// Sentinel count meaning "lookup unavailable".
pub const UNAVAILABLE_COUNT: i64 = -1;

/// Error type for range sources.
#[derive(Debug, thiserror::Error)]
pub enum BreachError {
    #[error("failed to read range {prefix}: {source}")]
    Io {
        prefix: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed range line {line}: {content:?}")]
    Malformed { line: usize, content: String },
    #[error("range source unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a breach lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "count")]
pub enum BreachStatus {
    /// The hash appears in the corpus this many times.
    Found(u64),
    NotFound,
    /// The range source failed; nothing is known.
    Unavailable,
}

impl BreachStatus {
    /// Occurrence count with `-1` standing in for an unavailable lookup.
    pub fn count(self) -> i64 {
        match self {
            BreachStatus::Found(n) => i64::try_from(n).unwrap_or(i64::MAX),
            BreachStatus::NotFound => 0,
            BreachStatus::Unavailable => UNAVAILABLE_COUNT,
        }
    }

    pub fn is_breached(self) -> bool {
        matches!(self, BreachStatus::Found(n) if n > 0)
    }
}

/// Anything that can answer a range query for a five-digit hash prefix.
pub trait RangeSource {
    /// Return the range body for `prefix` (uppercase hex, `PREFIX_LEN` long).
    fn fetch_range(&self, prefix: &str) -> Result<String, BreachError>;
}

impl<F> RangeSource for F
where
    F: Fn(&str) -> Result<String, BreachError>,
{
    fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        self(prefix)
    }
}

/// Range source backed by a directory of downloaded range files.
///
/// Each range lives in `<dir>/<PREFIX>` or `<dir>/<PREFIX>.txt`, which is the
/// layout produced by the common range downloader tools.
#[derive(Debug, Clone)]
pub struct DirectoryRangeSource {
    dir: PathBuf,
}

impl DirectoryRangeSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl RangeSource for DirectoryRangeSource {
    fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let plain = self.dir.join(prefix);
        let path = if plain.is_file() {
            plain
        } else {
            self.dir.join(format!("{prefix}.txt"))
        };
        fs::read_to_string(&path).map_err(|source| BreachError::Io {
            prefix: prefix.to_string(),
            source,
        })
    }
}

/// Uppercase hex SHA-1 of `password`.
pub fn sha1_hex(password: &str) -> String {
    let digest = Sha1::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02X}")).collect()
}

/// Split a hex hash into the prefix sent out and the suffix matched locally.
pub fn split_hash(hash: &str) -> (&str, &str) {
    hash.split_at(PREFIX_LEN.min(hash.len()))
}

/// Find the count for `suffix` in a range body.
///
/// Blank lines are skipped. Suffixes compare case-insensitively. A count of
/// zero (padding entries) is reported as not found.
pub fn find_in_range(body: &str, suffix: &str) -> Result<Option<u64>, BreachError> {
    for (idx, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = || BreachError::Malformed {
            line: idx + 1,
            content: line.to_string(),
        };
        let (hash, count) = line.split_once(':').ok_or_else(malformed)?;
        if hash.trim().eq_ignore_ascii_case(suffix) {
            let count: u64 = count.trim().parse().map_err(|_| malformed())?;
            return Ok((count > 0).then_some(count));
        }
    }
    Ok(None)
}

/// Looks passwords up against a range source.
pub struct BreachChecker {
    source: Box<dyn RangeSource>,
}

impl BreachChecker {
    pub fn new(source: impl RangeSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Build a checker from a closure answering range queries.
    pub fn from_fn<F>(fetch: F) -> Self
    where
        F: Fn(&str) -> Result<String, BreachError> + 'static,
    {
        Self::new(fetch)
    }

    /// Look `password` up. Source failures become `Unavailable`, never an
    /// error, so callers always get an answer.
    pub fn lookup(&self, password: &str) -> BreachStatus {
        let hash = sha1_hex(password);
        let (prefix, suffix) = split_hash(&hash);

        let result = self
            .source
            .fetch_range(prefix)
            .and_then(|body| find_in_range(&body, suffix));
        match result {
            Ok(Some(count)) => {
                debug!(prefix, count, "hash found in range");
                BreachStatus::Found(count)
            }
            Ok(None) => BreachStatus::NotFound,
            Err(e) => {
                warn!(prefix, error = %e, "breach lookup unavailable");
                BreachStatus::Unavailable
            }
        }
    }

    /// Occurrence count for `password`, or `UNAVAILABLE_COUNT` when the
    /// source failed.
    pub fn lookup_count(&self, password: &str) -> i64 {
        self.lookup(password).count()
    }
}

impl std::fmt::Debug for BreachChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreachChecker").finish_non_exhaustive()
    }
}
