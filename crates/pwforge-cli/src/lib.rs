// pwforge-cli: shared utilities for CLI tools.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use anyhow::Context;
use pwforge_core::character::trim_word;
use pwforge_core::config::WordlistConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Verbosity flag shared by every tool.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LogArgs {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Map a `-v` count to a default filter directive.
fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global tracing subscriber. Logs go to stderr so that stdout
/// stays clean for wordlists and reports.
///
/// Accepted `RUST_LOG` values are `trace`, `debug`, `info`, `warn` and
/// `error`, or any `EnvFilter` directive.
pub fn init_logging(args: LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(args.verbose)));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: unable to set global tracing subscriber");
    }
}

/// Load a wordlist configuration from a JSON file.
///
/// Missing keys take their defaults and unknown keys are ignored. The
/// result is validated before it is returned.
pub fn load_config(path: &Path) -> anyhow::Result<WordlistConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: WordlistConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Split a comma-separated list, dropping blank entries.
pub fn split_words(list: &str) -> Vec<String> {
    list.split(',')
        .map(trim_word)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read non-blank lines from a reader, trimmed.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = trim_word(&line);
        if !word.is_empty() {
            lines.push(word.to_string());
        }
    }
    Ok(lines)
}

/// Read non-blank lines from stdin.
pub fn read_stdin_lines() -> io::Result<Vec<String>> {
    read_lines(io::stdin().lock())
}

/// Read lines exactly as given, stripping only the `\n` or `\r\n`
/// terminator. Empty lines are skipped; whitespace-only lines are kept.
///
/// Used for passwords, where surrounding spaces are part of the secret.
pub fn read_raw_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Read raw lines from stdin.
pub fn read_stdin_raw_lines() -> io::Result<Vec<String>> {
    read_raw_lines(io::stdin().lock())
}
