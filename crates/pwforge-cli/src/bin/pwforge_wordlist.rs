// pwforge-wordlist: Generate a targeted password-guessing wordlist.
//
// Base words come from positional arguments, from `--words a,b,c`, or from
// stdin (one per line) when neither is given. The sorted wordlist is written
// to stdout, one word per line, or to `--output`.
//
// Usage:
//   pwforge-wordlist [OPTIONS] [WORDS]...
//
// Examples:
//   pwforge-wordlist --casing --leet rex berlin
//   pwforge-wordlist --preset full --year-range 2015-2024 -o list.txt anna
//   cat words.txt | pwforge-wordlist --config profile.json --count

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use pwforge_core::config::{Pairing, WordlistConfig, YearRange};
use pwforge_wordlist::{WordlistError, WordlistGenerator};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// Leet, casing and years 2000-2025 enabled, symbols ! @ #.
    Full,
}

#[derive(Debug, Parser)]
#[command(
    name = "pwforge-wordlist",
    version,
    about = "Generate a targeted password-guessing wordlist from base words."
)]
struct Cli {
    /// Base words. Read from stdin when none are given here or via --words.
    words: Vec<String>,

    /// Comma-separated base words.
    #[arg(short = 'w', long = "words", value_name = "LIST")]
    word_list: Option<String>,

    /// JSON configuration file. Flags below override its values.
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Start from a built-in configuration instead of the defaults.
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Add leet-speak substitutions.
    #[arg(long)]
    leet: bool,

    /// Add lowercase, uppercase and capitalized forms.
    #[arg(long)]
    casing: bool,

    /// Append full and two-digit years.
    #[arg(long)]
    years: bool,

    /// Inclusive year range; implies --years.
    #[arg(long, value_name = "START-END")]
    year_range: Option<YearRange>,

    /// Characters to affix as prefix and suffix, e.g. "!@#".
    #[arg(long, value_name = "CHARS")]
    symbols: Option<String>,

    /// How two-word concatenations are formed.
    #[arg(long, value_name = "MODE")]
    pairing: Option<Pairing>,

    /// Refuse to combine more than this many candidates.
    #[arg(long, value_name = "N", conflicts_with = "unbounded")]
    max_candidates: Option<usize>,

    /// Remove the candidate cap.
    #[arg(long)]
    unbounded: bool,

    /// Write the wordlist to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print only the number of generated words.
    #[arg(long)]
    count: bool,

    #[command(flatten)]
    log: pwforge_cli::LogArgs,
}

impl Cli {
    /// Base configuration (file, preset or defaults) with flags applied.
    fn build_config(&self) -> anyhow::Result<WordlistConfig> {
        let mut config = match (&self.config, self.preset) {
            (Some(path), _) => pwforge_cli::load_config(path)?,
            (None, Some(Preset::Full)) => WordlistConfig::full(),
            (None, None) => WordlistConfig::default(),
        };

        config.leet |= self.leet;
        config.casing |= self.casing;
        config.years |= self.years;
        if let Some(range) = self.year_range {
            config.year_range = range;
            config.years = true;
        }
        if let Some(symbols) = &self.symbols {
            config.symbols = symbols.chars().map(String::from).collect();
        }
        if let Some(pairing) = self.pairing {
            config.pairing = pairing;
        }
        if let Some(limit) = self.max_candidates {
            config.max_candidates = Some(limit);
        }
        if self.unbounded {
            config.max_candidates = None;
        }
        Ok(config)
    }

    fn collect_words(&self) -> anyhow::Result<Vec<String>> {
        let mut words = self.words.clone();
        if let Some(list) = &self.word_list {
            words.extend(pwforge_cli::split_words(list));
        }
        if words.is_empty() {
            words = pwforge_cli::read_stdin_lines().context("failed to read stdin")?;
        }
        Ok(words)
    }
}

fn write_words<W: Write>(out: W, words: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for word in words {
        writeln!(out, "{word}")?;
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pwforge_cli::init_logging(cli.log);

    let config = cli.build_config()?;
    let generator = WordlistGenerator::new(config).context("invalid configuration")?;
    let words = cli.collect_words()?;

    let fan_out = generator.fan_out();
    info!(
        base_words = words.len(),
        multiplier = fan_out.multiplier(),
        "generating wordlist"
    );

    let wordlist = generator.generate(&words).map_err(|e| match e {
        WordlistError::CapacityExceeded { .. } => anyhow::Error::new(e)
            .context("candidate set too large (raise --max-candidates or pass --unbounded)"),
        other => anyhow::Error::new(other),
    })?;

    if cli.count {
        println!("{}", wordlist.len());
        return Ok(());
    }

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_words(file, &wordlist)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(words = wordlist.len(), path = %path.display(), "wordlist written");
        }
        None => write_words(io::stdout().lock(), &wordlist).context("failed to write stdout")?,
    }
    Ok(())
}
