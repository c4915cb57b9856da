// pwforge-generate: Generate strong random passwords.
//
// Usage:
//   pwforge-generate [--length N] [--count N] [--no-symbols] [--min-digits N] ...
//
// Prints one password per line followed by the entropy of the generating
// process, or one JSON object per line with --json.

use std::io::{self, BufWriter, Write};

use clap::Parser;

use pwforge_analyze::generator::{
    DEFAULT_LENGTH, GeneratorOptions, MIN_LENGTH, generate_password,
};

#[derive(Debug, Parser)]
#[command(name = "pwforge-generate", version, about = "Generate strong random passwords.")]
struct Cli {
    /// Password length (minimum 8).
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// How many passwords to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    #[arg(long)]
    no_lowercase: bool,
    #[arg(long)]
    no_uppercase: bool,
    #[arg(long)]
    no_digits: bool,
    #[arg(long)]
    no_symbols: bool,

    #[arg(long, value_name = "N", default_value_t = 1)]
    min_lowercase: usize,
    #[arg(long, value_name = "N", default_value_t = 1)]
    min_uppercase: usize,
    #[arg(long, value_name = "N", default_value_t = 1)]
    min_digits: usize,
    #[arg(long, value_name = "N", default_value_t = 1)]
    min_symbols: usize,

    /// Print one JSON object per line.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    log: pwforge_cli::LogArgs,
}

impl Cli {
    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            length: self.length,
            lowercase: !self.no_lowercase,
            uppercase: !self.no_uppercase,
            digits: !self.no_digits,
            symbols: !self.no_symbols,
            min_lowercase: self.min_lowercase,
            min_uppercase: self.min_uppercase,
            min_digits: self.min_digits,
            min_symbols: self.min_symbols,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pwforge_cli::init_logging(cli.log);

    let options = cli.options();
    tracing::debug!(?options, min_length = MIN_LENGTH, "generating passwords");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..cli.count {
        let generated = generate_password(&options)?;
        if cli.json {
            serde_json::to_writer(&mut out, &generated)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}\t{:.2} bits", generated.password, generated.entropy_bits)?;
        }
    }
    out.flush()?;
    Ok(())
}
