// pwforge-analyze: Estimate password strength.
//
// Reads passwords from arguments or stdin, one per line. Stdin lines are
// kept verbatim apart from the line terminator, so surrounding spaces count.
// For each password it prints length, entropy estimate in bits, the zxcvbn
// score with its advice and, with --breach-dir, how often the password
// appears in an offline breach range directory. Passwords are never echoed.
//
// Usage:
//   pwforge-analyze [--breach-dir DIR] [--json] [PASSWORDS]...
//
// Text output:
//   #1
//   Length: 8
//   Entropy (bits): 37.60
//   Strength score: 0 / 4
//   Guesses: 3
//   Warning: This is a top-10 common password.
//   Suggestion: Add another word or two. Uncommon words are better.
//   Breached: Yes (10434004)

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pwforge_analyze::breach::{BreachChecker, BreachStatus, DirectoryRangeSource};
use pwforge_analyze::report::{PasswordReport, analyze_password};
use pwforge_analyze::strength::MAX_SCORE;

#[derive(Debug, Parser)]
#[command(name = "pwforge-analyze", version, about = "Estimate password strength.")]
struct Cli {
    /// Passwords to analyze. Read from stdin when none are given.
    passwords: Vec<String>,

    /// Directory of downloaded hash range files for breach lookup.
    #[arg(long, value_name = "DIR")]
    breach_dir: Option<PathBuf>,

    /// Print one JSON report per line.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    log: pwforge_cli::LogArgs,
}

fn breach_line(status: BreachStatus) -> String {
    match status {
        BreachStatus::Found(n) => format!("Breached: Yes ({n})"),
        BreachStatus::NotFound => "Breached: No (0)".to_string(),
        BreachStatus::Unavailable => "Breached: unknown".to_string(),
    }
}

fn write_text<W: Write>(out: &mut W, index: usize, report: &PasswordReport) -> io::Result<()> {
    writeln!(out, "#{index}")?;
    writeln!(out, "Length: {}", report.password_length)?;
    writeln!(out, "Entropy (bits): {:.2}", report.entropy_bits)?;
    if let Some(strength) = &report.strength {
        writeln!(out, "Strength score: {} / {MAX_SCORE}", strength.score)?;
        writeln!(out, "Guesses: {}", strength.guesses)?;
        if let Some(warning) = &strength.feedback.warning {
            writeln!(out, "Warning: {warning}")?;
        }
        for suggestion in &strength.feedback.suggestions {
            writeln!(out, "Suggestion: {suggestion}")?;
        }
    }
    if let Some(status) = report.breach_status() {
        writeln!(out, "{}", breach_line(status))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pwforge_cli::init_logging(cli.log);

    let passwords = if cli.passwords.is_empty() {
        pwforge_cli::read_stdin_raw_lines().context("failed to read stdin")?
    } else {
        cli.passwords.clone()
    };

    let checker = cli
        .breach_dir
        .as_ref()
        .map(|dir| BreachChecker::new(DirectoryRangeSource::new(dir)));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, password) in passwords.iter().enumerate() {
        let report = analyze_password(password, checker.as_ref());
        if cli.json {
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
        } else {
            if i > 0 {
                writeln!(out)?;
            }
            write_text(&mut out, i + 1, &report)?;
        }
    }
    out.flush()?;
    Ok(())
}
