//! CLI tool for parsing and verifying BAI2 files.
//!
//! # Usage
//!
//! ```bash
//! # Print a summary of a verified file
//! bai2-inspect --input statement.bai2
//!
//! # Read from stdin, write the whole document as JSON
//! cat statement.bai2 | bai2-inspect --format json > statement.json
//!
//! # Accept a bank that leaves summaries out of the account control total
//! bai2-inspect -i statement.bai2 --account-control-ignores-summary-amounts
//!
//! # Load options from a JSON file
//! bai2-inspect -i statement.bai2 --options bank.json
//!
//! # One JSON line per logical record, continuations merged
//! bai2-inspect -i statement.bai2 --format records
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to trace the parsing stages.

use std::fs::{self, File};
use std::io::{Read, Write, stdin, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bai2::{BaiFile, ParseOptions, record};
use clap::{Parser, ValueEnum};
use serde_json::json;
use tracing::{error, info};

/// Parse and verify a BAI2 balance reporting file.
///
/// Reads the file from input (file or stdin), checks every trailer control
/// total and record count, and writes a summary or the full document to output
/// (file or stdout).
#[derive(Parser, Debug)]
#[command(name = "bai2-inspect")]
#[command(version, about)]
struct Args {
    /// Input file path. If not specified, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path. If not specified, writes to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// JSON file with parser options.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Leave account summary amounts out of the account control total.
    #[arg(long)]
    account_control_ignores_summary_amounts: bool,

    /// Treat only a `/` at the end of a line as a delimiter.
    #[arg(long)]
    continuations_slash_delimit_end_of_line_only: bool,
}

/// Output representations of a verified file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented tree of groups, accounts and transactions.
    Summary,
    /// The whole document as pretty-printed JSON.
    Json,
    /// One JSON object per logical record with its decoded fields.
    Records,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let options = resolve_options(&args)?;

    let mut data = String::new();
    match &args.input {
        Some(path) => {
            File::open(path)
                .and_then(|mut file| file.read_to_string(&mut data))
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        }
        None => {
            stdin().lock().read_to_string(&mut data).context("Failed to read stdin")?;
        }
    }

    let file = BaiFile::parse(&data, &options).context("Failed to parse BAI2 input")?;
    info!(
        sender = file.sender(),
        receiver = file.receiver(),
        groups = file.groups().len(),
        "verified BAI2 file"
    );

    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdout().lock()),
    };

    let written = match args.format {
        OutputFormat::Summary => write_summary(&file, &mut output),
        OutputFormat::Json => write_json(&file, &mut output),
        OutputFormat::Records => write_records(&data, &options, &mut output),
    };
    written.context("Failed to write output")?;
    output.flush().context("Failed to flush output")?;

    let (accounts, transactions) = count(&file);
    eprintln!(
        "Verified {} group(s), {accounts} account(s), {transactions} transaction(s)",
        file.groups().len()
    );

    Ok(())
}

/// Loads the options file, if any, then switches on the options given as flags.
fn resolve_options(args: &Args) -> Result<ParseOptions> {
    let mut options = match &args.options {
        Some(path) => load_options(path)?,
        None => ParseOptions::default(),
    };
    options.account_control_ignores_summary_amounts |= args.account_control_ignores_summary_amounts;
    options.continuations_slash_delimit_end_of_line_only |=
        args.continuations_slash_delimit_end_of_line_only;
    Ok(options)
}

fn load_options(path: &Path) -> Result<ParseOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| {
            format!(
                "Invalid options file: {} (known options: {})",
                path.display(),
                ParseOptions::NAMES.join(", ")
            )
        })
}

fn count(file: &BaiFile) -> (usize, usize) {
    let accounts = file.groups().iter().flat_map(|g| g.accounts());
    accounts.fold((0, 0), |(a, t), account| (a + 1, t + account.transactions().len()))
}

fn write_summary<W: Write>(file: &BaiFile, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "file {} -> {} created {}",
        file.sender(),
        file.receiver(),
        file.creation_datetime().to_rfc3339()
    )?;

    for group in file.groups() {
        writeln!(
            out,
            "  group {} -> {} {} as of {} ({:?})",
            group.originator(),
            group.destination(),
            group.currency_code().unwrap_or("-"),
            group.as_of_datetime().to_rfc3339(),
            group.group_status(),
        )?;

        for account in group.accounts() {
            writeln!(
                out,
                "    account {} {} total {} ({} summaries)",
                account.customer(),
                account.currency_code().or(group.currency_code()).unwrap_or("-"),
                account.trailer().account_control_total,
                account.summaries().len(),
            )?;

            for tx in account.transactions() {
                let direction = if tx.is_credit() {
                    "CR"
                } else if tx.is_debit() {
                    "DB"
                } else {
                    "--"
                };
                writeln!(
                    out,
                    "      {:03} {direction} {:>14} {} {}",
                    tx.type_code().code,
                    tx.amount(),
                    tx.type_code().description.unwrap_or("(unknown type code)"),
                    tx.text().replace('\n', " "),
                )?;
            }
        }
    }

    Ok(())
}

fn write_json<W: Write>(file: &BaiFile, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, file)?;
    writeln!(out)?;
    Ok(())
}

fn write_records<W: Write>(data: &str, options: &ParseOptions, out: &mut W) -> Result<()> {
    let records = record::merge_continuations(record::lex(data, options))?;
    for record in &records {
        let line = json!({
            "line": record.line(),
            "code": record.code(),
            "physical_record_count": record.physical_record_count(),
            "fields": record.fields()?,
        });
        writeln!(out, "{line}")?;
    }
    Ok(())
}
