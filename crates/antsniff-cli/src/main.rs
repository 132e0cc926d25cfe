use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use antsniff_core::{FrameOutcome, HexLineSource, Report};
use clap::{Args, Parser, Subcommand};
use glob::glob;
use time::OffsetDateTime;

mod logging;

use logging::{LogFormat, LogLevel, init_logging};

const STDIN_INPUT: &str = "-";
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ANTSNIFF_BUILD_COMMIT"),
    " ",
    env!("ANTSNIFF_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "antsniff")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline decoder for ANT / ANT-FS ShockBurst frame captures.",
    long_about = None,
    after_help = "Examples:\n  antsniff decode capture.txt -o report.json\n  antsniff analyze capture.txt --stdout --pretty\n  cat capture.txt | antsniff decode - --stdout"
)]
struct Cli {
    /// Diagnostic log level (stderr)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Diagnostic log format (stderr)
    #[arg(long, value_enum, default_value = "text", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a hex capture (one frame per line) into a JSON report.
    #[command(alias = "analyze")]
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Path to a hex text capture, or `-` for stdin
    input: PathBuf,

    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if any frame failed to decode
    #[arg(long)]
    strict: bool,

    /// List failed frames after decoding
    #[arg(long)]
    list_failures: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode(args) => {
            let level = if args.quiet {
                LogLevel::Error
            } else {
                cli.log_level
            };
            init_logging(cli.log_format, level);
            cmd_decode(args)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_decode(args: DecodeArgs) -> Result<(), CliError> {
    let report_path = if args.stdout {
        None
    } else {
        Some(args.report.clone().ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };

    let mut rep = if args.input.as_os_str() == STDIN_INPUT {
        decode_stdin()?
    } else {
        let resolved_input = resolve_input_path(&args.input)?;
        validate_input_file(&resolved_input)?;
        if let Some(report_path) = report_path.as_ref() {
            ensure_distinct_paths(&resolved_input, report_path)?;
        }
        antsniff_core::analyze_hex_file(&resolved_input)
            .with_context(|| format!("Failed to decode capture: {}", resolved_input.display()))?
    };
    rep.stamp(OffsetDateTime::now_utc());

    let json = serialize_report(&rep, args.pretty)?;

    match report_path {
        None => print!("{}", json),
        Some(report_path) => {
            write_report(&report_path, &json)?;
            if !args.quiet {
                eprintln!("OK: report written -> {}", report_path.display());
            }
        }
    }

    if args.list_failures && !args.quiet {
        print_failures(&rep);
    }
    if args.strict && rep.summary.failed > 0 {
        return Err(CliError::new(
            format!(
                "{} of {} frames failed to decode",
                rep.summary.failed, rep.summary.frames_total
            ),
            Some("use --list-failures to inspect".to_string()),
        ));
    }
    Ok(())
}

fn decode_stdin() -> Result<Report, CliError> {
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read capture from stdin")?;
    let bytes = buf.len() as u64;
    let source = HexLineSource::new(Cursor::new(buf));
    let rep = antsniff_core::analyze_source(STDIN_INPUT, bytes, source)
        .context("Failed to decode capture from stdin")?;
    Ok(rep)
}

fn ensure_distinct_paths(input: &Path, report_path: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let report_dir = match report_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => match fs::canonicalize(parent) {
            Ok(dir) => dir,
            // Not created yet, so it cannot hold the input.
            Err(_) => return Ok(()),
        },
        _ => fs::canonicalize(".").context("Failed to resolve current directory")?,
    };
    let file_name = report_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path: {}", report_path.display()))?;
    if report_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn write_report(report: &Path, json: &str) -> Result<(), CliError> {
    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;
    Ok(())
}

fn serialize_report(rep: &Report, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn print_failures(rep: &Report) {
    eprintln!("Failed frames: {}", rep.summary.failed);
    for frame in &rep.frames {
        if let FrameOutcome::Error(message) = &frame.outcome {
            eprintln!("  line {}: {}", frame.line, message);
        }
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a hex text capture, or `-` to read stdin".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a hex text capture, or `-` to read stdin".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single capture file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
