//! tsestree: parse a TypeScript or JavaScript file and print its ESTree AST
//! as JSON.
//!
//! Usage:
//!   tsestree [options] <FILE>
//!
//! Syntax errors are rendered on stderr with a source snippet and the
//! process exits with status 1.

mod logging;
mod report;

use clap::{Parser as ClapParser, ValueEnum};
use miette::Report;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use tsestree_ast::SourceType;
use tsestree_parser::{parse, ParseOptions};

use report::SyntaxReport;

#[derive(ClapParser, Debug)]
#[command(name = "tsestree", version, about = "Parse TypeScript/JavaScript into an ESTree AST")]
struct Cli {
    /// The file to parse.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// `json` (compact) or `pretty` (indented).
    #[arg(long, default_value = "json")]
    format: String,

    /// Include the token stream.
    #[arg(long)]
    tokens: bool,

    /// Include comments.
    #[arg(long)]
    comments: bool,

    /// Attach line/column locations to nodes.
    #[arg(long)]
    loc: bool,

    /// Attach byte ranges to nodes.
    #[arg(long)]
    range: bool,

    /// Accept JSX when the file extension does not decide it.
    #[arg(long)]
    jsx: bool,

    #[arg(long = "source-type", value_enum)]
    source_type: Option<SourceTypeArg>,

    /// JSON file with parse options (camelCase keys). Flags given on the
    /// command line take precedence.
    #[arg(long, value_name = "OPTIONS_JSON")]
    options: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SourceTypeArg {
    Script,
    Module,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Pretty,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("'{path}' is not valid UTF-8")]
    InvalidUtf8 { path: String },
    #[error("invalid options file '{path}': {reason}")]
    Options { path: String, reason: String },
    #[error("unknown output format '{0}' (expected 'json' or 'pretty')")]
    UnknownFormat(String),
    #[error("cannot start the parser thread: {0}")]
    Spawn(std::io::Error),
    #[error("failed to serialize the tree: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{} syntax error(s)", .0.iter().filter(|report| report.is_error()).count())]
    Syntax(Vec<SyntaxReport>),
}

/// The serialized tree plus any warnings to show alongside it.
struct Output {
    json: String,
    warnings: Vec<SyntaxReport>,
}

/// Stack for the worker thread. Parsing is bounded by the nesting limit,
/// but serializing a long left-nested chain (`a.b.c...`) recurses per link.
const WORKER_STACK_SIZE: usize = 512 * 1024 * 1024;

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    match run_on_worker(cli) {
        Ok(output) => {
            for warning in output.warnings {
                eprintln!("{:?}", Report::new(warning));
            }
            println!("{}", output.json);
        }
        Err(CliError::Syntax(reports)) => {
            let count = reports.iter().filter(|report| report.is_error()).count();
            for report in reports {
                eprintln!("{:?}", Report::new(report));
            }
            eprintln!("Found {} error{}.", count, if count == 1 { "" } else { "s" });
            process::exit(1);
        }
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    }
}

/// Run on a thread with a large stack, re-raising any panic.
fn run_on_worker(cli: Cli) -> Result<Output, CliError> {
    let worker = std::thread::Builder::new()
        .name("tsestree".to_string())
        .stack_size(WORKER_STACK_SIZE)
        .spawn(move || run(&cli))
        .map_err(CliError::Spawn)?;
    match worker.join() {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

fn run(cli: &Cli) -> Result<Output, CliError> {
    let format = parse_format(&cli.format)?;
    let options = build_options(cli)?;
    let path = cli.file.display().to_string();
    let source = read_source(&cli.file)?;
    debug!(path = %path, bytes = source.len(), "parsing");

    let output = parse(&source, &options);
    let source = Arc::new(source);
    let reports: Vec<SyntaxReport> = output
        .errors
        .iter()
        .map(|error| SyntaxReport::new(error, &path, Arc::clone(&source)))
        .collect();
    let failed = output.first_error().is_some();
    let program = match output.into_result() {
        Ok(program) => program,
        Err(_) => return Err(CliError::Syntax(reports)),
    };

    let json = match format {
        Format::Json => serde_json::to_string(&program)?,
        Format::Pretty => serde_json::to_string_pretty(&program)?,
    };
    // With `allowInvalidAst` the tree is printed and errors stay warnings.
    let warnings = if failed {
        reports
    } else {
        reports.into_iter().filter(|report| !report.is_error()).collect()
    };
    Ok(Output { json, warnings })
}

fn parse_format(format: &str) -> Result<Format, CliError> {
    match format {
        "json" => Ok(Format::Json),
        "pretty" => Ok(Format::Pretty),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

/// Options file first, then command-line flags on top.
fn build_options(cli: &Cli) -> Result<ParseOptions, CliError> {
    let mut options = match &cli.options {
        Some(path) => load_options(path)?,
        None => ParseOptions::default(),
    };
    options.tokens |= cli.tokens;
    options.comment |= cli.comments;
    options.loc |= cli.loc;
    options.range |= cli.range;
    options.jsx |= cli.jsx;
    if let Some(source_type) = cli.source_type {
        options.source_type = match source_type {
            SourceTypeArg::Script => SourceType::Script,
            SourceTypeArg::Module => SourceType::Module,
        };
    }
    options.file_path = Some(cli.file.display().to_string());
    Ok(options)
}

fn load_options(path: &Path) -> Result<ParseOptions, CliError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: display.clone(),
        source,
    })?;
    ParseOptions::from_json(&text).map_err(|error| CliError::Options {
        path: display,
        reason: error.to_string(),
    })
}

fn read_source(path: &Path) -> Result<String, CliError> {
    let display = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: display.clone(),
        source,
    })?;
    match simdutf8::basic::from_utf8(&bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => Err(CliError::InvalidUtf8 { path: display }),
    }
}
