use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use restorecheck::settings::{OutputFormat, Settings};
use restorecheck::{RestoreQueryChecker, Result, Verdict};

/// Check restore queries and print one verdict per query.
#[derive(Parser, Debug)]
#[command(name = "restorecheck", version, about)]
struct Cli {
    /// Queries to check. When none are given, each non-empty stdin line is a query.
    queries: Vec<String>,
    /// Settings file (json, toml or yaml).
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print verdicts as JSON lines.
    #[arg(long)]
    json: bool,
    /// Print the reason for each rejection.
    #[arg(short, long)]
    diagnostics: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    query: &'a str,
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // stdout carries verdicts only
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_queries(cli: &Cli) -> Result<Vec<String>> {
    if !cli.queries.is_empty() {
        return Ok(cli.queries.clone());
    }
    let mut queries = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            queries.push(line);
        }
    }
    Ok(queries)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    if cli.json {
        settings.output = OutputFormat::Json;
    }
    settings.diagnostics |= cli.diagnostics;
    init_tracing(&settings.log_filter);

    let queries = match read_queries(&cli) {
        Ok(queries) => queries,
        Err(e) => {
            error!(error = %e, "could not read queries");
            return ExitCode::from(2);
        }
    };

    let mut all_valid = true;
    for query in &queries {
        let checker = RestoreQueryChecker::new(query);
        let result = checker.validate();
        let verdict = Verdict::from(&result);
        all_valid &= verdict.is_success();
        let detail = match result {
            Err(e) if settings.diagnostics => Some(e.to_string()),
            _ => None,
        };
        match settings.output {
            OutputFormat::Text => match &detail {
                Some(detail) => println!("{verdict} ({detail})"),
                None => println!("{verdict}"),
            },
            OutputFormat::Json => {
                let report = Report { query: checker.query(), verdict, detail };
                match serde_json::to_string(&report) {
                    Ok(line) => println!("{line}"),
                    Err(e) => error!(error = %e, "could not serialize verdict"),
                }
            }
        }
    }
    info!(checked = queries.len(), all_valid, "done");
    if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
