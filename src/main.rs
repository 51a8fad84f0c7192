mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod scan;
mod types;

use crate::error::KeepError;
use crate::types::config::{ConfiguredFormat, KeepConfig};
use crate::types::context::Context;
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

#[derive(Serialize)]
struct IssueBlockers {
    number: u64,
    blockers: Vec<analyze::dependency::Blocker>,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("keep={default_level}").into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate)
    }
}

fn build_context(
    root: &Path,
    recent_work: Option<&Path>,
    extra_labels: &[String],
    config: &KeepConfig,
) -> Context {
    let path = recent_work
        .map(Path::to_path_buf)
        .unwrap_or_else(|| resolve_path(root, config.recent_work()));
    scan::load_context(&path)
        .with_labels(config.recent_labels())
        .with_labels(extra_labels)
}

fn run(cli: cli::Cli) -> Result<i32, KeepError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let config = config::load_config(&cmd.root)?.unwrap_or_default();
            let context = build_context(
                &cmd.root,
                cmd.recent_work.as_deref(),
                &cmd.recent_labels,
                &config,
            );
            let issues = scan::load_issues(cmd.issues.as_deref())?;
            let now = cmd.now.unwrap_or_else(chrono::Utc::now);

            let ranked = report::rank(analyze::score_all(&issues, &context, now));

            let output_format = match (cmd.json, cmd.format, config.format()) {
                (true, _, _)
                | (false, Some(cli::ReportFormat::Json), _)
                | (false, None, Some(ConfiguredFormat::Json)) => report::OutputFormat::Json,
                _ => report::OutputFormat::Text,
            };
            let top = cmd
                .top
                .map_or_else(|| config.top(), |top| top as usize);
            let rendered = report::render(&ranked, output_format, top)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Context(cmd) => {
            let config = config::load_config(&cmd.root)?.unwrap_or_default();
            let context = build_context(
                &cmd.root,
                cmd.recent_work.as_deref(),
                &cmd.recent_labels,
                &config,
            );
            println!("{}", serde_json::to_string_pretty(&context)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Blockers(cmd) => {
            let issues = scan::load_issues(cmd.issues.as_deref())?;
            let listing = issues
                .iter()
                .map(|issue| IssueBlockers {
                    number: issue.number,
                    blockers: analyze::dependency::resolve_blockers(issue, &issues),
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&listing)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                KeepError::InvalidInput(_) => exit_code::INVALID_INPUT,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
