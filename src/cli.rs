use crate::analyze::freshness::parse_timestamp;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "keep",
    version,
    about = "Rank open issues by relevance to recent work"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank issues read from a file or stdin
    Score(ScoreCommand),
    /// Print the context extracted from the recent-work document
    Context(ContextCommand),
    /// Print each issue's blockers and how they resolve
    Blockers(BlockersCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Recent-work document (defaults to context.recent_work or .claude/state.md)
    #[arg(long)]
    pub recent_work: Option<PathBuf>,

    /// JSON file with issues; stdin when omitted
    #[arg(long)]
    pub issues: Option<PathBuf>,

    /// Number of recommendations detailed in the text report
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub top: Option<u64>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Label treated as recently worked on (repeatable)
    #[arg(long = "recent-label", value_name = "LABEL")]
    pub recent_labels: Vec<String>,

    /// Evaluate freshness as of this timestamp instead of the current time
    #[arg(long, value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,

    /// Directory holding keep.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct ContextCommand {
    #[arg(long)]
    pub recent_work: Option<PathBuf>,

    #[arg(long = "recent-label", value_name = "LABEL")]
    pub recent_labels: Vec<String>,

    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct BlockersCommand {
    /// JSON file with issues; stdin when omitted
    #[arg(long)]
    pub issues: Option<PathBuf>,
}

fn parse_now(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw).ok_or_else(|| format!("not an ISO-8601 timestamp: {raw}"))
}
