use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecoscore",
    version,
    about = "Climate finance ecosystem maturity scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
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
    /// Score an assessment and render the report
    Score(ScoreCommand),
    /// Score an assessment and request improvement recommendations
    Recommend(RecommendCommand),
    /// List the fixed dimensions and their indicator questions
    Dimensions(DimensionsCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Md,
    Json,
    Csv,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Assessment file (TOML)
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Write the rendered report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Tool config; defaults to ecoscore.toml next to the assessment
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Assessment file (TOML)
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Write the rendered report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Tool config; defaults to ecoscore.toml next to the assessment
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct DimensionsCommand {}
