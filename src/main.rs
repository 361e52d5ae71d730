mod cli;
mod config;
mod error;
mod intake;
mod oracle;
mod recommend;
mod report;
mod scoring;
mod telemetry;
mod types;

use crate::config::OracleSettings;
use crate::error::Result;
use crate::oracle::openai::OpenAiOracle;
use crate::oracle::ScoringOracle;
use crate::types::dimension::Dimension;
use crate::types::report::AssessmentReport;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => score_and_render(
            &cmd.input,
            cmd.config.as_deref(),
            cmd.format,
            cmd.output.as_deref(),
            false,
        ),
        cli::Commands::Recommend(cmd) => score_and_render(
            &cmd.input,
            cmd.config.as_deref(),
            cmd.format,
            cmd.output.as_deref(),
            true,
        ),
        cli::Commands::Dimensions(_) => {
            for dimension in Dimension::ALL {
                println!("{} ({})", dimension.name(), dimension.id());
                for (index, indicator) in dimension.indicators().iter().enumerate() {
                    println!("  {}. {}", index + 1, indicator);
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn score_and_render(
    input: &Path,
    config_path: Option<&Path>,
    format: cli::ReportFormat,
    output: Option<&Path>,
    with_recommendations: bool,
) -> Result<i32> {
    let assessment = intake::load_assessment(input)?;

    let assessment_dir = input.parent().unwrap_or_else(|| Path::new("."));
    let settings = match config::load_config(config_path, assessment_dir)? {
        Some(cfg) => {
            cfg.validate()?;
            cfg.oracle_settings()
        }
        None => OracleSettings::default(),
    };

    // A missing credential fails the whole pass up front, but only when
    // the pass actually needs the oracle.
    let oracle = if assessment.needs_oracle() || with_recommendations {
        Some(OpenAiOracle::from_settings(&settings)?)
    } else {
        None
    };

    let state = scoring::score_assessment(
        &assessment,
        oracle.as_ref().map(|o| o as &dyn ScoringOracle),
    );

    let mut warnings = state.warnings.clone();
    let recommendations = match (&oracle, with_recommendations) {
        (Some(oracle), true) => {
            let (blocks, recommendation_warnings) =
                recommend::generate_recommendations(&state, oracle);
            warnings.extend(recommendation_warnings);
            blocks
        }
        _ => Vec::new(),
    };

    let assessment_report = AssessmentReport {
        title: state.title.clone(),
        generated_at: chrono::Utc::now(),
        aggregate: state.aggregate(),
        records: state.records,
        recommendations,
        warnings,
    };

    let output_format = match format {
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Csv => report::OutputFormat::Csv,
    };
    let rendered = report::render(&assessment_report, output_format)?;

    match output {
        Some(path) => std::fs::write(path, &rendered)?,
        None => println!("{rendered}"),
    }

    for warning in &assessment_report.warnings {
        eprintln!("warning: {warning}");
    }

    if assessment_report.warnings.is_empty() {
        Ok(exit_code::SUCCESS)
    } else {
        Ok(exit_code::WARNINGS)
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
