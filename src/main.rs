mod catalog;
mod input;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::catalog::loader::load_catalog;
use crate::input::{AnswerFormat, detect_format, load_answers};
use crate::model::levels::LevelThresholds;
use crate::pipeline::classify::run_classify;
use crate::pipeline::report::{ReportInput, write_reports};
use crate::pipeline::score::{OutOfRangePolicy, compute_scores};

#[derive(Debug, Parser)]
#[command(name = "bigfive-score", version, about = "Big Five (OCEAN) questionnaire scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score an answer set and write the reports.
    Run(RunArgs),
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Answer file: JSON object of id -> value, or id<TAB>value TSV.
    #[arg(long)]
    answers: PathBuf,
    /// Output directory for scores.tsv, summary.json and report.txt.
    #[arg(long)]
    out: PathBuf,
    /// Optional JSON catalog replacing the builtin 50-item catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Answer file format; inferred from the extension when omitted.
    #[arg(long, value_enum)]
    answers_format: Option<AnswersFormatArg>,
    /// Handling of answers outside the 1-5 range.
    #[arg(long, value_enum, default_value_t = PolicyArg::Reject)]
    on_out_of_range: PolicyArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AnswersFormatArg {
    Json,
    Tsv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Reject,
    Clamp,
    Neutral,
}

impl From<PolicyArg> for OutOfRangePolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Reject => OutOfRangePolicy::Reject,
            PolicyArg::Clamp => OutOfRangePolicy::Clamp,
            PolicyArg::Neutral => OutOfRangePolicy::Neutral,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let Command::Run(args) = cli.command;

    let catalog = match &args.catalog {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading external catalog");
            load_catalog(path).map_err(|e| e.to_string())?
        }
        None => Catalog::builtin(),
    };

    let format = match args.answers_format {
        Some(AnswersFormatArg::Json) => AnswerFormat::Json,
        Some(AnswersFormatArg::Tsv) => AnswerFormat::Tsv,
        None => detect_format(&args.answers),
    };
    let answers = load_answers(&args.answers, format).map_err(|e| e.to_string())?;
    if answers.is_empty() {
        tracing::warn!("answer set is empty; every item will default to the neutral midpoint");
    }
    tracing::info!(
        answers = answers.len(),
        items = catalog.audit().items_total,
        "scoring answer set"
    );

    let policy = OutOfRangePolicy::from(args.on_out_of_range);
    let output = compute_scores(&catalog, &answers, policy).map_err(|e| e.to_string())?;
    if output.audit.defaulted > 0 {
        tracing::warn!(
            defaulted = output.audit.defaulted,
            "unanswered items defaulted to the neutral midpoint"
        );
    }

    let thresholds = LevelThresholds::default_v1();
    let assessments = run_classify(&output.scores, &thresholds);

    let report_input = ReportInput {
        assessments: &assessments,
        catalog_audit: catalog.audit(),
        audit: &output.audit,
        policy,
        tool_name: "bigfive-score".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&report_input, &args.out).map_err(|e| e.to_string())?;
    tracing::info!(out = %args.out.display(), "reports written");

    Ok(())
}
