use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kriah_align::{load_frames, AlignerKind, ReadingScorerBuilder, ScoringConfig};
use tracing_subscriber::EnvFilter;

#[path = "reading_report/json_report_formatter.rs"]
mod json_report_formatter;
#[path = "reading_report/text_report_formatter.rs"]
mod text_report_formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Dtw,
    Needleman,
}

impl From<Algorithm> for AlignerKind {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Dtw => AlignerKind::Dtw,
            Algorithm::Needleman => AlignerKind::Needleman,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "reading_report")]
#[command(about = "Score a reading of pointed Hebrew text against a recogniser phoneme lattice")]
struct Args {
    /// Pointed Hebrew text file.
    #[arg(long)]
    text: PathBuf,
    /// Lattice as JSON frames or the recogniser's `phone (prob) | ...` dump.
    #[arg(long)]
    lattice: PathBuf,
    /// Scoring config JSON; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the algorithm from the config.
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Write the report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("reading_report: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ScoringConfig::load(path).map_err(|e| e.to_string())?,
        None => ScoringConfig::default(),
    };
    let mut builder = ReadingScorerBuilder::new(config);
    if let Some(algorithm) = args.algorithm {
        builder = builder.with_algorithm(algorithm.into());
    }
    let scorer = builder.build().map_err(|e| e.to_string())?;

    let text = fs::read_to_string(&args.text)
        .map_err(|err| format!("Failed to read text '{}': {err}", args.text.display()))?;
    let frames = load_frames(&args.lattice).map_err(|e| e.to_string())?;
    let output = scorer.score(&text, &frames).map_err(|e| e.to_string())?;

    match (args.format, &args.output) {
        (OutputFormat::Json, Some(path)) => json_report_formatter::write_report(path, &output),
        (OutputFormat::Json, None) => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|err| format!("Failed to serialize report JSON: {err}"))?;
            println!("{json}");
            Ok(())
        }
        (OutputFormat::Text, Some(path)) => {
            fs::write(path, text_report_formatter::render(&output)).map_err(|err| {
                format!("Failed to write report '{}': {err}", path.display())
            })
        }
        (OutputFormat::Text, None) => {
            print!("{}", text_report_formatter::render(&output));
            Ok(())
        }
    }
}
