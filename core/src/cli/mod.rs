pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for diagtree
#[derive(Parser, Debug)]
#[command(name = "diagtree")]
#[command(about = "Train a symptom decision tree and diagnose subjects")]
#[command(version)]
pub struct Cli {
    /// Training records, one per line: illness followed by symptoms
    #[arg(value_name = "FILE")]
    pub data: PathBuf,

    /// Symptoms to split on, in order
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub symptoms: Vec<String>,

    /// Present symptoms of a subject to diagnose
    #[arg(short, long, value_delimiter = ',', num_args = 0..)]
    pub diagnose: Option<Vec<String>>,

    /// Records to measure the success rate on (defaults to the training data)
    #[arg(short, long, value_name = "FILE")]
    pub test: Option<PathBuf>,

    /// Merge redundant subtrees before reporting
    #[arg(short, long)]
    pub minimize: bool,

    /// When minimizing, also drop branches no training record reached
    #[arg(long, requires = "minimize")]
    pub remove_empty: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
