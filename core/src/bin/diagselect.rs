use clap::{Parser, ValueEnum};
use diagtree_core::{optimal_tree, parse_data, Diagnoser, Node, Record, TextReport};
use log::{error, info, warn};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process;

/// CLI tool for finding the most accurate fixed-depth diagnosis tree
#[derive(Parser, Debug)]
#[command(name = "diagselect")]
#[command(about = "Search every symptom subset of a given size for the most accurate tree")]
#[command(version)]
struct Cli {
    /// Training records, one per line: illness followed by symptoms
    #[arg(value_name = "FILE")]
    data: PathBuf,

    /// Candidate symptoms (defaults to every symptom in the data, sorted)
    #[arg(short, long, value_delimiter = ',')]
    symptoms: Option<Vec<String>>,

    /// Number of symptoms the tree may test
    #[arg(short, long)]
    depth: usize,

    /// Merge redundant subtrees of the winning tree
    #[arg(short, long)]
    minimize: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
    /// Tested symptoms only (one per line)
    Symptoms,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    info!("Reading training records: {}", cli.data.display());

    let records = match parse_data(&cli.data) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to read records: {}", e);
            eprintln!("Error: Failed to read records: {}", e);
            process::exit(1);
        }
    };

    if records.is_empty() {
        eprintln!("Error: No records found in {}", cli.data.display());
        process::exit(1);
    }

    info!("Loaded {} records", records.len());

    let symptoms = match cli.symptoms {
        Some(symptoms) => symptoms,
        None => {
            let symptoms = collect_symptoms(&records);
            info!("Using all {} symptoms from the data", symptoms.len());
            symptoms
        }
    };

    let mut diagnoser = match optimal_tree(&records, symptoms.as_slice(), cli.depth) {
        Ok(Some(diagnoser)) => diagnoser,
        Ok(None) => {
            warn!("No candidate tree diagnosed any record correctly");
            eprintln!("Error: No tree found");
            process::exit(1);
        }
        Err(e) => {
            error!("Search failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.minimize {
        diagnoser.minimize();
    }

    // records are non-empty here
    let success_rate = diagnoser.calculate_success_rate(&records).unwrap_or(0.0);
    info!("Best success rate: {:.3}", success_rate);

    output_selection(&diagnoser, success_rate, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// Every symptom mentioned by the records, sorted
fn collect_symptoms(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.symptoms().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Symptoms tested anywhere in the tree, in pre-order of first use
fn tested_symptoms(node: &Node) -> Vec<String> {
    fn visit(node: &Node, out: &mut Vec<String>) {
        if let Node::Decision { symptom, yes, no } = node {
            if !out.contains(symptom) {
                out.push(symptom.clone());
            }
            visit(yes, out);
            visit(no, out);
        }
    }

    let mut out = Vec::new();
    visit(node, &mut out);
    out
}

fn output_selection(diagnoser: &Diagnoser, success_rate: f64, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(diagnoser).with_success_rate(success_rate);
            println!("{}", report);
        }
        OutputFormat::Symptoms => {
            for symptom in tested_symptoms(diagnoser.root()) {
                println!("{}", symptom);
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(diagnoser, success_rate) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(diagnoser: &Diagnoser, success_rate: f64) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct SelectionJson<'a> {
        symptoms: Vec<String>,
        success_rate: f64,
        illnesses: Vec<String>,
        tree: &'a Diagnoser,
    }

    let output = SelectionJson {
        symptoms: tested_symptoms(diagnoser.root()),
        success_rate,
        illnesses: diagnoser.all_illnesses(),
        tree: diagnoser,
    };

    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagtree_core::build_tree;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_collect_symptoms_sorted_and_distinct() {
        let records = vec![
            Record::new("flu", ["fever", "cough"]),
            Record::new("cold", ["cough", "sneezing"]),
            Record::new("healthy", Vec::<String>::new()),
        ];
        assert_eq!(collect_symptoms(&records), vec!["cough", "fever", "sneezing"]);
    }

    #[test]
    fn test_collect_symptoms_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.txt");

        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "influenza cough fever").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "cold cough").unwrap();

        let records = parse_data(&file_path).unwrap();
        assert_eq!(collect_symptoms(&records), vec!["cough", "fever"]);
    }

    #[test]
    fn test_tested_symptoms_pre_order() {
        let records = vec![
            Record::new("flu", ["fever", "cough"]),
            Record::new("cold", ["cough"]),
        ];
        let diagnoser = build_tree(&records, &["fever", "cough"]);
        assert_eq!(tested_symptoms(diagnoser.root()), vec!["fever", "cough"]);
    }

    #[test]
    fn test_tested_symptoms_after_minimize() {
        let records = vec![
            Record::new("flu", ["fever", "cough"]),
            Record::new("flu", ["fever"]),
            Record::new("cold", ["cough"]),
            Record::new("cold", Vec::<String>::new()),
        ];
        let mut diagnoser = build_tree(&records, &["fever", "cough"]);
        diagnoser.minimize();
        assert_eq!(tested_symptoms(diagnoser.root()), vec!["fever"]);
    }

    #[test]
    fn test_tested_symptoms_leaf() {
        let diagnoser = Diagnoser::new(Node::leaf(diagtree_core::Diagnosis::NoFinding));
        assert!(tested_symptoms(diagnoser.root()).is_empty());
    }
}
