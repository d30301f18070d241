use clap::Parser;
use diagtree_core::cli::{Cli, OutputFormat};
use diagtree_core::{
    build_tree, parse_data, Diagnoser, Diagnosis, MinimizeOptions, Record, TextReport,
};
use log::{error, info, warn};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> diagtree_core::Result<()> {
    info!("Reading training records: {}", cli.data.display());
    let records = parse_data(&cli.data)?;
    info!("Loaded {} records", records.len());

    let mut diagnoser = build_tree(&records, cli.symptoms.as_slice());

    if cli.minimize {
        let before = diagnoser.node_count();
        diagnoser.minimize_with_options(MinimizeOptions::default().remove_empty(cli.remove_empty));
        info!("Minimized tree from {} to {} nodes", before, diagnoser.node_count());
    }

    let evaluation = match &cli.test {
        Some(path) => {
            info!("Reading test records: {}", path.display());
            parse_data(path)?
        }
        None => records,
    };
    let success_rate = measure_success_rate(&diagnoser, &evaluation);

    let diagnosis = cli
        .diagnose
        .as_ref()
        .map(|symptoms| diagnoser.diagnose(symptoms.as_slice()).clone());

    match cli.format {
        OutputFormat::Text => {
            let mut report = TextReport::new(&diagnoser);
            if let Some(rate) = success_rate {
                report = report.with_success_rate(rate);
            }
            println!("{}", report);
            if let Some(diagnosis) = diagnosis {
                println!("Diagnosis: {}", diagnosis);
            }
        }
        OutputFormat::Json => output_json(&diagnoser, success_rate, diagnosis),
    }

    Ok(())
}

/// Scores the tree, warning instead of failing when there is nothing to score
fn measure_success_rate(diagnoser: &Diagnoser, records: &[Record]) -> Option<f64> {
    match diagnoser.calculate_success_rate(records) {
        Ok(rate) => Some(rate),
        Err(e) => {
            warn!("Skipping success rate: {}", e);
            None
        }
    }
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

#[cfg(feature = "json")]
fn output_json(diagnoser: &Diagnoser, success_rate: Option<f64>, diagnosis: Option<Diagnosis>) {
    #[derive(serde::Serialize)]
    struct TreeJson<'a> {
        tree: &'a Diagnoser,
        success_rate: Option<f64>,
        illnesses: Vec<String>,
        diagnosis: Option<Diagnosis>,
    }

    let output = TreeJson {
        tree: diagnoser,
        success_rate,
        illnesses: diagnoser.all_illnesses(),
        diagnosis,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize to JSON: {}", e);
            eprintln!("Error: Failed to serialize to JSON: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(not(feature = "json"))]
fn output_json(_diagnoser: &Diagnoser, _success_rate: Option<f64>, _diagnosis: Option<Diagnosis>) {
    eprintln!("Error: JSON output requires the 'json' feature");
    eprintln!("Rebuild with: cargo build --features json");
    process::exit(1);
}
