//! Stencil report merge CLI
//!
//! Entry point for the `merge-updates` command-line tool.

use clap::Parser;
use stencil_report_merge::{logging, MergeConfig, MergeError, MergeSummary, ReportMerger};
use std::path::PathBuf;
use std::process;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "merge-updates")]
#[command(about = "Merge stencil benchmark update reports into a baseline report", version)]
struct Cli {
    /// File containing the baseline stencils json report
    json_ref: PathBuf,

    /// Update json reports; each one updates a particular set of metrics
    #[arg(long, num_args = 1.., required = true)]
    updates: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    let merger = ReportMerger::new(MergeConfig::default());
    if let Err(e) = run(&merger, &cli) {
        eprintln!("Error: {}: {}", e.kind().description(), e);
        process::exit(e.exit_code().as_i32());
    }
}

fn run(merger: &ReportMerger, cli: &Cli) -> Result<(), MergeError> {
    let inputs = merger.load(&cli.json_ref, &cli.updates)?;
    let outcome = merger.merge(&inputs)?;

    for update in &outcome.updates {
        println!("{}", update);
    }

    let output = merger.write(&outcome)?;
    let summary = MergeSummary::new(&inputs, &outcome, output);
    match summary.to_json() {
        Ok(json) => debug!(summary = %json, "merge summary"),
        Err(e) => warn!(error = %e, "merge summary could not be serialized"),
    }

    println!("\n\n********************\n********************");
    println!("Final merged report generated in {}", summary.output.display());
    println!("{}", summary.human_summary);
    Ok(())
}
