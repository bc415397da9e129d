use std::path::PathBuf;

use clap::Parser;
use swarmbench::{
    io::{compare_results_file, ComparisonTable},
    logging::Logger,
};

#[derive(Parser)]
#[clap(version, about)]
/// Compare the best values of the two PSO variants for every benchmark in a results file.
struct Args {
    /// Path of the results file written by `run_benchmarks`
    #[arg(long, default_value = "results/optimization_results.csv")]
    input: PathBuf,

    /// Logging level; one of DEBUG, INFO, WARNING, ERROR, CRITICAL
    #[arg(long, default_value = "INFO")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let logger = Logger::from_level_str(&args.log_level);
    logger.info(format!("Reading results from {}", args.input.display()));
    let comparisons = match compare_results_file(&args.input) {
        Ok(comparisons) => comparisons,
        Err(e) => {
            logger.critical(&e);
            return Err(e.into());
        }
    };
    print!("{}", ComparisonTable(&comparisons));
    Ok(())
}
