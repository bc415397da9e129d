use std::{
    fs::{self, File},
    io::BufWriter,
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use fastrand::Rng;
use swarmbench::{
    algorithms::particles::{InertiaWeight, PSO},
    io::ResultRecorder,
    logging::Logger,
    observers::{LoggingObserver, TrackingSwarmObserver},
    test_functions::benchmark_suite,
};

#[derive(Parser)]
#[clap(version, about)]
/// Run the constant-weight and dynamic-weight PSO variants on every benchmark function and
/// write the best solutions to a CSV file.
struct Args {
    /// Number of particles in each swarm
    #[arg(long, default_value_t = 100)]
    particles: usize,

    /// Dimensions of the search space
    #[arg(long, default_value_t = 3)]
    dimensions: usize,

    /// Number of iterations per run
    #[arg(long, default_value_t = 200)]
    iterations: usize,

    /// Seed for the random number generator; runs are not reproducible without one
    #[arg(long)]
    seed: Option<u64>,

    /// Logging level; one of DEBUG, INFO, WARNING, ERROR, CRITICAL
    #[arg(long, default_value = "INFO")]
    log_level: String,

    /// Path of the results file
    #[arg(long, default_value = "results/optimization_results.csv")]
    output: PathBuf,

    /// Directory to store a pickled swarm history for every run
    #[arg(long)]
    history_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let logger = Logger::from_level_str(&args.log_level);
    let mut rng = args.seed.map_or_else(Rng::new, Rng::with_seed);
    let schedules = [InertiaWeight::default(), InertiaWeight::dynamic()];

    if let Some(dir) = &args.history_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create history directory {}", dir.display()))?;
    }

    let mut recorder = ResultRecorder::new();
    for (idx, benchmark) in benchmark_suite().iter().enumerate() {
        let name = benchmark.name();
        logger.info(format!(
            "Testing PSO on Benchmark Function {} - {name}",
            idx + 1
        ));
        for schedule in schedules {
            let label = schedule.label();
            let tracker = TrackingSwarmObserver::build();
            let mut pso = PSO::new(args.dimensions, rng.fork());
            pso.configure(|c| {
                c.with_inertia_weight(schedule)
                    .with_max_iterations(args.iterations)
                    .setup_swarm(|swarm| swarm.with_n_particles(args.particles))
            })
            .with_observer(LoggingObserver::build(
                logger.clone(),
                format!("{name} ({label})"),
            ));
            if args.history_dir.is_some() {
                pso.with_observer(tracker.clone());
            }
            match pso.run(&**benchmark, &()) {
                Ok(result) => {
                    logger.debug(format!("{label}:"));
                    logger.debug(format!("Best Position: {:?}", result.x));
                    logger.debug(format!("Best Value: {}", result.fx));
                    recorder.record_result(name, label, &result);
                }
                Err(e) => {
                    logger.error(format!("{label} failed on {name}: {e}"));
                    continue;
                }
            }
            if let Some(dir) = &args.history_dir {
                let file_name = format!("{name}_{}.pkl", label.replace(' ', "_").to_lowercase());
                let path = dir.join(file_name);
                let mut writer = BufWriter::new(
                    File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?,
                );
                tracker
                    .read()
                    .to_pickle(&mut writer)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
    }

    recorder
        .write_csv(&args.output)
        .with_context(|| format!("Failed to write results to {}", args.output.display()))?;
    logger.info(format!("Results written to {}", args.output.display()));
    Ok(())
}
