use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use rlmc::report::{write_parameters, write_results_csv, write_trajectory_csv};
use rlmc::{run_sweep, SweepConfig};

/// Monte Carlo emission sweep for a 3D random laser medium
#[derive(Parser)]
#[command(name = "rlmc")]
#[command(
    about = "Sweep the interior mean free path and estimate emission ratio and residence time",
    long_about = None
)]
struct Cli {
    /// JSON configuration file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory receiving results.csv, parameters.txt and trajectories
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the number of incident photons per swept value
    #[arg(long)]
    photons: Option<usize>,
    /// Override the step cap per photon
    #[arg(long)]
    iterations: Option<usize>,
    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SweepConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => SweepConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(photons) = cli.photons {
        config.photons = photons;
    }
    if let Some(iterations) = cli.iterations {
        config.max_iterations = iterations;
    }

    if cli.print_config {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }

    let points = run_sweep(&config)?;

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    write_results_csv(cli.out_dir.join("results.csv"), &points)?;
    write_parameters(cli.out_dir.join("parameters.txt"), &config)?;
    for (index, point) in points.iter().enumerate() {
        if let Some(trajectory) = &point.last_emitted {
            let path = cli.out_dir.join(format!("trajectory_{}.csv", index));
            write_trajectory_csv(path, trajectory)?;
        }
    }

    let secondaries: usize = points.iter().map(|p| p.secondaries).sum();
    let emitted: usize = points.iter().map(|p| p.emitted).sum();
    log::info!(
        "Finished {} sweep values: {} secondaries, {} emitted; results in {}",
        points.len(),
        secondaries,
        emitted,
        cli.out_dir.display()
    );
    Ok(())
}
