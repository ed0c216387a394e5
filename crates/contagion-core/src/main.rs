//! Opinion Contagion Simulation Runner
//!
//! Loads a network, runs the model until it converges or the tick budget is
//! spent, and writes per-tick records plus run statistics.

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use contagion_core::config::{Config, DEFAULT_TUNING_PATH};
use contagion_core::output::{
    write_stats, MemoryCollector, ReportWriter, StatsCollector, STATS_FILE_NAME, TICKS_FILE_NAME,
};
use contagion_core::{load_network, Simulation};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "opinion_contagion")]
#[command(about = "Joint contagion and opinion dynamics on a social network")]
struct Args {
    /// Node-link JSON graph with per-node attributes
    #[arg(long)]
    graph: PathBuf,

    /// Tuning file (defaults to tuning.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Confidence threshold
    #[arg(long)]
    epsilon: Option<f64>,

    /// Per-tick recovery probability
    #[arg(long)]
    beta: Option<f64>,

    /// Confidence-weight constant
    #[arg(long)]
    weight: Option<f64>,

    /// Directory for ticks.jsonl and stats.json
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Write aggregate counters only
    #[arg(long)]
    no_actors: bool,

    /// Keep stepping after the convergence flag is raised
    #[arg(long)]
    run_past_convergence: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.simulation.seed = seed;
        }
        if let Some(ticks) = self.ticks {
            config.simulation.max_ticks = ticks;
        }
        if let Some(epsilon) = self.epsilon {
            config.model.epsilon = epsilon;
        }
        if let Some(beta) = self.beta {
            config.model.beta = beta;
        }
        if let Some(weight) = self.weight {
            config.model.weight = weight;
        }
        if let Some(ref dir) = self.output_dir {
            config.output.directory = dir.clone();
        }
        if self.no_actors {
            config.output.record_actors = false;
        }
        if self.run_past_convergence {
            config.simulation.stop_on_convergence = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let mut config = match args.config {
        Some(ref path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::load_or_default(DEFAULT_TUNING_PATH)
            .with_context(|| format!("loading {}", DEFAULT_TUNING_PATH))?,
    };
    args.apply_to(&mut config);
    config.validate()?;

    println!("Opinion Contagion Simulation");
    println!("============================");
    println!("Seed: {}", config.simulation.seed);
    println!("Max ticks: {}", config.simulation.max_ticks);
    println!(
        "epsilon = {}, beta = {}, weight = {}",
        config.model.epsilon, config.model.beta, config.model.weight
    );
    println!();

    let network = load_network(&args.graph)?;

    let output_dir = &config.output.directory;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;
    let mut writer = ReportWriter::new(output_dir.join(TICKS_FILE_NAME), config.output.record_actors)?;
    let mut stats = StatsCollector::new();

    let collector = if config.output.record_actors {
        MemoryCollector::new()
    } else {
        MemoryCollector::aggregates_only()
    };
    let mut sim = Simulation::with_sink(network, config.model, config.simulation.seed, collector)?;
    println!(
        "Network: {} actors, {} edges",
        sim.network().node_count(),
        sim.network().edge_count()
    );

    let outcome = sim.run_with(
        config.simulation.max_ticks,
        config.simulation.stop_on_convergence,
        |sim| -> anyhow::Result<()> {
            let records = sim.sink_mut().drain();
            for record in &records {
                stats.record_tick(record);
            }
            writer.write_batch(&records)?;

            if sim.tick() % 100 == 0 {
                let counters = sim.counters();
                println!(
                    "Tick {:>5}: S={} E={} I={} R={}",
                    sim.tick(),
                    counters.susceptible(),
                    counters.exposed(),
                    counters.infected(),
                    counters.recovered()
                );
            }
            Ok(())
        },
    )?;
    writer.flush()?;

    let final_aggregates = sim.aggregates();
    stats.record_aggregates(sim.tick(), &final_aggregates);
    let summary = stats.generate_stats(
        config.simulation.seed,
        sim.tick(),
        &outcome,
        final_aggregates,
        sim.cascade_sizes(),
    );
    write_stats(&summary, output_dir.join(STATS_FILE_NAME))?;

    println!();
    match outcome.converged_at {
        Some(tick) => println!("Converged at tick {}.", tick),
        None => println!("No convergence within {} ticks.", sim.tick()),
    }
    println!(
        "Final: consumers={} spreaders={} S={} E={} I={} R={} leftist={} rightist={}",
        final_aggregates.consumers,
        final_aggregates.spreaders,
        final_aggregates.susceptible,
        final_aggregates.exposed,
        final_aggregates.infected,
        final_aggregates.recovered,
        final_aggregates.leftist,
        final_aggregates.rightist
    );
    println!("Wrote {} tick records to {}", writer.record_count(), output_dir.display());

    Ok(())
}
