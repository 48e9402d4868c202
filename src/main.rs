use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use wayfarer::config::Config;
use wayfarer::generator::{ItineraryGenerator, PlaceholderGenerator};
use wayfarer::logging::init_tracing;
use wayfarer::ui::runtime::run;

/// Plan a trip: enter your preferences, get an itinerary.
#[derive(Debug, Parser)]
#[command(name = "wayfarer", version, about)]
struct Cli {
    /// Path to the config file (default: <config_dir>/wayfarer/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the simulated generation delay in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Prepend a destination heading to generated itineraries
    #[arg(long)]
    personalize: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(delay_ms) = self.delay_ms {
            config.generator.delay_ms = delay_ms;
        }
        if self.personalize {
            config.generator.personalize = true;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("wayfarer-generator")
        .enable_time()
        .build()
        .context("failed to start async runtime")?;

    let generator: Arc<dyn ItineraryGenerator> =
        Arc::new(PlaceholderGenerator::from_config(&config.generator));
    tracing::info!(
        generator = generator.name(),
        delay_ms = config.generator.delay_ms,
        "starting planner"
    );

    run(&config, generator, runtime.handle().clone()).context("terminal UI failed")?;

    runtime.shutdown_timeout(Duration::from_millis(100));
    Ok(())
}
