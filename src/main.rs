use fieldsim::{ScenarioConfig, Scenario};
use fieldsim::run_2d;
use fieldsim::{bench_fields, bench_dynamics};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "2D electric/magnetic field and Coulomb dynamics visualizer")]
struct Args {
    /// Scenario file under `scenarios/`; the built-in dipole scene if omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run dynamics steps without opening a window
    #[arg(long)]
    headless: bool,

    /// Number of dynamics steps in headless mode
    #[arg(long, default_value_t = 600)]
    steps: u32,

    /// Print sampler and integrator timings and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file_name: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file_name else {
        return Ok(ScenarioConfig::default());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    Ok(scenario_cfg)
}

/// Bevy's LogPlugin installs its own subscriber, so this is only for
/// the windowless modes
fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run_headless(mut scenario: Scenario, steps: u32) {
    // one tick interval per iteration, so every iteration is one step
    let tick = scenario.ticker.interval().max(Duration::from_millis(1));
    let mut taken = 0;
    for _ in 0..steps {
        taken += scenario.advance(tick);
    }

    info!("ran {taken} of {steps} steps in {} mode", scenario.engine.mode.label());
    for c in &scenario.scene.charges {
        info!(
            id = %c.id,
            "x = ({:.3}, {:.3}), v = ({:.3}, {:.3})",
            c.x.x, c.x.y, c.v.x, c.v.y
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        init_logging()?;
        bench_fields();
        bench_dynamics();
        return Ok(());
    }

    let scenario_cfg = load_scenario(args.file_name.as_deref())?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if args.headless {
        init_logging()?;
        run_headless(scenario, args.steps);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
