use orbsim::{run, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "orbsim", about = "Circular-orbit simulator writing per-step body positions")]
struct Args {
    /// Scenario YAML; relative names are also looked up in the crate's scenarios/ directory
    #[arg(short, long = "file", default_value = "four_body_kepler.yaml")]
    file_name: PathBuf,

    /// Output file, one "name, x, y, z" line per body per step
    #[arg(short, long, default_value = "data.csv")]
    output: PathBuf,

    /// Override the step count from the scenario
    #[arg(long)]
    steps: Option<usize>,
}

fn resolve_scenario_path(file_name: &Path) -> PathBuf {
    if file_name.is_absolute() || file_name.exists() {
        return file_name.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &Path) -> Result<ScenarioConfig> {
    let config_path = resolve_scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_yaml_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    tracing::debug!(?scenario_cfg, "scenario loaded");

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(steps) = args.steps {
        scenario_cfg.parameters.steps = steps;
    }

    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    run(&scenario, &mut out)
        .with_context(|| format!("simulation aborted writing {}", args.output.display()))?;

    Ok(())
}
