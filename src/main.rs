use gravsim::{ScenarioConfig, Scenario};
use gravsim::run_2d;
use gravsim::{bench_gravity, bench_step_curve};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Terminate the process automatically once the run finishes
    #[arg(long)]
    auto_exit: bool,

    /// Run the headless benchmark suite instead of the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step_curve();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    // The CLI flag wins over the config file
    if args.auto_exit {
        scenario_cfg.engine.auto_exit = true;
    }

    let scenario = Scenario::build_scenario(scenario_cfg);

    println!("Gravity particle simulation");
    println!("Particles: {}", scenario.particles().len());

    run_2d(scenario);

    Ok(())
}
