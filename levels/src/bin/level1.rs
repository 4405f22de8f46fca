//! Level 1 entry point: solve every `data/level1_*.in` under the install root.

use anyhow::{Context, Result};
use levels::io::config::load_config;
use levels::io::paths::{HarnessPaths, install_root};
use levels::run::run_level;
use levels::solvers::level1::FlightHeights;

fn main() -> Result<()> {
    levels::logging::init();
    let paths = HarnessPaths::new(install_root());
    let cfg = load_config(&paths.config_path).context("load config")?;
    run_level(&cfg.resolve(&paths), 1, &FlightHeights::new(cfg.numbers))
        .context("run level 1")?;
    println!("Level 1 completed!");
    Ok(())
}
