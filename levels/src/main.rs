//! `levels`: run a level solver over every input file of that level.
//!
//! Inputs live in `<root>/data/level<N>_<variant>.in`; outputs are written to
//! `<root>/output/level<N>_<variant>.out`. `<root>` defaults to the install
//! directory and can be overridden with `--root`.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use levels::core::input_file::FileOrdering;
use levels::exit_codes;
use levels::io::config::{HarnessConfig, load_config};
use levels::io::init::{InitOptions, init_layout};
use levels::io::locator::list_input_files;
use levels::io::paths::{HarnessPaths, install_root};
use levels::run::run_level;
use levels::solvers::{SOLVED_LEVELS, solver_for};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "levels",
    version,
    about = "Batch harness for level-based puzzle inputs"
)]
struct Cli {
    /// Harness root containing `data/` and `output/` (default: install directory).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Config file (default: `<root>/levels.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// CLI spelling of [`FileOrdering`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderingArg {
    /// Byte order of the full file name.
    Lexicographic,
    /// `example` first, then ascending numeric index.
    Variant,
}

impl From<OrderingArg> for FileOrdering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Lexicographic => FileOrdering::Lexicographic,
            OrderingArg::Variant => FileOrdering::Variant,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Solve every input file of a level and write the outputs.
    Run {
        level: u32,
        /// Override the configured file ordering.
        #[arg(long, value_enum)]
        ordering: Option<OrderingArg>,
    },
    /// Print the input files that `run` would process, one path per line.
    List {
        level: u32,
        #[arg(long, value_enum)]
        ordering: Option<OrderingArg>,
    },
    /// Create `data/`, `output/` and a default `levels.toml`.
    Init {
        /// Overwrite an existing `levels.toml`.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    levels::logging::init();
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(exit_codes::FAILED);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let paths = HarnessPaths::new(cli.root.clone().unwrap_or_else(install_root));
    match cli.command {
        Command::Run { level, ordering } => cmd_run(&paths, cli.config, level, ordering),
        Command::List { level, ordering } => cmd_list(&paths, cli.config, level, ordering),
        Command::Init { force } => cmd_init(&paths, force),
    }
}

fn cmd_run(
    paths: &HarnessPaths,
    config: Option<PathBuf>,
    level: u32,
    ordering: Option<OrderingArg>,
) -> Result<i32> {
    let cfg = load(paths, config)?;
    let Some(solver) = solver_for(level, cfg.numbers) else {
        let known: Vec<String> = SOLVED_LEVELS.iter().map(u32::to_string).collect();
        eprintln!(
            "no solver registered for level {level} (available: {})",
            known.join(", ")
        );
        return Ok(exit_codes::UNKNOWN_LEVEL);
    };
    let mut dirs = cfg.resolve(paths);
    if let Some(ordering) = ordering {
        dirs.ordering = ordering.into();
    }
    let summary =
        run_level(&dirs, level, solver.as_ref()).with_context(|| format!("run level {level}"))?;
    debug!(level, files = summary.files.len(), "run finished");
    println!("Level {level} completed!");
    Ok(exit_codes::OK)
}

fn cmd_list(
    paths: &HarnessPaths,
    config: Option<PathBuf>,
    level: u32,
    ordering: Option<OrderingArg>,
) -> Result<i32> {
    let cfg = load(paths, config)?;
    let dirs = cfg.resolve(paths);
    let files = list_input_files(
        &dirs.data_dir,
        level,
        ordering.map_or(dirs.ordering, FileOrdering::from),
    )
        .with_context(|| format!("list level {level}"))?;
    for file in files {
        println!("{}", file.path.display());
    }
    Ok(exit_codes::OK)
}

fn cmd_init(paths: &HarnessPaths, force: bool) -> Result<i32> {
    init_layout(&paths.root, &InitOptions { force })
        .with_context(|| format!("init {}", paths.root.display()))?;
    println!("init: root={}", paths.root.display());
    Ok(exit_codes::OK)
}

fn load(paths: &HarnessPaths, config: Option<PathBuf>) -> Result<HarnessConfig> {
    let config_path = config.unwrap_or_else(|| paths.config_path.clone());
    let cfg = load_config(&config_path).context("load config")?;
    debug!(config = %config_path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run() {
        let cli = Cli::parse_from(["levels", "run", "1"]);
        assert!(matches!(
            cli.command,
            Command::Run {
                level: 1,
                ordering: None
            }
        ));
        assert!(cli.root.is_none());
    }

    #[test]
    fn parse_run_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "levels",
            "run",
            "3",
            "--ordering",
            "variant",
            "--root",
            "/srv/puzzles",
        ]);
        assert!(matches!(
            cli.command,
            Command::Run {
                level: 3,
                ordering: Some(OrderingArg::Variant)
            }
        ));
        assert_eq!(cli.root, Some(PathBuf::from("/srv/puzzles")));
    }

    #[test]
    fn ordering_arg_maps_onto_file_ordering() {
        assert_eq!(
            FileOrdering::from(OrderingArg::Lexicographic),
            FileOrdering::Lexicographic
        );
        assert_eq!(FileOrdering::from(OrderingArg::Variant), FileOrdering::Variant);
        assert!(Cli::try_parse_from(["levels", "list", "1", "--ordering", "random"]).is_err());
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["levels", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn negative_level_is_rejected() {
        assert!(Cli::try_parse_from(["levels", "run", "-1"]).is_err());
    }
}
