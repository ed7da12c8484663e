//! posebench CLI.
//!
//! Provides two modes of operation:
//! - `generate`: Build a benchmark query set from a robot description and
//!   benchmark options, and emit it as JSON
//! - `info`: Print workspace crate versions

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{error, info};

use posebench_model::{SemanticDescription, parse_file};
use posebench_query::{
    BenchmarkOptions, PlanningSceneHandle, PredefinedPosesLoader, QueryDataLoader,
};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Motion-planning benchmark query generation.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a benchmark query set and emit it as JSON.
    Generate {
        /// Path to the robot URDF file.
        #[arg(short, long)]
        urdf: PathBuf,

        /// Path to the semantic description (groups and poses, TOML).
        #[arg(short, long)]
        semantic: PathBuf,

        /// Path to the benchmark options (TOML).
        #[arg(short, long)]
        options: PathBuf,

        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_generate(
    urdf: &Path,
    semantic: &Path,
    options: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let options = BenchmarkOptions::from_file(options)?;

    let mut model = parse_file(urdf)?;
    SemanticDescription::from_file(semantic)?.apply(&mut model)?;
    info!(
        "loaded robot model '{}': {} variables, groups [{}]",
        model.name(),
        model.variable_count(),
        model.group_names().join(", ")
    );

    let scene =
        PlanningSceneHandle::new(options.scene_name.clone()).with_robot_model(Arc::new(model));
    let query_set = PredefinedPosesLoader.load_query_data(&scene, &options)?;
    info!(
        "generated {} start states and {} goal constraints ({} pairings)",
        query_set.start_states.len(),
        query_set.goal_constraints.len(),
        query_set.pairing_count()
    );

    let json = serde_json::to_string_pretty(&query_set)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("wrote query set to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_info() {
    println!("posebench v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  posebench-model {}", env!("CARGO_PKG_VERSION"));
    println!("  posebench-query {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Generate {
            urdf,
            semantic,
            options,
            output,
        } => run_generate(urdf, semantic, options, output.as_deref()),
        Commands::Info => {
            run_info();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
