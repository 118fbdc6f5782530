pub mod init;
pub mod plan;
pub mod run;
pub mod schema;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "choreoplan")]
#[command(
    author,
    version,
    about = "Plan and perform time-budgeted robot choreographies with A* search"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan a choreography and print it
    Plan(PlanArgs),

    /// Plan a choreography and perform it on the robot
    Run(RunArgs),

    /// Write the built-in configuration to a file
    Init(InitArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Args, Clone, Debug)]
pub struct PlanArgs {
    /// Path to config file (built-in choreography if missing)
    #[arg(short, long, default_value = "choreoplan.yaml")]
    pub config: PathBuf,

    /// Seed for tie-breaking and waypoint shuffling
    #[arg(long, env = "CHOREOPLAN_SEED")]
    pub seed: Option<u64>,

    /// Override total time budget (seconds)
    #[arg(long)]
    pub max_duration: Option<f64>,

    /// Override repetition penalty weight
    #[arg(long)]
    pub lambda: Option<f64>,

    /// Override accepted leftover time per gap (seconds)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Override minimum number of intermediate moves
    #[arg(long)]
    pub min_intermediate: Option<usize>,

    /// Keep mandatory waypoints in config order
    #[arg(long)]
    pub no_shuffle: bool,

    /// Write plan.json and plan.md into this directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Robot address
    #[arg(long)]
    pub robot_ip: Option<String>,

    /// Robot port
    #[arg(long)]
    pub port: Option<u16>,

    /// Use the simulated actuator instead of launching move scripts
    #[arg(long)]
    pub simulate: bool,

    /// Do not start ambient music
    #[arg(long)]
    pub no_music: bool,
}

#[derive(Args, Clone, Debug)]
pub struct InitArgs {
    /// Destination file
    #[arg(default_value = "choreoplan.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
