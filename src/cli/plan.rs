//! CLI handler for the `plan` subcommand

use crate::cli::PlanArgs;
use crate::config::Config;
use crate::output::{
    print_choreography, print_gap, print_statistics, write_plan_report, PlanReport,
};
use crate::planner::{Choreographer, Plan, SeededShuffle};
use tracing::{info, warn};

pub fn execute(args: PlanArgs) -> anyhow::Result<()> {
    prepare(&args)?;
    Ok(())
}

/// Load config, apply overrides, plan, and print the result
///
/// Shared by `plan` and `run`.
pub fn prepare(args: &PlanArgs) -> anyhow::Result<(Config, Plan)> {
    info!("Loading config from {:?}", args.config);
    let mut config = Config::load_or_default(&args.config)?;
    apply_overrides(&mut config, args);
    config.validate()?;

    let mut tie_break = SeededShuffle::from_seed_or_random(config.planning.seed);
    let seed = tie_break.seed();
    info!("Using seed {}", seed);

    println!("PLANNED CHOREOGRAPHY:");
    let plan = Choreographer::from_config(&config)
        .plan(&mut tie_break)
        .inspect_err(|e| {
            if e.is_configuration() {
                warn!("Raise planning.max_duration or drop some mandatory waypoints");
            } else if e.is_global_constraint() {
                warn!("Try another --seed, a larger --tolerance or a smaller --min-intermediate");
            }
        })?;
    for gap in &plan.gaps {
        print_gap(gap);
    }

    print_statistics(&plan, seed);
    print_choreography(&plan);

    if let Some(ref report_dir) = args.report_dir {
        let report = PlanReport::new(&plan, &config.planning, seed);
        write_plan_report(report_dir, &report)?;
        info!("Wrote plan report to {:?}", report_dir);
    }

    Ok((config, plan))
}

fn apply_overrides(config: &mut Config, args: &PlanArgs) {
    if let Some(seed) = args.seed {
        config.planning.seed = Some(seed);
    }
    if let Some(max_duration) = args.max_duration {
        config.planning.max_duration = max_duration;
    }
    if let Some(lambda) = args.lambda {
        config.planning.lambda_penalty = lambda;
    }
    if let Some(tolerance) = args.tolerance {
        config.planning.time_tolerance = tolerance;
    }
    if let Some(min_intermediate) = args.min_intermediate {
        config.planning.min_intermediate_moves = min_intermediate;
    }
    if args.no_shuffle {
        config.planning.shuffle_mandatory = false;
    }
}
