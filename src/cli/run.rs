//! CLI handler for the `run` subcommand
//!
//! Plans like `plan`, then sends the choreography to the robot.

use crate::actuator::{create_actuator, execute_choreography};
use crate::cli::RunArgs;
use crate::output::print_executed_move;
use crate::playback::Playback;
use tracing::info;

pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    let (mut config, plan) = super::plan::prepare(&args.plan)?;

    if let Some(robot_ip) = args.robot_ip {
        config.actuator.robot_ip = robot_ip;
    }
    if let Some(port) = args.port {
        config.actuator.port = port;
    }
    if args.no_music {
        config.playback.enabled = false;
    }

    println!("\nDANCE EXEC:");
    let actuator = create_actuator(&config, args.simulate);
    info!(
        "Performing on {}:{} via {}",
        config.actuator.robot_ip,
        config.actuator.port,
        actuator.name()
    );

    let playback = Playback::start(&config.playback);
    let result = execute_choreography(actuator.as_ref(), &plan.moves, print_executed_move).await;
    if let Some(playback) = playback {
        playback.stop().await;
    }

    let report = result?;
    println!(
        "Length of the entire choreography: {:.2} seconds.",
        report.total_duration.as_secs_f64()
    );
    Ok(())
}
