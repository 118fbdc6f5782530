//! Actuation of a planned choreography
//!
//! The planner only produces names; an `Actuator` turns each name into a
//! physical move and reports how long it took. Moves are sent one at a time,
//! in order, and the first failure stops the run (there is no retry).

mod script;
mod simulated;

pub use script::ScriptActuator;
pub use simulated::SimulatedActuator;

use crate::config::Config;
use crate::error::ActuatorError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[async_trait]
pub trait Actuator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Perform a single move and return the time it took
    async fn perform(&self, name: &str) -> Result<Duration, ActuatorError>;
}

/// One performed move
#[derive(Debug, Clone)]
pub struct ExecutedMove {
    pub position: usize,
    pub name: String,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct ExecutionReport {
    pub moves: Vec<ExecutedMove>,
    pub total_duration: Duration,
}

/// Create the actuator selected by the config (or the simulated one)
pub fn create_actuator(config: &Config, simulate: bool) -> Arc<dyn Actuator> {
    if simulate {
        let durations: HashMap<String, f64> = config
            .moves
            .iter()
            .map(|(name, m)| (name.clone(), m.duration))
            .chain(
                config
                    .waypoints
                    .iter()
                    .map(|w| (w.name.clone(), w.pose.duration)),
            )
            .collect();
        Arc::new(SimulatedActuator::new(
            durations,
            config.actuator.simulate_speed,
        ))
    } else {
        Arc::new(ScriptActuator::from_config(&config.actuator))
    }
}

/// Send every move to `actuator`, in order, calling `on_move` after each one
pub async fn execute_choreography<F>(
    actuator: &dyn Actuator,
    moves: &[String],
    mut on_move: F,
) -> Result<ExecutionReport, ActuatorError>
where
    F: FnMut(&ExecutedMove),
{
    let start = Instant::now();
    info!("Executing {} moves with {}", moves.len(), actuator.name());

    let mut executed = Vec::with_capacity(moves.len());
    for (position, name) in moves.iter().enumerate() {
        let elapsed = match actuator.perform(name).await {
            Ok(elapsed) => elapsed,
            Err(e) => {
                warn!("Stopping after {} of {} moves: {}", position, moves.len(), e);
                return Err(e);
            }
        };

        let step = ExecutedMove {
            position,
            name: name.clone(),
            elapsed,
        };
        debug!(
            "Move {} of {}: {} took {:?}",
            step.position + 1,
            moves.len(),
            step.name,
            step.elapsed
        );
        on_move(&step);
        executed.push(step);
    }

    Ok(ExecutionReport {
        moves: executed,
        total_duration: start.elapsed(),
    })
}
