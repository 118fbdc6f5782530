use super::Actuator;
use crate::error::ActuatorError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Stands in for the robot: waits for each move's nominal duration
pub struct SimulatedActuator {
    durations: HashMap<String, f64>,
    speed: f64,
}

impl SimulatedActuator {
    /// `speed` divides every duration (2.0 plays twice as fast)
    pub fn new(durations: HashMap<String, f64>, speed: f64) -> Self {
        Self { durations, speed }
    }
}

#[async_trait]
impl Actuator for SimulatedActuator {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn perform(&self, name: &str) -> Result<Duration, ActuatorError> {
        let seconds = self
            .durations
            .get(name)
            .ok_or_else(|| ActuatorError::UnknownMove(name.to_string()))?;

        let start = Instant::now();
        sleep(Duration::from_secs_f64(seconds / self.speed)).await;
        Ok(start.elapsed())
    }
}
