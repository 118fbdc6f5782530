mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            planning: PlanningConfig::default(),
            moves: default_moves(),
            waypoints: WaypointsConfig::default(),
            actuator: ActuatorConfig::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from a YAML file, falling back to the built-in setup when
    /// the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!("Config {:?} not found, using built-in choreography", path);
            Ok(Self::default())
        }
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        let planning = &self.planning;
        if !(planning.max_duration > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "planning.max_duration",
                value: planning.max_duration,
                reason: "must be positive",
            });
        }
        if !(planning.lambda_penalty >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "planning.lambda_penalty",
                value: planning.lambda_penalty,
                reason: "must be non-negative",
            });
        }
        if !(planning.time_tolerance >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "planning.time_tolerance",
                value: planning.time_tolerance,
                reason: "must be non-negative",
            });
        }
        if !(self.actuator.simulate_speed > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "actuator.simulate_speed",
                value: self.actuator.simulate_speed,
                reason: "must be positive",
            });
        }

        if self.moves.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (name, m) in &self.moves {
            if !(m.duration > 0.0) {
                return Err(ConfigError::NonPositiveDuration {
                    name: name.clone(),
                    duration: m.duration,
                });
            }
        }

        let mut seen = HashSet::new();
        for waypoint in self.waypoints.iter() {
            if !(waypoint.pose.duration > 0.0) {
                return Err(ConfigError::NonPositiveDuration {
                    name: waypoint.name.clone(),
                    duration: waypoint.pose.duration,
                });
            }
            // Intermediate moves are told apart from waypoints by name
            if self.moves.contains_key(&waypoint.name) {
                return Err(ConfigError::WaypointCollision(waypoint.name.clone()));
            }
            if !seen.insert(waypoint.name.as_str()) {
                return Err(ConfigError::DuplicateWaypoint(waypoint.name.clone()));
            }
        }

        Ok(())
    }
}
