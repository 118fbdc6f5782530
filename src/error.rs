use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Move '{name}' has non-positive duration {duration}")]
    NonPositiveDuration { name: String, duration: f64 },

    #[error("Waypoint '{0}' is also defined as an intermediate move")]
    WaypointCollision(String),

    #[error("Waypoint '{0}' appears more than once")]
    DuplicateWaypoint(String),

    #[error("Move catalog is empty")]
    EmptyCatalog,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("frontier exhausted after expanding {expanded} nodes")]
    Exhausted { expanded: usize },

    #[error("expansion limit of {limit} nodes reached")]
    LimitExceeded { limit: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error(
        "Total budget ({budget:.2}s) is smaller than the mandatory duration ({committed:.2}s)"
    )]
    Configuration { budget: f64, committed: f64 },

    #[error(
        "Gap {gap} ({from} -> {to}): no solution filling {slot:.2}s within tolerance {tolerance:.2}s \
         (standing {start_standing} -> {goal_standing}), frontier exhausted after {expanded} expansions"
    )]
    GapUnsolvable {
        gap: usize,
        from: String,
        to: String,
        slot: f64,
        tolerance: f64,
        start_standing: bool,
        goal_standing: bool,
        expanded: usize,
    },

    #[error("Gap {gap} ({from} -> {to}): search gave up after {limit} expansions")]
    SearchLimitExceeded {
        gap: usize,
        from: String,
        to: String,
        limit: usize,
    },

    #[error("Choreography has only {actual} intermediate moves, at least {required} are required")]
    TooFewIntermediateMoves { required: usize, actual: usize },

    #[error("Choreography position {position} ('{name}'): expected standing={expected}, found standing={actual}")]
    PostureMismatch {
        position: usize,
        name: String,
        expected: bool,
        actual: bool,
    },

    #[error("Choreography position {position}: '{name}' is repeated back to back")]
    AdjacentRepeat { position: usize, name: String },

    #[error("Choreography position {position}: '{name}' is not a known move or waypoint")]
    UnknownMove { position: usize, name: String },
}

#[derive(Error, Debug)]
pub enum ActuatorError {
    #[error("Move '{name}' timed out after {timeout:?}")]
    Timeout {
        name: String,
        timeout: std::time::Duration,
    },

    #[error("Failed to launch actuator for '{name}': {source}")]
    Spawn {
        name: String,
        source: std::io::Error,
    },

    #[error("Move '{name}' failed with exit code {code}: {stderr}")]
    NonZeroExit {
        name: String,
        code: i32,
        stderr: String,
    },

    #[error("Move '{0}' is not in the catalog")]
    UnknownMove(String),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PlanError {
    /// Config-level failure that is detected before any search starts
    pub fn is_configuration(&self) -> bool {
        matches!(self, PlanError::Configuration { .. })
    }

    /// Failure detected after every gap has been solved
    pub fn is_global_constraint(&self) -> bool {
        matches!(
            self,
            PlanError::TooFewIntermediateMoves { .. }
                | PlanError::PostureMismatch { .. }
                | PlanError::AdjacentRepeat { .. }
                | PlanError::UnknownMove { .. }
        )
    }
}
