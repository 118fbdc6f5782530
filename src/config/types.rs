use crate::catalog::{Move, Waypoint};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub planning: PlanningConfig,

    /// Intermediate moves available to fill the gaps between waypoints
    #[serde(default = "default_moves")]
    pub moves: BTreeMap<String, Move>,

    #[serde(default)]
    pub waypoints: WaypointsConfig,

    #[serde(default)]
    pub actuator: ActuatorConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PlanningConfig {
    /// Total time budget of the choreography, in seconds
    #[serde(default = "default_max_duration")]
    pub max_duration: f64,

    /// Weight of the quadratic repetition penalty
    #[serde(default = "default_lambda_penalty")]
    pub lambda_penalty: f64,

    /// Leftover time accepted at the end of each gap, in seconds
    #[serde(default = "default_time_tolerance")]
    pub time_tolerance: f64,

    #[serde(default = "default_min_intermediate_moves")]
    pub min_intermediate_moves: usize,

    /// Seed for the tie-break policy; drawn at random when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Randomize the order of the mandatory waypoints
    #[serde(default = "default_true")]
    pub shuffle_mandatory: bool,

    /// Node expansions allowed per gap before the search gives up
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            max_duration: default_max_duration(),
            lambda_penalty: default_lambda_penalty(),
            time_tolerance: default_time_tolerance(),
            min_intermediate_moves: default_min_intermediate_moves(),
            seed: None,
            shuffle_mandatory: true,
            max_expansions: default_max_expansions(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct WaypointsConfig {
    /// Fixed opening pose
    #[serde(default = "default_start")]
    pub start: Waypoint,

    /// Poses that must appear between start and end
    #[serde(default = "default_mandatory")]
    pub mandatory: Vec<Waypoint>,

    /// Fixed closing pose
    #[serde(default = "default_end")]
    pub end: Waypoint,
}

impl Default for WaypointsConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            mandatory: default_mandatory(),
            end: default_end(),
        }
    }
}

impl WaypointsConfig {
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        std::iter::once(&self.start)
            .chain(self.mandatory.iter())
            .chain(std::iter::once(&self.end))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ActuatorConfig {
    /// Program launched once per move
    #[serde(default = "default_actuator_program")]
    pub program: String,

    /// Arguments; `{move}`, `{ip}` and `{port}` are substituted
    #[serde(default = "default_actuator_args")]
    pub args: Vec<String>,

    #[serde(default = "default_robot_ip")]
    pub robot_ip: String,

    #[serde(default = "default_robot_port")]
    pub port: u16,

    #[serde(default = "default_move_timeout_sec")]
    pub move_timeout_sec: u64,

    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Playback speed of the simulated actuator (2.0 = twice as fast)
    #[serde(default = "default_simulate_speed")]
    pub simulate_speed: f64,
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            program: default_actuator_program(),
            args: default_actuator_args(),
            robot_ip: default_robot_ip(),
            port: default_robot_port(),
            move_timeout_sec: default_move_timeout_sec(),
            working_dir: None,
            simulate_speed: default_simulate_speed(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PlaybackConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_player")]
    pub player: PathBuf,

    #[serde(default = "default_song")]
    pub song: PathBuf,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            player: default_player(),
            song: default_song(),
        }
    }
}
