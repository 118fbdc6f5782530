//! Types describing a finished choreography plan

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of solving one gap between two waypoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GapSolution {
    /// 1-based gap number
    pub index: usize,

    /// Waypoint opening the gap
    pub from: String,

    /// Waypoint closing the gap
    pub to: String,

    pub start_standing: bool,
    pub goal_standing: bool,

    /// Seconds available for intermediate moves
    pub slot: f64,

    /// Intermediate moves chosen for the gap
    pub moves: Vec<String>,

    /// Seconds filled by `moves`
    pub consumed: f64,

    /// Path cost including repetition penalties
    pub cost: f64,

    pub expanded: usize,
    pub generated: usize,
}

impl GapSolution {
    pub fn remaining(&self) -> f64 {
        self.slot - self.consumed
    }
}

/// A complete, validated choreography
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Plan {
    /// Every move in execution order, waypoints included
    pub moves: Vec<String>,

    /// Waypoints in the order they were planned
    pub waypoints: Vec<String>,

    pub gaps: Vec<GapSolution>,

    /// Total time budget
    pub budget: f64,

    /// Seconds taken by the waypoints themselves
    pub committed: f64,

    /// Seconds available to each gap
    pub slot: f64,

    /// Seconds taken by the whole choreography
    pub scheduled_duration: f64,

    pub planning_time_sec: f64,
}

impl Plan {
    pub fn is_waypoint(&self, name: &str) -> bool {
        self.waypoints.iter().any(|w| w == name)
    }

    pub fn intermediate_moves(&self) -> impl Iterator<Item = &str> {
        let waypoints: HashSet<&str> = self.waypoints.iter().map(String::as_str).collect();
        self.moves
            .iter()
            .map(String::as_str)
            .filter(move |m| !waypoints.contains(m))
    }

    pub fn intermediate_count(&self) -> usize {
        self.intermediate_moves().count()
    }

    /// Sum of the penalized costs of every gap
    pub fn total_cost(&self) -> f64 {
        self.gaps.iter().map(|g| g.cost).sum()
    }

    /// Budget left unused by the schedule
    pub fn slack_left(&self) -> f64 {
        self.budget - self.scheduled_duration
    }
}
