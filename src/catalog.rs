//! Move catalog: the immutable registry of moves the planner can choose from,
//! plus the waypoint (mandatory pose) model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Posture assumed for a waypoint that does not declare one
pub const DEFAULT_STANDING: bool = true;

/// A single move: how long it takes and how it interacts with the posture flag
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Move {
    /// Duration in seconds (must be positive)
    pub duration: f64,

    /// Posture the robot must be in before the move (None = any)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_standing: Option<bool>,

    /// Posture the robot is left in after the move (None = unchanged)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets_standing: Option<bool>,
}

impl Move {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            requires_standing: None,
            sets_standing: None,
        }
    }

    pub fn requires(mut self, standing: bool) -> Self {
        self.requires_standing = Some(standing);
        self
    }

    pub fn sets(mut self, standing: bool) -> Self {
        self.sets_standing = Some(standing);
        self
    }

    /// Whether the move may start from the given posture
    pub fn admits(&self, standing: bool) -> bool {
        self.requires_standing.map_or(true, |required| required == standing)
    }

    /// Posture after performing the move from `standing`
    pub fn apply(&self, standing: bool) -> bool {
        self.sets_standing.unwrap_or(standing)
    }
}

/// Read-only name → move registry
///
/// Enumeration is in name order so that any variation in the order actions
/// are explored comes from the tie-break policy alone.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    moves: BTreeMap<String, Move>,
}

impl Catalog {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = (S, Move)>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(|(n, m)| (n.into(), m)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Move> {
        self.moves.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Move)> {
        self.moves.iter().map(|(n, m)| (n.as_str(), m))
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }
}

impl From<&BTreeMap<String, Move>> for Catalog {
    fn from(moves: &BTreeMap<String, Move>) -> Self {
        Self {
            moves: moves.clone(),
        }
    }
}

/// A mandatory pose. Its own duration counts against the total budget.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Waypoint {
    pub name: String,

    #[serde(flatten)]
    pub pose: Move,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, pose: Move) -> Self {
        Self {
            name: name.into(),
            pose,
        }
    }

    /// Posture the robot must have reached before this waypoint starts
    pub fn entry_standing(&self) -> bool {
        self.pose.requires_standing.unwrap_or(DEFAULT_STANDING)
    }

    /// Posture the robot is in once this waypoint is done
    pub fn exit_standing(&self) -> bool {
        self.pose.apply(self.entry_standing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_admits_and_apply() {
        let free = Move::new(2.0);
        assert!(free.admits(true));
        assert!(free.admits(false));
        assert!(!free.apply(false));

        let sit = Move::new(8.0).requires(true).sets(false);
        assert!(sit.admits(true));
        assert!(!sit.admits(false));
        assert!(!sit.apply(true));
    }

    #[test]
    fn test_catalog_enumerates_in_name_order() {
        let catalog = Catalog::new([
            ("Wave", Move::new(3.72)),
            ("Clap", Move::new(4.13)),
            ("Joy", Move::new(5.0)),
        ]);
        let names: Vec<&str> = catalog.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Clap", "Joy", "Wave"]);
        assert_eq!(catalog.get("Joy").map(|m| m.duration), Some(5.0));
        assert!(catalog.get("Moonwalk").is_none());
    }

    #[test]
    fn test_waypoint_postures() {
        let stand = Waypoint::new("11-Stand", Move::new(1.96));
        assert!(stand.entry_standing());
        assert!(stand.exit_standing());

        let sit = Waypoint::new("16-Sit", Move::new(17.0).sets(false));
        assert!(sit.entry_standing());
        assert!(!sit.exit_standing());

        let relax = Waypoint::new("17-SitRelax", Move::new(15.0).requires(false));
        assert!(!relax.entry_standing());
        assert!(!relax.exit_standing());
    }

    #[test]
    fn test_waypoint_yaml_is_flat() {
        let yaml = "name: 16-Sit\nduration: 17.0\nsets_standing: false\n";
        let waypoint: Waypoint = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(waypoint.name, "16-Sit");
        assert_eq!(waypoint.pose, Move::new(17.0).sets(false));
    }
}
