//! Splits the time budget into gaps and solves them one after the other
//!
//! Gaps are solved strictly in order: the repetition penalty of a gap depends
//! on every move committed by the gaps before it.

use crate::catalog::{Catalog, Waypoint};
use crate::config::{Config, PlanningConfig};
use crate::error::{PlanError, SearchError};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

use super::problem::{GapGoal, GapProblem};
use super::search::astar;
use super::state::ChoreographyState;
use super::tiebreak::TieBreak;
use super::types::{GapSolution, Plan};

pub struct Choreographer {
    catalog: Catalog,
    start: Waypoint,
    mandatory: Vec<Waypoint>,
    end: Waypoint,
    planning: PlanningConfig,
}

impl Choreographer {
    pub fn new(
        catalog: Catalog,
        start: Waypoint,
        mandatory: Vec<Waypoint>,
        end: Waypoint,
        planning: PlanningConfig,
    ) -> Self {
        Self {
            catalog,
            start,
            mandatory,
            end,
            planning,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Catalog::from(&config.moves),
            config.waypoints.start.clone(),
            config.waypoints.mandatory.clone(),
            config.waypoints.end.clone(),
            config.planning.clone(),
        )
    }

    /// Fixed start, mandatory poses (shuffled if enabled), fixed end
    fn waypoint_sequence<T: TieBreak>(&self, tie_break: &mut T) -> Vec<Waypoint> {
        let mut mandatory = self.mandatory.clone();
        if self.planning.shuffle_mandatory {
            tie_break.arrange(&mut mandatory);
        }

        let mut sequence = Vec::with_capacity(mandatory.len() + 2);
        sequence.push(self.start.clone());
        sequence.extend(mandatory);
        sequence.push(self.end.clone());
        sequence
    }

    /// Plan the full choreography
    pub fn plan<T: TieBreak>(&self, tie_break: &mut T) -> Result<Plan, PlanError> {
        let started = Instant::now();
        let planning = &self.planning;

        let waypoints = self.waypoint_sequence(tie_break);
        let committed: f64 = waypoints.iter().map(|w| w.pose.duration).sum();
        let slack = planning.max_duration - committed;
        if slack < 0.0 {
            return Err(PlanError::Configuration {
                budget: planning.max_duration,
                committed,
            });
        }

        let gap_count = waypoints.len() - 1;
        let slot = slack / gap_count as f64;
        info!(
            "Planning {} gaps of {:.2}s each ({:.2}s in {} waypoints, {} moves available)",
            gap_count,
            slot,
            committed,
            waypoints.len(),
            self.catalog.len()
        );

        let mut history: Vec<String> = Vec::new();
        let mut gaps = Vec::with_capacity(gap_count);

        for (idx, pair) in waypoints.windows(2).enumerate() {
            let (from, to) = (&pair[0], &pair[1]);
            history.push(from.name.clone());

            let gap = self.solve_gap(idx + 1, from, to, slot, &history, tie_break)?;
            info!(
                "Gap {}: {} -> {}: [{}] ({:.2}s of {:.2}s, cost {:.2})",
                gap.index,
                gap.from,
                gap.to,
                gap.moves.join(", "),
                gap.consumed,
                gap.slot,
                gap.cost
            );

            history.extend(gap.moves.iter().cloned());
            gaps.push(gap);
        }
        history.push(self.end.name.clone());

        let mut plan = Plan {
            scheduled_duration: self.scheduled_duration(&history, &waypoints),
            moves: history,
            waypoints: waypoints.iter().map(|w| w.name.clone()).collect(),
            gaps,
            budget: planning.max_duration,
            committed,
            slot,
            planning_time_sec: 0.0,
        };

        let intermediate = plan.intermediate_count();
        if intermediate < planning.min_intermediate_moves {
            return Err(PlanError::TooFewIntermediateMoves {
                required: planning.min_intermediate_moves,
                actual: intermediate,
            });
        }

        self.validate(&plan.moves, &waypoints)?;

        plan.planning_time_sec = started.elapsed().as_secs_f64();
        info!(
            "Planned {} moves ({} intermediate) in {:.3}s",
            plan.moves.len(),
            intermediate,
            plan.planning_time_sec
        );
        Ok(plan)
    }

    fn solve_gap<T: TieBreak>(
        &self,
        index: usize,
        from: &Waypoint,
        to: &Waypoint,
        slot: f64,
        history: &[String],
        tie_break: &mut T,
    ) -> Result<GapSolution, PlanError> {
        let start_standing = from.exit_standing();
        let goal_standing = to.entry_standing();
        let problem = GapProblem::new(
            &self.catalog,
            history,
            ChoreographyState::new(start_standing, slot),
            GapGoal::new(goal_standing),
            self.planning.time_tolerance,
            self.planning.lambda_penalty,
        );

        debug!(
            "Gap {}: {} (standing={}) -> {} (standing={}), slot {:.2}s",
            index, from.name, start_standing, to.name, goal_standing, slot
        );

        let solution = astar(&problem, tie_break, self.planning.max_expansions).map_err(
            |e| match e {
                SearchError::Exhausted { expanded } => PlanError::GapUnsolvable {
                    gap: index,
                    from: from.name.clone(),
                    to: to.name.clone(),
                    slot,
                    tolerance: self.planning.time_tolerance,
                    start_standing,
                    goal_standing,
                    expanded,
                },
                SearchError::LimitExceeded { limit } => PlanError::SearchLimitExceeded {
                    gap: index,
                    from: from.name.clone(),
                    to: to.name.clone(),
                    limit,
                },
            },
        )?;

        Ok(GapSolution {
            index,
            from: from.name.clone(),
            to: to.name.clone(),
            start_standing,
            goal_standing,
            slot,
            consumed: slot - solution.state.remaining_time,
            cost: solution.cost,
            expanded: solution.expanded,
            generated: solution.generated,
            moves: solution.state.sequence,
        })
    }

    fn scheduled_duration(&self, moves: &[String], waypoints: &[Waypoint]) -> f64 {
        let by_name: HashMap<&str, f64> = waypoints
            .iter()
            .map(|w| (w.name.as_str(), w.pose.duration))
            .collect();

        moves
            .iter()
            .filter_map(|m| {
                by_name
                    .get(m.as_str())
                    .copied()
                    .or_else(|| self.catalog.get(m).map(|p| p.duration))
            })
            .sum()
    }

    /// Replay the choreography from the first waypoint and check every
    /// posture requirement and the no-immediate-repeat rule
    fn validate(&self, moves: &[String], waypoints: &[Waypoint]) -> Result<(), PlanError> {
        let by_name: HashMap<&str, &Waypoint> =
            waypoints.iter().map(|w| (w.name.as_str(), w)).collect();

        let mut standing = self.start.exit_standing();
        for (position, name) in moves.iter().enumerate().skip(1) {
            if moves[position - 1] == *name {
                return Err(PlanError::AdjacentRepeat {
                    position,
                    name: name.clone(),
                });
            }

            if let Some(waypoint) = by_name.get(name.as_str()) {
                let expected = waypoint.entry_standing();
                if expected != standing {
                    return Err(PlanError::PostureMismatch {
                        position,
                        name: name.clone(),
                        expected,
                        actual: standing,
                    });
                }
                standing = waypoint.exit_standing();
            } else if let Some(pose) = self.catalog.get(name) {
                if let Some(expected) = pose.requires_standing {
                    if expected != standing {
                        return Err(PlanError::PostureMismatch {
                            position,
                            name: name.clone(),
                            expected,
                            actual: standing,
                        });
                    }
                }
                standing = pose.apply(standing);
            } else {
                return Err(PlanError::UnknownMove {
                    position,
                    name: name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Move;
    use crate::planner::tiebreak::{SeededShuffle, Stable};

    fn planning(max_duration: f64, min_intermediate_moves: usize) -> PlanningConfig {
        PlanningConfig {
            max_duration,
            lambda_penalty: 1.0,
            time_tolerance: 0.5,
            min_intermediate_moves,
            seed: None,
            shuffle_mandatory: false,
            max_expansions: 100_000,
        }
    }

    fn standing_catalog() -> Catalog {
        Catalog::new([
            ("A", Move::new(2.0)),
            ("B", Move::new(3.0).requires(true).sets(true)),
            ("C", Move::new(1.5).requires(true)),
        ])
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn simple_choreographer(max_duration: f64, min_intermediate: usize) -> Choreographer {
        // 3 waypoints of 1s each, 2 gaps
        Choreographer::new(
            standing_catalog(),
            Waypoint::new("Start", Move::new(1.0).sets(true)),
            vec![Waypoint::new("Middle", Move::new(1.0))],
            Waypoint::new("End", Move::new(1.0)),
            planning(max_duration, min_intermediate),
        )
    }

    #[test]
    fn test_budget_below_mandatory_is_configuration_error() {
        let choreographer = simple_choreographer(2.5, 0);
        let err = choreographer.plan(&mut Stable).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err,
            PlanError::Configuration {
                budget: 2.5,
                committed: 3.0
            }
        );
    }

    #[test]
    fn test_zero_slack_fails_global_minimum() {
        let choreographer = simple_choreographer(3.0, 1);
        let err = choreographer.plan(&mut Stable).unwrap_err();
        assert!(err.is_global_constraint());
        assert_eq!(
            err,
            PlanError::TooFewIntermediateMoves {
                required: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn test_zero_slack_without_minimum_is_waypoints_only() {
        let choreographer = simple_choreographer(3.0, 0);
        let plan = choreographer.plan(&mut Stable).unwrap();
        assert_eq!(plan.moves, vec!["Start", "Middle", "End"]);
        assert!(plan.gaps.iter().all(|g| g.moves.is_empty()));
        assert_eq!(plan.scheduled_duration, 3.0);
    }

    #[test]
    fn test_two_gaps_are_filled() {
        // 13s budget - 3s committed = 5s per gap
        let choreographer = simple_choreographer(13.0, 2);
        let plan = choreographer.plan(&mut SeededShuffle::new(5)).unwrap();

        assert_eq!(plan.gaps.len(), 2);
        assert_eq!(plan.slot, 5.0);
        for gap in &plan.gaps {
            assert!(gap.consumed <= gap.slot + 1e-9);
            assert!(gap.consumed >= gap.slot - 0.5 - 1e-9);
            assert!(gap.moves.windows(2).all(|w| w[0] != w[1]));
        }
        assert_eq!(plan.moves.first().map(String::as_str), Some("Start"));
        assert_eq!(plan.moves.last().map(String::as_str), Some("End"));
        assert!(plan.scheduled_duration <= plan.budget + 1e-9);
    }

    #[test]
    fn test_penalty_spans_gaps() {
        // Gap 1: B + C fills 4.5s for cost 4.5. Gap 2: B + C again would
        // cost 6.5, A + B costs 6.0 (B penalized once).
        let choreographer = simple_choreographer(13.0, 0);
        let plan = choreographer.plan(&mut Stable).unwrap();

        let mut first = plan.gaps[0].moves.clone();
        first.sort();
        assert_eq!(first, names(&["B", "C"]));
        assert_eq!(plan.gaps[0].cost, 4.5);

        let mut second = plan.gaps[1].moves.clone();
        second.sort();
        assert_eq!(second, names(&["A", "B"]));
        assert_eq!(plan.gaps[1].cost, 6.0);
        assert_eq!(plan.total_cost(), 10.5);
    }

    #[test]
    fn test_unsolvable_gap_aborts() {
        // Sitting waypoint with no move to get back up before End
        let choreographer = Choreographer::new(
            standing_catalog(),
            Waypoint::new("Start", Move::new(1.0).sets(true)),
            vec![Waypoint::new("Sit", Move::new(1.0).sets(false))],
            Waypoint::new("End", Move::new(1.0)),
            planning(13.0, 0),
        );
        let err = choreographer.plan(&mut Stable).unwrap_err();
        match err {
            PlanError::GapUnsolvable {
                gap,
                from,
                to,
                start_standing,
                goal_standing,
                ..
            } => {
                assert_eq!(gap, 2);
                assert_eq!(from, "Sit");
                assert_eq!(to, "End");
                assert!(!start_standing);
                assert!(goal_standing);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_expansion_limit_aborts() {
        let mut config = planning(13.0, 0);
        config.max_expansions = 1;
        let choreographer = Choreographer::new(
            standing_catalog(),
            Waypoint::new("Start", Move::new(1.0).sets(true)),
            vec![],
            Waypoint::new("End", Move::new(1.0)),
            config,
        );
        let err = choreographer.plan(&mut Stable).unwrap_err();
        assert!(matches!(err, PlanError::SearchLimitExceeded { gap: 1, limit: 1, .. }));
    }

    #[test]
    fn test_validate_catches_posture_mismatch() {
        let choreographer = simple_choreographer(13.0, 0);
        let waypoints = vec![
            Waypoint::new("Start", Move::new(1.0).sets(false)),
            Waypoint::new("End", Move::new(1.0)),
        ];
        let moves = names(&["Start", "B", "End"]);
        // simple_choreographer's own start leaves the robot standing, so
        // check against a start that does not
        let sitting = Choreographer::new(
            standing_catalog(),
            waypoints[0].clone(),
            vec![],
            waypoints[1].clone(),
            planning(13.0, 0),
        );
        let err = sitting.validate(&moves, &waypoints).unwrap_err();
        assert!(matches!(err, PlanError::PostureMismatch { position: 1, .. }));

        let ok = names(&["Start", "A", "B", "End"]);
        let standing_waypoints = vec![
            Waypoint::new("Start", Move::new(1.0).sets(true)),
            Waypoint::new("End", Move::new(1.0)),
        ];
        choreographer.validate(&ok, &standing_waypoints).unwrap();
    }

    #[test]
    fn test_validate_catches_repeat_and_unknown() {
        let choreographer = simple_choreographer(13.0, 0);
        let waypoints = vec![
            Waypoint::new("Start", Move::new(1.0).sets(true)),
            Waypoint::new("End", Move::new(1.0)),
        ];

        let repeated = names(&["Start", "A", "A", "End"]);
        assert!(matches!(
            choreographer.validate(&repeated, &waypoints).unwrap_err(),
            PlanError::AdjacentRepeat { position: 2, .. }
        ));

        let unknown = names(&["Start", "Moonwalk", "End"]);
        assert!(matches!(
            choreographer.validate(&unknown, &waypoints).unwrap_err(),
            PlanError::UnknownMove { position: 1, .. }
        ));
    }

    #[test]
    fn test_default_config_plans_for_many_seeds() {
        let config = Config::default();
        let choreographer = Choreographer::from_config(&config);

        for seed in 0..8 {
            let plan = choreographer.plan(&mut SeededShuffle::new(seed)).unwrap();

            assert_eq!(plan.gaps.len(), 7);
            assert_eq!(plan.moves.first().map(String::as_str), Some("14-StandInit"));
            assert_eq!(plan.moves.last().map(String::as_str), Some("6-Crouch"));
            assert!(plan.intermediate_count() >= config.planning.min_intermediate_moves);
            assert!(plan.scheduled_duration <= config.planning.max_duration + 1e-9);
            for gap in &plan.gaps {
                assert!(gap.remaining() >= -1e-9);
                assert!(gap.remaining() <= config.planning.time_tolerance + 1e-9);
                assert!(gap.moves.windows(2).all(|w| w[0] != w[1]));
            }
            for waypoint in config.waypoints.iter() {
                assert_eq!(plan.moves.iter().filter(|m| **m == waypoint.name).count(), 1);
            }
        }
    }

    #[test]
    fn test_plan_cost_is_deterministic_across_tie_breaks() {
        let mut config = Config::default();
        config.planning.shuffle_mandatory = false;
        let choreographer = Choreographer::from_config(&config);

        let baseline = choreographer.plan(&mut Stable).unwrap();
        for seed in [1, 17, 4242] {
            let plan = choreographer.plan(&mut SeededShuffle::new(seed)).unwrap();
            assert!((plan.gaps[0].cost - baseline.gaps[0].cost).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_plan() {
        let choreographer = Choreographer::from_config(&Config::default());
        let a = choreographer.plan(&mut SeededShuffle::new(2024)).unwrap();
        let b = choreographer.plan(&mut SeededShuffle::new(2024)).unwrap();
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.waypoints, b.waypoints);
    }
}
