//! Search problem for a single gap between two consecutive waypoints
//!
//! The gap has a fixed time slot. Moves are added until the leftover time
//! falls inside `[goal_remaining, goal_remaining + tolerance]` with the robot
//! in the posture the next waypoint needs. Each move costs its duration plus
//! `lambda * count^2`, where `count` is how often the move was already used in
//! the whole choreography so far, so repetitions get expensive across gaps.

use crate::catalog::{Catalog, Move};

use super::search::SearchProblem;
use super::state::ChoreographyState;

/// A catalog move offered as an action
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<'a> {
    pub name: &'a str,
    pub pose: &'a Move,
}

/// What a gap has to end in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapGoal {
    pub standing: bool,
    pub remaining_time: f64,
}

impl GapGoal {
    pub fn new(standing: bool) -> Self {
        Self {
            standing,
            remaining_time: 0.0,
        }
    }
}

/// Extra cost of using a move that was already used `count` times
pub fn repetition_penalty(lambda: f64, count: usize) -> f64 {
    lambda * (count * count) as f64
}

pub struct GapProblem<'a> {
    catalog: &'a Catalog,
    /// Everything emitted before this gap, ending with the opening waypoint
    history: &'a [String],
    start: ChoreographyState,
    goal: GapGoal,
    tolerance: f64,
    lambda_penalty: f64,
}

impl<'a> GapProblem<'a> {
    pub fn new(
        catalog: &'a Catalog,
        history: &'a [String],
        start: ChoreographyState,
        goal: GapGoal,
        tolerance: f64,
        lambda_penalty: f64,
    ) -> Self {
        Self {
            catalog,
            history,
            start,
            goal,
            tolerance,
            lambda_penalty,
        }
    }

    /// Most recent move, looking back into the history when the gap is empty
    fn last_move<'s>(&'s self, state: &'s ChoreographyState) -> Option<&'s str> {
        state
            .last_move()
            .or_else(|| self.history.last().map(String::as_str))
    }

    /// Times `name` was used before, in earlier gaps and in this one
    pub fn usage_count(&self, state: &ChoreographyState, name: &str) -> usize {
        self.history.iter().filter(|m| m.as_str() == name).count() + state.occurrences(name)
    }

    fn usable(&self, state: &ChoreographyState, name: &str, pose: &Move) -> bool {
        pose.duration <= state.remaining_time
            && pose.admits(state.standing)
            && self.last_move(state) != Some(name)
    }
}

impl<'a> SearchProblem for GapProblem<'a> {
    type State = ChoreographyState;
    type Action = Step<'a>;

    fn initial_state(&self) -> ChoreographyState {
        self.start.clone()
    }

    fn actions(&self, state: &ChoreographyState) -> Vec<Step<'a>> {
        self.catalog
            .iter()
            .filter(|(name, pose)| self.usable(state, name, pose))
            .map(|(name, pose)| Step { name, pose })
            .collect()
    }

    fn transition(&self, state: &ChoreographyState, action: &Step<'a>) -> ChoreographyState {
        let mut sequence = Vec::with_capacity(state.sequence.len() + 1);
        sequence.extend(state.sequence.iter().cloned());
        sequence.push(action.name.to_string());

        ChoreographyState {
            sequence,
            standing: action.pose.apply(state.standing),
            remaining_time: state.remaining_time - action.pose.duration,
        }
    }

    fn edge_cost(&self, accumulated: f64, state: &ChoreographyState, action: &Step<'a>) -> f64 {
        let count = self.usage_count(state, action.name);
        accumulated + action.pose.duration + repetition_penalty(self.lambda_penalty, count)
    }

    fn goal_test(&self, state: &ChoreographyState) -> bool {
        let low = self.goal.remaining_time;
        let high = self.goal.remaining_time + self.tolerance;

        (low..=high).contains(&state.remaining_time) && state.standing == self.goal.standing
    }

    /// Time that must still be burnt to reach the acceptance window. Ignores
    /// the penalty, so it never overestimates.
    fn heuristic(&self, state: &ChoreographyState) -> f64 {
        (state.remaining_time - (self.goal.remaining_time + self.tolerance)).max(0.0)
    }
}
