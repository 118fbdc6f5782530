//! Generic best-first (A*) search

use crate::error::SearchError;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

use super::tiebreak::TieBreak;

/// A search problem with additive edge costs and a consistent heuristic
pub trait SearchProblem {
    type State: Clone;
    type Action;

    fn initial_state(&self) -> Self::State;

    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn transition(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Total cost after taking `action` from `state`, given `accumulated` so far
    fn edge_cost(&self, accumulated: f64, state: &Self::State, action: &Self::Action) -> f64;

    fn goal_test(&self, state: &Self::State) -> bool;

    fn heuristic(&self, state: &Self::State) -> f64;
}

/// Goal state reached by the search, with its path cost
#[derive(Debug, Clone)]
pub struct Solution<S> {
    pub state: S,
    pub cost: f64,
    /// Nodes popped and expanded
    pub expanded: usize,
    /// Nodes pushed onto the frontier
    pub generated: usize,
}

struct FrontierNode<S> {
    priority: f64,
    cost: f64,
    order: u64,
    state: S,
}

// Min-heap on priority; equal priorities pop in insertion order.
impl<S> Ord for FrontierNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl<S> PartialOrd for FrontierNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for FrontierNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for FrontierNode<S> {}

/// Run A* on `problem`, stopping after `max_expansions` expansions
///
/// Every action list is passed through `tie_break` before its children are
/// pushed; that is the only source of variation between runs.
pub fn astar<P, T>(
    problem: &P,
    tie_break: &mut T,
    max_expansions: usize,
) -> Result<Solution<P::State>, SearchError>
where
    P: SearchProblem,
    T: TieBreak,
{
    let mut frontier = BinaryHeap::new();
    let mut order = 0u64;
    let mut expanded = 0usize;

    let start = problem.initial_state();
    frontier.push(FrontierNode {
        priority: problem.heuristic(&start),
        cost: 0.0,
        order,
        state: start,
    });
    let mut generated = 1usize;

    while let Some(node) = frontier.pop() {
        if problem.goal_test(&node.state) {
            debug!(
                "Goal reached: cost {:.3}, {} expanded, {} generated",
                node.cost, expanded, generated
            );
            return Ok(Solution {
                state: node.state,
                cost: node.cost,
                expanded,
                generated,
            });
        }

        if expanded >= max_expansions {
            return Err(SearchError::LimitExceeded {
                limit: max_expansions,
            });
        }
        expanded += 1;

        let mut actions = problem.actions(&node.state);
        tie_break.arrange(&mut actions);

        for action in &actions {
            let child = problem.transition(&node.state, action);
            let cost = problem.edge_cost(node.cost, &node.state, action);
            order += 1;
            generated += 1;
            frontier.push(FrontierNode {
                priority: cost + problem.heuristic(&child),
                cost,
                order,
                state: child,
            });
        }
    }

    Err(SearchError::Exhausted { expanded })
}
