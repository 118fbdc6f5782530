//! Planning module: per-gap A* search threaded through a global move history
//!
//! The choreography is built in three layers:
//! 1. `GapProblem` formulates one gap between two waypoints as a search
//!    problem (actions, transition, cost with repetition penalty, goal window,
//!    heuristic)
//! 2. `astar` solves any `SearchProblem`, ordering actions through a
//!    `TieBreak` policy
//! 3. `Choreographer` splits the time budget into gaps, solves them strictly
//!    in order and validates the assembled choreography

pub mod orchestrator;
pub mod problem;
pub mod search;
pub mod state;
pub mod tiebreak;
pub mod types;

pub use orchestrator::Choreographer;
pub use tiebreak::SeededShuffle;
pub use types::{GapSolution, Plan};
