//! Human-readable output on stdout

use crate::actuator::ExecutedMove;
use crate::planner::{GapSolution, Plan};

pub fn format_gap(gap: &GapSolution) -> String {
    let mut line = format!("Step {}: \t{}", gap.index, gap.from);
    for m in &gap.moves {
        line.push_str(", ");
        line.push_str(m);
    }
    line
}

pub fn print_gap(gap: &GapSolution) {
    println!("{}", format_gap(gap));
}

pub fn format_statistics(plan: &Plan, seed: u64) -> String {
    let mut out = String::from("\nSTATISTICS:\n");
    out.push_str(&format!(
        "Time required by the planning phase: {:.2} seconds.\n",
        plan.planning_time_sec
    ));
    out.push_str(&format!(
        "Estimated choreography duration: {:.2} of {:.2} seconds ({:.2} unused).\n",
        plan.scheduled_duration,
        plan.budget,
        plan.slack_left()
    ));
    out.push_str(&format!(
        "Intermediate moves: {} over {} gaps of {:.2} seconds.\n",
        plan.intermediate_count(),
        plan.gaps.len(),
        plan.slot
    ));
    out.push_str(&format!("Total cost: {:.2}\n", plan.total_cost()));
    out.push_str(&format!("Seed: {}\n", seed));
    out
}

pub fn print_statistics(plan: &Plan, seed: u64) {
    print!("{}", format_statistics(plan, seed));
}

/// Final choreography, waypoints highlighted
pub fn format_choreography(plan: &Plan) -> String {
    let mut out = String::from("\nFINAL CHOREOGRAPHY:\n");
    for m in &plan.moves {
        if plan.is_waypoint(m) {
            out.push_str(&format!("\t*** {} ***\n", m));
        } else {
            out.push_str(&format!("\t{}\n", m));
        }
    }
    out
}

pub fn print_choreography(plan: &Plan) {
    print!("{}", format_choreography(plan));
}

pub fn print_executed_move(step: &ExecutedMove) {
    println!(
        "Executing: {}... done in {:.2} seconds.",
        step.name,
        step.elapsed.as_secs_f64()
    );
}
