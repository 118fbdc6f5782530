mod console;
mod report;

pub use console::{print_choreography, print_executed_move, print_gap, print_statistics};
pub use report::{write_plan_report, PlanReport};
