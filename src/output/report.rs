//! Machine-readable plan reports

use crate::config::PlanningConfig;
use crate::error::OutputError;
use crate::planner::Plan;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanReport {
    pub run_id: Uuid,
    pub timestamp: String,
    pub seed: u64,
    /// Equal for plans with the same move sequence
    pub fingerprint: String,
    pub planning: PlanningConfig,
    pub intermediate_count: usize,
    pub total_cost: f64,
    pub plan: Plan,
}

impl PlanReport {
    pub fn new(plan: &Plan, planning: &PlanningConfig, seed: u64) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now().to_rfc3339(),
            seed,
            fingerprint: fingerprint(&plan.moves),
            planning: planning.clone(),
            intermediate_count: plan.intermediate_count(),
            total_cost: plan.total_cost(),
            plan: plan.clone(),
        }
    }
}

/// Short stable hash of a move sequence
pub fn fingerprint(moves: &[String]) -> String {
    let mut hasher = Sha256::new();
    for m in moves {
        hasher.update(m.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())[..16].to_string()
}

/// Write `plan.json` and `plan.md` into `report_dir`
pub fn write_plan_report(report_dir: &Path, report: &PlanReport) -> Result<(), OutputError> {
    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let json = serde_json::to_string_pretty(report)?;
    fs::write(report_dir.join("plan.json"), json).map_err(OutputError::WriteReport)?;

    fs::write(report_dir.join("plan.md"), build_markdown(report))
        .map_err(OutputError::WriteReport)?;

    Ok(())
}

fn build_markdown(report: &PlanReport) -> String {
    let plan = &report.plan;
    let mut md = String::new();

    md.push_str("# Choreography Plan\n\n");
    md.push_str(&format!("**Generated:** {}\n", report.timestamp));
    md.push_str(&format!("**Seed:** {}\n", report.seed));
    md.push_str(&format!("**Fingerprint:** `{}`\n\n", report.fingerprint));

    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Budget | {:.2}s |\n", plan.budget));
    md.push_str(&format!("| Scheduled | {:.2}s |\n", plan.scheduled_duration));
    md.push_str(&format!("| Waypoints | {:.2}s |\n", plan.committed));
    md.push_str(&format!("| Slot per gap | {:.2}s |\n", plan.slot));
    md.push_str(&format!(
        "| Intermediate moves | {} |\n",
        report.intermediate_count
    ));
    md.push_str(&format!("| Total cost | {:.2} |\n", report.total_cost));
    md.push_str(&format!("| Planning time | {:.3}s |\n\n", plan.planning_time_sec));

    md.push_str("## Gaps\n\n");
    md.push_str("| # | From | To | Moves | Filled | Cost | Expanded |\n");
    md.push_str("|---|------|----|-------|--------|------|----------|\n");
    for gap in &plan.gaps {
        let moves = if gap.moves.is_empty() {
            "-".to_string()
        } else {
            gap.moves.join(", ")
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} | {:.2}/{:.2}s | {:.2} | {} |\n",
            gap.index, gap.from, gap.to, moves, gap.consumed, gap.slot, gap.cost, gap.expanded
        ));
    }

    md.push_str("\n## Choreography\n\n");
    for (i, m) in plan.moves.iter().enumerate() {
        if plan.is_waypoint(m) {
            md.push_str(&format!("{}. **{}**\n", i + 1, m));
        } else {
            md.push_str(&format!("{}. {}\n", i + 1, m));
        }
    }

    md
}
