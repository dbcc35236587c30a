//! Plain-text plan report.
//!
//! One numbered line per result, followed by the key resource and the
//! slot's requirement list:
//!
//! ```text
//! === Dispatch Plan ===
//! 01. - #100 | Watchtower | Grade=Epic | Base=250 | Buffs=1 x 30% [Bear Patrol [9, 10]] | Est.Total=325.0 | Chosen=[...] | Reserved=[—] | Dispatch with key 5; completed 1 constraint set(s).
//!     Key: 5(?, Base, G2, S0)
//!     Requirements:
//!       - Bear Patrol: need=2
//! ```

use std::fmt::Write;

use dispatchforge_config::PlannerConfig;
use dispatchforge_core::{AssignmentResult, Plan, Resource};

const EMPTY: &str = "—";

fn resource_list(resources: &[Resource]) -> String {
    if resources.is_empty() {
        return EMPTY.to_string();
    }
    resources
        .iter()
        .map(Resource::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn buffs(result: &AssignmentResult) -> String {
    let count = result.satisfied_count;
    if count == 0 {
        return EMPTY.to_string();
    }
    let percent = (result.buff_percent * 100.0).round() as i64;
    let mut label = format!("{count} x {percent}%");
    if !result.satisfied_titles.is_empty() {
        let _ = write!(label, " [{}]", result.satisfied_titles.join("; "));
    }
    label
}

fn key_resource(result: &AssignmentResult) -> Option<&Resource> {
    let key = result.key?;
    result.chosen.iter().find(|r| r.id == key)
}

/// Renders `plan` as text, one block per result.
pub fn format_plan(plan: &Plan, config: &PlannerConfig) -> String {
    let mut out = String::from("=== Dispatch Plan ===\n");
    if plan.is_empty() {
        out.push_str("(no options)\n");
        return out;
    }

    for (index, result) in plan.iter().enumerate() {
        let chosen = if result.chosen.is_empty() {
            "(reserved only)".to_string()
        } else {
            resource_list(&result.chosen)
        };

        let _ = writeln!(
            out,
            "{:02}. - #{} | {} | Grade={} | Base={} | Buffs={} | Est.Total={:.1} | Chosen=[{}] | Reserved=[{}] | {}",
            index + 1,
            result.group_id,
            result.slot_name,
            config.grade_name(result.grade),
            result.base_score,
            buffs(result),
            result.estimated_score,
            chosen,
            resource_list(&result.reserved),
            result.rationale,
        );

        if let Some(key) = key_resource(result) {
            let _ = writeln!(out, "    Key: {key}");
        }

        if !result.requirements.is_empty() {
            out.push_str("    Requirements:\n");
            for requirement in &result.requirements {
                let _ = writeln!(out, "      - {requirement}");
            }
        }
    }

    out
}
