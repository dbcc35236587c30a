//! Plan building over every slot group.
//!
//! Slots are evaluated greedily in a fixed order against a shared pool
//! that shrinks as teams are dispatched. Earlier slots get first pick.

use std::cmp::Ordering;

use dispatchforge_config::PlannerConfig;
use dispatchforge_core::{AssignmentResult, Plan, Resource, Slot, SlotGroup};
use tracing::info;

use crate::evaluator::SlotEvaluator;

/// Evaluation order: grade descending, then name descending.
fn slot_order(a: &Slot, b: &Slot) -> Ordering {
    b.grade.cmp(&a.grade).then_with(|| b.name.cmp(&a.name))
}

/// Builds plans from slot groups and a resource pool.
#[derive(Debug, Clone, Copy)]
pub struct PlanBuilder<'c> {
    config: &'c PlannerConfig,
}

impl<'c> PlanBuilder<'c> {
    pub fn new(config: &'c PlannerConfig) -> Self {
        Self { config }
    }

    /// Plans every idle slot in `groups` against `pool`.
    ///
    /// Busy slots are skipped. No resource id appears in more than one
    /// chosen team. The result lists dispatchable results first.
    pub fn build(&self, groups: &[SlotGroup], pool: &[Resource]) -> Plan {
        let mut busy = 0u64;
        let mut idle: Vec<(&SlotGroup, &Slot)> = Vec::new();
        for group in groups {
            for slot in &group.slots {
                if slot.is_busy() {
                    busy += 1;
                    info!(
                        event = "slot_skipped",
                        group = group.id,
                        slot = %slot.name,
                        pending_reward = slot.pending_reward,
                        assigned = slot.assigned.len() as u64,
                    );
                } else {
                    idle.push((group, slot));
                }
            }
        }

        info!(
            event = "plan_start",
            slot_count = idle.len() as u64,
            busy_count = busy,
            pool_size = pool.len() as u64,
        );

        idle.sort_by(|(_, a), (_, b)| slot_order(a, b));

        let evaluator = SlotEvaluator::new(self.config);
        let mut working: Vec<Resource> = pool.to_vec();
        let mut dispatchable: Vec<AssignmentResult> = Vec::new();
        let mut reserved: Vec<AssignmentResult> = Vec::new();

        for (group, slot) in idle {
            let (mut result, remaining) = evaluator.evaluate_and_consume(&working, slot);
            result.group_id = group.id;
            result.group_name = group.name.clone();

            info!(
                event = "slot_evaluated",
                group = group.id,
                slot = %slot.name,
                grade = slot.grade,
                chosen = result.chosen.len() as u64,
                satisfied = result.satisfied_count as u64,
                estimated = result.estimated_score,
            );

            working = remaining;
            if result.is_dispatchable() {
                dispatchable.push(result);
            } else {
                reserved.push(result);
            }
        }

        dispatchable.sort_by(|a, b| {
            b.grade
                .cmp(&a.grade)
                .then_with(|| b.estimated_score.total_cmp(&a.estimated_score))
        });
        reserved.sort_by(|a, b| {
            b.grade
                .cmp(&a.grade)
                .then_with(|| b.base_score.cmp(&a.base_score))
        });

        info!(
            event = "plan_end",
            dispatchable = dispatchable.len() as u64,
            reserved = reserved.len() as u64,
            pool_remaining = working.len() as u64,
        );

        dispatchable.extend(reserved);
        Plan::new(dispatchable)
    }
}
