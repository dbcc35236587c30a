//! DispatchForge Solver Engine
//!
//! This crate turns a resource pool and a set of slot groups into a plan:
//! - Key and filler selection (cheapest first)
//! - Bounded per-slot candidate pools
//! - Assignment search (joint, single-set and filler strategies)
//! - Slot evaluation with an authoritative final recount
//! - Greedy plan building over a shrinking shared pool
//!
//! The engine is synchronous, deterministic and total: it performs no
//! I/O and never fails on well-formed input.

pub mod candidate;
pub mod evaluator;
pub mod planner;
pub mod search;
pub mod selector;

#[cfg(test)]
mod evaluator_tests;

pub use candidate::{build_candidates, CandidateClass};
pub use evaluator::{estimated_score, SlotEvaluator};
pub use planner::PlanBuilder;
pub use search::{AssignmentSearch, SearchOutcome, Strategy};
pub use selector::{cheapest_n, find_keys};

use dispatchforge_config::PlannerConfig;
use dispatchforge_core::{AssignmentResult, Plan, Resource, Slot, SlotGroup};

/// Owns a configuration and exposes both planning entry points.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans every idle slot against `pool`.
    pub fn build_plan(&self, groups: &[SlotGroup], pool: &[Resource]) -> Plan {
        PlanBuilder::new(&self.config).build(groups, pool)
    }

    /// Evaluates one slot against `pool` without consuming anything.
    pub fn evaluate_slot(&self, pool: &[Resource], slot: &Slot) -> AssignmentResult {
        SlotEvaluator::new(&self.config).evaluate(pool, slot)
    }
}

/// Plans every idle slot in `groups` against `pool`.
pub fn build_plan(config: &PlannerConfig, groups: &[SlotGroup], pool: &[Resource]) -> Plan {
    PlanBuilder::new(config).build(groups, pool)
}

/// Evaluates one slot against `pool`.
pub fn evaluate_slot(config: &PlannerConfig, pool: &[Resource], slot: &Slot) -> AssignmentResult {
    SlotEvaluator::new(config).evaluate(pool, slot)
}
