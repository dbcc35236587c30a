//! Slot evaluation: key choice, team completion, scoring.

use dispatchforge_config::PlannerConfig;
use dispatchforge_core::{matches, AssignmentResult, Resource, Slot};
use tracing::{debug, info};

use crate::candidate::build_candidates;
use crate::search::{complete_team, AssignmentSearch};
use crate::selector::{cheapest_n, find_keys, without};

/// Estimated score of a slot: `base + base * buff_percent * satisfied`.
#[inline]
pub fn estimated_score(base_points: u32, buff_percent: f64, satisfied: usize) -> f64 {
    let base = f64::from(base_points);
    base + base * buff_percent * satisfied as f64
}

/// Keys matching at least one constraint set first; cost order within
/// each half is preserved.
pub fn order_keys<'a>(keys: Vec<&'a Resource>, slot: &Slot) -> Vec<&'a Resource> {
    let (mut ordered, rest): (Vec<_>, Vec<_>) = keys
        .into_iter()
        .partition(|k| slot.constraints.iter().any(|c| matches(k, c)));
    ordered.extend(rest);
    ordered
}

/// Evaluates slots against a resource pool.
///
/// [`evaluate`](Self::evaluate) only reads the pool and never reports
/// what is left of it; [`evaluate_and_consume`](Self::evaluate_and_consume)
/// also returns the pool without the dispatched team. Group addressing
/// fields of the result are left empty.
#[derive(Debug, Clone, Copy)]
pub struct SlotEvaluator<'c> {
    config: &'c PlannerConfig,
}

impl<'c> SlotEvaluator<'c> {
    pub fn new(config: &'c PlannerConfig) -> Self {
        Self { config }
    }

    /// Evaluates `slot` and returns the pool left for later slots.
    ///
    /// A dispatched team is removed from the returned pool. Reserved
    /// resources stay in it.
    pub fn evaluate_and_consume(
        &self,
        pool: &[Resource],
        slot: &Slot,
    ) -> (AssignmentResult, Vec<Resource>) {
        let result = self.evaluate(pool, slot);
        let remaining = if result.is_dispatchable() {
            without(pool, &result.chosen_ids())
        } else {
            pool.to_vec()
        };
        (result, remaining)
    }

    pub fn evaluate(&self, pool: &[Resource], slot: &Slot) -> AssignmentResult {
        let team_size = self.config.team_size;
        let base_score = self.config.base_points(slot.grade);
        let buff_percent = self.config.buff_percent(slot.grade);
        let requirements = slot
            .constraints
            .iter()
            .map(|c| c.requirement_label())
            .collect();

        let keys = order_keys(find_keys(pool, slot.grade), slot);
        let Some(&first_key) = keys.first() else {
            let reserved: Vec<Resource> = cheapest_n(pool, team_size).into_iter().cloned().collect();
            info!(
                event = "no_key",
                slot = %slot.name,
                grade = slot.grade,
                reserved = reserved.len() as u64,
            );
            return AssignmentResult {
                group_id: 0,
                group_name: String::new(),
                slot_kind: slot.kind,
                slot_name: slot.name.clone(),
                grade: slot.grade,
                base_score,
                buff_percent,
                satisfied_count: 0,
                satisfied_magnitude: 0,
                estimated_score: estimated_score(base_score, buff_percent, 0),
                key: None,
                chosen: Vec::new(),
                reserved,
                satisfied_titles: Vec::new(),
                rationale: format!(
                    "No eligible key (≥ {}). Reserved for future use.",
                    self.config.grade_name(slot.grade)
                ),
                requirements,
            };
        };

        let candidates = build_candidates(pool, slot, &keys, self.config);
        let search = AssignmentSearch::new(slot, &candidates, self.config);
        let outcome = keys
            .iter()
            .find_map(|&key| search.satisfy(key))
            .unwrap_or_else(|| search.fillers_only(first_key));

        debug!(
            event = "key_selected",
            slot = %slot.name,
            key = outcome.key.id.0,
            keys_available = keys.len() as u64,
            candidates = candidates.len() as u64,
            strategy = %outcome.strategy,
        );

        let team = complete_team(&outcome, pool, team_size);

        // Authoritative recount on the final team.
        let mut satisfied_titles = Vec::new();
        let mut satisfied_magnitude = 0;
        for constraint in &slot.constraints {
            let matching: Vec<String> = team
                .iter()
                .filter(|r| matches(r, constraint))
                .map(|r| r.id.to_string())
                .collect();
            if matching.len() >= constraint.required_count as usize {
                let shown = &matching[..constraint.required_count as usize];
                satisfied_titles.push(format!("{} [{}]", constraint.title, shown.join(", ")));
                satisfied_magnitude += constraint.buff_amount;
            }
        }
        let satisfied_count = satisfied_titles.len();
        let key = outcome.key.id;

        AssignmentResult {
            group_id: 0,
            group_name: String::new(),
            slot_kind: slot.kind,
            slot_name: slot.name.clone(),
            grade: slot.grade,
            base_score,
            buff_percent,
            satisfied_count,
            satisfied_magnitude,
            estimated_score: estimated_score(base_score, buff_percent, satisfied_count),
            key: Some(key),
            chosen: team.into_iter().cloned().collect(),
            reserved: Vec::new(),
            satisfied_titles,
            rationale: format!(
                "Dispatch with key {key}; completed {satisfied_count} constraint set(s)."
            ),
            requirements,
        }
    }
}
