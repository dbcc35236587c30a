//! Per-slot candidate pool.
//!
//! Narrows the full pool to a small, priority-ordered set so the
//! assignment search stays cheap. Bounding trades global optimality for
//! tractability.

use std::collections::HashSet;

use dispatchforge_config::PlannerConfig;
use dispatchforge_core::{cost_cmp, matches, Resource, ResourceId, Slot};

use crate::selector::cheapest_n;

/// Priority class of a candidate; lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CandidateClass {
    /// Eligible key that also matches a constraint set.
    KeyAndMatch,
    /// Matches a constraint set but is below the key grade.
    Match,
    /// Eligible key matching no constraint set.
    KeyOnly,
    /// General filler.
    Rest,
}

impl CandidateClass {
    /// Classifies `resource` for `slot`.
    pub fn of(resource: &Resource, slot: &Slot) -> Self {
        let is_key = resource.grade >= slot.grade;
        let is_match = slot.constraints.iter().any(|c| matches(resource, c));
        match (is_key, is_match) {
            (true, true) => CandidateClass::KeyAndMatch,
            (false, true) => CandidateClass::Match,
            (true, false) => CandidateClass::KeyOnly,
            (false, false) => CandidateClass::Rest,
        }
    }
}

/// Builds the candidate pool for `slot`.
///
/// The pool is the union of the cheapest `candidates_per_constraint`
/// matches of each constraint set, every key in `keys`, and the
/// `team_size` cheapest resources overall, deduplicated by id and sorted
/// by [`CandidateClass`] then cost.
pub fn build_candidates<'a>(
    pool: &'a [Resource],
    slot: &Slot,
    keys: &[&'a Resource],
    config: &PlannerConfig,
) -> Vec<&'a Resource> {
    let per_constraint = config.search.candidates_per_constraint;
    let mut merged: Vec<&'a Resource> = Vec::new();

    for constraint in &slot.constraints {
        let matching = pool.iter().filter(|r| matches(r, constraint));
        merged.extend(cheapest_n(matching, per_constraint));
    }
    merged.extend(keys.iter().copied());
    merged.extend(cheapest_n(pool, config.team_size));

    let mut seen: HashSet<ResourceId> = HashSet::with_capacity(merged.len());
    let mut candidates: Vec<&'a Resource> = merged
        .into_iter()
        .filter(|r| seen.insert(r.id))
        .collect();

    candidates.sort_by(|a, b| {
        CandidateClass::of(a, slot)
            .cmp(&CandidateClass::of(b, slot))
            .then_with(|| cost_cmp(a, b))
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::find_keys;
    use dispatchforge_core::{Category, ConstraintSet};
    use dispatchforge_test::resources::{bear, cat, filler, ids};

    fn owned(refs: Vec<&Resource>) -> Vec<Resource> {
        refs.into_iter().cloned().collect()
    }

    fn bear_slot() -> Slot {
        Slot::new(1, 2, "Den")
            .with_constraint(ConstraintSet::new("Bears", 2).with_category(Category::Bear))
    }

    #[test]
    fn test_classes() {
        let slot = bear_slot();
        assert_eq!(CandidateClass::of(&bear(1, 2), &slot), CandidateClass::KeyAndMatch);
        assert_eq!(CandidateClass::of(&bear(2, 0), &slot), CandidateClass::Match);
        assert_eq!(CandidateClass::of(&cat(3, 3), &slot), CandidateClass::KeyOnly);
        assert_eq!(CandidateClass::of(&cat(4, 0), &slot), CandidateClass::Rest);
    }

    #[test]
    fn test_priority_order() {
        let slot = bear_slot();
        let pool = vec![cat(1, 0), cat(2, 3), bear(3, 1), bear(4, 2), filler(5, 0)];
        let keys = find_keys(&pool, slot.grade);
        let config = PlannerConfig::default();

        let candidates = owned(build_candidates(&pool, &slot, &keys, &config));
        assert_eq!(ids(&candidates), vec![4, 3, 2, 1, 5]);
    }

    #[test]
    fn test_caps_matches_per_constraint() {
        let slot = bear_slot();
        let pool: Vec<Resource> = (1..=20).map(|id| bear(id, 0)).collect();
        let config = PlannerConfig::default();

        let candidates = owned(build_candidates(&pool, &slot, &[], &config));
        // 8 cheapest matches; the 4 cheapest overall are among them.
        assert_eq!(ids(&candidates), (1..=8).collect::<Vec<u64>>());
    }

    #[test]
    fn test_deduplicates_keys_and_fillers() {
        let slot = Slot::new(1, 0, "Shed");
        let pool = vec![filler(1, 0), filler(2, 0)];
        let keys = find_keys(&pool, slot.grade);
        let config = PlannerConfig::default();

        let candidates = owned(build_candidates(&pool, &slot, &keys, &config));
        assert_eq!(ids(&candidates), vec![1, 2]);
    }

    #[test]
    fn test_deduplicates_overlapping_sources() {
        // Every bear is a key, matches both sets and is a filler.
        let slot = Slot::new(1, 0, "Den")
            .with_constraint(ConstraintSet::new("Bears", 2).with_category(Category::Bear))
            .with_constraint(ConstraintSet::new("Any", 1));
        let pool: Vec<Resource> = (1..=30).rev().map(|id| bear(id, 0)).collect();
        let keys = find_keys(&pool, slot.grade);
        let config = PlannerConfig::default();

        let candidates = owned(build_candidates(&pool, &slot, &keys, &config));
        assert_eq!(ids(&candidates), (1..=30).collect::<Vec<u64>>());
    }
}
