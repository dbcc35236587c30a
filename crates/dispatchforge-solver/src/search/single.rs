//! Single constraint set fallback.

use std::cmp::Reverse;

use dispatchforge_core::{cost_cmp, matches, tier_rank, ConstraintSet, Resource};

/// Order in which unmet constraint sets are attempted alone.
///
/// Largest reward first; ties go to the easiest set: lower required
/// grade, then lower reward, then cheaper required tier.
pub(super) fn attempt_key(constraint: &ConstraintSet) -> (Reverse<u32>, u8, u32, u8) {
    let required_grade = constraint.grade.map_or(0, |g| g.value);
    (
        Reverse(constraint.buff_amount),
        required_grade,
        constraint.buff_amount,
        tier_rank(constraint.required_resource_tier()),
    )
}

/// Completes the first attemptable constraint set with the key plus its
/// cheapest matching candidates.
///
/// Only sets with positive remaining need that fit in `capacity` extras
/// are attempted. Returns the set's index and the extras.
pub fn solve_single<'a>(
    constraints: &[ConstraintSet],
    needs: &[u32],
    key: &Resource,
    candidates: &[&'a Resource],
    capacity: usize,
) -> Option<(usize, Vec<&'a Resource>)> {
    let mut order: Vec<usize> = (0..constraints.len())
        .filter(|&i| needs[i] > 0 && needs[i] as usize <= capacity)
        .collect();
    order.sort_by_key(|&i| attempt_key(&constraints[i]));

    for index in order {
        let need = needs[index] as usize;
        let mut matching: Vec<&'a Resource> = candidates
            .iter()
            .copied()
            .filter(|r| r.id != key.id && matches(r, &constraints[index]))
            .collect();
        if matching.len() < need {
            continue;
        }
        matching.sort_by(|a, b| cost_cmp(a, b));
        matching.truncate(need);
        return Some((index, matching));
    }
    None
}
