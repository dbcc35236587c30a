//! Cost ordering over resources.
//!
//! Every "cheapest first" decision in the planner uses this order:
//! grade ascending, then tier preference, then sub-tier ascending, then id
//! ascending. The id tie-break makes the order strict and total.

use std::cmp::Ordering;

use crate::domain::{Resource, ResourceId, Tier};

/// Preference rank of a tier; lower is cheaper.
///
/// Base < Elite < Genesis < unknown.
#[inline]
pub const fn tier_rank(tier: Option<Tier>) -> u8 {
    match tier {
        Some(Tier::Base) => 0,
        Some(Tier::Elite) => 1,
        Some(Tier::Genesis) => 2,
        None => 3,
    }
}

/// Sort key realizing the cost ordering.
pub type CostKey = (u8, u8, u8, ResourceId);

/// Returns the cost key of a resource.
#[inline]
pub fn cost_key(resource: &Resource) -> CostKey {
    (
        resource.grade,
        tier_rank(resource.tier),
        resource.sub_tier,
        resource.id,
    )
}

/// Compares two resources by cost.
///
/// # Example
///
/// ```
/// use dispatchforge_core::{cost_cmp, Resource, Tier};
/// use std::cmp::Ordering;
///
/// let base = Resource::new(2, 1).with_tier(Tier::Base);
/// let genesis = Resource::new(1, 1).with_tier(Tier::Genesis);
/// assert_eq!(cost_cmp(&base, &genesis), Ordering::Less);
/// ```
#[inline]
pub fn cost_cmp(a: &Resource, b: &Resource) -> Ordering {
    cost_key(a).cmp(&cost_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_dominates() {
        let low = Resource::new(9, 0).with_tier(Tier::Genesis).with_sub_tier(3);
        let high = Resource::new(1, 1).with_tier(Tier::Base);
        assert_eq!(cost_cmp(&low, &high), Ordering::Less);
    }

    #[test]
    fn test_tier_rank_order() {
        assert!(tier_rank(Some(Tier::Base)) < tier_rank(Some(Tier::Elite)));
        assert!(tier_rank(Some(Tier::Elite)) < tier_rank(Some(Tier::Genesis)));
        assert!(tier_rank(Some(Tier::Genesis)) < tier_rank(None));
    }

    #[test]
    fn test_sub_tier_breaks_tier_ties() {
        let a = Resource::new(5, 1).with_tier(Tier::Base).with_sub_tier(2);
        let b = Resource::new(4, 1).with_tier(Tier::Base).with_sub_tier(1);
        assert_eq!(cost_cmp(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_id_breaks_full_ties() {
        let a = Resource::new(10, 1).with_tier(Tier::Base);
        let b = Resource::new(11, 1).with_tier(Tier::Base);
        assert_eq!(cost_cmp(&a, &b), Ordering::Less);
        assert_eq!(cost_cmp(&b, &a), Ordering::Greater);
        assert_eq!(cost_cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_sort_cheapest_first() {
        let mut pool = vec![
            Resource::new(3, 2),
            Resource::new(2, 0).with_tier(Tier::Genesis),
            Resource::new(1, 0).with_tier(Tier::Base),
        ];
        pool.sort_by(cost_cmp);
        let ids: Vec<u64> = pool.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
