//! Key and filler selection.
//!
//! Both selectors return borrowed resources sorted cheapest first, so
//! callers decide when to copy them into results.

use dispatchforge_core::{cost_cmp, Resource, ResourceId};

/// Resources eligible as a slot's key (grade >= `min_grade`), cheapest first.
///
/// The cheapest qualifying resource is preferred, not the strongest. An
/// empty result means no key is available.
pub fn find_keys(pool: &[Resource], min_grade: u8) -> Vec<&Resource> {
    let mut keys: Vec<&Resource> = pool.iter().filter(|r| r.grade >= min_grade).collect();
    keys.sort_by(|a, b| cost_cmp(a, b));
    keys
}

/// The `n` cheapest resources, or all of them if fewer than `n` exist.
pub fn cheapest_n<'a, I>(pool: I, n: usize) -> Vec<&'a Resource>
where
    I: IntoIterator<Item = &'a Resource>,
{
    let mut sorted: Vec<&Resource> = pool.into_iter().collect();
    sorted.sort_by(|a, b| cost_cmp(a, b));
    sorted.truncate(n);
    sorted
}

/// Copies `pool` without the resources whose ids appear in `used`.
pub fn without(pool: &[Resource], used: &[ResourceId]) -> Vec<Resource> {
    pool.iter()
        .filter(|r| !used.contains(&r.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatchforge_core::Tier;
    use dispatchforge_test::resources::{bear, filler, ids};

    fn owned(refs: Vec<&Resource>) -> Vec<Resource> {
        refs.into_iter().cloned().collect()
    }

    #[test]
    fn test_find_keys_prefers_cheapest() {
        let pool = vec![filler(1, 4), bear(2, 2), filler(3, 1), bear(4, 3)];
        let keys = owned(find_keys(&pool, 2));
        assert_eq!(ids(&keys), vec![2, 4, 1]);
    }

    #[test]
    fn test_find_keys_empty_when_nothing_qualifies() {
        let pool = vec![filler(1, 0), filler(2, 1)];
        assert!(find_keys(&pool, 2).is_empty());
        assert!(find_keys(&[], 0).is_empty());
    }

    #[test]
    fn test_cheapest_n_orders_by_cost() {
        let pool = vec![
            filler(1, 1),
            Resource::new(2, 1).with_tier(Tier::Base),
            Resource::new(3, 0).with_tier(Tier::Genesis),
            Resource::new(4, 0).with_tier(Tier::Elite),
        ];
        let picked = owned(cheapest_n(&pool, 3));
        assert_eq!(ids(&picked), vec![4, 3, 2]);
    }

    #[test]
    fn test_cheapest_n_short_pool() {
        let pool = vec![filler(1, 0), filler(2, 0)];
        assert_eq!(cheapest_n(&pool, 4).len(), 2);
        assert!(cheapest_n(&pool, 0).is_empty());
    }

    #[test]
    fn test_lower_id_wins_full_tie() {
        let pool = vec![bear(11, 1), bear(10, 1)];
        let picked = owned(cheapest_n(&pool, 1));
        assert_eq!(ids(&picked), vec![10]);
        let keys = owned(find_keys(&pool, 1));
        assert_eq!(ids(&keys), vec![10, 11]);
    }

    #[test]
    fn test_without() {
        let pool = vec![filler(1, 0), filler(2, 0), filler(3, 0)];
        let rest = without(&pool, &[ResourceId(2)]);
        assert_eq!(ids(&rest), vec![1, 3]);
    }
}
