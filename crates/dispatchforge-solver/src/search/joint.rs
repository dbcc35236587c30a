//! Joint satisfaction of every constraint set.
//!
//! Bounded depth-first search over the cheapest matching candidates,
//! driven by an explicit stack. Only constraint sets with positive need
//! are targeted; one resource may count toward several of them.

use std::cmp::Ordering;

use dispatchforge_core::{cost_cmp, cost_key, matches, ConstraintSet, CostKey, Resource};
use smallvec::{smallvec, SmallVec};
use tracing::trace;

type Picks = SmallVec<[usize; 4]>;
type Counts = SmallVec<[u32; 4]>;

/// Inputs of a joint search.
#[derive(Debug, Clone, Copy)]
pub struct JointSearch<'s> {
    pub constraints: &'s [ConstraintSet],
    /// Remaining need per constraint set after the key.
    pub needs: &'s [u32],
    pub key: &'s Resource,
    /// Cheapest matching candidates considered.
    pub candidate_limit: usize,
    /// Most extra resources a solution may use.
    pub max_extra: usize,
}

/// A node of the search tree.
struct Node {
    /// First candidate index children may pick.
    next: usize,
    picks: Picks,
    /// Remaining need per target.
    needs: Counts,
}

/// Finds the extras completing every constraint set, if any exist.
///
/// Among complete solutions the one with the fewest extras wins, then the
/// lexicographically cheapest sorted extra set. Returns an empty list when
/// the key alone already completes every set.
pub fn solve_joint<'a>(
    search: &JointSearch<'_>,
    candidates: &[&'a Resource],
) -> Option<Vec<&'a Resource>> {
    run(search, candidates).best
}

/// Result of one search run.
struct Run<'a> {
    best: Option<Vec<&'a Resource>>,
    /// Nodes popped from the stack.
    explored: u64,
}

fn run<'a>(search: &JointSearch<'_>, candidates: &[&'a Resource]) -> Run<'a> {
    let targets: SmallVec<[usize; 4]> = (0..search.needs.len())
        .filter(|&i| search.needs[i] > 0)
        .collect();
    if targets.is_empty() {
        return Run {
            best: Some(Vec::new()),
            explored: 0,
        };
    }

    let mut pool: Vec<&'a Resource> = candidates
        .iter()
        .copied()
        .filter(|r| r.id != search.key.id)
        .filter(|r| targets.iter().any(|&ci| matches(r, &search.constraints[ci])))
        .collect();
    pool.sort_by(|a, b| cost_cmp(a, b));
    pool.truncate(search.candidate_limit);

    // covers[i]: targets candidate i counts toward.
    let covers: Vec<Picks> = pool
        .iter()
        .map(|r| {
            targets
                .iter()
                .enumerate()
                .filter(|&(_, &ci)| matches(r, &search.constraints[ci]))
                .map(|(t, _)| t)
                .collect()
        })
        .collect();

    // reach[i][t]: candidates at index >= i covering target t.
    let mut reach: Vec<Counts> = vec![smallvec![0; targets.len()]; pool.len() + 1];
    for i in (0..pool.len()).rev() {
        let mut counts = reach[i + 1].clone();
        for &t in &covers[i] {
            counts[t] += 1;
        }
        reach[i] = counts;
    }

    let root = Node {
        next: 0,
        picks: Picks::new(),
        needs: targets.iter().map(|&ci| search.needs[ci]).collect(),
    };

    let mut best: Option<Picks> = None;
    let mut explored: u64 = 0;
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        explored += 1;

        if node.needs.iter().all(|&n| n == 0) {
            if is_better(&node.picks, best.as_ref(), &pool) {
                best = Some(node.picks);
            }
            continue;
        }

        let slots_left = search.max_extra.saturating_sub(node.picks.len());
        if slots_left == 0 {
            continue;
        }
        if let Some(b) = &best {
            if node.picks.len() + 1 > b.len() {
                continue;
            }
        }
        if is_hopeless(&node, slots_left, &reach[node.next]) {
            continue;
        }

        // Reverse push so the cheapest child is explored first.
        for i in (node.next..pool.len()).rev() {
            let mut needs = node.needs.clone();
            for &t in &covers[i] {
                needs[t] = needs[t].saturating_sub(1);
            }
            let mut picks = node.picks.clone();
            picks.push(i);
            stack.push(Node {
                next: i + 1,
                picks,
                needs,
            });
        }
    }

    trace!(
        event = "joint_search",
        candidates = pool.len() as u64,
        targets = targets.len() as u64,
        nodes = explored,
        solved = best.is_some(),
    );

    Run {
        best: best.map(|picks| picks.iter().map(|&i| pool[i]).collect()),
        explored,
    }
}

/// Pruning: the remaining slots cannot cover the remaining needs, or some
/// unmet target has too few reachable candidates.
fn is_hopeless(node: &Node, slots_left: usize, reach: &[u32]) -> bool {
    let unmet = node.needs.iter().filter(|&&n| n > 0).count();
    let total: usize = node.needs.iter().map(|&n| n as usize).sum();
    if total > slots_left * unmet {
        return true;
    }
    node.needs
        .iter()
        .zip(reach)
        .any(|(&need, &available)| need > 0 && available < need)
}

/// Fewer picks first, then the cheaper sorted pick list.
fn is_better(candidate: &Picks, best: Option<&Picks>, pool: &[&Resource]) -> bool {
    let Some(best) = best else {
        return true;
    };
    match candidate.len().cmp(&best.len()) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => {
            let lhs = sorted_keys(candidate, pool);
            let rhs = sorted_keys(best, pool);
            lhs < rhs
        }
    }
}

fn sorted_keys(picks: &Picks, pool: &[&Resource]) -> Vec<CostKey> {
    let mut keys: Vec<_> = picks.iter().map(|&i| cost_key(pool[i])).collect();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatchforge_core::{Category, Requirement};
    use dispatchforge_test::resources::{bear, cat};

    fn sets(counts: &[(Category, u32)]) -> Vec<ConstraintSet> {
        counts
            .iter()
            .map(|&(category, count)| {
                ConstraintSet::new(format!("{category:?}"), count).with_category(category)
            })
            .collect()
    }

    fn node(needs: &[u32]) -> Node {
        Node {
            next: 0,
            picks: Picks::new(),
            needs: needs.iter().copied().collect(),
        }
    }

    #[test]
    fn test_cover_bound() {
        assert!(is_hopeless(&node(&[2, 2]), 1, &[5, 5]));
        assert!(!is_hopeless(&node(&[2, 2]), 2, &[5, 5]));
        assert!(!is_hopeless(&node(&[0, 3]), 3, &[0, 5]));
    }

    #[test]
    fn test_reach_bound() {
        assert!(is_hopeless(&node(&[1, 2]), 3, &[4, 1]));
        assert!(!is_hopeless(&node(&[1, 0]), 3, &[4, 0]));
    }

    #[test]
    fn test_cover_bound_prunes_root() {
        let constraints = sets(&[(Category::Bear, 3), (Category::Cat, 3)]);
        let pool: Vec<Resource> = (1..=4)
            .map(|id| bear(id, 0))
            .chain((5..=8).map(|id| cat(id, 0)))
            .collect();
        let refs: Vec<&Resource> = pool.iter().collect();
        let key = bear(99, 2);
        let search = JointSearch {
            constraints: &constraints,
            needs: &[3, 3],
            key: &key,
            candidate_limit: 16,
            max_extra: 2,
        };

        let result = run(&search, &refs);
        assert!(result.best.is_none());
        assert_eq!(result.explored, 1);
    }

    #[test]
    fn test_reach_bound_prunes_root() {
        let constraints = sets(&[(Category::Bear, 1), (Category::Fox, 1)]);
        let pool: Vec<Resource> = (1..=8).map(|id| bear(id, 0)).collect();
        let refs: Vec<&Resource> = pool.iter().collect();
        let key = cat(99, 2);
        let search = JointSearch {
            constraints: &constraints,
            needs: &[1, 1],
            key: &key,
            candidate_limit: 16,
            max_extra: 3,
        };

        let result = run(&search, &refs);
        assert!(result.best.is_none());
        assert_eq!(result.explored, 1);
    }

    #[test]
    fn test_candidate_limit_truncates_pool() {
        let constraints = vec![
            ConstraintSet::new("Bears", 2).with_category(Category::Bear),
            ConstraintSet::new("Veterans", 1).with_grade(Requirement::at_least(3)),
        ];
        let pool = vec![bear(2, 0), bear(3, 0), bear(4, 3)];
        let refs: Vec<&Resource> = pool.iter().collect();
        let key = cat(99, 2);
        let mut search = JointSearch {
            constraints: &constraints,
            needs: &[2, 1],
            key: &key,
            candidate_limit: 16,
            max_extra: 3,
        };

        let extras = solve_joint(&search, &refs).unwrap();
        let ids: Vec<u64> = extras.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![2, 4]);

        // The veteran bear is the most expensive candidate and falls off.
        search.candidate_limit = 2;
        assert!(solve_joint(&search, &refs).is_none());
    }
}
