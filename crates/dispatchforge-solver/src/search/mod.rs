//! Assignment search for a single slot.
//!
//! Given a chosen key and the slot's candidate pool, the search tries, in
//! order:
//!
//! 1. **Joint**: satisfy every unmet constraint set at once with at most
//!    `max_extra` additional resources (bounded backtracking, overlap
//!    allowed).
//! 2. **Pair**: with more than two unmet sets, satisfy the best pair of
//!    them jointly.
//! 3. **Single**: satisfy the most rewarding constraint set alone.
//! 4. **Key only**: the key completes some set by itself.
//! 5. **Fillers**: key plus the cheapest resources, no set guaranteed.
//!
//! Whatever the strategy, [`complete_team`] pads the result to the team
//! size from the slot's remaining pool.

mod joint;
mod single;


use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;

use dispatchforge_config::PlannerConfig;
use dispatchforge_core::{cost_key, matches, ConstraintSet, CostKey, Resource, ResourceId, Slot};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::selector::cheapest_n;

pub use joint::{solve_joint, JointSearch};
pub use single::solve_single;

/// Remaining need per constraint set, indexed like `slot.constraints`.
pub type Needs = SmallVec<[u32; 4]>;

/// How a search outcome was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Every constraint set completed together.
    Joint,
    /// Two constraint sets completed together; holds their indices.
    Pair(usize, usize),
    /// One constraint set completed alone; holds its index.
    Single(usize),
    /// No extras; the key completes at least one set by itself.
    KeyOnly,
    /// No constraint set targeted.
    Fillers,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Joint => write!(f, "joint"),
            Strategy::Pair(first, second) => write!(f, "pair#{first}+{second}"),
            Strategy::Single(index) => write!(f, "single#{index}"),
            Strategy::KeyOnly => write!(f, "key-only"),
            Strategy::Fillers => write!(f, "fillers"),
        }
    }
}

/// Key plus the extra resources chosen for it, before padding.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub key: &'a Resource,
    pub extras: Vec<&'a Resource>,
    pub strategy: Strategy,
}

/// Need of each constraint set after crediting the key's own matches.
pub fn remaining_needs(slot: &Slot, key: &Resource) -> Needs {
    slot.constraints
        .iter()
        .map(|c| {
            let credit = u32::from(matches(key, c));
            c.required_count.saturating_sub(credit)
        })
        .collect()
}

/// Searches one slot's candidate pool for key completions.
pub struct AssignmentSearch<'a, 's> {
    slot: &'s Slot,
    candidates: &'s [&'a Resource],
    config: &'s PlannerConfig,
}

impl<'a, 's> AssignmentSearch<'a, 's> {
    pub fn new(slot: &'s Slot, candidates: &'s [&'a Resource], config: &'s PlannerConfig) -> Self {
        Self {
            slot,
            candidates,
            config,
        }
    }

    /// Tries the joint search, the pairwise search, then the single-set
    /// fallback, then the key by itself.
    ///
    /// Returns `None` when no stage completes a constraint set, including
    /// when the slot has no constraint sets at all.
    pub fn satisfy(&self, key: &'a Resource) -> Option<SearchOutcome<'a>> {
        if self.slot.constraints.is_empty() {
            return None;
        }

        let needs = remaining_needs(self.slot, key);

        if let Some(extras) = solve_joint(&self.joint(&needs, key), self.candidates) {
            return Some(self.outcome(key, extras, Strategy::Joint));
        }

        if let Some((first, second, extras)) = self.best_pair(&needs, key) {
            return Some(self.outcome(key, extras, Strategy::Pair(first, second)));
        }

        let capacity = self.config.team_size.saturating_sub(1);
        if let Some((index, extras)) =
            solve_single(&self.slot.constraints, &needs, key, self.candidates, capacity)
        {
            return Some(self.outcome(key, extras, Strategy::Single(index)));
        }

        let key_completes = self
            .slot
            .constraints
            .iter()
            .zip(&needs)
            .any(|(c, &need)| c.required_count > 0 && need == 0);
        if key_completes {
            return Some(self.outcome(key, Vec::new(), Strategy::KeyOnly));
        }

        None
    }

    fn joint<'n>(&'n self, needs: &'n [u32], key: &'n Resource) -> JointSearch<'n> {
        JointSearch {
            constraints: &self.slot.constraints,
            needs,
            key,
            candidate_limit: self.config.search.joint_candidate_limit,
            max_extra: self.config.effective_max_extra(),
        }
    }

    /// Best jointly solvable pair of unmet sets, when more than two are
    /// unmet.
    ///
    /// Pairs are tried in single-fallback order. The winner completes the
    /// most sets overall, then uses the fewest extras, then the cheapest
    /// sorted extras; earlier pairs win exact ties.
    fn best_pair(
        &self,
        needs: &Needs,
        key: &'a Resource,
    ) -> Option<(usize, usize, Vec<&'a Resource>)> {
        let mut unmet: Vec<usize> = (0..needs.len()).filter(|&i| needs[i] > 0).collect();
        if unmet.len() <= 2 {
            return None;
        }
        unmet.sort_by_key(|&i| single::attempt_key(&self.slot.constraints[i]));

        let mut best: Option<(PairRank, usize, usize, Vec<&'a Resource>)> = None;
        for (n, &first) in unmet.iter().enumerate() {
            for &second in &unmet[n + 1..] {
                let mut pair_needs: Needs = smallvec![0; needs.len()];
                pair_needs[first] = needs[first];
                pair_needs[second] = needs[second];

                let Some(extras) = solve_joint(&self.joint(&pair_needs, key), self.candidates)
                else {
                    continue;
                };
                let rank = pair_rank(&self.slot.constraints, key, &extras);
                if best.as_ref().map_or(true, |(b, ..)| rank < *b) {
                    best = Some((rank, first, second, extras));
                }
            }
        }
        best.map(|(_, first, second, extras)| (first, second, extras))
    }

    fn outcome(
        &self,
        key: &'a Resource,
        extras: Vec<&'a Resource>,
        strategy: Strategy,
    ) -> SearchOutcome<'a> {
        let title = |i: usize| self.slot.constraints[i].title.as_str();
        let constraint = match strategy {
            Strategy::Pair(first, second) => format!("{} + {}", title(first), title(second)),
            Strategy::Single(index) => title(index).to_string(),
            _ => String::new(),
        };
        debug!(
            event = "search_strategy",
            slot = %self.slot.name,
            key = key.id.0,
            strategy = %strategy,
            constraint = %constraint,
            extras = extras.len() as u64,
        );
        SearchOutcome {
            key,
            extras,
            strategy,
        }
    }

    /// Key alone; padding supplies the rest.
    pub fn fillers_only(&self, key: &'a Resource) -> SearchOutcome<'a> {
        debug!(
            event = "search_strategy",
            slot = %self.slot.name,
            key = key.id.0,
            strategy = "fillers",
        );
        SearchOutcome {
            key,
            extras: Vec::new(),
            strategy: Strategy::Fillers,
        }
    }
}

/// Smaller is better: more completed sets, fewer extras, cheaper extras.
type PairRank = (Reverse<usize>, usize, Vec<CostKey>);

fn pair_rank(constraints: &[ConstraintSet], key: &Resource, extras: &[&Resource]) -> PairRank {
    let completed = constraints
        .iter()
        .filter(|c| c.required_count > 0)
        .filter(|c| {
            let count = std::iter::once(key)
                .chain(extras.iter().copied())
                .filter(|r| matches(r, c))
                .count();
            count >= c.required_count as usize
        })
        .count();
    let mut keys: Vec<CostKey> = extras.iter().map(|r| cost_key(r)).collect();
    keys.sort();
    (Reverse(completed), extras.len(), keys)
}

/// Builds the final team: key, extras, then the cheapest remaining pool
/// members, deduplicated by id and truncated to `team_size`.
///
/// The team is shorter than `team_size` only when the pool is exhausted.
pub fn complete_team<'a>(
    outcome: &SearchOutcome<'a>,
    pool: &'a [Resource],
    team_size: usize,
) -> Vec<&'a Resource> {
    let mut team: Vec<&'a Resource> = Vec::with_capacity(team_size);
    for resource in std::iter::once(outcome.key).chain(outcome.extras.iter().copied()) {
        if !team.iter().any(|t| t.id == resource.id) {
            team.push(resource);
        }
    }
    team.truncate(team_size);

    if team.len() < team_size {
        let used: HashSet<ResourceId> = team.iter().map(|r| r.id).collect();
        let fillers = cheapest_n(
            pool.iter().filter(|r| !used.contains(&r.id)),
            team_size - team.len(),
        );
        team.extend(fillers);
    }
    team
}
