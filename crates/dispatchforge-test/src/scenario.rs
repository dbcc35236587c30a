//! Hand-checked planning scenarios.
//!
//! Each scenario has a known answer under the default planner
//! configuration (team size 4, Epic = 250 points / 30%).

use dispatchforge_core::{
    Category, ConstraintSet, Requirement, Resource, Slot, SlotGroup, Tier,
};

use crate::resources::{bear, cat};

/// Slot groups plus the pool they are planned against.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub groups: Vec<SlotGroup>,
    pub pool: Vec<Resource>,
}

/// Grade-2 slot whose single constraint set needs two Bears of grade >= 1.
pub fn bear_patrol_slot() -> Slot {
    Slot::new(7, 2, "Watchtower").with_constraint(
        ConstraintSet::new("Bear Patrol", 2)
            .with_category(Category::Bear)
            .with_grade(Requirement::at_least(1))
            .with_buff_amount(10),
    )
}

/// The key candidate A: the only grade-2 resource.
pub fn key_a() -> Resource {
    Resource::new(5, 2).with_tier(Tier::Base)
}

/// Expected: key A, Bears 9 and 10, filler 1; one set satisfied; 325 points.
pub fn bear_patrol() -> Scenario {
    Scenario {
        groups: vec![SlotGroup::new(100, "Meadow").with_slot(bear_patrol_slot())],
        pool: vec![key_a(), bear(9, 1), bear(10, 1), cat(1, 0)],
    }
}

/// Same as [`bear_patrol`] without the filler: the team has three members.
pub fn bear_patrol_exhausted() -> Scenario {
    Scenario {
        groups: vec![SlotGroup::new(100, "Meadow").with_slot(bear_patrol_slot())],
        pool: vec![key_a(), bear(9, 1), bear(10, 1)],
    }
}

/// Two grade-2 slots in one group competing for the cheapest key (id 5).
///
/// "Beta" sorts before "Alpha" (names descending) and takes key 5. With
/// `with_backup`, a grade-3 resource (id 20) is left for "Alpha";
/// otherwise "Alpha" has no key.
pub fn contested_key(with_backup: bool) -> Scenario {
    let mut pool = vec![
        key_a(),
        cat(1, 0),
        cat(2, 0),
        cat(3, 0),
        cat(4, 0),
        cat(6, 0),
        cat(7, 0),
        cat(8, 0),
    ];
    if with_backup {
        pool.push(Resource::new(20, 3).with_tier(Tier::Elite));
    }
    Scenario {
        groups: vec![SlotGroup::new(1, "Valley")
            .with_slot(Slot::new(1, 2, "Alpha"))
            .with_slot(Slot::new(2, 2, "Beta"))],
        pool,
    }
}
