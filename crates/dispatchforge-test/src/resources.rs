//! Resource builders.
//!
//! # Example
//!
//! ```
//! use dispatchforge_test::resources::{bear, ids};
//!
//! let pool = vec![bear(9, 1), bear(10, 1)];
//! assert_eq!(ids(&pool), vec![9, 10]);
//! ```

use dispatchforge_core::{
    Category, ConstraintSet, MissionTier, Requirement, Resource, Slot, SlotGroup, Tier,
};

/// A Base-tier resource of the given category.
pub fn of(id: u64, grade: u8, category: Category) -> Resource {
    Resource::new(id, grade)
        .with_category(category)
        .with_tier(Tier::Base)
}

/// A Base-tier Bear.
pub fn bear(id: u64, grade: u8) -> Resource {
    of(id, grade, Category::Bear)
}

/// A Base-tier Cat.
pub fn cat(id: u64, grade: u8) -> Resource {
    of(id, grade, Category::Cat)
}

/// A resource with no category and unknown tier.
pub fn filler(id: u64, grade: u8) -> Resource {
    Resource::new(id, grade)
}

/// Raw ids of `resources`, in order.
pub fn ids(resources: &[Resource]) -> Vec<u64> {
    resources.iter().map(|r| r.id.0).collect()
}

/// A deterministic pool of `n` resources with varied attributes.
///
/// Ids are `1..=n`; attributes cycle with co-prime periods so every
/// combination of grade, category and tier shows up in larger pools.
pub fn synthetic_pool(n: u64) -> Vec<Resource> {
    (1..=n)
        .map(|id| {
            let grade = (id * 7 % 5) as u8;
            let category = Category::ALL[(id * 3 % 11) as usize];
            let tier = match id % 4 {
                0 => None,
                1 => Some(Tier::Base),
                2 => Some(Tier::Elite),
                _ => Some(Tier::Genesis),
            };
            let mut r = Resource::new(id, grade)
                .with_category(category)
                .with_sub_tier((id % 3) as u8);
            r.tier = tier;
            r
        })
        .collect()
}

/// Deterministic slot groups exercising every grade and several
/// constraint shapes. Slot names repeat across groups to exercise the
/// name tie-break.
pub fn synthetic_groups(group_count: u64) -> Vec<SlotGroup> {
    (1..=group_count)
        .map(|gid| {
            let mut group = SlotGroup::new(gid, format!("Land {gid}"));
            for (kind, grade) in (0u8..5).enumerate() {
                let category = Category::ALL[((gid as usize) + kind) % 11];
                let slot = Slot::new(kind as i64 + 1, grade, format!("Building {}", kind % 3))
                    .with_constraint(
                        ConstraintSet::new(format!("{category} squad"), 2)
                            .with_category(category)
                            .with_buff_amount(10 + kind as u32),
                    )
                    .with_constraint(
                        ConstraintSet::new("Veterans", 1)
                            .with_grade(Requirement::at_least(grade.saturating_sub(1)))
                            .with_tier(MissionTier::Base)
                            .with_buff_amount(5),
                    );
                group = group.with_slot(slot);
            }
            group
        })
        .collect()
}
