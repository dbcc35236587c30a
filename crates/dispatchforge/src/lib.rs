//! DispatchForge - Deterministic Resource-to-Slot Planning in Rust
//!
//! Zero-wiring API: describe your slots and pool, call [`run_planner`].
//!
//! # Example
//!
//! ```rust
//! use dispatchforge::prelude::*;
//!
//! let groups = vec![SlotGroup::new(1, "Meadow").with_slot(
//!     Slot::new(7, 2, "Watchtower").with_constraint(
//!         ConstraintSet::new("Bear Patrol", 2)
//!             .with_category(Category::Bear)
//!             .with_grade(Requirement::at_least(1)),
//!     ),
//! )];
//! let pool = vec![
//!     Resource::new(5, 2).with_tier(Tier::Base),
//!     Resource::new(9, 1).with_category(Category::Bear).with_tier(Tier::Base),
//!     Resource::new(10, 1).with_category(Category::Bear).with_tier(Tier::Base),
//!     Resource::new(1, 0).with_category(Category::Cat).with_tier(Tier::Base),
//! ];
//!
//! let plan = run_planner(&groups, &pool);
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan.results[0].satisfied_count, 1);
//! assert_eq!(plan.results[0].estimated_score, 325.0);
//! ```

// Domain types
pub use dispatchforge_core::{
    AssignmentResult, Category, Comparison, ConstraintSet, MissionTier, Plan, Requirement,
    Resource, ResourceId, Slot, SlotGroup, Tier,
};

// Matching and cost ordering
pub use dispatchforge_core::{cost_cmp, matches, DispatchForgeError, Result};

// Configuration
pub use dispatchforge_config::{ConfigError, GradeConfig, PlannerConfig, SearchConfig};

// Engine entry points
pub use dispatchforge_solver::{build_plan, evaluate_slot, Planner};

#[cfg(feature = "console")]
pub use dispatchforge_console as console;

mod planner;
pub use planner::run_planner;

pub mod prelude {
    pub use super::{
        AssignmentResult, Category, ConstraintSet, MissionTier, Plan, Requirement, Resource,
        ResourceId, Slot, SlotGroup, Tier,
    };
    pub use super::{run_planner, Planner, PlannerConfig};
}
