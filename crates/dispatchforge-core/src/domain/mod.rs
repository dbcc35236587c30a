//! Domain model for dispatch planning.
//!
//! - [`Resource`]: a discrete unit in the shared pool
//! - [`ConstraintSet`]: a named requirement on N matching resources
//! - [`Slot`] / [`SlotGroup`]: assignment targets and their addressing
//! - [`AssignmentResult`] / [`Plan`]: the planner's output

mod constraint;
mod plan;
mod resource;
mod slot;


pub use constraint::{Comparison, ConstraintSet, MissionTier, Requirement};
pub use plan::{AssignmentResult, Plan};
pub use resource::{Category, Resource, ResourceId, Tier};
pub use slot::{Slot, SlotGroup};
