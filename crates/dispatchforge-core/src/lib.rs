//! DispatchForge Core - Domain types for resource-to-slot assignment
//!
//! This crate provides the fundamental abstractions for DispatchForge:
//! - Domain types for resources, constraint sets, slots and plans
//! - The constraint matcher (does a resource satisfy a constraint set?)
//! - The cost ordering used for every "cheapest first" decision
//! - Conversions from raw backend codes, with `-1` meaning "any"

pub mod cost;
pub mod domain;
pub mod error;
pub mod matcher;

#[cfg(test)]
mod matcher_tests;

pub use cost::{cost_cmp, cost_key, tier_rank, CostKey};
pub use domain::{
    AssignmentResult, Category, Comparison, ConstraintSet, MissionTier, Plan, Requirement,
    Resource, ResourceId, Slot, SlotGroup, Tier,
};
pub use error::{DispatchForgeError, Result};
pub use matcher::matches;
