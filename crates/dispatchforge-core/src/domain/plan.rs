//! Planner output: per-slot assignment results and the ordered plan.

use super::resource::{Resource, ResourceId};

/// The evaluated decision for a single slot.
///
/// A result with an empty `chosen` list is a reservation: no key resource
/// was available, and `reserved` holds the cheapest resources that would
/// pad the slot once one becomes available.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentResult {
    pub group_id: u64,
    pub group_name: String,
    pub slot_kind: i64,
    pub slot_name: String,
    pub grade: u8,
    pub base_score: u32,
    pub buff_percent: f64,
    /// Number of constraint sets the final team satisfies.
    pub satisfied_count: usize,
    /// Sum of `buff_amount` over the satisfied constraint sets.
    pub satisfied_magnitude: u32,
    pub estimated_score: f64,
    pub key: Option<ResourceId>,
    pub chosen: Vec<Resource>,
    pub reserved: Vec<Resource>,
    /// `"title [id, id]"` for each satisfied constraint set.
    pub satisfied_titles: Vec<String>,
    pub rationale: String,
    /// `"title: need=N"` for each constraint set on the slot.
    pub requirements: Vec<String>,
}

impl AssignmentResult {
    /// Returns true if this result dispatches resources.
    #[inline]
    pub fn is_dispatchable(&self) -> bool {
        !self.chosen.is_empty()
    }

    /// Ids of the chosen resources, in team order.
    pub fn chosen_ids(&self) -> Vec<ResourceId> {
        self.chosen.iter().map(|r| r.id).collect()
    }
}

/// An ordered sequence of assignment results.
///
/// Dispatchable results come first, followed by reservations.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub results: Vec<AssignmentResult>,
}

impl Plan {
    pub fn new(results: Vec<AssignmentResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssignmentResult> {
        self.results.iter()
    }

    /// Results that dispatch resources, in plan order.
    pub fn dispatchable(&self) -> impl Iterator<Item = &AssignmentResult> {
        self.results.iter().filter(|r| r.is_dispatchable())
    }

    /// Results that only reserve resources, in plan order.
    pub fn reserved(&self) -> impl Iterator<Item = &AssignmentResult> {
        self.results.iter().filter(|r| !r.is_dispatchable())
    }

    /// Every chosen resource id across the plan.
    pub fn chosen_ids(&self) -> Vec<ResourceId> {
        self.results.iter().flat_map(|r| r.chosen_ids()).collect()
    }
}
