//! Slots (buildings) and slot groups (lands).

use super::constraint::ConstraintSet;
use super::resource::Resource;

/// An assignment target requiring a fixed number of resources.
///
/// The slot's `grade` doubles as the minimum grade of its key resource.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Backend slot type code, used to address the slot within its group.
    pub kind: i64,
    pub grade: u8,
    pub name: String,
    pub constraints: Vec<ConstraintSet>,
    /// Resources already working this slot.
    pub assigned: Vec<Resource>,
    pub pending_reward: bool,
    pub remaining_runs: u32,
    pub reward_amount: u64,
}

impl Slot {
    /// Creates an idle slot with no constraint sets.
    pub fn new(kind: i64, grade: u8, name: impl Into<String>) -> Self {
        Self {
            kind,
            grade,
            name: name.into(),
            constraints: Vec::new(),
            assigned: Vec::new(),
            pending_reward: false,
            remaining_runs: 0,
            reward_amount: 0,
        }
    }

    pub fn with_constraint(mut self, constraint: ConstraintSet) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_assigned(mut self, resources: Vec<Resource>) -> Self {
        self.assigned = resources;
        self
    }

    pub fn with_pending_reward(mut self, pending: bool) -> Self {
        self.pending_reward = pending;
        self
    }

    /// A slot is busy while it has a pending reward or assigned resources.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.pending_reward || !self.assigned.is_empty()
    }
}

/// An addressing container of slots. Has no behavior of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotGroup {
    pub id: u64,
    pub name: String,
    pub slots: Vec<Slot>,
}

impl SlotGroup {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slots: Vec::new(),
        }
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }
}
