//! Constraint sets (buff missions) and their requirement fields.

use std::fmt;

use super::resource::{Category, Tier};
use crate::error::{DispatchForgeError, Result};

/// Tier code as it appears on a constraint set.
///
/// Constraint codes are numbered differently from resource tiers:
/// 0 = Genesis, 1 = Elite, 2 = Base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissionTier {
    Genesis,
    Elite,
    Base,
}

impl MissionTier {
    /// The resource tier this constraint tier requires.
    pub const fn resource_tier(self) -> Tier {
        match self {
            MissionTier::Genesis => Tier::Genesis,
            MissionTier::Elite => Tier::Elite,
            MissionTier::Base => Tier::Base,
        }
    }

    /// Returns the backend code.
    pub const fn code(self) -> i64 {
        match self {
            MissionTier::Genesis => 0,
            MissionTier::Elite => 1,
            MissionTier::Base => 2,
        }
    }

    /// Converts a backend code; `-1` means any.
    pub fn from_code(code: i64) -> Result<Option<MissionTier>> {
        match code {
            -1 => Ok(None),
            0 => Ok(Some(MissionTier::Genesis)),
            1 => Ok(Some(MissionTier::Elite)),
            2 => Ok(Some(MissionTier::Base)),
            other => Err(DispatchForgeError::DomainModel(format!(
                "unknown constraint tier code {other}"
            ))),
        }
    }
}

/// How a numeric requirement is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparison {
    #[default]
    Exact,
    AtLeast,
}

impl Comparison {
    /// Backend comparison code: `1` is at-least, anything else is exact.
    pub const fn from_code(code: i64) -> Comparison {
        if code == 1 {
            Comparison::AtLeast
        } else {
            Comparison::Exact
        }
    }
}

/// A numeric requirement (grade or sub-tier) with its comparison mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requirement {
    pub value: u8,
    pub comparison: Comparison,
}

impl Requirement {
    pub const fn exact(value: u8) -> Self {
        Self {
            value,
            comparison: Comparison::Exact,
        }
    }

    pub const fn at_least(value: u8) -> Self {
        Self {
            value,
            comparison: Comparison::AtLeast,
        }
    }

    /// Returns true if `actual` satisfies this requirement.
    #[inline]
    pub const fn is_met_by(&self, actual: u8) -> bool {
        match self.comparison {
            Comparison::Exact => actual == self.value,
            Comparison::AtLeast => actual >= self.value,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.comparison {
            Comparison::Exact => write!(f, "={}", self.value),
            Comparison::AtLeast => write!(f, ">={}", self.value),
        }
    }
}

/// A named requirement needing `required_count` matching resources.
///
/// Absent requirement fields (`None`) match every resource.
///
/// # Example
///
/// ```
/// use dispatchforge_core::{Category, ConstraintSet, Requirement};
///
/// let bears = ConstraintSet::new("Bear Patrol", 2)
///     .with_category(Category::Bear)
///     .with_grade(Requirement::at_least(1))
///     .with_buff_amount(10);
/// assert_eq!(bears.requirement_label(), "Bear Patrol: need=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintSet {
    pub title: String,
    pub tier: Option<MissionTier>,
    pub grade: Option<Requirement>,
    pub category: Option<Category>,
    pub sub_tier: Option<Requirement>,
    pub required_count: u32,
    pub buff_amount: u32,
}

impl ConstraintSet {
    /// Creates a constraint set that any resource matches.
    pub fn new(title: impl Into<String>, required_count: u32) -> Self {
        Self {
            title: title.into(),
            tier: None,
            grade: None,
            category: None,
            sub_tier: None,
            required_count,
            buff_amount: 0,
        }
    }

    pub fn with_tier(mut self, tier: MissionTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_grade(mut self, grade: Requirement) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_sub_tier(mut self, sub_tier: Requirement) -> Self {
        self.sub_tier = Some(sub_tier);
        self
    }

    pub fn with_buff_amount(mut self, buff_amount: u32) -> Self {
        self.buff_amount = buff_amount;
        self
    }

    /// The resource tier required, if any.
    pub fn required_resource_tier(&self) -> Option<Tier> {
        self.tier.map(MissionTier::resource_tier)
    }

    /// Audit label, e.g. `"Bear Patrol: need=2"`.
    pub fn requirement_label(&self) -> String {
        format!("{}: need={}", self.title, self.required_count)
    }
}
