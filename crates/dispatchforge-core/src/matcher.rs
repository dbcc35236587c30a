//! Constraint matching.
//!
//! A resource matches a constraint set when every specified requirement
//! holds. Absent requirements always hold. Matching is a pure function of
//! the (resource, constraint) pair.

use crate::domain::{ConstraintSet, Resource};

/// Returns true if `resource` satisfies every requirement of `constraint`.
///
/// # Example
///
/// ```
/// use dispatchforge_core::{matches, Category, ConstraintSet, Requirement, Resource};
///
/// let bears = ConstraintSet::new("Bears", 2)
///     .with_category(Category::Bear)
///     .with_grade(Requirement::at_least(1));
///
/// assert!(matches(&Resource::new(1, 2).with_category(Category::Bear), &bears));
/// assert!(!matches(&Resource::new(2, 0).with_category(Category::Bear), &bears));
/// assert!(!matches(&Resource::new(3, 2).with_category(Category::Cat), &bears));
/// ```
pub fn matches(resource: &Resource, constraint: &ConstraintSet) -> bool {
    if let Some(tier) = constraint.required_resource_tier() {
        if resource.tier != Some(tier) {
            return false;
        }
    }

    if let Some(grade) = constraint.grade {
        if !grade.is_met_by(resource.grade) {
            return false;
        }
    }

    if let Some(category) = constraint.category {
        if resource.category != Some(category) {
            return false;
        }
    }

    if let Some(sub_tier) = constraint.sub_tier {
        if !sub_tier.is_met_by(resource.sub_tier) {
            return false;
        }
    }

    true
}
