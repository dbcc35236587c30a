//! Tests for constraint matching

use super::domain::*;
use super::matcher::*;

fn bear(id: u64, grade: u8) -> Resource {
    Resource::new(id, grade)
        .with_category(Category::Bear)
        .with_tier(Tier::Base)
}

#[test]
fn test_unconstrained_set_matches_everything() {
    let any = ConstraintSet::new("Anything", 1);
    assert!(matches(&Resource::new(1, 0), &any));
    assert!(matches(&bear(2, 4), &any));
}

#[test]
fn test_tier_goes_through_mission_mapping() {
    let elite_only = ConstraintSet::new("Elite", 1).with_tier(MissionTier::Elite);
    let elite = Resource::new(1, 1).with_tier(Tier::Elite);
    let base = Resource::new(2, 1).with_tier(Tier::Base);
    let unknown = Resource::new(3, 1);

    assert!(matches(&elite, &elite_only));
    assert!(!matches(&base, &elite_only));
    assert!(!matches(&unknown, &elite_only));
}

#[test]
fn test_grade_exact_and_at_least() {
    let exact = ConstraintSet::new("Rare exactly", 1).with_grade(Requirement::exact(1));
    let at_least = ConstraintSet::new("Rare or better", 1).with_grade(Requirement::at_least(1));

    assert!(matches(&bear(1, 1), &exact));
    assert!(!matches(&bear(2, 2), &exact));
    assert!(matches(&bear(3, 2), &at_least));
    assert!(!matches(&bear(4, 0), &at_least));
}

#[test]
fn test_category_requires_known_category() {
    let bears = ConstraintSet::new("Bears", 1).with_category(Category::Bear);
    assert!(matches(&bear(1, 0), &bears));
    assert!(!matches(&Resource::new(2, 0), &bears));
    assert!(!matches(&Resource::new(3, 0).with_category(Category::Fox), &bears));
}

#[test]
fn test_sub_tier_modes() {
    let two_plus = ConstraintSet::new("Starred", 1).with_sub_tier(Requirement::at_least(2));
    let exactly_one = ConstraintSet::new("One star", 1).with_sub_tier(Requirement::exact(1));

    assert!(matches(&bear(1, 0).with_sub_tier(3), &two_plus));
    assert!(!matches(&bear(2, 0).with_sub_tier(1), &two_plus));
    assert!(matches(&bear(3, 0).with_sub_tier(1), &exactly_one));
    assert!(!matches(&bear(4, 0).with_sub_tier(2), &exactly_one));
}

#[test]
fn test_all_conditions_must_hold() {
    let strict = ConstraintSet::new("Strict", 1)
        .with_tier(MissionTier::Base)
        .with_grade(Requirement::at_least(2))
        .with_category(Category::Bear)
        .with_sub_tier(Requirement::exact(0));

    assert!(matches(&bear(1, 2), &strict));
    assert!(!matches(&bear(2, 1), &strict));
    assert!(!matches(&bear(3, 2).with_sub_tier(1), &strict));
    assert!(!matches(&bear(4, 2).with_tier(Tier::Genesis), &strict));
}

#[test]
fn test_matching_is_repeatable() {
    let bears = ConstraintSet::new("Bears", 2).with_category(Category::Bear);
    let r = bear(1, 1);
    let first = matches(&r, &bears);
    for _ in 0..10 {
        assert_eq!(matches(&r, &bears), first);
    }
}
