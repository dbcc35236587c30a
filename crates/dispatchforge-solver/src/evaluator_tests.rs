use std::collections::HashSet;

use dispatchforge_config::PlannerConfig;
use dispatchforge_core::{Category, ConstraintSet, Requirement, ResourceId, Slot};
use dispatchforge_test::resources::{bear, cat, filler, ids, synthetic_groups, synthetic_pool};
use dispatchforge_test::scenario::{bear_patrol, bear_patrol_exhausted};

use crate::evaluator::{estimated_score, SlotEvaluator};
use crate::selector::find_keys;

#[test]
fn test_bear_patrol() {
    let config = PlannerConfig::default();
    let scenario = bear_patrol();
    let slot = &scenario.groups[0].slots[0];

    let result = SlotEvaluator::new(&config).evaluate(&scenario.pool, slot);

    assert_eq!(result.key, Some(ResourceId(5)));
    assert_eq!(ids(&result.chosen), vec![5, 9, 10, 1]);
    assert_eq!(result.satisfied_count, 1);
    assert_eq!(result.satisfied_magnitude, 10);
    assert_eq!(result.satisfied_titles, vec!["Bear Patrol [9, 10]".to_string()]);
    assert_eq!(result.requirements, vec!["Bear Patrol: need=2".to_string()]);
    assert_eq!(result.base_score, 250);
    assert!((result.estimated_score - 325.0).abs() < 1e-9);
    assert_eq!(
        result.rationale,
        "Dispatch with key 5; completed 1 constraint set(s)."
    );
    assert!(result.reserved.is_empty());
}

#[test]
fn test_bear_patrol_exhausted_pool() {
    let config = PlannerConfig::default();
    let scenario = bear_patrol_exhausted();
    let slot = &scenario.groups[0].slots[0];

    let result = SlotEvaluator::new(&config).evaluate(&scenario.pool, slot);

    assert_eq!(ids(&result.chosen), vec![5, 9, 10]);
    assert_eq!(result.satisfied_count, 1);
}

#[test]
fn test_no_key_reserves() {
    let config = PlannerConfig::default();
    let slot = Slot::new(3, 4, "Citadel");
    let pool = vec![bear(1, 2), cat(2, 0), filler(3, 1), cat(4, 1), bear(6, 0)];

    let result = SlotEvaluator::new(&config).evaluate(&pool, &slot);

    assert!(!result.is_dispatchable());
    assert_eq!(result.key, None);
    assert_eq!(ids(&result.reserved), vec![2, 6, 4, 3]);
    assert_eq!(result.satisfied_count, 0);
    assert_eq!(result.estimated_score, 1000.0);
    assert_eq!(
        result.rationale,
        "No eligible key (≥ Mythical). Reserved for future use."
    );
}

#[test]
fn test_no_key_short_pool() {
    let config = PlannerConfig::default();
    let slot = Slot::new(3, 4, "Citadel");
    let pool = vec![cat(1, 0)];

    let result = SlotEvaluator::new(&config).evaluate(&pool, &slot);
    assert_eq!(ids(&result.reserved), vec![1]);

    let result = SlotEvaluator::new(&config).evaluate(&[], &slot);
    assert!(result.reserved.is_empty());
}

#[test]
fn test_matching_key_preferred() {
    let config = PlannerConfig::default();
    let slot = Slot::new(1, 1, "Den")
        .with_constraint(ConstraintSet::new("Bears", 1).with_category(Category::Bear));
    // Filler 1 is the cheaper key but matches nothing.
    let pool = vec![filler(1, 1), bear(2, 2), cat(3, 0)];

    let result = SlotEvaluator::new(&config).evaluate(&pool, &slot);

    assert_eq!(result.key, Some(ResourceId(2)));
    assert_eq!(ids(&result.chosen), vec![2, 3, 1]);
    assert_eq!(result.satisfied_count, 1);
}

#[test]
fn test_titles_list_required_count_ids() {
    let config = PlannerConfig::default();
    let slot = Slot::new(1, 0, "Den")
        .with_constraint(ConstraintSet::new("Bears", 2).with_category(Category::Bear));
    let pool = vec![bear(1, 0), bear(2, 0), bear(3, 0), bear(4, 0)];

    let result = SlotEvaluator::new(&config).evaluate(&pool, &slot);

    assert_eq!(ids(&result.chosen), vec![1, 2, 3, 4]);
    assert_eq!(result.satisfied_titles, vec!["Bears [1, 2]".to_string()]);
}

#[test]
fn test_slot_without_constraints() {
    let config = PlannerConfig::default();
    let slot = Slot::new(1, 1, "Shed");
    let pool = vec![filler(1, 0), filler(2, 1), cat(3, 2), filler(4, 0), filler(5, 0)];

    let result = SlotEvaluator::new(&config).evaluate(&pool, &slot);

    assert_eq!(result.key, Some(ResourceId(2)));
    assert_eq!(ids(&result.chosen), vec![2, 1, 4, 5]);
    assert_eq!(result.satisfied_count, 0);
    assert_eq!(result.estimated_score, 150.0);
}

#[test]
fn test_unsatisfiable_constraint_uses_fillers() {
    let config = PlannerConfig::default();
    let slot = Slot::new(1, 1, "Den")
        .with_constraint(ConstraintSet::new("Foxes", 2).with_category(Category::Fox));
    let pool = vec![cat(1, 1), bear(2, 0), bear(3, 0), cat(4, 0)];

    let result = SlotEvaluator::new(&config).evaluate(&pool, &slot);

    assert_eq!(ids(&result.chosen), vec![1, 2, 3, 4]);
    assert_eq!(result.satisfied_count, 0);
    assert!(result.satisfied_titles.is_empty());
}

#[test]
fn test_impossible_set_does_not_block_others() {
    let config = PlannerConfig::default();
    let slot = Slot::new(1, 2, "Den")
        .with_constraint(
            ConstraintSet::new("Bears", 1)
                .with_category(Category::Bear)
                .with_buff_amount(10),
        )
        .with_constraint(
            ConstraintSet::new("Cats", 1)
                .with_category(Category::Cat)
                .with_buff_amount(5),
        )
        .with_constraint(
            ConstraintSet::new("Foxes", 1)
                .with_category(Category::Fox)
                .with_buff_amount(1),
        );
    let pool = vec![
        filler(1, 2),
        bear(2, 1),
        cat(3, 1),
        filler(4, 0),
        filler(5, 0),
        filler(6, 0),
    ];

    let result = SlotEvaluator::new(&config).evaluate(&pool, &slot);

    assert_eq!(result.key, Some(ResourceId(1)));
    assert_eq!(ids(&result.chosen), vec![1, 2, 3, 4]);
    assert_eq!(result.satisfied_count, 2);
    assert_eq!(result.satisfied_magnitude, 15);
}

#[test]
fn test_key_completing_a_set_is_kept() {
    let config = PlannerConfig::default();
    let slot = Slot::new(1, 2, "Den")
        .with_constraint(ConstraintSet::new("Veterans", 1).with_grade(Requirement::at_least(3)))
        .with_constraint(ConstraintSet::new("Bears", 2).with_category(Category::Bear));
    let pool = vec![filler(1, 3), filler(2, 2), filler(4, 0), filler(5, 0), filler(6, 0)];

    let result = SlotEvaluator::new(&config).evaluate(&pool, &slot);

    assert_eq!(result.key, Some(ResourceId(1)));
    assert_eq!(ids(&result.chosen), vec![1, 4, 5, 6]);
    assert_eq!(result.satisfied_titles, vec!["Veterans [1]".to_string()]);
}

#[test]
fn test_evaluate_and_consume() {
    let config = PlannerConfig::default();
    let evaluator = SlotEvaluator::new(&config);
    let scenario = bear_patrol();
    let slot = &scenario.groups[0].slots[0];

    let (result, remaining) = evaluator.evaluate_and_consume(&scenario.pool, slot);
    assert_eq!(result, evaluator.evaluate(&scenario.pool, slot));
    let chosen = result.chosen_ids();
    assert!(remaining.iter().all(|r| !chosen.contains(&r.id)));
    assert_eq!(remaining.len(), scenario.pool.len() - chosen.len());

    // Reserved resources are not consumed.
    let citadel = Slot::new(3, 4, "Citadel");
    let (result, remaining) = evaluator.evaluate_and_consume(&scenario.pool, &citadel);
    assert!(!result.is_dispatchable());
    assert_eq!(remaining, scenario.pool);
}

#[test]
fn test_cardinality_and_score_formula() {
    let config = PlannerConfig::default();
    let pool = synthetic_pool(40);
    let evaluator = SlotEvaluator::new(&config);

    for group in synthetic_groups(3) {
        for slot in &group.slots {
            let result = evaluator.evaluate(&pool, slot);

            let expected =
                estimated_score(result.base_score, result.buff_percent, result.satisfied_count);
            assert_eq!(result.estimated_score, expected);

            if find_keys(&pool, slot.grade).is_empty() {
                assert!(result.chosen.is_empty());
                assert_eq!(result.reserved.len(), config.team_size.min(pool.len()));
            } else {
                assert_eq!(result.chosen.len(), config.team_size);
                let distinct: HashSet<_> = result.chosen_ids().into_iter().collect();
                assert_eq!(distinct.len(), config.team_size);
                assert!(result.chosen[0].grade >= slot.grade);
            }
        }
    }
}

#[test]
fn test_estimated_score() {
    assert_eq!(estimated_score(100, 0.1, 0), 100.0);
    assert_eq!(estimated_score(0, 0.5, 3), 0.0);
    assert_eq!(estimated_score(1000, 0.5, 2), 2000.0);
}
