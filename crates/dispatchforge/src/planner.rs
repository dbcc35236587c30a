//! Planner entry point that hides configuration wiring.

use dispatchforge_config::PlannerConfig;
use dispatchforge_core::{Plan, Resource, SlotGroup};
use dispatchforge_solver::Planner;

/// Config file read by [`run_planner`] from the working directory.
pub const CONFIG_FILE: &str = "planner.toml";

/// Plans `groups` against `pool` using `planner.toml`, or defaults when
/// the file is missing or invalid.
pub fn run_planner(groups: &[SlotGroup], pool: &[Resource]) -> Plan {
    #[cfg(feature = "console")]
    dispatchforge_console::init();

    let config = PlannerConfig::load(CONFIG_FILE).unwrap_or_default();
    Planner::new(config).build_plan(groups, pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatchforge_test::scenario::contested_key;

    #[test]
    fn test_run_planner_matches_default_planner() {
        let scenario = contested_key(true);
        let expected = Planner::default().build_plan(&scenario.groups, &scenario.pool);
        assert_eq!(run_planner(&scenario.groups, &scenario.pool), expected);
    }
}
