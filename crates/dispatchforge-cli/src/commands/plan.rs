use std::path::Path;

use anyhow::Context;
use dispatchforge::{console, Plan, Planner, PlannerConfig};
use tracing::info;

use crate::snapshot::Snapshot;
use crate::Format;

pub fn run(
    snapshot_path: &Path,
    config_path: Option<&Path>,
    format: Format,
    dispatchable_only: bool,
) -> anyhow::Result<()> {
    match format {
        Format::Text => console::init(),
        Format::Json => init_stderr_logging()?,
    }

    let config = load_config(config_path)?;
    let snapshot = Snapshot::load(snapshot_path)
        .with_context(|| format!("reading snapshot {}", snapshot_path.display()))?;
    info!(
        event = "snapshot_loaded",
        groups = snapshot.groups.len() as u64,
        resources = snapshot.pool.len() as u64,
    );

    let planner = Planner::new(config);
    let mut plan = planner.build_plan(&snapshot.groups, &snapshot.pool);
    if dispatchable_only {
        plan = only_dispatchable(plan);
    }

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        Format::Text => print!("{}", console::format_plan(&plan, planner.config())),
    }

    Ok(())
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<PlannerConfig> {
    match path {
        Some(path) => PlannerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(PlannerConfig::default()),
    }
}

fn only_dispatchable(plan: Plan) -> Plan {
    Plan::new(
        plan.results
            .into_iter()
            .filter(|r| r.is_dispatchable())
            .collect(),
    )
}

// Keeps stdout clean for JSON output.
fn init_stderr_logging() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dispatchforge_solver=warn".parse()?),
        )
        .try_init();
    Ok(())
}
