use std::path::Path;

use anyhow::Context;
use dispatchforge::PlannerConfig;

pub fn check(path: &Path) -> anyhow::Result<()> {
    let config = PlannerConfig::from_file(path)
        .with_context(|| format!("invalid config {}", path.display()))?;

    println!(
        "✓ {} │ team size {} │ {} grades │ max {} extras",
        path.display(),
        config.team_size,
        config.grades.len(),
        config.effective_max_extra(),
    );
    for grade in &config.grades {
        println!(
            "  G{} {:<10} base {:>5} │ +{:.0}% per set",
            grade.grade,
            grade.name,
            grade.base_points,
            grade.buff_percent * 100.0,
        );
    }

    Ok(())
}
